use crate::pages::layout;

pub fn about_page() -> String {
    let body = r#"<div class="container mt-5">
  <h1>О проекте</h1>
  <p>
    «Марафоны и путешествия» собирает крупнейшие марафоны России на одной карте.
    Для каждого забега мы подбираем отели, рестораны и достопримечательности рядом со стартом,
    чтобы поездку на марафон было легко совместить с путешествием.
  </p>
</div>"#;

    layout("О проекте", body, "")
}

pub fn contact_page() -> String {
    let body = r#"<div class="container mt-5">
  <h1>Контакты</h1>
  <p>
    Есть вопросы? Напишите нам на электронную почту:
    <a href="mailto:support@travelmarathon.ru">support@travelmarathon.ru</a>.
  </p>
</div>"#;

    layout("Контакты", body, "")
}

#[test]
fn static_pages_share_the_layout() {
    let about_link = r#"<a class="btn btn-outline-light rounded me-2" href="/about">О проекте</a>"#;
    for html in [about_page(), contact_page()] {
        assert!(html.contains(about_link));
        assert!(html.contains("Все права защищены"));
    }
    assert!(contact_page().contains("mailto:support@travelmarathon.ru"));
}
