use crate::entities::{Attraction, Lodging, Marathon};
use crate::map::MapTarget;
use crate::pages::{escape, layout, map_block, numeric_date, openlayers_head};

const BACK_LINK: &str = r#"<a href="/marathons" class="btn btn-secondary mb-4">
    &larr; Вернуться к списку марафонов
  </a>"#;

fn website_button(website: &Option<String>, label: &str) -> String {
    match website {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener" class="btn btn-secondary">{}</a>"#,
            escape(url),
            label
        ),
        None => String::new(),
    }
}

fn carousel(images: &[String]) -> String {
    if images.is_empty() {
        return String::new();
    }

    let slides: Vec<String> = images
        .iter()
        .enumerate()
        .map(|(idx, image)| {
            format!(
                r#"<div class="carousel-item{active}">
      <img class="d-block w-100" src="{src}" alt="Slide {n}" style="border-radius: 10px; max-height: 800px; object-fit: cover;" />
    </div>"#,
                active = if idx == 0 { " active" } else { "" },
                src = escape(image),
                n = idx + 1,
            )
        })
        .collect();

    format!(
        r##"<div id="marathon-carousel" class="carousel slide mb-4" data-bs-ride="carousel">
  <div class="carousel-inner">
    {slides}
  </div>
  <button class="carousel-control-prev" type="button" data-bs-target="#marathon-carousel" data-bs-slide="prev">
    <span class="carousel-control-prev-icon" aria-hidden="true"></span>
  </button>
  <button class="carousel-control-next" type="button" data-bs-target="#marathon-carousel" data-bs-slide="next">
    <span class="carousel-control-next-icon" aria-hidden="true"></span>
  </button>
</div>"##,
        slides = slides.join("\n    ")
    )
}

fn description(marathon: &Marathon) -> String {
    let details: String = marathon
        .details
        .iter()
        .map(|d| {
            format!(
                "\n    <li><strong>{}:</strong> {}</li>",
                escape(&d.label),
                escape(&d.value)
            )
        })
        .collect();

    format!(
        r#"<section class="mb-5">
  <h3>Описание марафона</h3>
  <p>{description}</p>
  <ul>
    <li><strong>Дата:</strong> {date}</li>
    <li><strong>Место:</strong> {location}</li>
    <li><strong>Дистанция:</strong> {distance}</li>{details}
  </ul>
</section>"#,
        description = escape(&marathon.description),
        date = numeric_date(marathon.date),
        location = escape(&marathon.location),
        distance = escape(&marathon.distance),
        details = details,
    )
}

fn lodging_card(item: &Lodging) -> String {
    format!(
        r#"<div class="col-md-4 mb-3">
      <div class="card p-3">
        <h5>{name}</h5>
        <p>
          <strong>Адрес:</strong> {address}<br />
          <strong>Расстояние до старта:</strong> {distance}<br />
          <strong>Бюджет:</strong> {budget}
        </p>
        {button}
      </div>
    </div>"#,
        name = escape(&item.name),
        address = escape(&item.address),
        distance = escape(&item.distance_label()),
        budget = escape(&item.budget),
        button = website_button(&item.website, "Перейти на сайт"),
    )
}

fn attraction_card(item: &Attraction) -> String {
    format!(
        r#"<div class="col-md-4 mb-3">
      <div class="card p-3">
        <h5>{name}</h5>
        <p>{description}<br />
          <strong>Адрес:</strong> {address}
        </p>
        {button}
      </div>
    </div>"#,
        name = escape(&item.name),
        description = escape(&item.description),
        address = escape(&item.address),
        button = website_button(&item.website, "Подробнее на сайте"),
    )
}

const NO_POINTS_OF_INTEREST: &str =
    r#"<p class="text-muted">Информация о местах рядом со стартом пока не добавлена.</p>"#;

/// Empty when there are no cards.
fn section(title: &str, intro: &str, cards: Vec<String>) -> String {
    if cards.is_empty() {
        return String::new();
    }

    format!(
        r#"<section class="mb-5">
  <h3>{title}</h3>
  <p>{intro}</p>
  <div class="row">
    {cards}
  </div>
</section>"#,
        title = title,
        intro = intro,
        cards = cards.join("\n    "),
    )
}

pub fn detail_page(marathon: &Marathon, target: &MapTarget) -> String {
    let accommodations = section(
        "Места размещения рядом со стартом",
        "Ниже приведён список отелей, гостиниц, кафе и ресторанов, \
         расположенных вблизи старта марафона. \
         Выберите вариант, исходя из расстояния до старта и вашего бюджета.",
        marathon.accommodations.iter().map(lodging_card).collect(),
    );
    let restaurants = section(
        "Рестораны рядом со стартом",
        "Ниже приведён список ресторанов, где можно пообедать или перекусить перед марафоном.",
        marathon.restaurants.iter().map(lodging_card).collect(),
    );
    let attractions = section(
        "Интересные места для путешествий",
        "Помимо марафонской трассы, город предлагает множество достопримечательностей. \
         Ниже приведён список мест, которые стоит посетить.",
        marathon.attractions.iter().map(attraction_card).collect(),
    );
    let empty = if marathon.has_points_of_interest() {
        ""
    } else {
        NO_POINTS_OF_INTEREST
    };

    let body = format!(
        r#"<div class="container my-5">
  {back}
  <h1 class="text-center mb-4">{name}</h1>
  {carousel}
  {description}
  {accommodations}
  {restaurants}
  {attractions}
  {empty}
  <section class="mb-5">
    <h3>Карта</h3>
    {map}
  </section>
</div>"#,
        back = BACK_LINK,
        name = escape(&marathon.name),
        carousel = carousel(&marathon.images),
        description = description(marathon),
        accommodations = accommodations,
        restaurants = restaurants,
        attractions = attractions,
        empty = empty,
        map = map_block(target, 500),
    );

    layout(&marathon.name, &body, &openlayers_head())
}

pub fn not_found_page() -> String {
    let body = format!(
        r#"<div class="container my-5">
  {}
  <h1 class="text-center">Марафон не найден.</h1>
</div>"#,
        BACK_LINK
    );

    layout("Марафон не найден", &body, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::map::MapView;

    fn target(token: &str) -> MapTarget {
        MapTarget {
            view: MapView::Marathon {
                token: token.into(),
            },
            element: "map-detail".into(),
        }
    }

    #[test]
    fn kazan_has_every_section() {
        let kazan = Catalog::global().find_by_token("kazan").unwrap();
        let html = detail_page(kazan, &target("kazan"));

        assert!(html.contains("<h1 class=\"text-center mb-4\">Казанский марафон</h1>"));
        assert!(html.contains("<li><strong>Дата:</strong> 12.05.2025</li>"));
        for heading in [
            "Описание марафона",
            "Места размещения рядом со стартом",
            "Рестораны рядом со стартом",
            "Интересные места для путешествий",
            "Карта",
        ] {
            assert!(html.contains(&format!("<h3>{}</h3>", heading)), "{}", heading);
        }
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#""view":{"kind":"marathon","token":"kazan"}"#));
        assert!(!html.contains("пока не добавлена"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let irkutsk = Catalog::global().find_by_token("irkutsk").unwrap();
        let html = detail_page(irkutsk, &target("irkutsk"));

        assert!(html.contains("<h3>Описание марафона</h3>"));
        assert!(html.contains("<h3>Карта</h3>"));
        for heading in [
            "Места размещения рядом со стартом",
            "Рестораны рядом со стартом",
            "Интересные места для путешествий",
        ] {
            assert!(!html.contains(heading), "{}", heading);
        }
        assert!(html.contains(NO_POINTS_OF_INTEREST));
    }

    #[test]
    fn carousel_only_with_images() {
        for marathon in Catalog::global().all() {
            let html = detail_page(marathon, &target(&marathon.token));
            let has_images = !marathon.images.is_empty();
            assert_eq!(html.contains("carousel-item"), has_images, "{}", marathon.token);
        }
    }

    #[test]
    fn not_found_links_back() {
        let html = not_found_page();

        assert!(html.contains("Марафон не найден."));
        assert!(html.contains(r#"href="/marathons""#));
        assert!(!html.contains("MAP_TARGET"));
    }
}
