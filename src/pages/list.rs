use chrono::NaiveDate;

use crate::entities::MarathonSummary;
use crate::error::Error;
use crate::listing::{Filter, Page};
use crate::pages::{escape, layout, numeric_date};

const DEFAULT_LOGO: &str = "https://i.imgur.com/QmbsRKv.png";

/// `query` is the filter's own query string.
fn page_href(query: &str, number: usize) -> String {
    match query {
        "" => format!("/marathons?page={}", number),
        query => format!("/marathons?{}&page={}", query, number),
    }
}

fn filter_form(filter: &Filter) -> String {
    let date_value = |date: Option<NaiveDate>| date.map(|d| d.to_string()).unwrap_or_default();

    format!(
        r#"<div class="card mb-4 shadow-sm">
  <div class="card-body">
    <form class="row g-3" method="get" action="/marathons">
      <div class="col-md-4">
        <label for="city" class="form-label">Город</label>
        <input type="text" id="city" name="city" class="form-control" placeholder="Введите название города..." value="{city}" />
      </div>
      <div class="col-md-3">
        <label for="start" class="form-label">Начальная дата</label>
        <input type="date" id="start" name="start" class="form-control" value="{start}" />
      </div>
      <div class="col-md-3">
        <label for="end" class="form-label">Конечная дата</label>
        <input type="date" id="end" name="end" class="form-control" value="{end}" />
      </div>
      <div class="col-md-2 d-flex align-items-end gap-2">
        <button type="submit" class="btn btn-primary w-100">Применить</button>
        <a href="/marathons" class="btn btn-secondary w-100">Сбросить</a>
      </div>
    </form>
  </div>
</div>"#,
        city = escape(filter.city.as_deref().unwrap_or("")),
        start = date_value(filter.start),
        end = date_value(filter.end),
    )
}

fn card(marathon: &MarathonSummary) -> String {
    let href = format!("/marathons/{}", escape(&marathon.token));
    let (title, button) = if marathon.detailed {
        (
            format!(
                r#"<a href="{}" class="text-decoration-none text-reset">{}</a>"#,
                href,
                escape(&marathon.name)
            ),
            format!(
                r#"<a href="{}" class="btn btn-secondary">Подробнее о марафоне</a>"#,
                href
            ),
        )
    } else {
        (escape(&marathon.name), String::new())
    };

    format!(
        r#"<div class="col">
    <div class="card h-100 shadow-sm">
      <img src="{logo}" class="card-img-top p-3" alt="{name}" style="height: 200px; object-fit: contain;" />
      <div class="card-body">
        <h5 class="card-title">{title}</h5>
        <p class="card-text">
          <strong>Дата:</strong> {date}<br />
          <strong>Место:</strong> {location}<br />
          <strong>Дистанция:</strong> {distance}
        </p>
        <p class="card-text">{description}</p>
        {button}
      </div>
    </div>
</div>"#,
        title = title,
        button = button,
        logo = escape(marathon.logo.as_deref().unwrap_or(DEFAULT_LOGO)),
        name = escape(&marathon.name),
        date = numeric_date(marathon.date),
        location = escape(&marathon.location),
        distance = escape(&marathon.distance),
        description = escape(&marathon.description),
    )
}

fn pagination(query: &str, page: &Page<MarathonSummary>) -> String {
    let item = |enabled: bool, number: usize, label: &str| {
        if enabled {
            format!(
                r#"<li class="page-item"><a class="page-link" href="{}">{}</a></li>"#,
                page_href(query, number),
                label
            )
        } else {
            format!(
                r#"<li class="page-item disabled"><span class="page-link">{}</span></li>"#,
                label
            )
        }
    };

    let mut items = vec![item(page.has_previous(), page.number.saturating_sub(1), "Предыдущая")];
    for number in 1..=page.total_pages {
        if number == page.number {
            items.push(format!(
                r#"<li class="page-item active"><span class="page-link">{}</span></li>"#,
                number
            ));
        } else {
            items.push(item(true, number, &number.to_string()));
        }
    }
    items.push(item(page.has_next(), page.number + 1, "Следующая"));

    format!(
        r#"<nav aria-label="Pagination" class="mt-4">
  <ul class="pagination justify-content-center">
    {}
  </ul>
</nav>"#,
        items.join("\n    ")
    )
}

pub fn list_page(filter: &Filter, page: &Page<MarathonSummary>) -> Result<String, Error> {
    let query = filter.query_string()?;

    let cards = if page.is_empty() {
        r#"<div class="col-12">
  <div class="alert alert-warning text-center" role="alert">Марафоны не найдены по заданным фильтрам.</div>
</div>"#
            .to_string()
    } else {
        page.items.iter().map(card).collect::<Vec<_>>().join("\n")
    };

    let body = format!(
        r#"<div class="container my-5">
  <h1 class="text-center mb-4">Список марафонов России</h1>
  {form}
  <div class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">
  {cards}
  </div>
  {pagination}
</div>"#,
        form = filter_form(filter),
        cards = cards,
        pagination = pagination(&query, page),
    );

    Ok(layout("Список марафонов России", &body, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::entities::Marathon;
    use crate::listing::paginate;

    fn render(filter: &Filter, number: usize) -> String {
        let items = filter
            .apply(Catalog::global().all())
            .into_iter()
            .map(Marathon::summary)
            .collect();
        let page = paginate(items, number).unwrap();

        list_page(filter, &page).unwrap()
    }

    #[test]
    fn first_page_links_forward_only() {
        let html = render(&Filter::default(), 1);

        assert_eq!(html.matches("Подробнее о марафоне").count(), 6);
        assert!(html.contains(r#"href="/marathons/omsk""#));
        assert!(html.contains("Екатеринбургский марафон"));
        assert!(!html.contains(r#"href="/marathons/yekaterinburg""#));
        assert!(html.contains("<strong>Дата:</strong> 20.09.2025"));
        let previous =
            r#"<li class="page-item disabled"><span class="page-link">Предыдущая</span></li>"#;
        assert!(html.contains(previous));
        assert!(html.contains(r#"<a class="page-link" href="/marathons?page=2">Следующая</a>"#));
    }

    #[test]
    fn last_page_keeps_the_filter_in_links() {
        let filter = Filter {
            city: Some("Россия".into()),
            start: Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            end: None,
        };
        let html = render(&filter, 2);

        let previous = "href=\"/marathons?city=%D0%A0%D0%BE%D1%81%D1%81%D0%B8%D1%8F\
                        &start=2025-01-01&page=1\">Предыдущая";
        let next =
            r#"<li class="page-item disabled"><span class="page-link">Следующая</span></li>"#;
        assert!(html.contains(previous));
        assert!(html.contains(next));
        assert!(html.contains(r#"value="Россия""#));
        assert!(html.contains(r#"value="2025-01-01""#));
    }

    #[test]
    fn empty_result_shows_the_alert() {
        let filter = Filter {
            city: Some("Лондон".into()),
            ..Filter::default()
        };
        let html = render(&filter, 1);

        assert!(html.contains("Марафоны не найдены по заданным фильтрам."));
        assert!(!html.contains(r#"class="page-link" href"#));
    }
}
