//! Server-rendered HTML views.

mod detail;
mod info;
mod landing;
mod list;
mod map_script;

pub use detail::{detail_page, not_found_page};
pub use info::{about_page, contact_page};
pub use landing::landing_page;
pub use list::list_page;

use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::entities::MarkerPayload;
use crate::map::MapTarget;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
const OPENLAYERS_CSS: &str = "https://cdn.jsdelivr.net/npm/ol@v9.2.4/ol.css";
const OPENLAYERS_JS: &str = "https://cdn.jsdelivr.net/npm/ol@v9.2.4/dist/ol.js";
const LOGO: &str = "https://i.imgur.com/QmbsRKv.png";

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// `20.09.2025`
pub fn numeric_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `20 сентября 2025`
pub fn long_date(date: NaiveDate) -> String {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
        .format_localized("%-d %B %Y", Locale::ru_RU)
        .to_string()
}

/// JSON for inline `<script>` blocks.
fn script_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".into())
        .replace("</", "<\\/")
}

/// Map element plus the script that mounts it through the map API.
fn map_block(target: &MapTarget, height: u32) -> String {
    let element = escape(&target.element);

    format!(
        r#"<div id="{element}" class="position-relative" style="width: 100%; height: {height}px; border-radius: 10px; box-shadow: 0px 4px 10px rgba(0,0,0,0.2);"></div>
<div id="{element}-popup" style="display: none; position: absolute; background: white; padding: 10px; border-radius: 5px; box-shadow: 0px 0px 10px rgba(0,0,0,0.2); font-size: 14px; text-align: center;"></div>
<script src="{ol}"></script>
<script>const MAP_TARGET = {target};</script>
<script>{script}</script>"#,
        element = element,
        height = height,
        ol = OPENLAYERS_JS,
        target = script_json(target),
        script = map_script::MAP_SCRIPT,
    )
}

/// Popup body for a clicked marker. Event pins carry a date, and a link when
/// the event has a detail page.
pub fn popup_html(payload: &MarkerPayload) -> String {
    match payload.date {
        Some(date) => {
            let mut html = format!(
                "<b>{name}</b> 🏃‍♂️<br />📅 Дата: {date} <br />📍 Место: {address} <br />\
                 🏁 Дистанция: {distance} <br />",
                name = escape(&payload.name),
                date = long_date(date),
                address = escape(&payload.address),
                distance = escape(payload.distance.as_deref().unwrap_or("")),
            );
            if let Some(link) = &payload.link {
                html.push_str(&format!(
                    "<a href=\"{}\" style=\"color: blue; text-decoration: underline;\">\
                     Подробнее о марафоне</a>",
                    escape(link)
                ));
            }
            html
        }
        None => {
            let mut html = format!(
                "<b>{}</b> <br />📍 адрес: {} <br />",
                escape(&payload.name),
                escape(&payload.address)
            );
            if let Some(distance) = &payload.distance {
                html.push_str(&format!("📏 расстояние до старта: {}", escape(distance)));
            }
            html
        }
    }
}

pub fn layout(title: &str, body: &str, extra_head: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
<link rel="stylesheet" href="{bootstrap_css}" />
{extra_head}
</head>
<body class="d-flex flex-column min-vh-100">
<header class="bg-dark text-white py-3">
  <div class="container d-flex justify-content-between align-items-center">
    <img src="{logo}" alt="Логотип сайта" style="height: 70px; margin-right: 5px;" />
    <h1 class="fs-3">Марафоны и путешествия</h1>
    <nav>
      <a class="btn btn-outline-light rounded me-2" href="/">Карта Марафонов</a>
      <a class="btn btn-outline-light rounded me-2" href="/marathons">Список Марафонов</a>
      <a class="btn btn-outline-light rounded me-2" href="/about">О проекте</a>
      <a class="btn btn-outline-light rounded me-2" href="/contact">Контакты</a>
    </nav>
  </div>
</header>
<main class="flex-grow-1">
{body}
</main>
<footer class="bg-dark text-white text-center py-3 mt-auto">
  <p>© 2025 Путешествия и Марафоны | Все права защищены</p>
</footer>
<script src="{bootstrap_js}"></script>
</body>
</html>"#,
        title = escape(title),
        bootstrap_css = BOOTSTRAP_CSS,
        extra_head = extra_head,
        logo = LOGO,
        body = body,
        bootstrap_js = BOOTSTRAP_JS,
    )
}

fn openlayers_head() -> String {
    format!(r#"<link rel="stylesheet" href="{}" />"#, OPENLAYERS_CSS)
}
