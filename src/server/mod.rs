mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::API;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{maps, marathons, pages};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/marathons", get(pages::list))
        .route("/marathons/:token", get(pages::detail))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/api/marathons", get(marathons::list))
        .route("/api/marathons/:token", get(marathons::find))
        .route("/api/maps", post(maps::mount))
        .route("/api/maps/:id", get(maps::find).delete(maps::unmount))
        .route("/api/maps/:id/click", post(maps::click))
        .route("/api/maps/:id/search", post(maps::search))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(Arc::new(api) as DynAPI);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(unexpected_error)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::entities::Coordinates;
    use crate::engine::tests::engine;
    use crate::error::upstream_error;

    fn app() -> Router {
        let api = engine(vec![
            ("Казань", Ok(vec![Coordinates::new(49.1221, 55.7887)])),
            ("сбой", Err(upstream_error())),
        ]);

        router(Arc::new(api) as DynAPI)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, String) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_page(app: &Router, uri: &str) -> (StatusCode, String) {
        send(app, Method::GET, uri, None).await
    }

    #[tokio::test]
    async fn html_pages_render() {
        let app = app();

        for (uri, needle) in [
            ("/", "Карта Марафонов России"),
            ("/marathons", "Список марафонов России"),
            ("/marathons/kazan", "Казанский марафон"),
            ("/about", "О проекте"),
            ("/contact", "support@travelmarathon.ru"),
        ] {
            let (status, body) = get_page(&app, uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(body.contains(needle), "{}", uri);
        }
    }

    #[tokio::test]
    async fn unknown_marathon_is_a_not_found_page() {
        let (status, body) = get_page(&app(), "/marathons/nonexistent").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Марафон не найден."));
    }

    #[tokio::test]
    async fn list_filters_from_the_query() {
        let app = app();

        let uri = "/marathons?city=%D0%9C%D0%BE%D1%81%D0%BA%D0%B2%D0%B0\
                   &start=2025-01-01&end=2025-12-31";
        let (status, body) = get_page(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("Подробнее о марафоне").count(), 1);
        assert!(body.contains("Московский марафон"));

        let (status, _) = get_page(&app, "/marathons?page=3").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn json_catalog() {
        let app = app();

        let (status, body) = get_page(&app, "/api/marathons?page=2").await;
        assert_eq!(status, StatusCode::OK);
        let page: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(page["number"], 2);
        assert_eq!(page["total_items"], 15);
        assert_eq!(page["items"].as_array().unwrap().len(), 6);

        let (status, body) = get_page(&app, "/api/marathons/kazan").await;
        assert_eq!(status, StatusCode::OK);
        let kazan: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(kazan["date"], "2025-05-12");

        let (status, body) = get_page(&app, "/api/marathons/nonexistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["code"], 102);
    }

    #[tokio::test]
    async fn map_lifecycle() {
        let app = app();
        let mount = json!({
            "target": { "view": { "kind": "landing" }, "element": "map-test" },
            "viewport": { "width": 800.0, "height": 600.0 },
        });

        let (status, body) = send(&app, Method::POST, "/api/maps", Some(mount.clone())).await;
        assert_eq!(status, StatusCode::OK);
        let state: Value = serde_json::from_str(&body).unwrap();
        let id = state["id"].as_str().unwrap().to_string();
        assert_eq!(state["state"], "interactive");
        assert_eq!(state["markers"].as_array().unwrap().len(), 15);

        let (_, body) = send(&app, Method::POST, "/api/maps", Some(mount)).await;
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["id"], id.as_str());

        let click = json!({
            "pixel": [400.0, 300.0],
            "sync": {
                "view": { "center": [49.1221, 55.7887], "zoom": 12.0 },
                "viewport": { "width": 800.0, "height": 600.0 },
            },
        });
        let click_uri = format!("/api/maps/{}/click", id);
        let (status, body) = send(&app, Method::POST, &click_uri, Some(click)).await;
        assert_eq!(status, StatusCode::OK);
        let result: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(result["popup"]["state"], "shown");
        assert!(result["html"].as_str().unwrap().contains("12 мая 2025"));

        let search_uri = format!("/api/maps/{}/search", id);
        let search = |query: &str| Some(json!({ "query": query }));
        let error_of = |body: &str| serde_json::from_str::<Value>(body).unwrap()["error"].clone();

        let (status, body) = send(&app, Method::POST, &search_uri, search("Казань")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["view"]["zoom"], 12.0);

        let (status, body) = send(&app, Method::POST, &search_uri, search("Атлантида")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_of(&body), "Местоположение не найдено.");

        let (status, body) = send(&app, Method::POST, &search_uri, search("сбой")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_of(&body), "Ошибка поиска.");

        let (status, _) = send(&app, Method::DELETE, &format!("/api/maps/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = get_page(&app, &format!("/api/maps/{}", id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
