use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use uuid::Uuid;

use crate::error::Error;
use crate::listing::ListParams;
use crate::map::{MapTarget, MapView};
use crate::pages;
use crate::server::DynAPI;

/// Each render gets its own element, so a reload mounts a fresh map.
fn map_target(view: MapView) -> MapTarget {
    MapTarget {
        view,
        element: format!("map-{}", Uuid::new_v4().simple()),
    }
}

pub async fn landing() -> Html<String> {
    Html(pages::landing_page(&map_target(MapView::Landing)))
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>, Error> {
    let filter = params.filter()?;
    let page = api.list_marathons(filter.clone(), params.page()).await?;

    Ok(Html(pages::list_page(&filter, &page)?))
}

pub async fn detail(Extension(api): Extension<DynAPI>, Path(token): Path<String>) -> Response {
    match api.find_marathon(token).await {
        Ok(marathon) => {
            let target = map_target(MapView::Marathon {
                token: marathon.token.clone(),
            });

            Html(pages::detail_page(&marathon, &target)).into_response()
        }
        Err(err) if err.status() == StatusCode::NOT_FOUND => {
            (StatusCode::NOT_FOUND, Html(pages::not_found_page())).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn about() -> Html<String> {
    Html(pages::about_page())
}

pub async fn contact() -> Html<String> {
    Html(pages::contact_page())
}
