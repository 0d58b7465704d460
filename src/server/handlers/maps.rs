use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::api::{MountParams, ViewSync};
use crate::error::{search_failure_message, Error};
use crate::map::{MapState, Pixel, Popup};
use crate::pages::popup_html;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct ClickParams {
    pixel: Pixel,
    sync: Option<ViewSync>,
}

#[derive(Serialize)]
pub struct ClickResult {
    popup: Popup,
    html: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SearchParams {
    query: String,
}

pub async fn mount(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<MountParams>,
) -> Result<Json<MapState>, Error> {
    let state = api.mount_map(params).await?;

    Ok(state.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<MapState>, Error> {
    let state = api.find_map(id).await?;

    Ok(state.into())
}

pub async fn click(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<ClickParams>,
) -> Result<Json<ClickResult>, Error> {
    let popup = api.click_map(id, params.pixel, params.sync).await?;
    let html = popup.payload().map(popup_html);

    Ok(ClickResult { popup, html }.into())
}

/// Failures carry the text the search box shows.
pub async fn search(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<SearchParams>,
) -> Result<Json<MapState>, Response> {
    match api.search_map(id, params.query).await {
        Ok(state) => Ok(state.into()),
        Err(err) => {
            let body = Json(json!({
                "code": err.code,
                "error": search_failure_message(&err),
            }));

            Err((err.status(), body).into_response())
        }
    }
}

pub async fn unmount(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    api.unmount_map(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
