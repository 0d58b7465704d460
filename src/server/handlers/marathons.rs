use axum::extract::{Extension, Json, Path, Query};

use crate::entities::{Marathon, MarathonSummary};
use crate::error::Error;
use crate::listing::{ListParams, Page};
use crate::server::DynAPI;

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<MarathonSummary>>, Error> {
    let page = api.list_marathons(params.filter()?, params.page()).await?;

    Ok(page.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(token): Path<String>,
) -> Result<Json<Marathon>, Error> {
    let marathon = api.find_marathon(token).await?;

    Ok(marathon.into())
}
