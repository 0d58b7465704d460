use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Marathon, MarathonSummary};
use crate::error::Error;
use crate::listing::{Filter, Page};
use crate::map::{MapState, MapTarget, Pixel, Popup, View, Viewport};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MountParams {
    pub target: MapTarget,
    pub viewport: Option<Viewport>,
}

/// What the client currently shows; sent along with clicks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ViewSync {
    pub view: View,
    pub viewport: Viewport,
}

#[async_trait]
pub trait CatalogAPI {
    async fn list_marathons(
        &self,
        filter: Filter,
        page: usize,
    ) -> Result<Page<MarathonSummary>, Error>;
    async fn find_marathon(&self, token: String) -> Result<Marathon, Error>;
}

#[async_trait]
pub trait MapAPI {
    async fn mount_map(&self, params: MountParams) -> Result<MapState, Error>;
    async fn find_map(&self, id: Uuid) -> Result<MapState, Error>;
    async fn click_map(
        &self,
        id: Uuid,
        pixel: Pixel,
        sync: Option<ViewSync>,
    ) -> Result<Popup, Error>;
    async fn search_map(&self, id: Uuid, query: String) -> Result<MapState, Error>;
    async fn unmount_map(&self, id: Uuid) -> Result<(), Error>;
}

pub trait API: CatalogAPI + MapAPI {}
