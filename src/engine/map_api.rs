use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::{MapAPI, MountParams, ViewSync},
    catalog::Catalog,
    error::{invalid_input_error, not_found_error, Error},
    map::{
        seed, MapInstance, MapState, MapTarget, MapView, Pixel, Popup, TileSource, View,
        Viewport, DETAIL_ZOOM, LANDING_ZOOM,
    },
};

/// Builds and initialises the map for `target`.
fn build_map(
    catalog: &Catalog,
    target: MapTarget,
    viewport: Viewport,
    tile_source: TileSource,
) -> Result<MapInstance, Error> {
    let (view, markers) = match &target.view {
        MapView::Landing => {
            let moscow = catalog
                .find_by_token("moscow")
                .map(|m| m.map_center)
                .ok_or_else(not_found_error)?;

            (View::new(moscow, LANDING_ZOOM), seed::landing_markers(catalog.all()))
        }
        MapView::Marathon { token } => {
            let marathon = catalog.find_by_token(token).ok_or_else(not_found_error)?;

            (View::new(marathon.map_center, DETAIL_ZOOM), seed::detail_markers(marathon))
        }
    };

    let mut instance = MapInstance::new(target, view, viewport);
    instance.initialize(tile_source, markers)?;

    Ok(instance)
}

#[async_trait]
impl MapAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn mount_map(&self, params: MountParams) -> Result<MapState, Error> {
        let catalog = self.catalog;
        let tile_source = self.tile_source.clone();
        let viewport = params.viewport.unwrap_or_default();

        let mut maps = self.maps.lock().await;
        let instance = maps.mount(params.target, |target| {
            build_map(catalog, target, viewport, tile_source)
        })?;
        let state = instance.snapshot();

        tracing::debug!(maps = maps.len(), "map mounted");

        Ok(state)
    }

    #[tracing::instrument(skip(self))]
    async fn find_map(&self, id: Uuid) -> Result<MapState, Error> {
        let maps = self.maps.lock().await;

        Ok(maps.get(id)?.snapshot())
    }

    #[tracing::instrument(skip(self))]
    async fn click_map(
        &self,
        id: Uuid,
        pixel: Pixel,
        sync: Option<ViewSync>,
    ) -> Result<Popup, Error> {
        let mut maps = self.maps.lock().await;
        let instance = maps.get_mut(id)?;

        if let Some(sync) = sync {
            instance.sync_view(sync.view, sync.viewport)?;
        }

        let popup = instance.on_click(pixel)?;

        Ok(popup.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn search_map(&self, id: Uuid, query: String) -> Result<MapState, Error> {
        let query = query.trim();

        let ticket = {
            let mut maps = self.maps.lock().await;
            let instance = maps.get_mut(id)?;

            if instance.target().view != MapView::Landing {
                return Err(invalid_input_error());
            }

            if query.is_empty() {
                return Ok(instance.snapshot());
            }

            instance.begin_search()?
        };

        // The registry stays unlocked while the lookup is in flight.
        let result = self.geocoder.geocode(query).await;

        let mut maps = self.maps.lock().await;
        let instance = maps.get_mut(id)?;

        if let Err(err) = instance.finish_search(ticket, result) {
            tracing::warn!(%err, query, "search did not move the map");
            return Err(err);
        }

        Ok(instance.snapshot())
    }

    #[tracing::instrument(skip(self))]
    async fn unmount_map(&self, id: Uuid) -> Result<(), Error> {
        let mut maps = self.maps.lock().await;
        maps.unmount(id)?;

        Ok(())
    }
}
