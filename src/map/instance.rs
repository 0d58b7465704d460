use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, Icon};
use crate::error::{invalid_state_error, location_not_found_error, search_superseded_error, Error};
use crate::map::layer::{Marker, MarkerLayer};
use crate::map::popup::Popup;
use crate::map::projection::{Pixel, View, Viewport};
use crate::map::tiles::TileSource;

pub const LANDING_ZOOM: f64 = 5.0;
pub const DETAIL_ZOOM: f64 = 12.0;
pub const SEARCH_ZOOM: f64 = 12.0;

/// Which page a map belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapView {
    Landing,
    Marathon { token: String },
}

/// A map is mounted over one DOM element of one view.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapTarget {
    pub view: MapView,
    pub element: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Uninitialized,
    Initializing,
    Interactive,
    TornDown,
}

#[derive(Debug)]
pub struct MapInstance {
    id: Uuid,
    target: MapTarget,
    state: State,
    view: View,
    viewport: Viewport,
    base_layer: Option<TileSource>,
    markers: MarkerLayer,
    popup: Popup,
    search_generation: u64,
}

/// Serializable snapshot handed to the page script.
#[derive(Clone, Debug, Serialize)]
pub struct MapState {
    pub id: Uuid,
    pub target: MapTarget,
    pub state: State,
    pub view: View,
    pub tile_url: Option<String>,
    pub markers: Vec<MarkerState>,
    pub popup: Popup,
}

#[derive(Clone, Debug, Serialize)]
pub struct MarkerState {
    pub id: String,
    pub position: Coordinates,
    pub icon: Icon,
}

impl From<&Marker> for MarkerState {
    fn from(marker: &Marker) -> Self {
        Self {
            id: marker.id.to_string(),
            position: marker.position,
            icon: marker.icon(),
        }
    }
}

impl MapInstance {
    pub fn new(target: MapTarget, view: View, viewport: Viewport) -> Self {
        Self {
            id: Uuid::new_v4(),
            target,
            state: State::Uninitialized,
            view,
            viewport,
            base_layer: None,
            markers: MarkerLayer::new(),
            popup: Popup::Hidden,
            search_generation: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn target(&self) -> &MapTarget {
        &self.target
    }

    /// Attaches the base layer, the marker layer and the popup, then starts listening
    /// for clicks. Returns `false` when the instance was already initialised.
    #[tracing::instrument(skip(self, base_layer, markers), fields(id = %self.id))]
    pub fn initialize(
        &mut self,
        base_layer: TileSource,
        markers: Vec<Marker>,
    ) -> Result<bool, Error> {
        match self.state {
            State::Uninitialized => {}
            State::Initializing | State::Interactive => return Ok(false),
            State::TornDown => return Err(invalid_state_error()),
        }

        self.state = State::Initializing;

        let mut layer = MarkerLayer::new();
        for marker in markers {
            if let Err(err) = layer.place_marker(marker.position, marker.id, marker.payload) {
                self.state = State::Uninitialized;
                return Err(err);
            }
        }

        self.base_layer = Some(base_layer);
        self.markers = layer;
        self.popup = Popup::Hidden;

        tracing::info!(markers = self.markers.len(), "map is interactive");
        self.state = State::Interactive;

        Ok(true)
    }

    /// Takes the client's current view, so hit tests match what is on screen.
    pub fn sync_view(&mut self, view: View, viewport: Viewport) -> Result<(), Error> {
        if self.state != State::Interactive {
            return Err(invalid_state_error());
        }

        self.view = view;
        self.viewport = viewport;

        Ok(())
    }

    pub fn on_click(&mut self, pixel: Pixel) -> Result<&Popup, Error> {
        if self.state != State::Interactive {
            return Err(invalid_state_error());
        }

        self.popup = match self.markers.hit_test(&self.view, &self.viewport, pixel) {
            Some(marker) => Popup::Shown {
                position: marker.position,
                payload: marker.payload.clone(),
            },
            None => Popup::Hidden,
        };

        Ok(&self.popup)
    }

    /// Starts a search and returns its ticket. Starting another search invalidates
    /// every earlier ticket.
    pub fn begin_search(&mut self) -> Result<u64, Error> {
        if self.state != State::Interactive {
            return Err(invalid_state_error());
        }

        self.search_generation += 1;

        Ok(self.search_generation)
    }

    /// Applies a geocoding result for `ticket`. The view only changes when the ticket
    /// is still the newest and the lookup produced a candidate.
    pub fn finish_search(
        &mut self,
        ticket: u64,
        result: Result<Vec<Coordinates>, Error>,
    ) -> Result<&View, Error> {
        if self.state != State::Interactive {
            return Err(invalid_state_error());
        }

        if ticket != self.search_generation {
            tracing::info!(ticket, current = self.search_generation, "discarding stale search");
            return Err(search_superseded_error());
        }

        let candidates = result?;
        let first = candidates.first().ok_or_else(location_not_found_error)?;

        self.view = View::new(*first, SEARCH_ZOOM);

        Ok(&self.view)
    }

    pub fn tear_down(&mut self) {
        self.state = State::TornDown;
        self.base_layer = None;
        self.markers.clear();
        self.popup = Popup::Hidden;
    }

    pub fn snapshot(&self) -> MapState {
        MapState {
            id: self.id,
            target: self.target.clone(),
            state: self.state,
            view: self.view,
            tile_url: self.base_layer.as_ref().map(|t| t.template.clone()),
            markers: self.markers.markers().iter().map(MarkerState::from).collect(),
            popup: self.popup.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::entities::{MarkerCategory, MarkerId, MarkerPayload};
    use crate::error::{invalid_input_error, upstream_error};
    use crate::map::projection::from_lon_lat;

    impl MapInstance {
        /// Pixel at which a marker is drawn in the current view.
        pub(crate) fn pixel_of(&self, id: &MarkerId) -> Option<Pixel> {
            self.markers
                .markers()
                .iter()
                .find(|marker| marker.id == *id)
                .map(|marker| self.view.to_pixel(&self.viewport, from_lon_lat(marker.position)))
        }
    }

    fn landing() -> MapInstance {
        MapInstance::new(
            MapTarget {
                view: MapView::Landing,
                element: "map".into(),
            },
            View::new(Coordinates::new(37.618423, 55.751244), LANDING_ZOOM),
            Viewport {
                width: 800.0,
                height: 600.0,
            },
        )
    }

    fn kazan_marker() -> Marker {
        Marker::new(
            MarkerId::new(MarkerCategory::Marathon, "kazan"),
            Coordinates::new(49.1221, 55.7887),
            MarkerPayload::new("Казанский марафон", "Казань, Россия"),
        )
    }

    #[test]
    fn initialization_is_guarded() {
        let mut map = landing();
        assert_eq!(map.snapshot().state, State::Uninitialized);

        assert!(map.initialize(TileSource::default(), vec![kazan_marker()]).unwrap());
        assert_eq!(map.snapshot().state, State::Interactive);

        assert!(!map.initialize(TileSource::default(), vec![kazan_marker()]).unwrap());
        assert_eq!(map.snapshot().markers.len(), 1);
    }

    #[test]
    fn click_shows_and_hides_popup() {
        let mut map = landing();
        map.initialize(TileSource::default(), vec![kazan_marker()]).unwrap();

        let id = MarkerId::new(MarkerCategory::Marathon, "kazan");
        let pixel = map.pixel_of(&id).unwrap();

        let popup = map.on_click(pixel).unwrap();
        assert_eq!(popup.payload().unwrap().name, "Казанский марафон");
        match popup {
            Popup::Shown { position, .. } => {
                assert_eq!(*position, Coordinates::new(49.1221, 55.7887))
            }
            Popup::Hidden => panic!("popup should be shown"),
        }

        let miss = Pixel {
            x: pixel.x + 100.0,
            y: pixel.y,
        };
        assert!(!map.on_click(miss).unwrap().payload().is_some());
    }

    #[test]
    fn clicks_are_rejected_before_init_and_after_teardown() {
        let mut map = landing();
        assert!(map.on_click(Pixel { x: 0.0, y: 0.0 }).is_err());

        map.initialize(TileSource::default(), vec![kazan_marker()]).unwrap();
        map.tear_down();

        assert_eq!(map.snapshot().state, State::TornDown);
        assert!(map.snapshot().markers.is_empty());
        assert!(map.on_click(Pixel { x: 0.0, y: 0.0 }).is_err());
        assert!(map.initialize(TileSource::default(), vec![]).is_err());
    }

    #[test]
    fn search_recenters_on_first_candidate() {
        let mut map = landing();
        map.initialize(TileSource::default(), vec![]).unwrap();

        let ticket = map.begin_search().unwrap();
        let candidates = vec![Coordinates::new(60.6, 56.84), Coordinates::new(0.0, 0.0)];
        let view = *map.finish_search(ticket, Ok(candidates)).unwrap();

        assert_eq!(view, View::new(Coordinates::new(60.6, 56.84), SEARCH_ZOOM));
    }

    #[test]
    fn failed_search_leaves_view_unchanged() {
        let mut map = landing();
        map.initialize(TileSource::default(), vec![]).unwrap();
        let before = map.snapshot().view;

        let ticket = map.begin_search().unwrap();
        let err = map.finish_search(ticket, Ok(vec![])).unwrap_err();
        assert_eq!(err, location_not_found_error());

        let ticket = map.begin_search().unwrap();
        let err = map.finish_search(ticket, Err(upstream_error())).unwrap_err();
        assert_eq!(err, upstream_error());

        assert_eq!(map.snapshot().view, before);
    }

    #[test]
    fn newer_search_supersedes_older() {
        let mut map = landing();
        map.initialize(TileSource::default(), vec![]).unwrap();

        let first = map.begin_search().unwrap();
        let second = map.begin_search().unwrap();

        let err = map
            .finish_search(first, Ok(vec![Coordinates::new(1.0, 1.0)]))
            .unwrap_err();
        assert_eq!(err, search_superseded_error());

        let view = *map
            .finish_search(second, Ok(vec![Coordinates::new(2.0, 2.0)]))
            .unwrap();
        assert_eq!(view.center, Coordinates::new(2.0, 2.0));
    }

    #[test]
    fn duplicate_marker_leaves_map_retryable() {
        let mut map = landing();

        let err = map
            .initialize(TileSource::default(), vec![kazan_marker(), kazan_marker()])
            .unwrap_err();
        assert_eq!(err, invalid_input_error());
        assert_eq!(map.snapshot().state, State::Uninitialized);
        assert!(map.snapshot().markers.is_empty());
        assert!(map.snapshot().tile_url.is_none());

        assert!(map.initialize(TileSource::default(), vec![kazan_marker()]).unwrap());
        assert_eq!(map.snapshot().state, State::Interactive);
        assert_eq!(map.snapshot().markers.len(), 1);

        let pixel = map.pixel_of(&kazan_marker().id).unwrap();
        assert!(map.on_click(pixel).unwrap().payload().is_some());
    }
}
