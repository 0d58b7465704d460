mod instance;
mod layer;
mod popup;
pub mod projection;
mod registry;
pub mod seed;
pub mod tiles;

pub use instance::{
    MapInstance, MapState, MapTarget, MapView, MarkerState, State, DETAIL_ZOOM, LANDING_ZOOM,
    SEARCH_ZOOM,
};
pub use layer::{Marker, MarkerLayer};
pub use popup::Popup;
pub use projection::{Pixel, View, Viewport};
pub use registry::{MapRegistry, DEFAULT_MAP_CAPACITY};
pub use tiles::TileSource;
