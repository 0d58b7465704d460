mod location;
mod marathon;
mod marker;
mod place;

pub use location::Coordinates;
pub use marathon::{Detail, Marathon, MarathonSummary};
pub use marker::{Icon, MarkerCategory, MarkerId, MarkerPayload};
pub use place::{Accommodation, Attraction, Lodging, Restaurant};
