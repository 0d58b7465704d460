pub mod nominatim;

use async_trait::async_trait;

use crate::entities::Coordinates;
use crate::error::Error;

/// Resolves free text to candidate points, best match first.
#[async_trait]
pub trait Geocoder {
    async fn geocode(&self, query: &str) -> Result<Vec<Coordinates>, Error>;
}
