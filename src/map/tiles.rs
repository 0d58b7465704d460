use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

/// Raster tile provider addressed by a `{z}/{x}/{y}` URL template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileSource {
    pub template: String,
}

impl Default for TileSource {
    fn default() -> Self {
        Self {
            template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
        }
    }
}

impl TileSource {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Rejects templates that cannot address a slippy-map tile.
    pub fn parse(template: &str) -> Result<Self, Error> {
        if !["{z}", "{x}", "{y}"].iter().all(|p| template.contains(p)) {
            return Err(invalid_input_error());
        }

        Ok(Self::new(template))
    }
}
