use serde::Serialize;

use crate::entities::{Coordinates, MarkerPayload};

/// Overlay anchored to a map coordinate, shown after a marker click.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Popup {
    Hidden,
    Shown {
        position: Coordinates,
        payload: MarkerPayload,
    },
}

impl Default for Popup {
    fn default() -> Self {
        Self::Hidden
    }
}

impl Popup {
    pub fn payload(&self) -> Option<&MarkerPayload> {
        match self {
            Self::Shown { payload, .. } => Some(payload),
            Self::Hidden => None,
        }
    }
}
