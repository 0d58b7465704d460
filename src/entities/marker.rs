use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerCategory {
    Marathon,
    Hotel,
    Restaurant,
    Attraction,
}

/// Rendered icon for a marker category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Icon {
    pub src: &'static str,
    /// Edge length of the source image in pixels.
    pub source_size: f64,
    pub scale: f64,
}

impl Icon {
    /// Edge length of the icon on screen.
    pub fn rendered_size(&self) -> f64 {
        self.source_size * self.scale
    }
}

impl MarkerCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Marathon => "marathon",
            Self::Hotel => "hotel",
            Self::Restaurant => "restaurant",
            Self::Attraction => "attraction",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Self::Hotel => Icon {
                src: "https://cdn-icons-png.flaticon.com/512/1668/1668966.png",
                source_size: 512.0,
                scale: 0.06,
            },
            Self::Restaurant => Icon {
                src: "https://img.icons8.com/color/48/000000/restaurant.png",
                source_size: 48.0,
                scale: 0.7,
            },
            Self::Marathon | Self::Attraction => Icon {
                src: "https://icons.iconarchive.com/icons/paomedia/small-n-flat/1024/map-marker-icon.png",
                source_size: 1024.0,
                scale: 0.04,
            },
        }
    }
}

/// Identifies one marker within a map instance. `key` is the event token on the
/// landing map and the index into the source list on a detail map.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId {
    pub category: MarkerCategory,
    pub key: String,
}

impl MarkerId {
    pub fn new(category: MarkerCategory, key: impl Into<String>) -> Self {
        Self {
            category,
            key: key.into(),
        }
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category.name(), self.key)
    }
}

/// Popup contents for one marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerPayload {
    pub name: String,
    pub address: String,
    pub distance: Option<String>,
    pub date: Option<NaiveDate>,
    pub link: Option<String>,
}

impl MarkerPayload {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            distance: None,
            date: None,
            link: None,
        }
    }

    pub fn distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = Some(distance.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

#[test]
fn marker_ids_are_category_scoped() {
    let hotel = MarkerId::new(MarkerCategory::Hotel, "0");
    let restaurant = MarkerId::new(MarkerCategory::Restaurant, "0");

    assert_ne!(hotel, restaurant);
    assert_eq!(hotel.to_string(), "hotel-0");
}

#[test]
fn icon_sizes_follow_category_scale() {
    assert!((MarkerCategory::Hotel.icon().rendered_size() - 30.72).abs() < 1e-9);
    assert!((MarkerCategory::Restaurant.icon().rendered_size() - 33.6).abs() < 1e-9);
    assert!((MarkerCategory::Attraction.icon().rendered_size() - 40.96).abs() < 1e-9);
}
