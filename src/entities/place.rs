use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// A hotel or a restaurant near the start line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lodging {
    pub name: String,
    pub distance_km: f64,
    pub budget: String,
    pub coordinates: Option<Coordinates>,
    pub address: String,
    pub website: Option<String>,
}

pub type Accommodation = Lodging;
pub type Restaurant = Lodging;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub description: String,
    pub coordinates: Option<Coordinates>,
    pub address: String,
    pub website: Option<String>,
}

impl Lodging {
    /// Distance label as shown on cards and popups, e.g. `0.5 км`.
    pub fn distance_label(&self) -> String {
        format!("{} км", self.distance_km)
    }
}

#[test]
fn distance_label_drops_trailing_zero() {
    let hotel = Lodging {
        name: "Отель Парк Отель".into(),
        distance_km: 1.0,
        budget: "средний".into(),
        coordinates: None,
        address: "ул. Знаменка, 15".into(),
        website: None,
    };

    assert_eq!(hotel.distance_label(), "1 км");
    assert_eq!(
        Lodging {
            distance_km: 0.5,
            ..hotel
        }
        .distance_label(),
        "0.5 км"
    );
}
