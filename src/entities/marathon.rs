use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::{Accommodation, Attraction, Coordinates, Restaurant};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Marathon {
    pub token: String,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub distance: String,
    pub description: String,
    pub details: Vec<Detail>,
    pub accommodations: Vec<Accommodation>,
    pub restaurants: Vec<Restaurant>,
    pub attractions: Vec<Attraction>,
    pub map_center: Coordinates,
    pub images: Vec<String>,
    pub logo: Option<String>,
}

/// Card-sized view of a marathon for list responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarathonSummary {
    pub token: String,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub distance: String,
    pub description: String,
    pub logo: Option<String>,
    /// Whether the event has a detail page worth linking to.
    pub detailed: bool,
}

impl Marathon {
    pub fn summary(&self) -> MarathonSummary {
        MarathonSummary {
            token: self.token.clone(),
            name: self.name.clone(),
            date: self.date,
            location: self.location.clone(),
            distance: self.distance.clone(),
            description: self.description.clone(),
            logo: self.logo.clone(),
            detailed: self.has_points_of_interest(),
        }
    }

    pub fn has_points_of_interest(&self) -> bool {
        !(self.accommodations.is_empty()
            && self.restaurants.is_empty()
            && self.attractions.is_empty())
    }
}
