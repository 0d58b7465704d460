use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    entities::Coordinates,
    error::{invalid_input_error, upstream_error, Error},
    external::Geocoder,
};

/// One search hit. Nominatim encodes the numbers as strings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub display_name: Option<String>,
    pub lon: String,
    pub lat: String,
}

impl Place {
    pub fn coordinates(&self) -> Result<Coordinates, Error> {
        let lon = self.lon.parse::<f64>().map_err(|_| upstream_error())?;
        let lat = self.lat.parse::<f64>().map_err(|_| upstream_error())?;

        Ok(Coordinates::new(lon, lat))
    }
}

/// Keeps only the best-ranked hit.
pub fn parse_places(places: &[Place]) -> Result<Vec<Coordinates>, Error> {
    places.first().map(Place::coordinates).into_iter().collect()
}

#[derive(Clone, Debug)]
pub struct Nominatim {
    client: reqwest::Client,
    api_base: String,
    user_agent: String,
}

impl Nominatim {
    pub fn new(api_base: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.nominatim_api_base, &config.nominatim_user_agent)
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl Geocoder for Nominatim {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Vec<Coordinates>, Error> {
        let res = self
            .client
            .get(self.search_url())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[("format", "json")])
            .query(&[("q", query)])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if (400..500).contains(&status_code) {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            tracing::warn!(status_code, "geocoding lookup failed");
            return Err(upstream_error());
        }

        let places: Vec<Place> = res.json().await?;

        parse_places(&places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_response() {
        let body = r#"[
            {"place_id": 1, "display_name": "Екатеринбург", "lon": "60.6054", "lat": "56.8386"},
            {"place_id": 2, "display_name": "Yekaterinburg", "lon": "60.5", "lat": "56.8"}
        ]"#;

        let places: Vec<Place> = serde_json::from_str(body).unwrap();
        let coordinates = parse_places(&places).unwrap();

        assert_eq!(coordinates, vec![Coordinates::new(60.6054, 56.8386)]);
    }

    #[test]
    fn later_candidates_are_not_parsed() {
        let body = r#"[
            {"display_name": "Казань", "lon": "49.1221", "lat": "55.7887"},
            {"display_name": "broken", "lon": "east", "lat": ""}
        ]"#;

        let places: Vec<Place> = serde_json::from_str(body).unwrap();

        assert_eq!(parse_places(&places).unwrap(), vec![Coordinates::new(49.1221, 55.7887)]);
        assert!(parse_places(&[]).unwrap().is_empty());
    }

    #[test]
    fn malformed_numbers_are_upstream_errors() {
        let places: Vec<Place> =
            serde_json::from_str(r#"[{"lon": "east", "lat": "56.8"}]"#).unwrap();

        assert_eq!(parse_places(&places).unwrap_err(), upstream_error());
    }

    #[test]
    fn search_url_ignores_trailing_slash() {
        let nominatim = Nominatim::new("https://nominatim.openstreetmap.org/", "marathons-test");

        assert_eq!(nominatim.search_url(), "https://nominatim.openstreetmap.org/search");
    }
}
