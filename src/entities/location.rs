use geo_types::Point;
use serde::{Deserialize, Serialize};

/// WGS84 longitude/latitude pair, serialised as `[lon, lat]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinates {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coordinates: Coordinates) -> Self {
        [coordinates.lon, coordinates.lat]
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.lon, coordinates.lat)
    }
}

#[test]
fn coordinates_serialize_as_lon_lat_pair() {
    let kazan = Coordinates::new(49.1221, 55.7887);

    assert_eq!(serde_json::to_value(kazan).unwrap(), serde_json::json!([49.1221, 55.7887]));

    let point: Point<f64> = kazan.into();
    assert_eq!(point.x(), 49.1221);
    assert_eq!(point.y(), 55.7887);
}
