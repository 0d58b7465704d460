//! Spherical Web Mercator (EPSG:3857) and the pixel space of a viewport.

use std::f64::consts::PI;

use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

pub const EARTH_RADIUS: f64 = 6_378_137.0;
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;
/// Metres per pixel at zoom 0 for 256px tiles.
pub const ZOOM_0_RESOLUTION: f64 = 2.0 * PI * EARTH_RADIUS / 256.0;

/// Projected map coordinate in metres.
pub type MapPoint = Point<f64>;

pub fn from_lon_lat(coordinates: Coordinates) -> MapPoint {
    let degrees = Point::from(coordinates);
    let lat = degrees.y().clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = EARTH_RADIUS * degrees.x().to_radians();
    let y = EARTH_RADIUS * (PI / 4.0 + lat.to_radians() / 2.0).tan().ln();

    Point::new(x, y)
}

/// Screen position relative to the top-left corner of the map element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl From<[f64; 2]> for Pixel {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Pixel> for [f64; 2] {
    fn from(pixel: Pixel) -> Self {
        [pixel.x, pixel.y]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1110.0,
            height: 600.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub center: Coordinates,
    pub zoom: f64,
}

impl View {
    pub fn new(center: Coordinates, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Metres per pixel.
    pub fn resolution(&self) -> f64 {
        ZOOM_0_RESOLUTION / 2f64.powf(self.zoom)
    }

    pub fn to_pixel(&self, viewport: &Viewport, point: MapPoint) -> Pixel {
        let center = from_lon_lat(self.center);
        let resolution = self.resolution();

        Pixel {
            x: (point.x() - center.x()) / resolution + viewport.width / 2.0,
            y: (center.y() - point.y()) / resolution + viewport.height / 2.0,
        }
    }
}
