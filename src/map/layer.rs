use std::collections::HashSet;

use serde::Serialize;

use crate::entities::{Coordinates, Icon, MarkerId, MarkerPayload};
use crate::error::{invalid_input_error, Error};
use crate::map::projection::{from_lon_lat, Pixel, View, Viewport};

/// One point feature placed on a map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub id: MarkerId,
    pub position: Coordinates,
    pub payload: MarkerPayload,
}

impl Marker {
    pub fn new(id: MarkerId, position: Coordinates, payload: MarkerPayload) -> Self {
        Self {
            id,
            position,
            payload,
        }
    }

    pub fn icon(&self) -> Icon {
        self.id.category.icon()
    }

    /// The icon is centred on the feature, like an OpenLayers icon with the default anchor.
    pub fn contains(&self, view: &View, viewport: &Viewport, pixel: Pixel) -> bool {
        let center = view.to_pixel(viewport, from_lon_lat(self.position));
        let half = self.icon().rendered_size() / 2.0;

        (pixel.x - center.x).abs() <= half && (pixel.y - center.y).abs() <= half
    }
}

/// Ordered marker registry scoped to one map instance.
#[derive(Debug, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
    placed: HashSet<MarkerId>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place_marker(
        &mut self,
        position: Coordinates,
        id: MarkerId,
        payload: MarkerPayload,
    ) -> Result<(), Error> {
        if self.placed.contains(&id) {
            tracing::warn!(marker = %id, "marker already placed");
            return Err(invalid_input_error());
        }

        self.placed.insert(id.clone());
        self.markers.push(Marker::new(id, position, payload));

        Ok(())
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.placed.clear();
    }

    /// First marker in placement order whose icon covers `pixel`.
    pub fn hit_test(&self, view: &View, viewport: &Viewport, pixel: Pixel) -> Option<&Marker> {
        self.markers
            .iter()
            .find(|marker| marker.contains(view, viewport, pixel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::MarkerCategory;

    fn viewport() -> Viewport {
        Viewport {
            width: 800.0,
            height: 500.0,
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut layer = MarkerLayer::new();
        let id = MarkerId::new(MarkerCategory::Hotel, "0");
        let at = Coordinates::new(37.6044, 55.7652);

        let hotel = MarkerPayload::new("Отель Москва Центр", "ул. Тверская, 5");
        layer.place_marker(at, id.clone(), hotel).unwrap();
        assert!(layer
            .place_marker(at, id.clone(), MarkerPayload::new("Другой", ""))
            .is_err());

        assert_eq!(layer.len(), 1);
        assert_eq!(layer.markers()[0].payload.name, "Отель Москва Центр");
    }

    #[test]
    fn same_name_different_category_coexist() {
        let mut layer = MarkerLayer::new();
        let at = Coordinates::new(49.1240, 55.7890);

        let hotel = MarkerId::new(MarkerCategory::Hotel, "1");
        let restaurant = MarkerId::new(MarkerCategory::Restaurant, "1");
        layer.place_marker(at, hotel, MarkerPayload::new("Кремль", "")).unwrap();
        layer.place_marker(at, restaurant, MarkerPayload::new("Кремль", "")).unwrap();

        assert_eq!(layer.len(), 2);
    }

    #[test]
    fn hit_test_uses_icon_extent_and_placement_order() {
        let view = View::new(Coordinates::new(49.1221, 55.7887), 12.0);
        let mut layer = MarkerLayer::new();

        let hotel = MarkerId::new(MarkerCategory::Hotel, "0");
        let attraction = MarkerId::new(MarkerCategory::Attraction, "0");
        layer.place_marker(view.center, hotel, MarkerPayload::new("first", "")).unwrap();
        layer.place_marker(view.center, attraction, MarkerPayload::new("second", "")).unwrap();

        let hit = layer.hit_test(&view, &viewport(), Pixel { x: 400.0, y: 250.0 });
        assert_eq!(hit.unwrap().payload.name, "first");

        // Outside the hotel icon (~15px half-width) but inside the attraction icon (~20px).
        let hit = layer.hit_test(&view, &viewport(), Pixel { x: 418.0, y: 250.0 });
        assert_eq!(hit.unwrap().payload.name, "second");

        assert!(layer.hit_test(&view, &viewport(), Pixel { x: 10.0, y: 10.0 }).is_none());
    }
}
