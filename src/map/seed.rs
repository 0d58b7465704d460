//! Markers for the landing map and for a marathon's detail map.

use crate::entities::{Attraction, Lodging, Marathon, MarkerCategory, MarkerId, MarkerPayload};
use crate::map::layer::Marker;

pub fn marathon_link(token: &str) -> String {
    format!("/marathons/{}", token)
}

/// One pin per event, at the event's map center.
pub fn landing_markers<'a>(marathons: impl IntoIterator<Item = &'a Marathon>) -> Vec<Marker> {
    marathons
        .into_iter()
        .map(|marathon| {
            let mut payload = MarkerPayload::new(&marathon.name, &marathon.location)
                .distance(&marathon.distance)
                .date(marathon.date);
            if marathon.has_points_of_interest() {
                payload = payload.link(marathon_link(&marathon.token));
            }

            Marker::new(
                MarkerId::new(MarkerCategory::Marathon, &marathon.token),
                marathon.map_center,
                payload,
            )
        })
        .collect()
}

fn lodging_markers(
    category: MarkerCategory,
    items: &[Lodging],
) -> impl Iterator<Item = Marker> + '_ {
    items.iter().enumerate().filter_map(move |(i, item)| {
        let position = item.coordinates?;
        let payload = MarkerPayload::new(&item.name, &item.address).distance(item.distance_label());

        Some(Marker::new(MarkerId::new(category, i.to_string()), position, payload))
    })
}

fn attraction_markers(items: &[Attraction]) -> impl Iterator<Item = Marker> + '_ {
    items.iter().enumerate().filter_map(|(i, item)| {
        let position = item.coordinates?;
        let payload = MarkerPayload::new(&item.name, &item.address);

        Some(Marker::new(
            MarkerId::new(MarkerCategory::Attraction, i.to_string()),
            position,
            payload,
        ))
    })
}

/// Every sub-record with coordinates, hotels first, then restaurants, then attractions.
pub fn detail_markers(marathon: &Marathon) -> Vec<Marker> {
    lodging_markers(MarkerCategory::Hotel, &marathon.accommodations)
        .chain(lodging_markers(MarkerCategory::Restaurant, &marathon.restaurants))
        .chain(attraction_markers(&marathon.attractions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn landing_has_one_marker_per_event() {
        let catalog = Catalog::global();
        let markers = landing_markers(catalog.all());

        assert_eq!(markers.len(), catalog.len());

        let kazan = markers
            .iter()
            .find(|m| m.id == MarkerId::new(MarkerCategory::Marathon, "kazan"))
            .unwrap();
        assert_eq!(kazan.payload.link.as_deref(), Some("/marathons/kazan"));
        assert_eq!(kazan.payload.address, "Казань, Россия");

        let irkutsk = markers
            .iter()
            .find(|m| m.id == MarkerId::new(MarkerCategory::Marathon, "irkutsk"))
            .unwrap();
        assert_eq!(irkutsk.payload.link, None);
        assert!(irkutsk.payload.date.is_some());
    }

    #[test]
    fn detail_markers_skip_records_without_coordinates() {
        let mut marathon = Catalog::global().find_by_token("moscow").unwrap().clone();
        assert_eq!(detail_markers(&marathon).len(), 15);

        marathon.accommodations[0].coordinates = None;
        marathon.attractions[4].coordinates = None;

        let markers = detail_markers(&marathon);
        assert_eq!(markers.len(), 13);
        assert!(markers
            .iter()
            .all(|m| m.id != MarkerId::new(MarkerCategory::Hotel, "0")));
    }

    #[test]
    fn lodging_popups_carry_distance_attractions_do_not() {
        let marathon = Catalog::global().find_by_token("kazan").unwrap();
        let markers = detail_markers(marathon);

        let hotel = &markers[0];
        assert_eq!(hotel.id.category, MarkerCategory::Hotel);
        assert_eq!(hotel.payload.distance.as_deref(), Some("0.5 км"));

        let attraction = markers.last().unwrap();
        assert_eq!(attraction.id.category, MarkerCategory::Attraction);
        assert_eq!(attraction.payload.distance, None);
    }

    #[test]
    fn events_without_points_of_interest_have_no_markers() {
        let perm = Catalog::global().find_by_token("perm").unwrap();
        assert!(detail_markers(perm).is_empty());
    }
}
