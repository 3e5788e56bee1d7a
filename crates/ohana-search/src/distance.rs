//! Great-circle distance and radius filtering.

use std::collections::HashMap;

use ohana_core::{Coordinates, LocationId, LocationRecord};

use crate::combine::MatchCandidate;
use crate::matchers::FilterKind;

const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance in statute miles.
#[must_use]
pub fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}

/// Attach distances from `anchor` and drop candidates outside `radius`.
///
/// Candidates without coordinates cannot be placed: they are dropped when a
/// radius applies and otherwise kept with no distance. Survivors are tagged
/// with [`FilterKind::Location`].
pub fn apply_distance(
    candidates: &mut Vec<MatchCandidate>,
    corpus: &[LocationRecord],
    anchor: Coordinates,
    radius: Option<f64>,
) {
    let coords: HashMap<LocationId, Coordinates> = corpus
        .iter()
        .filter_map(|r| r.coordinates.map(|c| (r.id, c)))
        .collect();

    for candidate in candidates.iter_mut() {
        candidate.distance_miles = coords
            .get(&candidate.id)
            .map(|c| haversine_miles(anchor, *c));
    }

    if let Some(radius) = radius {
        candidates.retain(|c| c.distance_miles.is_some_and(|d| d <= radius));
    }

    for candidate in candidates.iter_mut() {
        candidate.matched.insert(FilterKind::Location);
    }
}
