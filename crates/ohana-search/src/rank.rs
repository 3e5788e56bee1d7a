//! Candidate scoring and ordering.

use std::cmp::Ordering;

use crate::combine::MatchCandidate;
use crate::query::SortMode;

const FILTER_WEIGHT: u32 = 2;
const CATEGORY_BOOST: u32 = 1;

/// Two points per distinct filter matched, plus one when a match came
/// through a category name.
#[must_use]
pub fn score(candidate: &MatchCandidate) -> u32 {
    let filters = u32::try_from(candidate.matched.len()).unwrap_or(u32::MAX);
    let boost = if candidate.category_hit {
        CATEGORY_BOOST
    } else {
        0
    };
    filters.saturating_mul(FILTER_WEIGHT).saturating_add(boost)
}

/// Score every candidate and sort in place. Ties always fall back to
/// ascending id.
pub fn rank(candidates: &mut [MatchCandidate], mode: SortMode) {
    for candidate in candidates.iter_mut() {
        candidate.score = score(candidate);
    }

    match mode {
        SortMode::Relevance => {
            candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        }
        SortMode::Distance => {
            candidates.sort_by(|a, b| {
                by_distance(a.distance_miles, b.distance_miles).then(a.id.cmp(&b.id))
            });
        }
    }
}

/// Ascending, with unplaced candidates last.
fn by_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
