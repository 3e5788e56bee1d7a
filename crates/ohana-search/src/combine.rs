//! Intersection of per-filter candidate sets.

use std::collections::{BTreeMap, BTreeSet};

use ohana_core::{LocationId, LocationRecord};

use crate::matchers::{FilterKind, MatchSet};

/// A location that survived every active filter.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    pub id: LocationId,
    pub matched: BTreeSet<FilterKind>,
    /// At least one filter matched through a linked service's category.
    pub category_hit: bool,
    pub score: u32,
    pub distance_miles: Option<f64>,
}

impl MatchCandidate {
    fn new(id: LocationId) -> Self {
        Self {
            id,
            matched: BTreeSet::new(),
            category_hit: false,
            score: 0,
            distance_miles: None,
        }
    }
}

/// AND across filter kinds, deduplicated by location id.
///
/// With no active filters every location in the corpus is a candidate.
/// Output is in ascending id order.
#[must_use]
pub fn combine(corpus: &[LocationRecord], sets: Vec<(FilterKind, MatchSet)>) -> Vec<MatchCandidate> {
    let mut sets = sets.into_iter();

    let Some((first_kind, first)) = sets.next() else {
        let mut all: Vec<_> = corpus.iter().map(|r| MatchCandidate::new(r.id)).collect();
        all.sort_by_key(|c| c.id);
        all.dedup_by_key(|c| c.id);
        return all;
    };

    let mut survivors: BTreeMap<LocationId, MatchCandidate> = first
        .into_iter()
        .map(|(id, hit)| {
            let mut candidate = MatchCandidate::new(id);
            candidate.matched.insert(first_kind);
            candidate.category_hit = hit.via_category;
            (id, candidate)
        })
        .collect();

    for (kind, set) in sets {
        survivors.retain(|id, _| set.contains_key(id));
        for (id, candidate) in &mut survivors {
            candidate.matched.insert(kind);
            if set.get(id).is_some_and(|h| h.via_category) {
                candidate.category_hit = true;
            }
        }
    }

    survivors.into_values().collect()
}
