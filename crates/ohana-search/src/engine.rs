//! The assembled search pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use ohana_core::{LocationId, LocationRecord};
use serde::Serialize;

use crate::combine::combine;
use crate::corpus::Corpus;
use crate::distance::apply_distance;
use crate::error::{SearchError, ValidationError};
use crate::geocode::{resolve_anchor, Anchor, Geocoder};
use crate::matchers::{default_matchers, Matcher};
use crate::paginate::paginate;
use crate::query::{validate, SearchParams, SearchQuery, SortMode};
use crate::rank::rank;
use crate::settings::SearchSettings;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub location: LocationRecord,
    /// Miles from the anchor point; `None` without an anchor or when the
    /// location has no coordinates.
    pub distance_miles: Option<f64>,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub hits: Vec<SearchHit>,
    /// Deduplicated match count before pagination.
    pub total_count: usize,
    pub page: usize,
    pub per_page: usize,
    pub sort: SortMode,
}

impl SearchResult {
    fn empty(query: &SearchQuery, sort: SortMode) -> Self {
        Self {
            hits: Vec::new(),
            total_count: 0,
            page: query.page,
            per_page: query.per_page,
            sort,
        }
    }
}

/// Validates, matches, ranks and paginates searches over a [`Corpus`].
///
/// Holds no per-request state: one engine serves concurrent searches.
pub struct SearchEngine {
    settings: SearchSettings,
    geocoder: Arc<dyn Geocoder>,
    matchers: Vec<Box<dyn Matcher>>,
}

impl SearchEngine {
    /// Build an engine with the standard matcher set.
    #[must_use]
    pub fn new(settings: SearchSettings, geocoder: Arc<dyn Geocoder>) -> Self {
        let matchers = default_matchers(&settings);
        Self {
            settings,
            geocoder,
            matchers,
        }
    }

    /// Register an additional filter.
    #[must_use]
    pub fn with_matcher(mut self, matcher: Box<dyn Matcher>) -> Self {
        self.matchers.push(matcher);
        self
    }

    #[must_use]
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    #[must_use]
    pub fn geocoder_enabled(&self) -> bool {
        self.geocoder.is_enabled()
    }

    /// # Errors
    ///
    /// Returns [`ValidationError`] when a parameter is malformed.
    pub fn validate(&self, params: &SearchParams) -> Result<SearchQuery, ValidationError> {
        validate(params, &self.settings)
    }

    /// Validate raw parameters, then search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Validation`] for malformed parameters and
    /// [`SearchError::Corpus`] when the corpus cannot be read.
    pub async fn search_params(
        &self,
        corpus: &dyn Corpus,
        params: &SearchParams,
    ) -> Result<SearchResult, SearchError> {
        let query = self.validate(params)?;
        self.search(corpus, &query).await
    }

    /// Run a validated query.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Corpus`] when the corpus cannot be read.
    /// Geocoding problems never fail the search; they empty the result.
    pub async fn search(
        &self,
        corpus: &dyn Corpus,
        query: &SearchQuery,
    ) -> Result<SearchResult, SearchError> {
        let records = corpus.snapshot()?;

        let anchor = resolve_anchor(
            query,
            self.geocoder.as_ref(),
            self.settings.geocode_timeout,
        )
        .await;
        let sort = effective_sort(query.sort, anchor.is_some());

        let anchor_point = match anchor {
            Some(Anchor::Unresolved) => return Ok(SearchResult::empty(query, sort)),
            Some(Anchor::Resolved(point)) => Some(point),
            None => None,
        };

        let mut sets = Vec::new();
        for matcher in &self.matchers {
            if let Some(set) = matcher.matches(query, &records) {
                tracing::debug!(
                    filter = matcher.kind().as_str(),
                    candidates = set.len(),
                    "filter applied"
                );
                sets.push((matcher.kind(), set));
            }
        }

        let mut candidates = combine(&records, sets);

        if let Some(point) = anchor_point {
            let radius = query.radius.or(self.settings.default_radius_miles);
            apply_distance(&mut candidates, &records, point, radius);
        }

        rank(&mut candidates, sort);

        let page = paginate(candidates, query.page, query.per_page);
        tracing::debug!(
            total = page.total_count,
            page = page.page,
            per_page = page.per_page,
            sort = sort.as_str(),
            "search resolved"
        );

        let by_id: HashMap<LocationId, &LocationRecord> =
            records.iter().map(|r| (r.id, r)).collect();
        let hits = page
            .items
            .into_iter()
            .filter_map(|c| {
                by_id.get(&c.id).map(|record| SearchHit {
                    location: (*record).clone(),
                    distance_miles: c.distance_miles,
                    score: c.score,
                })
            })
            .collect();

        Ok(SearchResult {
            hits,
            total_count: page.total_count,
            page: page.page,
            per_page: page.per_page,
            sort,
        })
    }
}

/// Distance ordering needs an anchor; without one it falls back to
/// relevance.
fn effective_sort(requested: Option<SortMode>, has_anchor: bool) -> SortMode {
    match (requested, has_anchor) {
        (Some(SortMode::Distance), false) => SortMode::Relevance,
        (Some(mode), _) => mode,
        (None, true) => SortMode::Distance,
        (None, false) => SortMode::Relevance,
    }
}
