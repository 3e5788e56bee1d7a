use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Extension, Json,
};
use ohana_core::{Address, Organization, Phone, ServiceRecord};
use ohana_search::{SearchError, SearchHit, SearchParams};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// A location as returned by the search endpoint. Every key is present even
/// when empty.
#[derive(Debug, Serialize)]
pub(super) struct LocationItem {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<Address>,
    pub phones: Vec<Phone>,
    pub urls: Vec<String>,
    pub emails: Vec<String>,
    pub organization: Organization,
    pub services: Vec<ServiceRecord>,
    pub languages: Vec<String>,
    /// Miles from the search anchor.
    pub distance: Option<f64>,
}

impl From<SearchHit> for LocationItem {
    fn from(hit: SearchHit) -> Self {
        let location = hit.location;
        Self {
            id: location.id,
            name: location.name,
            description: location.description,
            latitude: location.coordinates.map(|c| c.latitude),
            longitude: location.coordinates.map(|c| c.longitude),
            address: location.address,
            phones: location.phones,
            urls: location.urls,
            emails: location.emails,
            organization: location.organization,
            services: location.services,
            languages: location.languages,
            distance: hit.distance_miles,
        }
    }
}

pub(super) fn map_search_error(request_id: String, error: &SearchError) -> ApiError {
    match error {
        SearchError::Validation(e) => ApiError::new(request_id, "validation_error", e.description()),
        SearchError::Corpus(e) => {
            tracing::error!(error = %e, "corpus snapshot failed");
            ApiError::new(request_id, "internal_error", "search is temporarily unavailable")
        }
    }
}

pub(super) async fn search_locations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .engine
        .search_params(state.corpus.as_ref(), &params)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    tracing::debug!(
        total = result.total_count,
        page = result.page,
        per_page = result.per_page,
        sort = result.sort.as_str(),
        "search complete"
    );

    let total = result.total_count.to_string();
    let data: Vec<LocationItem> = result.hits.into_iter().map(LocationItem::from).collect();

    Ok((
        [(TOTAL_COUNT_HEADER, total)],
        Json(ApiResponse {
            data,
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}
