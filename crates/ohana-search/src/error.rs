use thiserror::Error;

use crate::corpus::CorpusError;

/// A request parameter failed validation.
///
/// The `Display` text is the client-facing description and is part of the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Radius must be a Float between 0.1 and 50.")]
    InvalidRadius,

    #[error("lat_lng must be a comma-delimited lat,long pair of floats.")]
    InvalidLatLng,

    #[error("{field} must be an Integer.")]
    InvalidPage { field: &'static str },

    #[error("Either keyword, location, or language is missing.")]
    MissingRequiredFilter,
}

impl ValidationError {
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

/// Errors returned by [`crate::SearchEngine`].
///
/// Geocoding failures never appear here; they degrade the location filter
/// to an empty match instead.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),
}
