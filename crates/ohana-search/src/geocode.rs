//! Anchor point resolution.
//!
//! An explicit `lat_lng` is used as-is. Free-text location goes through a
//! [`Geocoder`] under a bounded timeout; any failure, timeout, or empty
//! answer becomes [`Anchor::Unresolved`], which the engine treats as
//! "the location filter matches nothing".

use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use ohana_core::Coordinates;
use regex::Regex;
use thiserror::Error;

use crate::query::SearchQuery;

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid regex"));

static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[A-Za-z]?\s+\S").expect("valid regex"));

/// The geocoding collaborator could not produce an answer.
///
/// Never surfaced to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("geocoding failed: {reason}")]
pub struct ResolutionFailure {
    pub reason: String,
}

impl ResolutionFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Turns free-text location into coordinates.
///
/// `Ok(None)` means the provider answered but found nothing.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, text: &str) -> Result<Option<Coordinates>, ResolutionFailure>;

    /// `false` for geocoders that can never resolve anything.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// A fixed gazetteer. Keys are matched case- and whitespace-insensitively.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    entries: HashMap<String, Coordinates>,
}

impl StaticGeocoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(mut self, text: &str, coordinates: Coordinates) -> Self {
        self.entries.insert(normalize_key(text), coordinates);
        self
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn geocode(&self, text: &str) -> Result<Option<Coordinates>, ResolutionFailure> {
        Ok(self.entries.get(&normalize_key(text)).copied())
    }
}

/// Used when no geocoding provider is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeocoder;

#[async_trait]
impl Geocoder for DisabledGeocoder {
    async fn geocode(&self, _text: &str) -> Result<Option<Coordinates>, ResolutionFailure> {
        Ok(None)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

fn normalize_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Zip,
    Address,
    Place,
}

impl LocationKind {
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let text = text.trim();
        if ZIP_RE.is_match(text) {
            Self::Zip
        } else if ADDRESS_RE.is_match(text) {
            Self::Address
        } else {
            Self::Place
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Address => "address",
            Self::Place => "place",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Resolved(Coordinates),
    /// A location was requested but could not be placed.
    Unresolved,
}

impl Anchor {
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Self::Resolved(c) => Some(*c),
            Self::Unresolved => None,
        }
    }
}

/// Resolve the query's anchor point, if it asks for one.
///
/// Returns `None` when the query has neither `lat_lng` nor location text.
pub async fn resolve_anchor(
    query: &SearchQuery,
    geocoder: &dyn Geocoder,
    timeout: Duration,
) -> Option<Anchor> {
    if let Some(coords) = query.lat_lng {
        return Some(Anchor::Resolved(coords));
    }

    let text = query.location_text.as_deref()?;
    let kind = LocationKind::classify(text);

    if !geocoder.is_enabled() {
        tracing::warn!(
            kind = kind.as_str(),
            "no geocoder configured; location filter matches nothing"
        );
        return Some(Anchor::Unresolved);
    }

    let anchor = match tokio::time::timeout(timeout, geocoder.geocode(text)).await {
        Ok(Ok(Some(coords))) if coords.is_valid() => {
            tracing::debug!(
                kind = kind.as_str(),
                lat = coords.latitude,
                lng = coords.longitude,
                "location resolved"
            );
            Anchor::Resolved(coords)
        }
        Ok(Ok(Some(coords))) => {
            tracing::warn!(
                kind = kind.as_str(),
                lat = coords.latitude,
                lng = coords.longitude,
                "geocoder returned out-of-range coordinates"
            );
            Anchor::Unresolved
        }
        Ok(Ok(None)) => {
            tracing::debug!(kind = kind.as_str(), "geocoder found no match");
            Anchor::Unresolved
        }
        Ok(Err(e)) => {
            tracing::warn!(kind = kind.as_str(), error = %e, "geocoding failed");
            Anchor::Unresolved
        }
        Err(_) => {
            tracing::warn!(
                kind = kind.as_str(),
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                "geocoding timed out"
            );
            Anchor::Unresolved
        }
    };

    Some(anchor)
}
