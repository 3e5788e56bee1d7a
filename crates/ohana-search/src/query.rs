//! Raw request parameters and their validated form.

use ohana_core::Coordinates;
use serde::Deserialize;

use crate::error::ValidationError;
use crate::settings::{SearchSettings, MAX_RADIUS_MILES, MIN_RADIUS_MILES};

/// The flat parameter set accepted by the search endpoint, as raw strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub lat_lng: Option<String>,
    pub radius: Option<String>,
    pub category: Option<String>,
    pub org_name: Option<String>,
    pub language: Option<String>,
    pub domain: Option<String>,
    pub email: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Distance,
    Relevance,
}

impl SortMode {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "distance" => Some(Self::Distance),
            "relevance" => Some(Self::Relevance),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Relevance => "relevance",
        }
    }
}

/// A validated search request.
///
/// `lat_lng` and `location_text` are never both set: an explicit pair
/// always wins over free text.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub location_text: Option<String>,
    pub lat_lng: Option<Coordinates>,
    pub radius: Option<f64>,
    pub category: Option<String>,
    pub org_name: Option<String>,
    pub language: Option<String>,
    pub domain: Option<String>,
    pub email: Option<String>,
    pub sort: Option<SortMode>,
    pub page: usize,
    pub per_page: usize,
}

impl SearchQuery {
    #[must_use]
    pub fn has_location(&self) -> bool {
        self.lat_lng.is_some() || self.location_text.is_some()
    }
}

/// Validate and coerce raw parameters into a [`SearchQuery`].
///
/// Blank values are treated as absent. Out-of-range `page` and `per_page`
/// values are clamped rather than rejected; only unparseable ones fail.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first offending parameter, or
/// [`ValidationError::MissingRequiredFilter`] when the configured
/// [`crate::RequiredFilterPolicy`] is enabled and unmet.
pub fn validate(
    params: &SearchParams,
    settings: &SearchSettings,
) -> Result<SearchQuery, ValidationError> {
    let radius = clean(params.radius.as_ref())
        .map(|raw| parse_radius(&raw))
        .transpose()?;

    let lat_lng = clean(params.lat_lng.as_ref())
        .map(|raw| parse_lat_lng(&raw))
        .transpose()?;

    let mut location_text = clean(params.location.as_ref()).map(|s| collapse_whitespace(&s));
    if lat_lng.is_some() && location_text.is_some() {
        tracing::debug!("lat_lng supplied; ignoring free-text location");
        location_text = None;
    }

    let sort = clean(params.sort.as_ref()).and_then(|raw| {
        let parsed = SortMode::parse(&raw);
        if parsed.is_none() {
            tracing::debug!(sort = %raw, "unrecognised sort mode; using default ordering");
        }
        parsed
    });

    let page = parse_page_value(
        clean(params.page.as_ref()).as_deref(),
        "page",
        1,
        usize::MAX,
    )?;
    let per_page = parse_page_value(
        clean(params.per_page.as_ref()).as_deref(),
        "per_page",
        settings.default_per_page,
        settings.max_per_page,
    )?;

    let query = SearchQuery {
        keyword: clean(params.keyword.as_ref()),
        location_text,
        lat_lng,
        radius,
        category: clean(params.category.as_ref()),
        org_name: clean(params.org_name.as_ref()),
        language: clean(params.language.as_ref()),
        domain: clean(params.domain.as_ref()),
        email: clean(params.email.as_ref()),
        sort,
        page,
        per_page,
    };

    settings.required_filter.check(&query)?;

    Ok(query)
}

fn clean(raw: Option<&String>) -> Option<String> {
    raw.map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_radius(raw: &str) -> Result<f64, ValidationError> {
    let radius = raw
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidRadius)?;
    if radius.is_finite() && (MIN_RADIUS_MILES..=MAX_RADIUS_MILES).contains(&radius) {
        Ok(radius)
    } else {
        Err(ValidationError::InvalidRadius)
    }
}

fn parse_lat_lng(raw: &str) -> Result<Coordinates, ValidationError> {
    let parts: Vec<&str> = raw.split(',').collect();
    let [lat, lng] = parts.as_slice() else {
        return Err(ValidationError::InvalidLatLng);
    };

    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidLatLng)?;
    let lng = lng
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidLatLng)?;

    let coords = Coordinates::new(lat, lng);
    if coords.is_valid() {
        Ok(coords)
    } else {
        Err(ValidationError::InvalidLatLng)
    }
}

fn parse_page_value(
    raw: Option<&str>,
    field: &'static str,
    default: usize,
    max: usize,
) -> Result<usize, ValidationError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let value = raw
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidPage { field })?;
    if value < 1 {
        return Ok(1);
    }

    Ok(usize::try_from(value).map_or(max, |v| v.min(max)))
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
