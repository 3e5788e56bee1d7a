//! HTTP client for a Nominatim-compatible geocoding API.
//!
//! One request per lookup: `GET {base}/search?q=..&format=json&limit=1&countrycodes=us`.
//! The first place in the response array wins; an empty array is "no match".

use std::time::Duration;

use async_trait::async_trait;
use ohana_core::{AppConfig, Coordinates};
use ohana_search::{Geocoder, ResolutionFailure};
use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::retry::retry_with_backoff;
use crate::types::Place;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";
const DEFAULT_USER_AGENT: &str = "ohana-search/0.1 (location-directory)";
const DEFAULT_MAX_RETRIES: u32 = 1;
const DEFAULT_BACKOFF_BASE_MS: u64 = 200;

/// Geocoding client.
///
/// Use [`GeocodeClient::new`] for the public Nominatim endpoint or
/// [`GeocodeClient::with_base_url`] to point at another provider or a mock
/// server in tests.
#[derive(Debug)]
pub struct GeocodeClient {
    client: Client,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl GeocodeClient {
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, GeocodeError> {
        Self::with_base_url(DEFAULT_BASE_URL, user_agent, timeout)
    }

    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash; `build_url` appends `search` after it.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
        })
    }

    /// Build a client from application config. `None` when no geocoder URL
    /// is configured.
    ///
    /// # Errors
    ///
    /// Same as [`GeocodeClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, GeocodeError> {
        let Some(base_url) = config.geocoder_url.as_deref() else {
            return Ok(None);
        };

        let user_agent = if config.geocoder_user_agent.trim().is_empty() {
            DEFAULT_USER_AGENT
        } else {
            config.geocoder_user_agent.as_str()
        };

        let client = Self::with_base_url(
            base_url,
            user_agent,
            Duration::from_millis(config.geocoder_timeout_ms),
        )?
        .with_retry(
            config.geocoder_max_retries,
            config.geocoder_retry_backoff_base_ms,
        );
        Ok(Some(client))
    }

    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Look up `text` and return the best match, if any.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure or non-2xx status, after
    ///   retries for transient failures.
    /// - [`GeocodeError::Deserialize`] if the body is not a place array.
    /// - [`GeocodeError::InvalidCoordinate`] if the best match has unusable
    ///   coordinates.
    pub async fn lookup(&self, text: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = self.build_url(text);
        let places: Vec<Place> = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.request_json(&url)
        })
        .await?;

        match places.first() {
            Some(place) => place.coordinates().map(Some),
            None => Ok(None),
        }
    }

    fn build_url(&self, text: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("search");
        }
        url.query_pairs_mut()
            .append_pair("q", text)
            .append_pair("format", "json")
            .append_pair("limit", "1")
            .append_pair("countrycodes", "us");
        url
    }

    async fn request_json(&self, url: &Url) -> Result<Vec<Place>, GeocodeError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl Geocoder for GeocodeClient {
    async fn geocode(&self, text: &str) -> Result<Option<Coordinates>, ResolutionFailure> {
        self.lookup(text)
            .await
            .map_err(|e| ResolutionFailure::new(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
