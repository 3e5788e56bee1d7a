//! Injected engine configuration.

use std::collections::BTreeSet;
use std::time::Duration;

use ohana_core::AppConfig;

use crate::policy::RequiredFilterPolicy;

pub const MIN_RADIUS_MILES: f64 = 0.1;
pub const MAX_RADIUS_MILES: f64 = 50.0;

const DEFAULT_PER_PAGE: usize = 30;
const DEFAULT_MAX_PER_PAGE: usize = 100;
const DEFAULT_GEOCODE_TIMEOUT_MS: u64 = 2_000;

const DEFAULT_EXCLUDED_DOMAINS: &[&str] = &[
    "gmail.com",
    "aol.com",
    "hotmail.com",
    "yahoo.com",
    "sbcglobal.net",
    "outlook.com",
    "icloud.com",
    "comcast.net",
    "msn.com",
    "live.com",
    "me.com",
    "att.net",
];

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub default_per_page: usize,
    pub max_per_page: usize,
    /// Lowercased public mail-provider domains.
    pub excluded_domains: BTreeSet<String>,
    pub default_radius_miles: Option<f64>,
    pub geocode_timeout: Duration,
    pub required_filter: RequiredFilterPolicy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: DEFAULT_MAX_PER_PAGE,
            excluded_domains: DEFAULT_EXCLUDED_DOMAINS
                .iter()
                .map(|d| (*d).to_string())
                .collect(),
            default_radius_miles: None,
            geocode_timeout: Duration::from_millis(DEFAULT_GEOCODE_TIMEOUT_MS),
            required_filter: RequiredFilterPolicy::disabled(),
        }
    }
}

impl SearchSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            default_per_page: config.default_per_page.max(1),
            max_per_page: config.max_per_page.max(config.default_per_page).max(1),
            excluded_domains: config
                .excluded_domains
                .iter()
                .map(|d| d.to_ascii_lowercase())
                .collect(),
            default_radius_miles: config.default_radius_miles,
            geocode_timeout: Duration::from_millis(config.geocoder_timeout_ms),
            required_filter: if config.require_search_filter {
                RequiredFilterPolicy::enabled()
            } else {
                RequiredFilterPolicy::disabled()
            },
        }
    }

    #[must_use]
    pub fn is_excluded_domain(&self, domain: &str) -> bool {
        self.excluded_domains
            .contains(&domain.to_ascii_lowercase())
    }
}
