use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub corpus_path: PathBuf,
    pub default_per_page: usize,
    pub max_per_page: usize,
    /// Public mail-provider domains never used for domain matching.
    pub excluded_domains: Vec<String>,
    /// Radius applied when an anchor point exists but the request has none.
    pub default_radius_miles: Option<f64>,
    pub require_search_filter: bool,
    pub geocoder_url: Option<String>,
    pub geocoder_timeout_ms: u64,
    pub geocoder_user_agent: String,
    pub geocoder_max_retries: u32,
    pub geocoder_retry_backoff_base_ms: u64,
    pub rate_limit_per_minute: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("corpus_path", &self.corpus_path)
            .field("default_per_page", &self.default_per_page)
            .field("max_per_page", &self.max_per_page)
            .field("excluded_domains", &self.excluded_domains)
            .field("default_radius_miles", &self.default_radius_miles)
            .field("require_search_filter", &self.require_search_filter)
            .field(
                "geocoder_url",
                &self.geocoder_url.as_ref().map(|_| "[redacted]"),
            )
            .field("geocoder_timeout_ms", &self.geocoder_timeout_ms)
            .field("geocoder_user_agent", &self.geocoder_user_agent)
            .field("geocoder_max_retries", &self.geocoder_max_retries)
            .field(
                "geocoder_retry_backoff_base_ms",
                &self.geocoder_retry_backoff_base_ms,
            )
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .finish()
    }
}
