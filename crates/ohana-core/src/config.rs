use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_EXCLUDED_DOMAINS: &str = "gmail.com,aol.com,hotmail.com,yahoo.com,sbcglobal.net,\
outlook.com,icloud.com,comcast.net,msn.com,live.com,me.com,att.net";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup, without `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        match or_default(var, default).trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(invalid(var, format!("expected a boolean, got '{other}'"))),
        }
    };

    let env = parse_environment(&or_default("OHANA_ENV", "development"))?;

    let bind_addr = parse_addr("OHANA_BIND_ADDR", "0.0.0.0:8080")?;
    let log_level = or_default("OHANA_LOG_LEVEL", "info");
    let corpus_path = PathBuf::from(or_default("OHANA_CORPUS_PATH", "./config/locations.yaml"));

    let default_per_page = parse_usize("OHANA_DEFAULT_PER_PAGE", "30")?;
    let max_per_page = parse_usize("OHANA_MAX_PER_PAGE", "100")?;
    if default_per_page == 0 {
        return Err(invalid(
            "OHANA_DEFAULT_PER_PAGE",
            "must be at least 1".to_string(),
        ));
    }
    if default_per_page > max_per_page {
        return Err(invalid(
            "OHANA_DEFAULT_PER_PAGE",
            format!("({default_per_page}) must not exceed OHANA_MAX_PER_PAGE ({max_per_page})"),
        ));
    }

    let excluded_domains = parse_domain_list(&or_default(
        "OHANA_EXCLUDED_DOMAINS",
        DEFAULT_EXCLUDED_DOMAINS,
    ));

    let default_radius_miles = match lookup("OHANA_DEFAULT_RADIUS_MILES") {
        Ok(raw) if !raw.trim().is_empty() => {
            let radius = raw
                .trim()
                .parse::<f64>()
                .map_err(|e| invalid("OHANA_DEFAULT_RADIUS_MILES", e.to_string()))?;
            if !(0.1..=50.0).contains(&radius) {
                return Err(invalid(
                    "OHANA_DEFAULT_RADIUS_MILES",
                    format!("{radius} is outside 0.1..=50"),
                ));
            }
            Some(radius)
        }
        _ => None,
    };

    let require_search_filter = parse_bool("OHANA_REQUIRE_SEARCH_FILTER", "false")?;

    let geocoder_url = lookup("OHANA_GEOCODER_URL")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let geocoder_timeout_ms = parse_u64("OHANA_GEOCODER_TIMEOUT_MS", "2000")?;
    let geocoder_user_agent = or_default(
        "OHANA_GEOCODER_USER_AGENT",
        "ohana-search/0.1 (location-directory)",
    );
    let geocoder_max_retries = parse_u32("OHANA_GEOCODER_MAX_RETRIES", "1")?;
    let geocoder_retry_backoff_base_ms = parse_u64("OHANA_GEOCODER_RETRY_BACKOFF_BASE_MS", "200")?;

    let rate_limit_per_minute = parse_usize("OHANA_RATE_LIMIT_PER_MINUTE", "120")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        corpus_path,
        default_per_page,
        max_per_page,
        excluded_domains,
        default_radius_miles,
        require_search_filter,
        geocoder_url,
        geocoder_timeout_ms,
        geocoder_user_agent,
        geocoder_max_retries,
        geocoder_retry_backoff_base_ms,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "OHANA_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Split a comma-separated domain list, lowercasing and dropping blanks.
fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|d| d.trim().to_ascii_lowercase())
        .filter(|d| !d.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
