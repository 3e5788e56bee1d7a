use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "OHANA_ENV"));
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.corpus_path.to_string_lossy(), "./config/locations.yaml");
    assert_eq!(cfg.default_per_page, 30);
    assert_eq!(cfg.max_per_page, 100);
    assert!(cfg.excluded_domains.contains(&"gmail.com".to_string()));
    assert!(cfg.excluded_domains.contains(&"sbcglobal.net".to_string()));
    assert!(cfg.default_radius_miles.is_none());
    assert!(!cfg.require_search_filter);
    assert!(cfg.geocoder_url.is_none());
    assert_eq!(cfg.geocoder_timeout_ms, 2000);
    assert_eq!(
        cfg.geocoder_user_agent,
        "ohana-search/0.1 (location-directory)"
    );
    assert_eq!(cfg.geocoder_max_retries, 1);
    assert_eq!(cfg.geocoder_retry_backoff_base_ms, 200);
    assert_eq!(cfg.rate_limit_per_minute, 120);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("OHANA_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OHANA_BIND_ADDR"),
        "expected InvalidEnvVar(OHANA_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_invalid_ohana_env() {
    let mut map = HashMap::new();
    map.insert("OHANA_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OHANA_ENV"),
        "expected InvalidEnvVar(OHANA_ENV), got: {result:?}"
    );
}

#[test]
fn default_per_page_override() {
    let mut map = HashMap::new();
    map.insert("OHANA_DEFAULT_PER_PAGE", "10");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_per_page, 10);
}

#[test]
fn default_per_page_invalid() {
    let mut map = HashMap::new();
    map.insert("OHANA_DEFAULT_PER_PAGE", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OHANA_DEFAULT_PER_PAGE"),
        "expected InvalidEnvVar(OHANA_DEFAULT_PER_PAGE), got: {result:?}"
    );
}

#[test]
fn default_per_page_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("OHANA_DEFAULT_PER_PAGE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OHANA_DEFAULT_PER_PAGE"),
        "got: {result:?}"
    );
}

#[test]
fn default_per_page_above_max_is_rejected() {
    let mut map = HashMap::new();
    map.insert("OHANA_DEFAULT_PER_PAGE", "50");
    map.insert("OHANA_MAX_PER_PAGE", "20");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OHANA_DEFAULT_PER_PAGE"),
        "got: {result:?}"
    );
}

#[test]
fn excluded_domains_override_is_normalized() {
    let mut map = HashMap::new();
    map.insert("OHANA_EXCLUDED_DOMAINS", " Gmail.com , ,example.net");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.excluded_domains, vec!["gmail.com", "example.net"]);
}

#[test]
fn default_radius_override() {
    let mut map = HashMap::new();
    map.insert("OHANA_DEFAULT_RADIUS_MILES", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_radius_miles, Some(5.0));
}

#[test]
fn default_radius_out_of_range_is_rejected() {
    let mut map = HashMap::new();
    map.insert("OHANA_DEFAULT_RADIUS_MILES", "75");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OHANA_DEFAULT_RADIUS_MILES"),
        "got: {result:?}"
    );
}

#[test]
fn blank_default_radius_is_ignored() {
    let mut map = HashMap::new();
    map.insert("OHANA_DEFAULT_RADIUS_MILES", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.default_radius_miles.is_none());
}

#[test]
fn require_search_filter_accepts_truthy_values() {
    for raw in ["true", "1", "YES", "on"] {
        let mut map = HashMap::new();
        map.insert("OHANA_REQUIRE_SEARCH_FILTER", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.require_search_filter, "{raw} should enable the policy");
    }
}

#[test]
fn require_search_filter_invalid() {
    let mut map = HashMap::new();
    map.insert("OHANA_REQUIRE_SEARCH_FILTER", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OHANA_REQUIRE_SEARCH_FILTER"),
        "got: {result:?}"
    );
}

#[test]
fn geocoder_url_blank_means_disabled() {
    let mut map = HashMap::new();
    map.insert("OHANA_GEOCODER_URL", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.geocoder_url.is_none());
}

#[test]
fn geocoder_url_is_redacted_in_debug() {
    let mut map = HashMap::new();
    map.insert("OHANA_GEOCODER_URL", "https://geo.example.com/?key=secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("secret"), "debug output leaked url: {debug}");
    assert!(debug.contains("[redacted]"));
}

#[test]
fn geocoder_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("OHANA_GEOCODER_TIMEOUT_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OHANA_GEOCODER_TIMEOUT_MS"),
        "got: {result:?}"
    );
}

#[test]
fn geocoder_retry_overrides() {
    let mut map = HashMap::new();
    map.insert("OHANA_GEOCODER_MAX_RETRIES", "3");
    map.insert("OHANA_GEOCODER_RETRY_BACKOFF_BASE_MS", "50");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.geocoder_max_retries, 3);
    assert_eq!(cfg.geocoder_retry_backoff_base_ms, 50);
}
