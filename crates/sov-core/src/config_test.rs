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

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("GOOGLE_API_KEY", "test-key");
    m.insert("GOOGLE_CX", "test-cx");
    m
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_API_KEY"),
        "expected MissingEnvVar(GOOGLE_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_cx() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("GOOGLE_API_KEY", "test-key");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_CX"),
        "expected MissingEnvVar(GOOGLE_CX), got: {result:?}"
    );
}

#[test]
fn blank_api_key_counts_as_missing() {
    let mut map = full_env();
    map.insert("GOOGLE_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_API_KEY"),
        "expected MissingEnvVar(GOOGLE_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.google_api_key, "test-key");
    assert_eq!(cfg.google_cx, "test-cx");
    assert_eq!(cfg.brands_path, PathBuf::from("./config/brands.yaml"));
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.platform, "Google");
    assert_eq!(cfg.max_concurrent_keywords, 1);
    assert_eq!(cfg.search.results_per_query, 10);
    assert_eq!(cfg.search.request_timeout_secs, 30);
    assert_eq!(cfg.search.max_retries, 2);
    assert_eq!(cfg.search.retry_backoff_base_ms, 500);
}

#[test]
fn overrides_are_applied() {
    let mut map = full_env();
    map.insert("SOV_BRANDS_PATH", "/etc/sov/brands.yaml");
    map.insert("SOV_PLATFORM", "Bing");
    map.insert("SOV_MAX_CONCURRENT_KEYWORDS", "4");
    map.insert("SOV_SEARCH_RESULTS_PER_QUERY", "5");
    map.insert("SOV_SEARCH_MAX_RETRIES", "0");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.brands_path, PathBuf::from("/etc/sov/brands.yaml"));
    assert_eq!(cfg.platform, "Bing");
    assert_eq!(cfg.max_concurrent_keywords, 4);
    assert_eq!(cfg.search.results_per_query, 5);
    assert_eq!(cfg.search.max_retries, 0);
}

#[test]
fn results_per_query_above_page_cap_is_rejected() {
    let mut map = full_env();
    map.insert("SOV_SEARCH_RESULTS_PER_QUERY", "20");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOV_SEARCH_RESULTS_PER_QUERY"),
        "expected InvalidEnvVar(SOV_SEARCH_RESULTS_PER_QUERY), got: {result:?}"
    );
}

#[test]
fn zero_concurrency_is_rejected() {
    let mut map = full_env();
    map.insert("SOV_MAX_CONCURRENT_KEYWORDS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOV_MAX_CONCURRENT_KEYWORDS"),
        "expected InvalidEnvVar(SOV_MAX_CONCURRENT_KEYWORDS), got: {result:?}"
    );
}

#[test]
fn non_numeric_timeout_is_rejected() {
    let mut map = full_env();
    map.insert("SOV_SEARCH_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOV_SEARCH_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SOV_SEARCH_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("test-key"), "api key leaked: {debug}");
    assert!(debug.contains("[redacted]"));
}
