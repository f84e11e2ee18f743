use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::{AppConfig, SearchSettings};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let google_api_key = require("GOOGLE_API_KEY")?;
    let google_cx = require("GOOGLE_CX")?;

    let brands_path = PathBuf::from(or_default("SOV_BRANDS_PATH", "./config/brands.yaml"));
    let log_level = or_default("SOV_LOG_LEVEL", "info");
    let platform = or_default("SOV_PLATFORM", "Google");

    let results_per_query: u8 = parse_var(&or_default, "SOV_SEARCH_RESULTS_PER_QUERY", "10")?;
    if !(1..=10).contains(&results_per_query) {
        return Err(ConfigError::InvalidEnvVar {
            var: "SOV_SEARCH_RESULTS_PER_QUERY".to_string(),
            reason: format!("{results_per_query} is outside 1..=10"),
        });
    }

    let max_concurrent_keywords: usize =
        parse_var(&or_default, "SOV_MAX_CONCURRENT_KEYWORDS", "1")?;
    if max_concurrent_keywords == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SOV_MAX_CONCURRENT_KEYWORDS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let search = SearchSettings {
        results_per_query,
        request_timeout_secs: parse_var(&or_default, "SOV_SEARCH_TIMEOUT_SECS", "30")?,
        max_retries: parse_var(&or_default, "SOV_SEARCH_MAX_RETRIES", "2")?,
        retry_backoff_base_ms: parse_var(&or_default, "SOV_SEARCH_RETRY_BACKOFF_BASE_MS", "500")?,
    };

    Ok(AppConfig {
        google_api_key,
        google_cx,
        brands_path,
        log_level,
        platform,
        max_concurrent_keywords,
        search,
    })
}

fn parse_var<T, D>(or_default: &D, var: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    D: Fn(&str, &str) -> String,
{
    let raw = or_default(var, default);
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
