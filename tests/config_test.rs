// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Serialized because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use calorie_tracker::config::{AppConfig, LogMealConfig, LookupConfig, NutritionixConfig, SearchCacheConfig};
use calorie_tracker::logging::LogFormat;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: [&str; 13] = [
    "NUTRITIONIX_APP_ID",
    "NUTRITIONIX_APP_KEY",
    "NUTRITIONIX_BASE_URL",
    "NUTRITIONIX_TIMEOUT_SECS",
    "LOGMEAL_API_TOKEN",
    "LOGMEAL_BASE_URL",
    "LOGMEAL_PRIMARY_PATH",
    "SEARCH_CACHE_MAX_ENTRIES",
    "SEARCH_CACHE_TTL_SECS",
    "SEARCH_DEBOUNCE_MS",
    "SEARCH_MIN_QUERY_LEN",
    "SIMULATION_SEED",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env();

    assert!(!config.nutritionix.has_credentials());
    assert_eq!(config.nutritionix.base_url, "https://trackapi.nutritionix.com");
    assert!(config.logmeal.api_token.is_none());
    assert_eq!(config.logmeal.primary_path, "/v2/recognition/dish");
    assert_eq!(config.logmeal.secondary_path, "/v2/recognition/combo");
    assert_eq!(config.search_cache.max_entries, 256);
    assert_eq!(config.search_cache.ttl, Some(Duration::from_secs(86_400)));
    assert_eq!(config.lookup.debounce_window, Duration::from_millis(300));
    assert_eq!(config.lookup.min_query_len, 2);
    assert_eq!(config.lookup.simulation_seed, None);
    assert_eq!(config.logging.format, LogFormat::Compact);
}

#[test]
#[serial]
fn test_values_read_from_environment() {
    clear_env();
    env::set_var("NUTRITIONIX_APP_ID", "app-id");
    env::set_var("NUTRITIONIX_APP_KEY", " app-key ");
    env::set_var("NUTRITIONIX_TIMEOUT_SECS", "4");
    env::set_var("LOGMEAL_API_TOKEN", "token");
    env::set_var("LOGMEAL_PRIMARY_PATH", "/v3/recognition/dish");
    env::set_var("SEARCH_CACHE_MAX_ENTRIES", "32");
    env::set_var("SEARCH_CACHE_TTL_SECS", "0");
    env::set_var("SEARCH_DEBOUNCE_MS", "150");
    env::set_var("SIMULATION_SEED", "42");
    env::set_var("LOG_FORMAT", "json");

    let nutritionix = NutritionixConfig::from_env();
    assert!(nutritionix.has_credentials());
    assert_eq!(nutritionix.app_key.as_deref(), Some("app-key"));
    assert_eq!(nutritionix.timeout, Duration::from_secs(4));

    let logmeal = LogMealConfig::from_env();
    assert_eq!(logmeal.api_token.as_deref(), Some("token"));
    assert_eq!(logmeal.primary_path, "/v3/recognition/dish");

    let cache = SearchCacheConfig::from_env();
    assert_eq!(cache.max_entries, 32);
    assert_eq!(cache.ttl, None, "zero TTL disables expiry");

    let lookup = LookupConfig::from_env();
    assert_eq!(lookup.debounce_window, Duration::from_millis(150));
    assert_eq!(lookup.simulation_seed, Some(42));

    assert_eq!(AppConfig::from_env().logging.format, LogFormat::Json);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_and_blank_values_fall_back() {
    clear_env();
    env::set_var("NUTRITIONIX_APP_ID", "   ");
    env::set_var("SEARCH_CACHE_MAX_ENTRIES", "lots");
    env::set_var("SEARCH_MIN_QUERY_LEN", "-1");
    env::set_var("SIMULATION_SEED", "abc");

    let config = AppConfig::from_env();
    assert!(config.nutritionix.app_id.is_none());
    assert_eq!(config.search_cache.max_entries, 256);
    assert_eq!(config.lookup.min_query_len, 2);
    assert_eq!(config.lookup.simulation_seed, None);
    clear_env();
}

#[test]
#[serial]
fn test_debug_output_redacts_credentials() {
    clear_env();
    env::set_var("NUTRITIONIX_APP_KEY", "super-secret-key");
    env::set_var("LOGMEAL_API_TOKEN", "super-secret-token");

    let rendered = format!("{:?}", AppConfig::from_env());
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[REDACTED]"));
    clear_env();
}
