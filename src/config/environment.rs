// ABOUTME: Aggregate application configuration loaded from environment variables
// ABOUTME: Provides the shared env parsing helpers used by every config section
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use super::{LogMealConfig, LookupConfig, NutritionixConfig, SearchCacheConfig};
use crate::logging::LoggingConfig;
use std::env;
use std::str::FromStr;

/// Complete configuration for the lookup engine and its binaries
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Text-search vendor settings
    pub nutritionix: NutritionixConfig,
    /// Photo-recognition vendor settings
    pub logmeal: LogMealConfig,
    /// Search cache bounds
    pub search_cache: SearchCacheConfig,
    /// Debounce and recognition settings
    pub lookup: LookupConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load every configuration section from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            nutritionix: NutritionixConfig::from_env(),
            logmeal: LogMealConfig::from_env(),
            search_cache: SearchCacheConfig::from_env(),
            lookup: LookupConfig::from_env(),
            logging: LoggingConfig::from_env(),
        }
    }
}

/// Get environment variable or default value
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get a non-empty environment variable
pub(crate) fn env_var_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Parse an environment variable, falling back to `default` when unset or invalid
pub(crate) fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
