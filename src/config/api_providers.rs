// ABOUTME: External API provider configuration for the text-search and recognition vendors
// ABOUTME: Credentials come from the environment only and are redacted from Debug output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use super::environment::{env_parse_or, env_var_opt, env_var_or};
use crate::constants::endpoints;
use std::fmt;
use std::time::Duration;

const REDACTED: &str = "[REDACTED]";

/// Nutritionix instant-search configuration
#[derive(Clone)]
pub struct NutritionixConfig {
    /// Application id sent as `x-app-id`
    pub app_id: Option<String>,
    /// Application key sent as `x-app-key`
    pub app_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for NutritionixConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_key: None,
            base_url: endpoints::NUTRITIONIX_BASE_URL.to_owned(),
            timeout: Duration::from_secs(endpoints::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl NutritionixConfig {
    /// Load Nutritionix configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            app_id: env_var_opt("NUTRITIONIX_APP_ID"),
            app_key: env_var_opt("NUTRITIONIX_APP_KEY"),
            base_url: env_var_or("NUTRITIONIX_BASE_URL", endpoints::NUTRITIONIX_BASE_URL),
            timeout: Duration::from_secs(env_parse_or(
                "NUTRITIONIX_TIMEOUT_SECS",
                endpoints::DEFAULT_TIMEOUT_SECS,
            )),
        }
    }

    /// Whether both credentials are present
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.app_id.is_some() && self.app_key.is_some()
    }
}

impl fmt::Debug for NutritionixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionixConfig")
            .field("app_id", &self.app_id.as_ref().map(|_| REDACTED))
            .field("app_key", &self.app_key.as_ref().map(|_| REDACTED))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// `LogMeal` photo-recognition configuration
#[derive(Clone)]
pub struct LogMealConfig {
    /// Bearer token
    pub api_token: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Path of the primary (dish) recognition endpoint
    pub primary_path: String,
    /// Path of the secondary (combo) recognition endpoint
    pub secondary_path: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for LogMealConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: endpoints::LOGMEAL_BASE_URL.to_owned(),
            primary_path: endpoints::LOGMEAL_PRIMARY_PATH.to_owned(),
            secondary_path: endpoints::LOGMEAL_SECONDARY_PATH.to_owned(),
            timeout: Duration::from_secs(endpoints::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LogMealConfig {
    /// Load `LogMeal` configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_token: env_var_opt("LOGMEAL_API_TOKEN"),
            base_url: env_var_or("LOGMEAL_BASE_URL", endpoints::LOGMEAL_BASE_URL),
            primary_path: env_var_or("LOGMEAL_PRIMARY_PATH", endpoints::LOGMEAL_PRIMARY_PATH),
            secondary_path: env_var_or(
                "LOGMEAL_SECONDARY_PATH",
                endpoints::LOGMEAL_SECONDARY_PATH,
            ),
            timeout: Duration::from_secs(env_parse_or(
                "LOGMEAL_TIMEOUT_SECS",
                endpoints::DEFAULT_TIMEOUT_SECS,
            )),
        }
    }
}

impl fmt::Debug for LogMealConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogMealConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| REDACTED))
            .field("base_url", &self.base_url)
            .field("primary_path", &self.primary_path)
            .field("secondary_path", &self.secondary_path)
            .field("timeout", &self.timeout)
            .finish()
    }
}
