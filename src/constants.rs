// ABOUTME: Application constants for the lookup engine
// ABOUTME: Re-exports core constants and adds service identifiers used in logs and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

pub use tracker_core::constants::{cache, lookup, nutrients, targets};

/// Service names used in structured logs and error messages
pub mod service_names {
    /// This crate, used as the default logging service name
    pub const CALORIE_TRACKER: &str = "calorie-tracker";

    /// Text-search vendor
    pub const NUTRITIONIX: &str = "Nutritionix";

    /// Photo-recognition vendor
    pub const LOGMEAL: &str = "LogMeal";
}

/// Vendor endpoint defaults
pub mod endpoints {
    /// Text-search API base URL
    pub const NUTRITIONIX_BASE_URL: &str = "https://trackapi.nutritionix.com";

    /// Instant search path
    pub const NUTRITIONIX_SEARCH_PATH: &str = "/v2/search/instant";

    /// Recognition API base URL
    pub const LOGMEAL_BASE_URL: &str = "https://api.logmeal.es";

    /// Primary (single dish) recognition path
    pub const LOGMEAL_PRIMARY_PATH: &str = "/v2/recognition/dish";

    /// Secondary (combo) recognition path
    pub const LOGMEAL_SECONDARY_PATH: &str = "/v2/recognition/combo";

    /// Default request timeout for vendor calls
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
}
