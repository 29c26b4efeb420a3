// ABOUTME: Query, result, and recognition limits for the lookup pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

/// Quiescence window before a typed query is dispatched
pub const DEBOUNCE_WINDOW_MS: u64 = 300;

/// Minimum trimmed query length (in characters) that triggers a search
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum items returned from the local dataset
pub const LOCAL_RESULT_LIMIT: usize = 10;

/// Maximum items taken from a remote text-search response
pub const REMOTE_RESULT_LIMIT: usize = 8;

/// Confidence assigned when a recognizer omits it
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Name assigned to a recognized item with no name field
pub const UNKNOWN_FOOD_NAME: &str = "Unknown Food";

/// Brand assigned to text-search items with no brand
pub const GENERIC_BRAND: &str = "Generic";

/// Serving unit assigned to text-search items with no unit
pub const DEFAULT_SERVING_UNIT: &str = "100g";

/// Fewest items returned by the simulated recognizer
pub const SIMULATED_MIN_ITEMS: usize = 2;

/// Most items returned by the simulated recognizer
pub const SIMULATED_MAX_ITEMS: usize = 3;
