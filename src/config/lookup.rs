// ABOUTME: Lookup pipeline configuration for debounce timing and simulated recognition
// ABOUTME: A fixed simulation seed makes the offline recognition path reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use super::environment::env_parse_or;
use crate::constants::lookup;
use std::env;
use std::time::Duration;

/// Debounce and recognition fallback configuration
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Quiescence window before a typed query is dispatched
    pub debounce_window: Duration,
    /// Minimum trimmed query length that triggers a search
    pub min_query_len: usize,
    /// Seed for the simulated recognizer; `None` seeds from entropy
    pub simulation_seed: Option<u64>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(lookup::DEBOUNCE_WINDOW_MS),
            min_query_len: lookup::MIN_QUERY_LEN,
            simulation_seed: None,
        }
    }
}

impl LookupConfig {
    /// Load lookup configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            debounce_window: Duration::from_millis(env_parse_or(
                "SEARCH_DEBOUNCE_MS",
                lookup::DEBOUNCE_WINDOW_MS,
            )),
            min_query_len: env_parse_or("SEARCH_MIN_QUERY_LEN", lookup::MIN_QUERY_LEN),
            simulation_seed: env::var("SIMULATION_SEED")
                .ok()
                .and_then(|s| s.trim().parse().ok()),
        }
    }
}
