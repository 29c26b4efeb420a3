// ABOUTME: Search cache configuration for capacity and entry lifetime
// ABOUTME: Bounds the memoized text-search results with LRU eviction and optional expiry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use super::environment::env_parse_or;
use crate::constants::cache;
use std::time::Duration;

/// Search cache configuration
#[derive(Debug, Clone)]
pub struct SearchCacheConfig {
    /// Maximum number of cached queries before least-recently-used eviction
    pub max_entries: usize,
    /// Entry lifetime; `None` keeps entries until evicted
    pub ttl: Option<Duration>,
}

impl Default for SearchCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: cache::DEFAULT_SEARCH_CACHE_MAX_ENTRIES,
            ttl: Some(Duration::from_secs(cache::DEFAULT_SEARCH_CACHE_TTL_SECS)),
        }
    }
}

impl SearchCacheConfig {
    /// Load search cache configuration from environment
    ///
    /// `SEARCH_CACHE_TTL_SECS=0` disables expiry.
    #[must_use]
    pub fn from_env() -> Self {
        let ttl_secs = env_parse_or(
            "SEARCH_CACHE_TTL_SECS",
            cache::DEFAULT_SEARCH_CACHE_TTL_SECS,
        );
        Self {
            max_entries: env_parse_or(
                "SEARCH_CACHE_MAX_ENTRIES",
                cache::DEFAULT_SEARCH_CACHE_MAX_ENTRIES,
            ),
            ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
        }
    }
}
