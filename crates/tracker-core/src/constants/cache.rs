// ABOUTME: Search cache constants for capacity and entry lifetime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

/// Default maximum number of cached queries
pub const DEFAULT_SEARCH_CACHE_MAX_ENTRIES: usize = 256;

/// Default lifetime of a cached search result (24 hours)
pub const DEFAULT_SEARCH_CACHE_TTL_SECS: u64 = 86_400;
