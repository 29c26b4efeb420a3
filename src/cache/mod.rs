// ABOUTME: Search cache abstraction memoizing normalized results by query key
// ABOUTME: Pluggable backend trait so the orchestrator can take an in-memory store or a test double
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

/// In-memory LRU search cache
pub mod memory;

use crate::models::FoodItem;

pub use memory::InMemorySearchCache;

/// Search cache provider trait
///
/// Keys are normalized query strings (see [`crate::models::SearchQuery::key`]).
/// Entries are replaced wholesale by `put`; a stored list is never mutated.
///
/// # Examples
///
/// ```rust,no_run
/// use calorie_tracker::cache::{InMemorySearchCache, SearchCacheProvider};
/// use calorie_tracker::config::SearchCacheConfig;
/// use calorie_tracker::models::FoodItem;
///
/// # async fn example() {
/// let cache = InMemorySearchCache::new(&SearchCacheConfig::default());
/// cache
///     .put("apple", vec![FoodItem::new("Apple", 95.0, 0.5, 25.0, 0.3)])
///     .await;
///
/// if let Some(items) = cache.get("apple").await {
///     println!("cache hit with {} items", items.len());
/// }
/// # }
/// ```
#[async_trait::async_trait]
pub trait SearchCacheProvider: Send + Sync {
    /// Look up the results stored for `key`
    ///
    /// Returns `None` on a miss or when the entry has expired.
    async fn get(&self, key: &str) -> Option<Vec<FoodItem>>;

    /// Store `results` under `key`, replacing any prior entry
    async fn put(&self, key: &str, results: Vec<FoodItem>);

    /// Remove a single entry
    async fn invalidate(&self, key: &str);

    /// Number of live entries
    async fn len(&self) -> usize;

    /// Whether the cache holds no entries
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Remove every entry
    async fn clear(&self);
}
