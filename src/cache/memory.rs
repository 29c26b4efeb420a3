// ABOUTME: In-memory search cache with LRU eviction and optional TTL expiry
// ABOUTME: Bounds memory use with a fixed capacity; expired entries read as misses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use super::SearchCacheProvider;
use crate::config::SearchCacheConfig;
use crate::models::FoodItem;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cached result list with its expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    results: Vec<FoodItem>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(results: Vec<FoodItem>, ttl: Option<Duration>) -> Self {
        Self {
            results,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

/// In-memory search cache with LRU eviction
///
/// `LruCache::get` updates recency, so reads take the write lock. Recency is the
/// only state a read changes; the stored lists themselves are never mutated.
#[derive(Clone)]
pub struct InMemorySearchCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
    ttl: Option<Duration>,
}

impl InMemorySearchCache {
    /// Capacity used when the configuration asks for zero entries
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache bounded by `config.max_entries`
    #[must_use]
    pub fn new(config: &SearchCacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl: config.ttl,
        }
    }

    /// Maximum number of entries held before eviction
    pub async fn capacity(&self) -> usize {
        self.store.read().await.cap().get()
    }
}

impl Default for InMemorySearchCache {
    fn default() -> Self {
        Self::new(&SearchCacheConfig::default())
    }
}

#[async_trait::async_trait]
impl SearchCacheProvider for InMemorySearchCache {
    async fn get(&self, key: &str) -> Option<Vec<FoodItem>> {
        let mut store = self.store.write().await;

        // LruCache::get is mutable (updates access order for LRU)
        if let Some(entry) = store.get(key) {
            if entry.is_expired() {
                store.pop(key);
                drop(store);
                tracing::debug!(key, "Dropped expired search cache entry");
                return None;
            }
            return Some(entry.results.clone());
        }

        None
    }

    async fn put(&self, key: &str, results: Vec<FoodItem>) {
        let entry = CacheEntry::new(results, self.ttl);

        // LruCache evicts the least recently used entry on push when full
        let evicted = self.store.write().await.push(key.to_owned(), entry);
        if let Some((evicted_key, _)) = evicted {
            if evicted_key != key {
                tracing::debug!(evicted = %evicted_key, "Search cache full, evicted entry");
            }
        }
    }

    async fn invalidate(&self, key: &str) {
        self.store.write().await.pop(key);
    }

    async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    async fn clear(&self) {
        self.store.write().await.clear();
    }
}
