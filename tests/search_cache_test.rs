// ABOUTME: Integration tests for the in-memory search cache
// ABOUTME: Tests replacement semantics, LRU eviction, and TTL expiration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use calorie_tracker::cache::{InMemorySearchCache, SearchCacheProvider};
use calorie_tracker::config::SearchCacheConfig;
use calorie_tracker::models::FoodItem;
use std::time::Duration;

/// Helper: Create cache with custom bounds
fn create_test_cache(max_entries: usize, ttl: Option<Duration>) -> InMemorySearchCache {
    InMemorySearchCache::new(&SearchCacheConfig { max_entries, ttl })
}

fn items(name: &str) -> Vec<FoodItem> {
    vec![
        FoodItem::new(name, 100.0, 1.0, 2.0, 3.0),
        FoodItem::new(format!("{name} light"), 60.0, 1.0, 2.0, 1.0),
    ]
}

#[tokio::test]
async fn test_put_and_get() -> Result<()> {
    let cache = create_test_cache(10, None);

    assert_eq!(cache.get("rice").await, None);
    cache.put("rice", items("Rice")).await;

    assert_eq!(cache.get("rice").await, Some(items("Rice")));
    assert_eq!(cache.len().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_put_replaces_whole_entry() -> Result<()> {
    let cache = create_test_cache(10, None);

    cache.put("milk", items("Milk")).await;
    cache.put("milk", vec![FoodItem::new("Oat Milk", 120.0, 3.0, 16.0, 5.0)]).await;

    let stored = cache.get("milk").await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Oat Milk");
    assert_eq!(cache.len().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_lru_eviction_at_capacity() -> Result<()> {
    let cache = create_test_cache(2, None);

    cache.put("apple", items("Apple")).await;
    cache.put("banana", items("Banana")).await;

    // Touch "apple" so "banana" becomes least recently used
    assert!(cache.get("apple").await.is_some());
    cache.put("cherry", items("Cherry")).await;

    assert!(cache.get("apple").await.is_some());
    assert!(cache.get("banana").await.is_none());
    assert!(cache.get("cherry").await.is_some());
    assert_eq!(cache.len().await, 2);
    assert_eq!(cache.capacity().await, 2);
    Ok(())
}

#[tokio::test]
async fn test_entries_expire_after_ttl() -> Result<()> {
    let cache = create_test_cache(10, Some(Duration::from_millis(50)));

    cache.put("tofu", items("Tofu")).await;
    assert!(cache.get("tofu").await.is_some());

    tokio::time::sleep(Duration::from_millis(120)).await;

    assert_eq!(cache.get("tofu").await, None);
    assert!(cache.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_zero_capacity_uses_default() -> Result<()> {
    let cache = create_test_cache(0, None);
    assert_eq!(cache.capacity().await, 256);
    Ok(())
}

#[tokio::test]
async fn test_invalidate_and_clear() -> Result<()> {
    let cache = create_test_cache(10, None);
    cache.put("oats", items("Oats")).await;
    cache.put("kale", items("Kale")).await;

    cache.invalidate("oats").await;
    assert!(cache.get("oats").await.is_none());
    assert_eq!(cache.len().await, 1);

    cache.clear().await;
    assert!(cache.is_empty().await);
    Ok(())
}
