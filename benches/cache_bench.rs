// ABOUTME: Criterion benchmarks for the in-memory search cache
// ABOUTME: Measures put/get latency for hits, misses, and eviction at capacity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

//! Criterion benchmarks for search cache operations.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use calorie_tracker::cache::{InMemorySearchCache, SearchCacheProvider};
use calorie_tracker::config::SearchCacheConfig;
use calorie_tracker::models::FoodItem;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;
use tokio::runtime::Runtime;

/// A result list the size of a full remote answer
fn remote_results(seed: usize) -> Vec<FoodItem> {
    (0..8)
        .map(|i| {
            FoodItem::new(format!("food {seed}-{i}"), 120.0, 4.2, 18.7, 3.1)
                .with_brand("Generic")
                .with_serving_unit("cup")
        })
        .collect()
}

fn test_cache(max_entries: usize) -> InMemorySearchCache {
    InMemorySearchCache::new(&SearchCacheConfig {
        max_entries,
        ttl: Some(Duration::from_secs(3600)),
    })
}

/// Benchmark cache put, below capacity and with eviction on every insert
fn bench_cache_put(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("search_cache_put");

    for capacity in [256_usize, 16] {
        let cache = test_cache(capacity);
        let results = remote_results(0);

        group.bench_with_input(
            BenchmarkId::new("memory", capacity),
            &results,
            |b, results| {
                let mut key_index = 0_usize;
                b.iter(|| {
                    let key = format!("query {key_index}");
                    key_index = key_index.wrapping_add(1);
                    rt.block_on(async { cache.put(black_box(&key), results.clone()).await });
                });
            },
        );
    }

    group.finish();
}

/// Benchmark cache get operations (hits vs misses)
fn bench_cache_get(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("search_cache_get");
    let cache = test_cache(256);

    rt.block_on(async {
        for i in 0..256 {
            cache.put(&format!("query {i}"), remote_results(i)).await;
        }
    });

    group.bench_function("memory_hit", |b| {
        let mut key_index = 0_usize;
        b.iter(|| {
            let key = format!("query {}", key_index % 256);
            key_index = key_index.wrapping_add(1);
            rt.block_on(async { black_box(cache.get(black_box(&key)).await) });
        });
    });

    group.bench_function("memory_miss", |b| {
        b.iter(|| rt.block_on(async { black_box(cache.get(black_box("not cached")).await) }));
    });

    group.finish();
}

criterion_group!(benches, bench_cache_put, bench_cache_get);
criterion_main!(benches);
