// ABOUTME: Criterion benchmarks for local lookup and payload normalization
// ABOUTME: Measures dataset filtering, estimator rules, and vendor payload normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

//! Criterion benchmarks for the CPU-bound parts of the lookup pipeline.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use calorie_tracker::lookup::{
    normalize_recognition_payload, normalize_search_payload, LocalFoodDataset, NutrientEstimator,
};
use calorie_tracker::models::NutrientField;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};

fn search_payload(items: usize) -> Value {
    let common: Vec<Value> = (0..items)
        .map(|i| {
            json!({
                "food_name": format!("food {i}"),
                "serving_unit": "cup",
                "full_nutrients": [
                    { "attr_id": 208, "value": 94.6 },
                    { "attr_id": 203, "value": 0.52 },
                    { "attr_id": 205, "value": 25.13 },
                    { "attr_id": 204, "value": 0.31 },
                ],
            })
        })
        .collect();
    json!({ "common": common })
}

fn bench_dataset_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_filter");

    for term in ["apple", "e", "nuts & seeds", "pizza"] {
        group.bench_with_input(BenchmarkId::from_parameter(term), term, |b, term| {
            b.iter(|| LocalFoodDataset.filter(black_box(term)));
        });
    }

    group.finish();
}

fn bench_estimator(c: &mut Criterion) {
    c.bench_function("estimator_all_fields", |b| {
        b.iter(|| {
            NutrientField::ALL
                .map(|field| NutrientEstimator.estimate(black_box("Grilled Chicken Salad"), field))
        });
    });
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for items in [8_usize, 50] {
        let payload = search_payload(items);
        group.bench_with_input(BenchmarkId::new("search", items), &payload, |b, payload| {
            b.iter(|| normalize_search_payload("bench", black_box(payload)).unwrap());
        });
    }

    let recognition = json!({
        "recognition_results": [
            { "name": "Grilled Chicken", "confidence": 0.91 },
            { "food_name": "Rice", "nutrition": { "calories": 210, "carbs": 44.6 } },
            { "dish_name": "Salad", "confidence_score": 0.7, "calories": 35 },
        ]
    });
    group.bench_function("recognition", |b| {
        b.iter(|| normalize_recognition_payload("bench", black_box(&recognition)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_dataset_filter, bench_estimator, bench_normalize);
criterion_main!(benches);
