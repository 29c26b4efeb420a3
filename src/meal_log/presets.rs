// ABOUTME: Quick-add preset foods selectable by a short keyword
// ABOUTME: Values come from the local reference dataset so both stay in agreement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use crate::lookup::LocalFoodDataset;
use crate::models::FoodItem;

/// Preset keywords with the dataset food each one adds
const PRESETS: [(&str, &str); 6] = [
    ("apple", "Apple"),
    ("banana", "Banana"),
    ("chicken", "Chicken Breast"),
    ("rice", "White Rice"),
    ("salmon", "Salmon"),
    ("eggs", "Eggs (2)"),
];

/// Keywords accepted by [`quick_food`], in display order
#[must_use]
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(keyword, _)| *keyword)
}

/// Food for a preset keyword (case-insensitive), or `None` if unknown
#[must_use]
pub fn quick_food(preset: &str) -> Option<FoodItem> {
    let preset = preset.trim().to_lowercase();
    PRESETS
        .iter()
        .find(|(keyword, _)| *keyword == preset)
        .and_then(|(_, food_name)| LocalFoodDataset.find(food_name))
}
