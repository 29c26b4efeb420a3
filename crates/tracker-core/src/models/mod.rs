// ABOUTME: Canonical data models shared across the lookup engine
// ABOUTME: Food items, recognition results, search queries, and meal summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

/// Food items and recognition results
pub mod food;
/// Meal slots, totals, and targets
pub mod meal;
/// Normalized search queries
pub mod query;

pub use food::{round_calories, round_macro, FoodItem, NutrientField, RecognitionResult};
pub use meal::{DailyTargets, MacroProgress, MacroTotals, MealType};
pub use query::SearchQuery;
