// ABOUTME: Static reference table of common foods with macros per typical serving
// ABOUTME: Deterministic last-resort source for text search and seed pool for simulated recognition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use crate::constants::lookup::LOCAL_RESULT_LIMIT;
use crate::models::{FoodItem, RecognitionResult};

/// One row of the reference table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetEntry {
    /// Display name
    pub name: &'static str,
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Food group, matched by text search alongside the name
    pub category: &'static str,
}

impl DatasetEntry {
    /// Canonical food item for this row
    #[must_use]
    pub fn to_food_item(&self) -> FoodItem {
        FoodItem::new(
            self.name,
            f64::from(self.calories),
            self.protein,
            self.carbs,
            self.fat,
        )
    }

    fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.category.to_lowercase().contains(term)
    }
}

const fn entry(
    name: &'static str,
    calories: u32,
    protein: f64,
    carbs: f64,
    fat: f64,
    category: &'static str,
) -> DatasetEntry {
    DatasetEntry {
        name,
        calories,
        protein,
        carbs,
        fat,
        category,
    }
}

const FRUITS: &str = "Fruits";
const VEGETABLES: &str = "Vegetables";
const PROTEINS: &str = "Proteins";
const GRAINS: &str = "Grains";
const DAIRY: &str = "Dairy";
const NUTS_SEEDS: &str = "Nuts & Seeds";

/// Reference foods in declaration order
static FOODS: &[DatasetEntry] = &[
    entry("Apple", 95, 0.5, 25.0, 0.3, FRUITS),
    entry("Banana", 105, 1.3, 27.0, 0.4, FRUITS),
    entry("Orange", 62, 1.2, 15.0, 0.2, FRUITS),
    entry("Strawberries", 49, 1.0, 12.0, 0.5, FRUITS),
    entry("Blueberries", 57, 0.7, 14.0, 0.3, FRUITS),
    entry("Grapes", 62, 0.6, 16.0, 0.2, FRUITS),
    entry("Pineapple", 50, 0.5, 13.0, 0.1, FRUITS),
    entry("Mango", 60, 0.8, 15.0, 0.4, FRUITS),
    entry("Broccoli", 55, 3.7, 11.0, 0.6, VEGETABLES),
    entry("Spinach", 23, 2.9, 3.6, 0.4, VEGETABLES),
    entry("Carrots", 41, 0.9, 10.0, 0.2, VEGETABLES),
    entry("Sweet Potato", 103, 2.0, 24.0, 0.2, VEGETABLES),
    entry("Cauliflower", 25, 1.9, 5.0, 0.3, VEGETABLES),
    entry("Bell Pepper", 31, 1.0, 7.0, 0.3, VEGETABLES),
    entry("Cucumber", 16, 0.7, 4.0, 0.1, VEGETABLES),
    entry("Tomato", 22, 1.1, 5.0, 0.2, VEGETABLES),
    entry("Chicken Breast", 165, 31.0, 0.0, 3.6, PROTEINS),
    entry("Salmon", 208, 25.0, 0.0, 12.0, PROTEINS),
    entry("Eggs (2)", 140, 12.0, 0.8, 10.0, PROTEINS),
    entry("Tuna", 184, 39.0, 0.0, 1.0, PROTEINS),
    entry("Turkey Breast", 135, 29.0, 0.0, 1.5, PROTEINS),
    entry("Lean Beef", 250, 26.0, 0.0, 15.0, PROTEINS),
    entry("Shrimp", 99, 24.0, 0.2, 0.3, PROTEINS),
    entry("Tofu", 76, 8.0, 1.9, 4.8, PROTEINS),
    entry("White Rice", 130, 2.7, 28.0, 0.3, GRAINS),
    entry("Brown Rice", 111, 2.6, 23.0, 0.9, GRAINS),
    entry("Quinoa", 120, 4.4, 22.0, 1.9, GRAINS),
    entry("Oatmeal", 150, 6.0, 27.0, 3.0, GRAINS),
    entry("Whole Wheat Bread", 69, 3.6, 12.0, 1.1, GRAINS),
    entry("Pasta", 131, 5.0, 25.0, 1.1, GRAINS),
    entry("Barley", 123, 2.3, 28.0, 0.4, GRAINS),
    entry("Bulgur", 76, 3.1, 17.0, 0.2, GRAINS),
    entry("Greek Yogurt", 130, 23.0, 9.0, 0.5, DAIRY),
    entry("Milk (1 cup)", 103, 8.0, 12.0, 2.4, DAIRY),
    entry("Cheddar Cheese", 113, 7.0, 0.4, 9.4, DAIRY),
    entry("Cottage Cheese", 98, 11.0, 3.4, 4.3, DAIRY),
    entry("Mozzarella", 85, 6.3, 1.2, 6.1, DAIRY),
    entry("Butter", 102, 0.1, 0.0, 11.5, DAIRY),
    entry("Almonds", 164, 6.0, 6.0, 14.0, NUTS_SEEDS),
    entry("Peanuts", 161, 7.3, 4.6, 14.0, NUTS_SEEDS),
    entry("Walnuts", 185, 4.3, 3.9, 18.5, NUTS_SEEDS),
    entry("Chia Seeds", 58, 2.0, 5.0, 3.3, NUTS_SEEDS),
    entry("Sunflower Seeds", 164, 5.8, 6.5, 14.1, NUTS_SEEDS),
    entry("Pumpkin Seeds", 151, 6.9, 6.5, 13.1, NUTS_SEEDS),
];

/// Foods the simulated recognizer picks from, with their fixed confidences.
/// Names resolve against [`FOODS`] first; the rest are defined inline.
static RECOGNITION_CANDIDATES: &[(&str, f64)] = &[
    ("Apple", 0.85),
    ("Banana", 0.82),
    ("Chicken Breast", 0.78),
    ("Rice", 0.75),
    ("Salad", 0.70),
];

static EXTRA_CANDIDATE_FOODS: &[DatasetEntry] = &[
    entry("Rice", 130, 2.7, 28.0, 0.3, GRAINS),
    entry("Salad", 20, 2.0, 4.0, 0.2, VEGETABLES),
];

/// Static local food dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFoodDataset;

impl LocalFoodDataset {
    /// Every entry in declaration order
    #[must_use]
    pub fn entries(&self) -> &'static [DatasetEntry] {
        FOODS
    }

    /// Case-insensitive substring match against name or category
    ///
    /// Returns at most 10 items in declaration order. A blank term matches nothing.
    #[must_use]
    pub fn filter(&self, term: &str) -> Vec<FoodItem> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        FOODS
            .iter()
            .filter(|entry| entry.matches(&term))
            .take(LOCAL_RESULT_LIMIT)
            .map(DatasetEntry::to_food_item)
            .collect()
    }

    /// Exact (case-insensitive) name lookup
    #[must_use]
    pub fn find(&self, name: &str) -> Option<FoodItem> {
        FOODS
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
            .map(DatasetEntry::to_food_item)
    }

    /// Candidate pool for simulated recognition, in a fixed order
    #[must_use]
    pub fn recognition_candidates(&self) -> Vec<RecognitionResult> {
        RECOGNITION_CANDIDATES
            .iter()
            .filter_map(|&(name, confidence)| {
                self.find(name)
                    .or_else(|| {
                        EXTRA_CANDIDATE_FOODS
                            .iter()
                            .find(|entry| entry.name == name)
                            .map(DatasetEntry::to_food_item)
                    })
                    .map(|food| RecognitionResult::new(food, confidence))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_pool_is_complete() {
        let candidates = LocalFoodDataset.recognition_candidates();
        assert_eq!(candidates.len(), RECOGNITION_CANDIDATES.len());
        assert_eq!(candidates[3].food.name, "Rice");
        assert_eq!(candidates[4].food.calories, 20);
    }

    #[test]
    fn test_blank_term_matches_nothing() {
        assert!(LocalFoodDataset.filter("  ").is_empty());
    }
}
