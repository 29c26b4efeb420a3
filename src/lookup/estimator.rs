// ABOUTME: Heuristic nutrient estimator keyed by substrings of a food name
// ABOUTME: Fills nutrition fields that a recognition source omitted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use crate::models::NutrientField;

/// One estimation rule: if the lower-cased name contains any keyword, use `value`
#[derive(Debug, Clone, Copy)]
struct Rule {
    keywords: &'static [&'static str],
    value: f64,
}

const fn rule(keywords: &'static [&'static str], value: f64) -> Rule {
    Rule { keywords, value }
}

static CALORIE_RULES: &[Rule] = &[
    rule(&["apple", "banana"], 95.0),
    rule(&["chicken", "meat"], 165.0),
    rule(&["rice", "pasta"], 130.0),
    rule(&["salad", "vegetable"], 20.0),
];

static PROTEIN_RULES: &[Rule] = &[
    rule(&["chicken", "meat"], 31.0),
    rule(&["fish"], 22.0),
    rule(&["egg"], 6.0),
];

static CARB_RULES: &[Rule] = &[
    rule(&["rice", "pasta"], 28.0),
    rule(&["apple", "banana"], 25.0),
    rule(&["bread"], 15.0),
];

static FAT_RULES: &[Rule] = &[
    rule(&["chicken", "meat"], 3.6),
    rule(&["avocado"], 15.0),
    rule(&["nuts"], 14.0),
];

/// Approximates nutrient values from a food name
///
/// Rules are checked in order and the first match wins; when nothing matches the
/// per-field default applies (calories 100, protein 2, carbs 5, fat 0.5).
#[derive(Debug, Clone, Copy, Default)]
pub struct NutrientEstimator;

impl NutrientEstimator {
    /// Estimate one nutrient field for `food_name`
    #[must_use]
    pub fn estimate(&self, food_name: &str, field: NutrientField) -> f64 {
        let name = food_name.to_lowercase();
        let (rules, default) = Self::rules_for(field);

        rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| name.contains(keyword)))
            .map_or(default, |rule| rule.value)
    }

    fn rules_for(field: NutrientField) -> (&'static [Rule], f64) {
        match field {
            NutrientField::Calories => (CALORIE_RULES, 100.0),
            NutrientField::Protein => (PROTEIN_RULES, 2.0),
            NutrientField::Carbs => (CARB_RULES, 5.0),
            NutrientField::Fat => (FAT_RULES, 0.5),
        }
    }
}
