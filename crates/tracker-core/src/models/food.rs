// ABOUTME: Canonical food records produced by every lookup tier
// ABOUTME: FoodItem with macro nutrients and RecognitionResult with a bounded confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Round a gram amount to one decimal place, clamping negatives to zero
#[must_use]
pub fn round_macro(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}

/// Round a calorie amount to the nearest whole kcal, clamping negatives to zero
#[must_use]
pub fn round_calories(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(f64::from(u32::MAX)) as u32
}

/// A single food with its macro-nutrient estimate
///
/// All nutrient fields are non-negative. Calories are whole kcal; protein, carbs and
/// fat are grams with one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Display name
    pub name: String,
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Brand owner (text search only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Serving unit reported by the source (e.g. "cup", "100g")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_unit: Option<String>,
}

impl FoodItem {
    /// Create a food item, normalizing nutrient values to their canonical precision
    pub fn new(name: impl Into<String>, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: name.into(),
            calories: round_calories(calories),
            protein: round_macro(protein),
            carbs: round_macro(carbs),
            fat: round_macro(fat),
            brand: None,
            serving_unit: None,
        }
    }

    /// Attach a brand
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Attach a serving unit
    #[must_use]
    pub fn with_serving_unit(mut self, unit: impl Into<String>) -> Self {
        self.serving_unit = Some(unit.into());
        self
    }

    /// Value of one nutrient field as a decimal
    #[must_use]
    pub fn nutrient(&self, field: NutrientField) -> f64 {
        match field {
            NutrientField::Calories => f64::from(self.calories),
            NutrientField::Protein => self.protein,
            NutrientField::Carbs => self.carbs,
            NutrientField::Fat => self.fat,
        }
    }
}

/// A recognized food with the recognizer's confidence in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// The recognized food
    #[serde(flatten)]
    pub food: FoodItem,
    /// Recognition confidence in `[0, 1]`
    pub confidence: f64,
}

impl RecognitionResult {
    /// Create a recognition result; confidence is clamped into `[0, 1]`
    #[must_use]
    pub fn new(food: FoodItem, confidence: f64) -> Self {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { food, confidence }
    }
}

/// The four nutrient fields tracked per food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientField {
    /// Energy in kcal
    Calories,
    /// Protein in grams
    Protein,
    /// Carbohydrates in grams
    Carbs,
    /// Fat in grams
    Fat,
}

impl NutrientField {
    /// All fields in display order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];

    /// Field name as used in vendor payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }
}

impl fmt::Display for NutrientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_rules() {
        assert_eq!(round_calories(94.6), 95);
        assert!((round_macro(0.52) - 0.5).abs() < f64::EPSILON);
        assert_eq!(round_calories(-3.0), 0);
        assert!(round_macro(f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let food = FoodItem::new("Apple", 95.0, 0.5, 25.0, 0.3);
        assert!((RecognitionResult::new(food.clone(), 1.7).confidence - 1.0).abs() < f64::EPSILON);
        assert!(RecognitionResult::new(food, -0.2).confidence.abs() < f64::EPSILON);
    }
}
