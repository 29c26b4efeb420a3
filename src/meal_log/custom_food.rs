// ABOUTME: Validation of manually entered foods coming from a free-form input form
// ABOUTME: Parses text fields into a canonical FoodItem or reports which field is wrong
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::FoodItem;
use serde::{Deserialize, Serialize};

/// Raw form fields for a custom food
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFoodInput {
    /// Food name (required)
    pub name: String,
    /// Calories (required, whole non-negative number)
    pub calories: String,
    /// Protein grams (optional)
    #[serde(default)]
    pub protein: String,
    /// Carbohydrate grams (optional)
    #[serde(default)]
    pub carbs: String,
    /// Fat grams (optional)
    #[serde(default)]
    pub fat: String,
}

impl CustomFoodInput {
    /// Validate the form and build a food item
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name or calories, `InvalidFormat` for
    /// non-numeric values, and `ValueOutOfRange` for negative or non-finite values
    pub fn validate(&self) -> AppResult<FoodItem> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("name"));
        }

        let calories = self.calories.trim();
        if calories.is_empty() {
            return Err(AppError::missing_field("calories"));
        }
        let calories: u32 = calories.parse().map_err(|_| {
            AppError::validation(
                ErrorCode::InvalidFormat,
                "calories",
                format!("'{calories}' is not a whole non-negative number"),
            )
        })?;

        Ok(FoodItem::new(
            name,
            f64::from(calories),
            parse_grams("protein", &self.protein)?,
            parse_grams("carbs", &self.carbs)?,
            parse_grams("fat", &self.fat)?,
        ))
    }
}

/// Parse an optional gram amount; blank reads as 0
fn parse_grams(field: &str, raw: &str) -> AppResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = raw.parse().map_err(|_| {
        AppError::validation(
            ErrorCode::InvalidFormat,
            field,
            format!("'{raw}' is not a number"),
        )
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(
            ErrorCode::ValueOutOfRange,
            field,
            "must be a non-negative number",
        ));
    }
    Ok(value)
}
