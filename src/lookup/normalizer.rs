// ABOUTME: Maps heterogeneous vendor payloads into canonical food records
// ABOUTME: Pure functions with fixed rounding; tolerant of missing fields, strict about shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

//! Response normalization
//!
//! Text search payloads carry a `common` array whose items list nutrients by numeric
//! attribute id. Recognition payloads put their items under one of several field names,
//! or return a bare array.

use super::estimator::NutrientEstimator;
use crate::constants::lookup::{
    DEFAULT_CONFIDENCE, DEFAULT_SERVING_UNIT, GENERIC_BRAND, REMOTE_RESULT_LIMIT,
    UNKNOWN_FOOD_NAME,
};
use crate::constants::nutrients::{ATTR_CARBS, ATTR_ENERGY_KCAL, ATTR_FAT, ATTR_PROTEIN};
use crate::errors::{AppError, AppResult};
use crate::models::{FoodItem, NutrientField, RecognitionResult};
use serde_json::{Map, Value};

/// Fields that may hold the recognized items, in lookup order
const RECOGNITION_ARRAY_FIELDS: [&str; 3] = ["recognition_results", "results", "food_recognition"];

/// Fields that may hold a recognized dish name, in lookup order
const RECOGNITION_NAME_FIELDS: [&str; 3] = ["name", "food_name", "dish_name"];

/// Fields that may hold a recognition confidence, in lookup order
const RECOGNITION_CONFIDENCE_FIELDS: [&str; 2] = ["confidence", "confidence_score"];

/// Normalize a text-search payload
///
/// Items without a name are omitted. Missing nutrients read as 0, a missing brand as
/// `"Generic"`, a missing serving unit as `"100g"`. At most 8 items are returned.
///
/// # Errors
///
/// Returns `MalformedResponse` when the payload is not a JSON object
pub fn normalize_search_payload(service: &str, payload: &Value) -> AppResult<Vec<FoodItem>> {
    let Some(body) = payload.as_object() else {
        return Err(AppError::malformed_response(
            service,
            "search payload is not a JSON object",
        ));
    };

    let Some(common) = body.get("common").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(common
        .iter()
        .filter_map(Value::as_object)
        .filter_map(normalize_search_item)
        .take(REMOTE_RESULT_LIMIT)
        .collect())
}

fn normalize_search_item(item: &Map<String, Value>) -> Option<FoodItem> {
    let name = non_empty_str(item.get("food_name"))?;
    let nutrients = item.get("full_nutrients").and_then(Value::as_array);
    let attr = |id: u32| {
        nutrients
            .and_then(|list| {
                list.iter()
                    .find(|n| n.get("attr_id").and_then(Value::as_u64) == Some(u64::from(id)))
            })
            .and_then(|n| n.get("value"))
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    };

    let brand = non_empty_str(item.get("brand_name")).unwrap_or(GENERIC_BRAND);
    let serving_unit = non_empty_str(item.get("serving_unit")).unwrap_or(DEFAULT_SERVING_UNIT);

    Some(
        FoodItem::new(
            name,
            attr(ATTR_ENERGY_KCAL),
            attr(ATTR_PROTEIN),
            attr(ATTR_CARBS),
            attr(ATTR_FAT),
        )
        .with_brand(brand)
        .with_serving_unit(serving_unit),
    )
}

/// A recognized item before gap-filling
///
/// `None` fields were absent (or non-numeric) in the vendor payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialRecognition {
    /// Dish name, `"Unknown Food"` when the vendor gave none
    pub name: String,
    /// Vendor confidence
    pub confidence: Option<f64>,
    /// Energy in kcal
    pub calories: Option<f64>,
    /// Protein in grams
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    pub carbs: Option<f64>,
    /// Fat in grams
    pub fat: Option<f64>,
}

impl PartialRecognition {
    /// Value reported for one nutrient, if any
    #[must_use]
    pub const fn nutrient(&self, field: NutrientField) -> Option<f64> {
        match field {
            NutrientField::Calories => self.calories,
            NutrientField::Protein => self.protein,
            NutrientField::Carbs => self.carbs,
            NutrientField::Fat => self.fat,
        }
    }

    /// Fields the vendor left out
    #[must_use]
    pub fn missing_fields(&self) -> Vec<NutrientField> {
        NutrientField::ALL
            .into_iter()
            .filter(|field| self.nutrient(*field).is_none())
            .collect()
    }

    /// Fill missing nutrients from `estimator` and default a missing confidence to 0.8
    #[must_use]
    pub fn complete(&self, estimator: &NutrientEstimator) -> RecognitionResult {
        let value = |field| {
            self.nutrient(field)
                .unwrap_or_else(|| estimator.estimate(&self.name, field))
        };

        let food = FoodItem::new(
            self.name.clone(),
            value(NutrientField::Calories),
            value(NutrientField::Protein),
            value(NutrientField::Carbs),
            value(NutrientField::Fat),
        );
        RecognitionResult::new(food, self.confidence.unwrap_or(DEFAULT_CONFIDENCE))
    }
}

/// Extract recognized items from a recognition payload
///
/// The items array is looked up under `recognition_results`, then `results`, then as a
/// bare top-level array, then under `food_recognition`.
///
/// # Errors
///
/// Returns `MalformedResponse` when no items array is present and `EmptyResult` when
/// the array holds no usable items
pub fn normalize_recognition_payload(
    service: &str,
    payload: &Value,
) -> AppResult<Vec<PartialRecognition>> {
    let items = find_recognition_array(payload).ok_or_else(|| {
        AppError::malformed_response(service, "no recognized items array in payload")
    })?;

    let recognized: Vec<PartialRecognition> = items
        .iter()
        .filter_map(Value::as_object)
        .map(normalize_recognition_item)
        .collect();

    if recognized.is_empty() {
        return Err(AppError::empty_result(service));
    }
    Ok(recognized)
}

fn find_recognition_array(payload: &Value) -> Option<&Vec<Value>> {
    let field = |name: &str| payload.get(name).and_then(Value::as_array);

    field(RECOGNITION_ARRAY_FIELDS[0])
        .or_else(|| field(RECOGNITION_ARRAY_FIELDS[1]))
        .or_else(|| payload.as_array())
        .or_else(|| field(RECOGNITION_ARRAY_FIELDS[2]))
}

fn normalize_recognition_item(item: &Map<String, Value>) -> PartialRecognition {
    let name = RECOGNITION_NAME_FIELDS
        .iter()
        .find_map(|field| non_empty_str(item.get(*field)))
        .unwrap_or(UNKNOWN_FOOD_NAME)
        .to_owned();

    let confidence = RECOGNITION_CONFIDENCE_FIELDS
        .iter()
        .find_map(|field| item.get(*field).and_then(Value::as_f64));

    let nested = item.get("nutrition").and_then(Value::as_object);
    let nutrient = |field: NutrientField| {
        nested
            .and_then(|n| n.get(field.as_str()))
            .and_then(Value::as_f64)
            .or_else(|| item.get(field.as_str()).and_then(Value::as_f64))
    };

    PartialRecognition {
        name,
        confidence,
        calories: nutrient(NutrientField::Calories),
        protein: nutrient(NutrientField::Protein),
        carbs: nutrient(NutrientField::Carbs),
        fat: nutrient(NutrientField::Fat),
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_beats_food_recognition() {
        let payload = json!([{ "name": "Soup" }]);
        let items = normalize_recognition_payload("test", &payload).unwrap();
        assert_eq!(items[0].name, "Soup");
    }

    #[test]
    fn test_nested_nutrition_wins_over_flat() {
        let payload = json!({
            "results": [{ "dish_name": "Pizza", "calories": 1.0, "nutrition": { "calories": 285 } }]
        });
        let items = normalize_recognition_payload("test", &payload).unwrap();
        assert_eq!(items[0].calories, Some(285.0));
        assert_eq!(items[0].name, "Pizza");
    }
}
