// ABOUTME: Meal slots, macro totals, and daily nutrition targets
// ABOUTME: Shared by the daily log and anything that summarizes logged foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use super::food::{round_macro, FoodItem};
use crate::constants::targets;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meal slot a logged food belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snacks (default slot)
    #[default]
    Snacks,
}

impl MealType {
    /// All meal slots in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Lower-case slot name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snacks" | "snack" => Ok(Self::Snacks),
            other => Err(format!("unknown meal type: {other}")),
        }
    }
}

/// Summed nutrients over a set of foods
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Total kcal
    pub calories: u32,
    /// Total protein in grams
    pub protein: f64,
    /// Total carbohydrates in grams
    pub carbs: f64,
    /// Total fat in grams
    pub fat: f64,
}

impl MacroTotals {
    /// Add one food to the running totals
    pub fn add(&mut self, food: &FoodItem) {
        self.calories = self.calories.saturating_add(food.calories);
        self.protein += food.protein;
        self.carbs += food.carbs;
        self.fat += food.fat;
    }

    /// Totals with macros rounded to one decimal place for display
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            calories: self.calories,
            protein: round_macro(self.protein),
            carbs: round_macro(self.carbs),
            fat: round_macro(self.fat),
        }
    }
}

impl<'a> FromIterator<&'a FoodItem> for MacroTotals {
    fn from_iter<I: IntoIterator<Item = &'a FoodItem>>(iter: I) -> Self {
        let mut totals = Self::default();
        for food in iter {
            totals.add(food);
        }
        totals
    }
}

/// Daily nutrition goals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Calorie goal in kcal
    pub calories: u32,
    /// Protein goal in grams
    pub protein: f64,
    /// Carbohydrate goal in grams
    pub carbs: f64,
    /// Fat goal in grams
    pub fat: f64,
}

impl Default for DailyTargets {
    fn default() -> Self {
        Self {
            calories: targets::DEFAULT_CALORIES,
            protein: targets::DEFAULT_PROTEIN_G,
            carbs: targets::DEFAULT_CARBS_G,
            fat: targets::DEFAULT_FAT_G,
        }
    }
}

/// Fraction of each target reached, capped at 1.0 for progress bars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    /// Calories consumed / goal
    pub calories: f64,
    /// Protein consumed / goal
    pub protein: f64,
    /// Carbs consumed / goal
    pub carbs: f64,
    /// Fat consumed / goal
    pub fat: f64,
}

impl DailyTargets {
    /// Progress ratios for the given totals
    #[must_use]
    pub fn progress(&self, totals: &MacroTotals) -> MacroProgress {
        MacroProgress {
            calories: ratio(f64::from(totals.calories), f64::from(self.calories)),
            protein: ratio(totals.protein, self.protein),
            carbs: ratio(totals.carbs, self.carbs),
            fat: ratio(totals.fat, self.fat),
        }
    }

    /// Calories left before reaching the goal (negative when over)
    #[must_use]
    pub fn remaining_calories(&self, totals: &MacroTotals) -> i64 {
        i64::from(self.calories) - i64::from(totals.calories)
    }
}

fn ratio(consumed: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (consumed / goal).clamp(0.0, 1.0)
}
