// ABOUTME: Day-scoped meal log with per-meal entries, totals, and target progress
// ABOUTME: Serializes as a { dailyLog, currentDate } record and resets when the day changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{DailyTargets, FoodItem, MacroProgress, MacroTotals, MealType};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Date stamp format of the persisted record (e.g. `Fri Oct 16 2026`)
const DATE_STAMP_FORMAT: &str = "%a %b %d %Y";

/// One logged food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Entry identifier used for removal
    pub id: Uuid,
    /// The logged food
    #[serde(flatten)]
    pub food: FoodItem,
    /// When the entry was added
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    fn new(food: FoodItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            food,
            timestamp: Utc::now(),
        }
    }
}

/// Entries grouped by meal slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealLog {
    /// Breakfast entries
    #[serde(default)]
    pub breakfast: Vec<LogEntry>,
    /// Lunch entries
    #[serde(default)]
    pub lunch: Vec<LogEntry>,
    /// Dinner entries
    #[serde(default)]
    pub dinner: Vec<LogEntry>,
    /// Snack entries
    #[serde(default)]
    pub snacks: Vec<LogEntry>,
}

impl MealLog {
    /// Entries of one meal slot
    #[must_use]
    pub fn entries(&self, meal: MealType) -> &[LogEntry] {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snacks => &self.snacks,
        }
    }

    fn entries_mut(&mut self, meal: MealType) -> &mut Vec<LogEntry> {
        match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snacks => &mut self.snacks,
        }
    }

    /// Every entry across all slots, in slot order
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        MealType::ALL
            .into_iter()
            .flat_map(move |meal| self.entries(meal).iter())
    }

    /// Whether no food has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Persisted form of a daily log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogRecord {
    /// Entries grouped by meal slot
    pub daily_log: MealLog,
    /// Day the entries belong to
    pub current_date: String,
}

/// Calendar day in the local time zone, the boundary at which the log resets
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Foods logged for a single day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyLog {
    date: NaiveDate,
    meals: MealLog,
    targets: DailyTargets,
}

impl DailyLog {
    /// Empty log for `date` with default targets
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            meals: MealLog::default(),
            targets: DailyTargets::default(),
        }
    }

    /// Empty log for today in the local time zone
    #[must_use]
    pub fn today() -> Self {
        Self::new(local_today())
    }

    /// Replace the daily targets
    #[must_use]
    pub const fn with_targets(mut self, targets: DailyTargets) -> Self {
        self.targets = targets;
        self
    }

    /// Day this log covers
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Daily targets
    #[must_use]
    pub const fn targets(&self) -> &DailyTargets {
        &self.targets
    }

    /// Entries grouped by meal
    #[must_use]
    pub const fn meals(&self) -> &MealLog {
        &self.meals
    }

    /// Entries of one meal slot
    #[must_use]
    pub fn entries(&self, meal: MealType) -> &[LogEntry] {
        self.meals.entries(meal)
    }

    /// Log a food under `meal`, returning the new entry
    pub fn add(&mut self, meal: MealType, food: FoodItem) -> &LogEntry {
        let entries = self.meals.entries_mut(meal);
        entries.push(LogEntry::new(food));
        &entries[entries.len() - 1]
    }

    /// Remove an entry from `meal` by id
    pub fn remove(&mut self, meal: MealType, id: Uuid) -> Option<LogEntry> {
        let entries = self.meals.entries_mut(meal);
        let index = entries.iter().position(|entry| entry.id == id)?;
        Some(entries.remove(index))
    }

    /// Totals across every meal, macros rounded to one decimal place
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        self.meals
            .iter()
            .map(|entry| &entry.food)
            .collect::<MacroTotals>()
            .rounded()
    }

    /// Totals for one meal slot
    #[must_use]
    pub fn meal_totals(&self, meal: MealType) -> MacroTotals {
        self.entries(meal)
            .iter()
            .map(|entry| &entry.food)
            .collect::<MacroTotals>()
            .rounded()
    }

    /// Fraction of each target reached so far
    #[must_use]
    pub fn progress(&self) -> MacroProgress {
        self.targets.progress(&self.totals())
    }

    /// Calories left before reaching the target (negative when over)
    #[must_use]
    pub fn remaining_calories(&self) -> i64 {
        self.targets.remaining_calories(&self.totals())
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.meals = MealLog::default();
    }

    /// Start a fresh log if `today` is not the logged day
    ///
    /// Returns whether the log was reset.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if self.date == today {
            return false;
        }

        info!(from = %self.date, to = %today, "New day, resetting daily log");
        self.date = today;
        self.clear();
        true
    }

    /// Persisted form of this log
    #[must_use]
    pub fn to_record(&self) -> DailyLogRecord {
        DailyLogRecord {
            daily_log: self.meals.clone(),
            current_date: self.date.format(DATE_STAMP_FORMAT).to_string(),
        }
    }

    /// Restore a log from its persisted form
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the date stamp cannot be parsed
    pub fn from_record(record: DailyLogRecord) -> AppResult<Self> {
        let date = NaiveDate::parse_from_str(record.current_date.trim(), DATE_STAMP_FORMAT)
            .map_err(|e| {
                AppError::validation(
                    ErrorCode::InvalidFormat,
                    "currentDate",
                    format!("'{}': {e}", record.current_date),
                )
            })?;

        Ok(Self {
            date,
            meals: record.daily_log,
            targets: DailyTargets::default(),
        })
    }

    /// Restore a log and reset it if it belongs to a different day than `today`
    ///
    /// An unreadable date stamp is treated as a stale day.
    #[must_use]
    pub fn load_for_day(record: DailyLogRecord, today: NaiveDate) -> Self {
        match Self::from_record(record) {
            Ok(mut log) => {
                log.roll_over(today);
                log
            }
            Err(e) => {
                info!(error = %e, "Discarding unreadable daily log record");
                Self::new(today)
            }
        }
    }
}
