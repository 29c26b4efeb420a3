// ABOUTME: Day-scoped meal log, quick-add presets, and manual food entry validation
// ABOUTME: Consumers of lookup results; persistence of the serialized record is left to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

/// Manual entry validation
pub mod custom_food;
/// Daily log with meal slots and totals
pub mod daily_log;
/// Quick-add preset foods
pub mod presets;

pub use custom_food::CustomFoodInput;
pub use daily_log::{local_today, DailyLog, DailyLogRecord, LogEntry, MealLog};
pub use presets::{preset_names, quick_food};
