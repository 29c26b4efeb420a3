// ABOUTME: Default daily nutrition targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

/// Daily calorie goal (kcal)
pub const DEFAULT_CALORIES: u32 = 2000;

/// Daily protein goal (g)
pub const DEFAULT_PROTEIN_G: f64 = 150.0;

/// Daily carbohydrate goal (g)
pub const DEFAULT_CARBS_G: f64 = 250.0;

/// Daily fat goal (g)
pub const DEFAULT_FAT_G: f64 = 65.0;
