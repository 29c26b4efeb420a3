// ABOUTME: Nutrient attribute identifiers used by the text-search vendor
// ABOUTME: Values follow the USDA nutrient numbering carried in `full_nutrients`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

/// Energy (kcal)
pub const ATTR_ENERGY_KCAL: u32 = 208;

/// Protein (g)
pub const ATTR_PROTEIN: u32 = 203;

/// Total lipid / fat (g)
pub const ATTR_FAT: u32 = 204;

/// Carbohydrate, by difference (g)
pub const ATTR_CARBS: u32 = 205;
