// ABOUTME: Application constants organized by domain
// ABOUTME: Lookup limits, vendor nutrient identifiers, cache defaults, and daily targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

/// Cache capacity and expiry defaults
pub mod cache;
/// Query, result, and recognition limits
pub mod lookup;
/// Vendor nutrient attribute identifiers
pub mod nutrients;
/// Default daily nutrition targets
pub mod targets;
