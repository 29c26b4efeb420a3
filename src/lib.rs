// ABOUTME: Main library entry point for the calorie tracker food lookup engine
// ABOUTME: Text search and photo recognition with cache, remote, and local fallback tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

#![deny(unsafe_code)]

//! # Calorie Tracker
//!
//! The food lookup and recognition engine behind a food-logging tool. It turns
//! free text or a photograph into a normalized list of food items with macro
//! estimates, while coping with flaky third-party services, rapid duplicate
//! input, and partial or garbled responses.
//!
//! ## Architecture
//!
//! - **Lookup**: Debounced text search (cache → remote → local dataset) and photo
//!   recognition (primary → secondary → simulated), with response normalization
//!   and heuristic nutrient gap-filling
//! - **Cache**: Bounded LRU store of normalized search results
//! - **External**: HTTP clients for the text-search and photo-recognition vendors
//! - **Meal log**: Day-scoped meal log with totals, presets, and manual entry validation
//! - **Config**: Environment-driven configuration; credentials never live in source
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use calorie_tracker::config::AppConfig;
//! use calorie_tracker::lookup::LookupEngine;
//!
//! # async fn example() -> calorie_tracker::errors::AppResult<()> {
//! let config = AppConfig::from_env();
//! let engine = LookupEngine::from_config(&config)?;
//!
//! if let Some(items) = engine.orchestrator().search("chicken").await.into_items() {
//!     for item in items {
//!         println!("{} - {} kcal", item.name, item.calories);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Search result cache with LRU eviction
pub mod cache;

/// Environment-based configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// HTTP clients for text-search and photo-recognition vendors
pub mod external;

/// Structured logging setup
pub mod logging;

/// Food lookup and recognition pipeline
pub mod lookup;

/// Day-scoped meal log, quick-add presets, and manual entry validation
pub mod meal_log;

/// Canonical data models
pub mod models {
    pub use tracker_core::models::*;
}
