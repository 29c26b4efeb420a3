// ABOUTME: Configuration management module for the lookup engine
// ABOUTME: Loads vendor credentials, cache bounds, and lookup timing from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

//! Configuration for the calorie tracker lookup engine
//!
//! Configuration is environment-only. Every struct has a `from_env()` constructor
//! and a `Default` that matches the documented defaults, so tests can build
//! configurations directly without touching the process environment.
//!
//! - **Environment**: Aggregate [`AppConfig`] and shared parsing helpers
//! - **API providers**: Text-search and photo-recognition vendor settings
//! - **Cache**: Search cache capacity and entry lifetime
//! - **Lookup**: Debounce window, minimum query length, simulation seed

/// Text-search and photo-recognition vendor configuration
pub mod api_providers;
/// Search cache configuration
pub mod cache;
/// Aggregate configuration and environment helpers
pub mod environment;
/// Debounce and recognition fallback configuration
pub mod lookup;

pub use api_providers::{LogMealConfig, NutritionixConfig};
pub use cache::SearchCacheConfig;
pub use environment::AppConfig;
pub use lookup::LookupConfig;
