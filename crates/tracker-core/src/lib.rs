// ABOUTME: Core types and constants for the calorie tracker food lookup engine
// ABOUTME: Foundation crate with error handling, canonical food models, and lookup constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

#![deny(unsafe_code)]

//! # Tracker Core
//!
//! Foundation crate providing shared types and constants for the calorie tracker
//! lookup engine. This crate is designed to change infrequently and carries no
//! network or runtime dependencies.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Canonical food records (`FoodItem`, `RecognitionResult`, `SearchQuery`)
//! - **constants**: Lookup limits, nutrient identifiers, and default targets

/// Unified error handling system with standard error codes
pub mod errors;

/// Canonical food models shared by every lookup tier
pub mod models;

/// Application constants organized by domain
pub mod constants;
