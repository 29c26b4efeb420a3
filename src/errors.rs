// ABOUTME: Re-exports the unified error types from the core crate
// ABOUTME: Keeps `crate::errors::AppError` paths stable for the rest of the library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

//! Unified error handling, see [`tracker_core::errors`].

pub use tracker_core::errors::{AppError, AppResult, ErrorCode};
