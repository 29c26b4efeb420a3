// ABOUTME: External API client modules for text search and photo recognition
// ABOUTME: Source traits let the orchestrator and pipeline run against real vendors or test doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

//! External API Clients
//!
//! Clients return the vendor payload as raw JSON. Only the response normalizer
//! in [`crate::lookup::normalizer`] inspects its shape.

/// `LogMeal` photo-recognition client
pub mod logmeal_client;
/// Nutritionix instant-search client
pub mod nutritionix_client;

pub use logmeal_client::LogMealClient;
pub use nutritionix_client::NutritionixClient;

use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::fmt;

/// Remote text-search source
#[async_trait::async_trait]
pub trait FoodSearchSource: Send + Sync {
    /// Service name for logs
    fn name(&self) -> &'static str;

    /// Search foods matching `query`, returning the raw vendor payload
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an unparseable body
    async fn search(&self, query: &str) -> AppResult<Value>;
}

/// Which recognition endpoint variant to call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognitionEndpoint {
    /// Single-dish recognition, tried first
    Primary,
    /// Combo (multi-dish) recognition, tried when the primary yields nothing
    Secondary,
}

impl RecognitionEndpoint {
    /// Endpoints in the order they are attempted
    pub const FALLBACK_ORDER: [Self; 2] = [Self::Primary, Self::Secondary];
}

impl fmt::Display for RecognitionEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary => f.write_str("secondary"),
        }
    }
}

/// Remote photo-recognition source
#[async_trait::async_trait]
pub trait RecognitionSource: Send + Sync {
    /// Service name for logs
    fn name(&self) -> &'static str;

    /// Recognize foods in a base64-encoded image (no media-type prefix)
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an unparseable body
    async fn recognize(&self, endpoint: RecognitionEndpoint, image_base64: &str)
        -> AppResult<Value>;
}

/// Check the status and parse the body of a vendor response as JSON
async fn read_json_response(service: &str, response: reqwest::Response) -> AppResult<Value> {
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::external_service(
            service,
            format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ),
        ));
    }

    response.json::<Value>().await.map_err(|e| {
        AppError::malformed_response(service, format!("JSON parse error: {e}")).with_source(e)
    })
}

/// Build an HTTP client with the given request timeout
fn build_http_client(service: &str, timeout: std::time::Duration) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::internal(format!("{service} HTTP client setup failed: {e}")))
}
