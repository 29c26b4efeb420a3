// ABOUTME: Unified error handling for the lookup engine with standard error codes
// ABOUTME: Covers network, malformed payload, empty result, validation, and config failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in the lookup engine returns [`AppResult`]. Remote tiers
//! never surface these errors to callers of the orchestrator or the photo pipeline;
//! they are logged with their [`ErrorCode`] and converted into a fallback decision.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be accepted
    InvalidInput = 3000,
    /// A required field was absent or blank
    MissingRequiredField = 3001,
    /// A value had the wrong shape (e.g. not a number)
    InvalidFormat = 3002,
    /// A numeric value fell outside its allowed range
    ValueOutOfRange = 3003,

    // External Services (5000-5999)
    /// Transport failure or non-success HTTP status
    ExternalServiceError = 5000,
    /// External service not reachable or not configured
    ExternalServiceUnavailable = 5001,
    /// Body did not parse or lacked a recognizable results shape
    MalformedResponse = 5004,
    /// Well-formed response with zero items
    EmptyResult = 5005,

    // Configuration (6000-6999)
    /// Generic configuration error
    ConfigError = 6000,
    /// Required configuration is missing
    ConfigMissing = 6001,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Serialization or deserialization failure
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::MalformedResponse => "An external service returned an unrecognized response",
            Self::EmptyResult => "An external service returned no results",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigMissing => "Required configuration is missing",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether this code belongs to the validation range
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::MissingRequiredField
                | Self::InvalidFormat
                | Self::ValueOutOfRange
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Manually entered data failed validation
    pub fn validation(code: ErrorCode, field: &str, message: impl Into<String>) -> Self {
        Self::new(code, format!("{field}: {}", message.into()))
    }

    /// Required field missing
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        )
    }

    /// External service error (transport failure or non-success status)
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service reachable but returned a body we cannot interpret
    pub fn malformed_response(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MalformedResponse,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service returned a well-formed but empty result list
    pub fn empty_result(service: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::EmptyResult,
            format!("{}: no items in response", service.into()),
        )
    }

    /// Required configuration absent (e.g. API credentials)
    pub fn config_missing(key: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            format!("{} is not set", key.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::MalformedResponse).unwrap();
        assert_eq!(json, "\"MALFORMED_RESPONSE\"");
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::external_service("Nutritionix", "HTTP 503");
        let rendered = error.to_string();
        assert!(rendered.starts_with("An external service encountered an error"));
        assert!(rendered.ends_with("Nutritionix: HTTP 503"));
    }

    #[test]
    fn test_validation_codes() {
        assert!(ErrorCode::MissingRequiredField.is_validation());
        assert!(!ErrorCode::EmptyResult.is_validation());
    }
}
