// ABOUTME: LogMeal food-recognition API client with primary and secondary endpoints
// ABOUTME: Posts a base64 image with bearer authentication and returns the raw payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use super::{build_http_client, read_json_response, RecognitionEndpoint, RecognitionSource};
use crate::config::LogMealConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;

/// Request body for both recognition endpoints
#[derive(Debug, Serialize)]
struct RecognitionRequest<'a> {
    image: &'a str,
}

/// `LogMeal` API client
pub struct LogMealClient {
    config: LogMealConfig,
    http_client: reqwest::Client,
}

impl LogMealClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: LogMealConfig) -> AppResult<Self> {
        let http_client = build_http_client(service_names::LOGMEAL, config.timeout)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    fn endpoint_url(&self, endpoint: RecognitionEndpoint) -> String {
        let path = match endpoint {
            RecognitionEndpoint::Primary => &self.config.primary_path,
            RecognitionEndpoint::Secondary => &self.config.secondary_path,
        };
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl RecognitionSource for LogMealClient {
    fn name(&self) -> &'static str {
        service_names::LOGMEAL
    }

    async fn recognize(
        &self,
        endpoint: RecognitionEndpoint,
        image_base64: &str,
    ) -> AppResult<Value> {
        let Some(token) = &self.config.api_token else {
            return Err(AppError::config_missing("LOGMEAL_API_TOKEN"));
        };

        let response = self
            .http_client
            .post(self.endpoint_url(endpoint))
            .bearer_auth(token)
            .json(&RecognitionRequest {
                image: image_base64,
            })
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(
                    service_names::LOGMEAL,
                    format!("{endpoint} endpoint: {e}"),
                )
                .with_source(e)
            })?;

        read_json_response(service_names::LOGMEAL, response).await
    }
}
