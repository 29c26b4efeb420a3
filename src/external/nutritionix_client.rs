// ABOUTME: Nutritionix instant-search API client for remote text search
// ABOUTME: Sends the query with app credentials from configuration and returns the raw payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

//! Nutritionix instant-search client
//!
//! Requests are `GET {base}/v2/search/instant?query=…` with the `x-app-id` and
//! `x-app-key` headers. The response carries a `common` array whose entries list
//! their nutrients in `full_nutrients` keyed by numeric attribute id.

use super::{build_http_client, read_json_response, FoodSearchSource};
use crate::config::NutritionixConfig;
use crate::constants::{endpoints, service_names};
use crate::errors::{AppError, AppResult};
use serde_json::Value;

/// Nutritionix API client
pub struct NutritionixClient {
    config: NutritionixConfig,
    http_client: reqwest::Client,
}

impl NutritionixClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: NutritionixConfig) -> AppResult<Self> {
        let http_client = build_http_client(service_names::NUTRITIONIX, config.timeout)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    fn search_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            endpoints::NUTRITIONIX_SEARCH_PATH
        )
    }
}

#[async_trait::async_trait]
impl FoodSearchSource for NutritionixClient {
    fn name(&self) -> &'static str {
        service_names::NUTRITIONIX
    }

    async fn search(&self, query: &str) -> AppResult<Value> {
        let (Some(app_id), Some(app_key)) = (&self.config.app_id, &self.config.app_key) else {
            return Err(AppError::config_missing(
                "NUTRITIONIX_APP_ID / NUTRITIONIX_APP_KEY",
            ));
        };

        if query.trim().is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        let response = self
            .http_client
            .get(self.search_url())
            .query(&[("query", query)])
            .header("x-app-id", app_id)
            .header("x-app-key", app_key)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(service_names::NUTRITIONIX, e.to_string()).with_source(e)
            })?;

        read_json_response(service_names::NUTRITIONIX, response).await
    }
}
