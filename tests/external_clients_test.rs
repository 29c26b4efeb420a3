// ABOUTME: Integration tests for the vendor HTTP clients against a local mock server
// ABOUTME: Checks request shape, credentials headers and how failures map to error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use calorie_tracker::cache::InMemorySearchCache;
use calorie_tracker::config::{LogMealConfig, NutritionixConfig};
use calorie_tracker::errors::ErrorCode;
use calorie_tracker::external::{
    FoodSearchSource, LogMealClient, NutritionixClient, RecognitionEndpoint, RecognitionSource,
};
use calorie_tracker::lookup::{LookupOrchestrator, ResultSource};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IMAGE: &str = "aGVsbG8gd29ybGQ=";

fn nutritionix_for(server: &MockServer) -> NutritionixClient {
    NutritionixClient::new(NutritionixConfig {
        app_id: Some("test-app-id".to_owned()),
        app_key: Some("test-app-key".to_owned()),
        base_url: server.uri(),
        ..NutritionixConfig::default()
    })
    .unwrap()
}

fn logmeal_for(server: &MockServer) -> LogMealClient {
    LogMealClient::new(LogMealConfig {
        api_token: Some("test-token".to_owned()),
        base_url: server.uri(),
        ..LogMealConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_nutritionix_sends_query_and_app_credentials() -> Result<()> {
    let server = MockServer::start().await;
    let payload = common::search_payload(vec![common::search_item("apple", 95.0, 0.5, 25.0, 0.3)]);

    Mock::given(method("GET"))
        .and(path("/v2/search/instant"))
        .and(query_param("query", "green apple"))
        .and(header("x-app-id", "test-app-id"))
        .and(header("x-app-key", "test-app-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .expect(1)
        .mount(&server)
        .await;

    let body = nutritionix_for(&server).search("green apple").await?;
    assert_eq!(body, payload);
    Ok(())
}

#[tokio::test]
async fn test_nutritionix_error_status_is_external_service_error() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/search/instant"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let err = nutritionix_for(&server).search("apple").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("401"), "message: {}", err.message);
    Ok(())
}

#[tokio::test]
async fn test_nutritionix_non_json_body_is_malformed_response() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/search/instant"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = nutritionix_for(&server).search("apple").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MalformedResponse);
    Ok(())
}

#[tokio::test]
async fn test_server_error_falls_back_to_local_dataset() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let orchestrator = LookupOrchestrator::new(
        Arc::new(nutritionix_for(&server)),
        Arc::new(InMemorySearchCache::default()),
    );
    let outcome = orchestrator.search("chick").await;

    assert_eq!(outcome.source(), Some(ResultSource::Local));
    let items = outcome.items().unwrap();
    assert!(items.iter().any(|item| item.name == "Chicken Breast"));
    Ok(())
}

#[tokio::test]
async fn test_logmeal_posts_image_with_bearer_token_to_each_endpoint() -> Result<()> {
    let server = MockServer::start().await;
    let dish = json!({ "recognition_results": [{ "name": "pizza", "prob": 0.9 }] });
    let combo = json!({ "segmentation_results": [] });

    Mock::given(method("POST"))
        .and(path("/v2/recognition/dish"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({ "image": IMAGE })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&dish))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/recognition/combo"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({ "image": IMAGE })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&combo))
        .expect(1)
        .mount(&server)
        .await;

    let client = logmeal_for(&server);
    assert_eq!(client.recognize(RecognitionEndpoint::Primary, IMAGE).await?, dish);
    assert_eq!(client.recognize(RecognitionEndpoint::Secondary, IMAGE).await?, combo);
    Ok(())
}

#[tokio::test]
async fn test_logmeal_failures_map_to_error_codes() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/recognition/dish"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/recognition/combo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = logmeal_for(&server);
    let primary = client
        .recognize(RecognitionEndpoint::Primary, IMAGE)
        .await
        .unwrap_err();
    assert_eq!(primary.code, ErrorCode::ExternalServiceError);

    let secondary = client
        .recognize(RecognitionEndpoint::Secondary, IMAGE)
        .await
        .unwrap_err();
    assert_eq!(secondary.code, ErrorCode::MalformedResponse);
    Ok(())
}
