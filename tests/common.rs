// ABOUTME: Shared test doubles and payload builders for integration tests
// ABOUTME: Provides call-counting search and recognition sources with scripted replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `calorie_tracker`

use calorie_tracker::errors::{AppError, AppResult};
use calorie_tracker::external::{FoodSearchSource, RecognitionEndpoint, RecognitionSource};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

type Reply = Box<dyn Fn(&str) -> AppResult<Value> + Send + Sync>;

/// Scripted text-search source that records every query it receives
pub struct MockSearchSource {
    reply: Reply,
    delays: Mutex<HashMap<String, Duration>>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl MockSearchSource {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            delays: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `payload`
    pub fn returning(payload: Value) -> Self {
        Self::with_reply(Box::new(move |_| Ok(payload.clone())))
    }

    /// Answers each query with `payload_for(query)`
    pub fn answering(payload_for: impl Fn(&str) -> Value + Send + Sync + 'static) -> Self {
        Self::with_reply(Box::new(move |query| Ok(payload_for(query))))
    }

    /// Always fails like an unreachable service
    pub fn failing() -> Self {
        Self::with_reply(Box::new(|_| {
            Err(AppError::external_service("mock", "connection refused"))
        }))
    }

    /// Delay the reply for `query` by `delay`
    pub fn delay_query(self, query: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(query.to_owned(), delay);
        self
    }

    /// Number of `search` calls so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Queries received, in call order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl FoodSearchSource for MockSearchSource {
    fn name(&self) -> &'static str {
        "mock-search"
    }

    async fn search(&self, query: &str) -> AppResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_owned());

        let delay = self.delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        (self.reply)(query)
    }
}

type EndpointReply = Box<dyn Fn() -> AppResult<Value> + Send + Sync>;

/// Scripted recognition source with one reply per endpoint
pub struct MockRecognitionSource {
    primary: EndpointReply,
    secondary: EndpointReply,
    primary_calls: AtomicUsize,
    secondary_calls: AtomicUsize,
    images: Mutex<Vec<String>>,
}

impl MockRecognitionSource {
    /// Reply with `primary` on the primary endpoint and `secondary` on the secondary one
    pub fn new(primary: EndpointReply, secondary: EndpointReply) -> Self {
        Self {
            primary,
            secondary,
            primary_calls: AtomicUsize::new(0),
            secondary_calls: AtomicUsize::new(0),
            images: Mutex::new(Vec::new()),
        }
    }

    /// Both endpoints fail
    pub fn failing() -> Self {
        Self::new(Box::new(unavailable), Box::new(unavailable))
    }

    /// Calls made to `endpoint`
    pub fn call_count(&self, endpoint: RecognitionEndpoint) -> usize {
        match endpoint {
            RecognitionEndpoint::Primary => self.primary_calls.load(Ordering::SeqCst),
            RecognitionEndpoint::Secondary => self.secondary_calls.load(Ordering::SeqCst),
        }
    }

    /// Encoded images received, in call order
    pub fn images(&self) -> Vec<String> {
        self.images.lock().unwrap().clone()
    }
}

/// Reply used for an endpoint that is down
pub fn unavailable() -> AppResult<Value> {
    Err(AppError::external_service("mock", "HTTP 503 Service Unavailable"))
}

#[async_trait::async_trait]
impl RecognitionSource for MockRecognitionSource {
    fn name(&self) -> &'static str {
        "mock-recognition"
    }

    async fn recognize(
        &self,
        endpoint: RecognitionEndpoint,
        image_base64: &str,
    ) -> AppResult<Value> {
        self.images.lock().unwrap().push(image_base64.to_owned());
        match endpoint {
            RecognitionEndpoint::Primary => {
                self.primary_calls.fetch_add(1, Ordering::SeqCst);
                (self.primary)()
            }
            RecognitionEndpoint::Secondary => {
                self.secondary_calls.fetch_add(1, Ordering::SeqCst);
                (self.secondary)()
            }
        }
    }
}

/// One `common[]` entry in text-search vendor format
pub fn search_item(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> Value {
    json!({
        "food_name": name,
        "serving_unit": "cup",
        "full_nutrients": [
            { "attr_id": 208, "value": calories },
            { "attr_id": 203, "value": protein },
            { "attr_id": 205, "value": carbs },
            { "attr_id": 204, "value": fat },
        ],
    })
}

/// Text-search vendor payload wrapping `items`
pub fn search_payload(items: Vec<Value>) -> Value {
    json!({ "common": items, "branded": [] })
}
