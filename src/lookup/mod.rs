// ABOUTME: Food lookup and recognition engine with layered fallback tiers
// ABOUTME: Wires remote clients, cache, dataset, and estimator into search and photo pipelines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

//! # Lookup Engine
//!
//! - Text: [`QueryDebouncer`] → [`LookupOrchestrator`] (cache → remote → local dataset)
//! - Photos: [`PhotoRecognitionPipeline`] (primary → secondary → simulated), with
//!   [`NutrientEstimator`] filling whatever the recognizer left out
//!
//! No remote failure escapes either pipeline; it only moves the lookup to the next tier.

/// Static reference foods
pub mod dataset;
/// Input debouncing
pub mod debouncer;
/// Name-based nutrient heuristics
pub mod estimator;
/// Image transport encoding
pub mod image;
/// Vendor payload normalization
pub mod normalizer;
/// Text-search tier coordination
pub mod orchestrator;
/// Photo recognition tier coordination
pub mod photo;
/// Debounced interactive search with observable state
pub mod session;

pub use dataset::{DatasetEntry, LocalFoodDataset};
pub use debouncer::{QueryDebouncer, ScheduleOutcome, ScheduledTask};
pub use estimator::NutrientEstimator;
pub use image::{encode_image, ImageInput};
pub use normalizer::{normalize_recognition_payload, normalize_search_payload, PartialRecognition};
pub use orchestrator::{LookupOrchestrator, ResultSource, SearchOutcome};
pub use photo::{PhotoRecognitionPipeline, RecognitionOutcome, RecognitionTier};
pub use session::{SearchSession, SuggestionState};

use crate::cache::{InMemorySearchCache, SearchCacheProvider};
use crate::config::{AppConfig, LookupConfig};
use crate::errors::AppResult;
use crate::external::{LogMealClient, NutritionixClient};
use std::sync::Arc;
use tracing::info;

/// Text search and photo recognition built from one configuration
pub struct LookupEngine {
    orchestrator: Arc<LookupOrchestrator>,
    photo: PhotoRecognitionPipeline,
    lookup_config: LookupConfig,
}

impl LookupEngine {
    /// Build the engine with the vendor clients and an in-memory cache
    ///
    /// Missing vendor credentials are not an error here; those tiers fail at call
    /// time and the pipelines fall back.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let search = Arc::new(NutritionixClient::new(config.nutritionix.clone())?);
        let recognition = Arc::new(LogMealClient::new(config.logmeal.clone())?);
        let cache: Arc<dyn SearchCacheProvider> =
            Arc::new(InMemorySearchCache::new(&config.search_cache));

        info!(
            text_search_configured = config.nutritionix.has_credentials(),
            recognition_configured = config.logmeal.api_token.is_some(),
            cache_entries = config.search_cache.max_entries,
            "Lookup engine ready"
        );

        Ok(Self {
            orchestrator: Arc::new(LookupOrchestrator::new(search, cache)),
            photo: PhotoRecognitionPipeline::new(recognition, config.lookup.simulation_seed),
            lookup_config: config.lookup.clone(),
        })
    }

    /// Assemble an engine from already-built parts
    #[must_use]
    pub fn from_parts(
        orchestrator: Arc<LookupOrchestrator>,
        photo: PhotoRecognitionPipeline,
        lookup_config: LookupConfig,
    ) -> Self {
        Self {
            orchestrator,
            photo,
            lookup_config,
        }
    }

    /// Text-search orchestrator
    #[must_use]
    pub fn orchestrator(&self) -> &Arc<LookupOrchestrator> {
        &self.orchestrator
    }

    /// Photo recognition pipeline
    #[must_use]
    pub const fn photo(&self) -> &PhotoRecognitionPipeline {
        &self.photo
    }

    /// Start an interactive search session sharing this engine's orchestrator
    #[must_use]
    pub fn session(&self) -> SearchSession {
        SearchSession::new(Arc::clone(&self.orchestrator), &self.lookup_config)
    }
}
