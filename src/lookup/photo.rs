// ABOUTME: Photo recognition pipeline across primary, secondary, and simulated tiers
// ABOUTME: Gap-fills missing nutrients with the estimator; the simulated tier never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use super::dataset::LocalFoodDataset;
use super::estimator::NutrientEstimator;
use super::image::{encode_image, ImageInput};
use super::normalizer::{normalize_recognition_payload, PartialRecognition};
use crate::constants::lookup::{SIMULATED_MAX_ITEMS, SIMULATED_MIN_ITEMS};
use crate::errors::AppResult;
use crate::external::{RecognitionEndpoint, RecognitionSource};
use crate::models::RecognitionResult;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Tier that produced a recognition result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionTier {
    /// Primary remote endpoint
    Primary,
    /// Secondary remote endpoint
    Secondary,
    /// Local simulation from the candidate pool
    Simulated,
}

impl From<RecognitionEndpoint> for RecognitionTier {
    fn from(endpoint: RecognitionEndpoint) -> Self {
        match endpoint {
            RecognitionEndpoint::Primary => Self::Primary,
            RecognitionEndpoint::Secondary => Self::Secondary,
        }
    }
}

impl fmt::Display for RecognitionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary => f.write_str("secondary"),
            Self::Simulated => f.write_str("simulated"),
        }
    }
}

/// Recognized foods and the tier that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecognitionOutcome {
    /// Tier that answered
    pub tier: RecognitionTier,
    /// Never empty
    pub results: Vec<RecognitionResult>,
}

/// Turns an image into recognized foods with complete nutrition
pub struct PhotoRecognitionPipeline {
    remote: Arc<dyn RecognitionSource>,
    estimator: NutrientEstimator,
    dataset: LocalFoodDataset,
    rng: Mutex<ChaCha8Rng>,
}

impl PhotoRecognitionPipeline {
    /// Create a pipeline; `seed` fixes the simulated tier, `None` seeds from entropy
    #[must_use]
    pub fn new(remote: Arc<dyn RecognitionSource>, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self {
            remote,
            estimator: NutrientEstimator,
            dataset: LocalFoodDataset,
            rng: Mutex::new(rng),
        }
    }

    /// Recognize foods in `image`
    ///
    /// Tries the primary then the secondary endpoint, accepting the first non-empty
    /// result list; when both fail, returns two or three simulated candidates.
    pub async fn analyze(&self, image: &ImageInput) -> RecognitionOutcome {
        match encode_image(image) {
            Ok(encoded) => {
                for endpoint in RecognitionEndpoint::FALLBACK_ORDER {
                    match self.recognize_remote(endpoint, &encoded).await {
                        Ok(partials) => {
                            let results = self.complete_all(&partials);
                            info!(
                                service = self.remote.name(),
                                %endpoint,
                                count = results.len(),
                                "Photo recognized"
                            );
                            return RecognitionOutcome {
                                tier: endpoint.into(),
                                results,
                            };
                        }
                        Err(e) => {
                            warn!(
                                service = self.remote.name(),
                                %endpoint,
                                error_code = %e.code,
                                error = %e.message,
                                "Recognition endpoint failed"
                            );
                        }
                    }
                }
            }
            Err(e) => {
                warn!(error_code = %e.code, error = %e.message, "Image could not be encoded");
            }
        }

        let results = self.simulate();
        info!(count = results.len(), "Using simulated recognition");
        RecognitionOutcome {
            tier: RecognitionTier::Simulated,
            results,
        }
    }

    async fn recognize_remote(
        &self,
        endpoint: RecognitionEndpoint,
        encoded: &str,
    ) -> AppResult<Vec<PartialRecognition>> {
        let payload = self.remote.recognize(endpoint, encoded).await?;
        normalize_recognition_payload(self.remote.name(), &payload)
    }

    fn complete_all(&self, partials: &[PartialRecognition]) -> Vec<RecognitionResult> {
        partials
            .iter()
            .map(|partial| {
                let missing = partial.missing_fields();
                if !missing.is_empty() {
                    debug!(food = %partial.name, ?missing, "Estimating missing nutrients");
                }
                partial.complete(&self.estimator)
            })
            .collect()
    }

    /// Shuffle the candidate pool and keep two or three of them
    fn simulate(&self) -> Vec<RecognitionResult> {
        let mut candidates = self.dataset.recognition_candidates();
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        candidates.shuffle(&mut *rng);
        let count = rng.gen_range(SIMULATED_MIN_ITEMS..=SIMULATED_MAX_ITEMS);
        drop(rng);

        candidates.truncate(count);
        candidates
    }
}
