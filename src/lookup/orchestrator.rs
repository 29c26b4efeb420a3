// ABOUTME: Text-search orchestration across cache, remote source, and local dataset tiers
// ABOUTME: Tags each search with a generation so stale completions are discarded, never surfaced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

//! Lookup orchestrator
//!
//! A search resolves against exactly one tier: a cache hit is returned verbatim, a
//! non-empty remote answer is cached and returned, and anything else falls back to
//! the local dataset. Remote errors are logged and converted into that fallback.

use super::dataset::LocalFoodDataset;
use super::normalizer::normalize_search_payload;
use crate::cache::SearchCacheProvider;
use crate::errors::AppResult;
use crate::external::FoodSearchSource;
use crate::models::{FoodItem, SearchQuery};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Tier that produced a search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    /// Served from the search cache
    Cache,
    /// Fetched from the remote text-search source
    Remote,
    /// Filtered from the local dataset
    Local,
}

impl fmt::Display for ResultSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cache => f.write_str("cache"),
            Self::Remote => f.write_str("remote"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// Result of one `search` call
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The search finished while still the latest one
    Completed {
        /// Generation tag of this search
        generation: u64,
        /// Tier that answered
        source: ResultSource,
        /// Between 0 and 10 items in presentation order
        items: Vec<FoodItem>,
    },
    /// A newer search started before this one finished; its items are dropped
    Superseded {
        /// Generation tag of this (stale) search
        generation: u64,
    },
    /// The query was blank
    Skipped,
}

impl SearchOutcome {
    /// Items of a completed search
    #[must_use]
    pub fn items(&self) -> Option<&[FoodItem]> {
        match self {
            Self::Completed { items, .. } => Some(items),
            Self::Superseded { .. } | Self::Skipped => None,
        }
    }

    /// Consume the outcome, keeping the items of a completed search
    #[must_use]
    pub fn into_items(self) -> Option<Vec<FoodItem>> {
        match self {
            Self::Completed { items, .. } => Some(items),
            Self::Superseded { .. } | Self::Skipped => None,
        }
    }

    /// Tier that answered a completed search
    #[must_use]
    pub const fn source(&self) -> Option<ResultSource> {
        match self {
            Self::Completed { source, .. } => Some(*source),
            Self::Superseded { .. } | Self::Skipped => None,
        }
    }

    /// Whether a newer search made this one stale
    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded { .. })
    }
}

/// Coordinates cache, remote, and local tiers for typed queries
pub struct LookupOrchestrator {
    remote: Arc<dyn FoodSearchSource>,
    cache: Arc<dyn SearchCacheProvider>,
    dataset: LocalFoodDataset,
    generation: AtomicU64,
}

impl LookupOrchestrator {
    /// Create an orchestrator over the given remote source and cache
    #[must_use]
    pub fn new(remote: Arc<dyn FoodSearchSource>, cache: Arc<dyn SearchCacheProvider>) -> Self {
        Self {
            remote,
            cache,
            dataset: LocalFoodDataset,
            generation: AtomicU64::new(0),
        }
    }

    /// Search cache shared with this orchestrator
    #[must_use]
    pub fn cache(&self) -> &Arc<dyn SearchCacheProvider> {
        &self.cache
    }

    /// Generation of the most recently started search
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Mark every in-flight search as stale without starting a new one
    pub fn supersede_in_flight(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Resolve `query` to at most 10 food items
    ///
    /// Never fails. A blank query is skipped; a search overtaken by a newer call
    /// reports [`SearchOutcome::Superseded`] instead of its items.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let query = SearchQuery::new(query);
        if query.is_blank() {
            return SearchOutcome::Skipped;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (source, items) = self.resolve(&query).await;

        let latest = self.current_generation();
        if latest != generation {
            debug!(
                query = query.key(),
                generation, latest, "Discarding stale search result"
            );
            return SearchOutcome::Superseded { generation };
        }

        info!(
            query = query.key(),
            %source,
            count = items.len(),
            generation,
            "Search completed"
        );
        SearchOutcome::Completed {
            generation,
            source,
            items,
        }
    }

    async fn resolve(&self, query: &SearchQuery) -> (ResultSource, Vec<FoodItem>) {
        let key = query.key();

        if let Some(items) = self.cache.get(key).await {
            debug!(query = key, count = items.len(), "Search cache hit");
            return (ResultSource::Cache, items);
        }

        match self.fetch_remote(query).await {
            Ok(items) if !items.is_empty() => {
                self.cache.put(key, items.clone()).await;
                return (ResultSource::Remote, items);
            }
            Ok(_) => {
                info!(
                    query = key,
                    service = self.remote.name(),
                    "Remote search returned no items, using local dataset"
                );
            }
            Err(e) => {
                warn!(
                    query = key,
                    service = self.remote.name(),
                    error_code = %e.code,
                    error = %e.message,
                    "Remote search failed, using local dataset"
                );
            }
        }

        (ResultSource::Local, self.dataset.filter(key))
    }

    async fn fetch_remote(&self, query: &SearchQuery) -> AppResult<Vec<FoodItem>> {
        let payload = self.remote.search(query.trimmed()).await?;
        normalize_search_payload(self.remote.name(), &payload)
    }
}
