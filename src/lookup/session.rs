// ABOUTME: Search session wiring the debouncer to the orchestrator for interactive input
// ABOUTME: Publishes the current suggestion state on a watch channel for the UI to observe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use super::debouncer::{QueryDebouncer, ScheduleOutcome};
use super::orchestrator::{LookupOrchestrator, ResultSource, SearchOutcome};
use crate::config::LookupConfig;
use crate::models::FoodItem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::trace;

/// What the suggestion list should show
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SuggestionState {
    /// No active search
    #[default]
    Hidden,
    /// A search for `query` is running
    Loading {
        /// Query being searched
        query: String,
    },
    /// Results of the latest completed search
    Results {
        /// Query these results answer
        query: String,
        /// Tier that answered
        source: ResultSource,
        /// Items in presentation order
        items: Vec<FoodItem>,
    },
}

/// Interactive search: raw keystrokes in, suggestion states out
pub struct SearchSession {
    debouncer: QueryDebouncer,
    orchestrator: Arc<LookupOrchestrator>,
    state: Arc<watch::Sender<SuggestionState>>,
    // Bumped on every clear; dispatches armed under an older epoch publish nothing
    input_epoch: Arc<AtomicU64>,
}

impl SearchSession {
    /// Create a session over a shared orchestrator
    #[must_use]
    pub fn new(orchestrator: Arc<LookupOrchestrator>, config: &LookupConfig) -> Self {
        let (state, _) = watch::channel(SuggestionState::Hidden);
        Self {
            debouncer: QueryDebouncer::from_config(config),
            orchestrator,
            state: Arc::new(state),
            input_epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Observe suggestion state changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SuggestionState> {
        self.state.subscribe()
    }

    /// Current suggestion state
    #[must_use]
    pub fn state(&self) -> SuggestionState {
        self.state.borrow().clone()
    }

    /// Feed the current contents of the search box
    ///
    /// Short input hides suggestions immediately and makes any in-flight search stale.
    /// A dispatch that already fired but has not started is dropped as well.
    pub fn input(&self, text: &str) -> ScheduleOutcome {
        let orchestrator = Arc::clone(&self.orchestrator);
        let state = Arc::clone(&self.state);
        let input_epoch = Arc::clone(&self.input_epoch);
        let armed_at = self.input_epoch.load(Ordering::SeqCst);

        let outcome = self.debouncer.schedule(text, move |query| async move {
            let loading = SuggestionState::Loading {
                query: query.clone(),
            };
            if !publish_if_current(&state, &input_epoch, armed_at, loading) {
                trace!(query = %query, "Dispatch dropped after suggestions were cleared");
                return;
            }

            let next = match orchestrator.search(&query).await {
                SearchOutcome::Completed { source, items, .. } => SuggestionState::Results {
                    query,
                    source,
                    items,
                },
                SearchOutcome::Skipped => SuggestionState::Hidden,
                SearchOutcome::Superseded { .. } => return,
            };
            publish_if_current(&state, &input_epoch, armed_at, next);
        });

        if outcome == ScheduleOutcome::Cleared {
            self.hide();
        }
        outcome
    }

    /// Hide suggestions and cancel any pending dispatch
    pub fn clear(&self) {
        self.debouncer.cancel();
        self.hide();
    }

    fn hide(&self) {
        self.orchestrator.supersede_in_flight();
        // Epoch bump and state write share the channel lock with dispatch publishes
        self.state.send_modify(|state| {
            self.input_epoch.fetch_add(1, Ordering::SeqCst);
            *state = SuggestionState::Hidden;
        });
    }
}

fn publish_if_current(
    state: &watch::Sender<SuggestionState>,
    input_epoch: &AtomicU64,
    armed_at: u64,
    next: SuggestionState,
) -> bool {
    state.send_if_modified(|current| {
        if input_epoch.load(Ordering::SeqCst) != armed_at {
            return false;
        }
        *current = next;
        true
    })
}
