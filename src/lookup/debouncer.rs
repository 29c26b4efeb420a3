// ABOUTME: Input debouncer that coalesces rapid query edits into one dispatch per quiet period
// ABOUTME: Each schedule cancels the pending timer; dispatches are serialized through a gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use crate::config::LookupConfig;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// Handle to an armed, cancellable timer
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Cancel the timer; a no-op once it has fired
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the timer has fired or been cancelled
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// What a `schedule` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// A dispatch is armed for the end of the quiet period
    Armed,
    /// The query was too short; any pending dispatch was cancelled
    Cleared,
}

/// Coalesces rapid input into a single dispatch carrying the latest query
///
/// Must be used from within a tokio runtime.
pub struct QueryDebouncer {
    window: Duration,
    min_query_len: usize,
    pending: Mutex<Option<ScheduledTask>>,
    dispatch_gate: Arc<tokio::sync::Mutex<()>>,
}

impl QueryDebouncer {
    /// Create a debouncer with the given quiet period and minimum query length
    #[must_use]
    pub fn new(window: Duration, min_query_len: usize) -> Self {
        Self {
            window,
            min_query_len,
            pending: Mutex::new(None),
            dispatch_gate: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Create a debouncer from lookup configuration
    #[must_use]
    pub fn from_config(config: &LookupConfig) -> Self {
        Self::new(config.debounce_window, config.min_query_len)
    }

    /// Quiet period before a dispatch fires
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Arm a dispatch of `query` after the quiet period, replacing any pending one
    ///
    /// A query whose trimmed length is below the minimum cancels the pending dispatch
    /// and arms nothing. When the timer fires, `on_fire` runs once with the query;
    /// dispatches never overlap.
    pub fn schedule<F, Fut>(&self, query: impl Into<String>, on_fire: F) -> ScheduleOutcome
    where
        F: FnOnce(String) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let query = query.into();
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(task) = pending.take() {
            task.cancel();
        }

        if query.trim().chars().count() < self.min_query_len {
            trace!(query = %query, "Query below minimum length, cleared pending dispatch");
            return ScheduleOutcome::Cleared;
        }

        let window = self.window;
        let gate = Arc::clone(&self.dispatch_gate);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            // Detach the dispatch so a later cancel only stops the timer
            tokio::spawn(async move {
                let _guard = gate.lock().await;
                trace!(query = %query, "Debounced query dispatched");
                on_fire(query).await;
            });
        });

        *pending = Some(ScheduledTask { handle });
        ScheduleOutcome::Armed
    }

    /// Cancel the pending dispatch, if any
    pub fn cancel(&self) {
        if let Some(task) = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            task.cancel();
        }
    }

    /// Whether a timer is armed and has not fired yet
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for QueryDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
