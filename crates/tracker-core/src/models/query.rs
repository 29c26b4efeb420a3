// ABOUTME: Search query with its normalized cache key
// ABOUTME: The key is the trimmed, lower-cased input and indexes the search cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Tracker Contributors

use serde::{Deserialize, Serialize};

/// Raw query text together with its normalized key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    raw: String,
    key: String,
}

impl SearchQuery {
    /// Normalize raw input into a query
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let key = raw.trim().to_lowercase();
        Self { raw, key }
    }

    /// Input exactly as typed
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed input, used when talking to remote sources
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }

    /// Trimmed, lower-cased cache key
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the query has nothing to search for
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SearchQuery;

    #[test]
    fn test_key_is_trimmed_and_lowercased() {
        let query = SearchQuery::new("  Chicken Breast ");
        assert_eq!(query.key(), "chicken breast");
        assert_eq!(query.trimmed(), "Chicken Breast");
        assert!(SearchQuery::new("   ").is_blank());
    }
}
