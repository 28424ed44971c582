//! Common type definitions used across the codebase

use crate::core::errors::{SeqdistError, SeqdistResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A configured start/end tag pair to search for in sequence data.
///
/// Immutable after construction. Both tags are guaranteed non-empty, and the
/// rendering `"<start>...<end>"` is the key under which all distances for
/// this pair are aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagPair {
    start: String,
    end: String,
}

impl TagPair {
    /// Create a new tag pair. Empty tags are rejected.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> SeqdistResult<Self> {
        let start = start.into();
        let end = end.into();

        if start.is_empty() {
            return Err(SeqdistError::InvalidTagPair("empty start tag".to_string()));
        }
        if end.is_empty() {
            return Err(SeqdistError::InvalidTagPair("empty end tag".to_string()));
        }

        Ok(Self { start, end })
    }

    /// The start tag
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The end tag
    pub fn end(&self) -> &str {
        &self.end
    }

    /// The aggregation key for this pair, `"<start>...<end>"`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TagPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...{}", self.start, self.end)
    }
}

/// One final result row: a tag-pair key and its average distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyAverage {
    pub key: String,
    pub average: f64,
}

impl KeyAverage {
    pub fn new(key: impl Into<String>, average: f64) -> Self {
        Self {
            key: key.into(),
            average,
        }
    }
}
