//! Drillbook - a browser for incident-response tabletop scenarios
//!
//! This library provides the scenario engine behind the `drillbook` CLI:
//! keyword-based tag classification, free-text and tag filtering,
//! deterministic pagination, and uniform random scenario selection over a
//! read-only, in-memory dataset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod classify;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod output;
pub mod page;
pub mod pick;
pub mod query;
pub mod session;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DrillbookError {
    /// Dataset error
    #[error("Dataset error: {0}")]
    DatasetError(#[from] dataset::DatasetError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// One incident-response scenario record
///
/// Immutable after normalization: `tags` is guaranteed non-empty once the
/// record has passed through [`dataset::Dataset::normalize`], since the
/// classifier always falls back to the `"other"` tag.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    /// Stable identity supplied by the source data, unique per dataset
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Lowercase topic labels; empty only before normalization
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Scenario {
    /// Create a new Scenario
    #[must_use]
    pub const fn new(id: u64, title: String, description: String, tags: Vec<String>) -> Self {
        Self {
            id,
            title,
            description,
            tags,
        }
    }

    /// Check whether this scenario carries the given tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
