//! Free-text and tag filtering over a dataset
//!
//! The query engine is a pure function of (dataset, filter state): it returns
//! an order-preserving subsequence of the dataset where every element matches
//! both the search predicate and the tag predicate. Search is literal
//! case-insensitive substring containment; user input is never compiled into
//! a pattern, so characters that would be special to a pattern syntax are
//! harmless.

use crate::dataset::Dataset;
use crate::Scenario;
use std::fmt;

/// Which tag a browse session is filtered to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    /// No tag restriction
    #[default]
    All,
    /// Only scenarios carrying this tag
    Tag(String),
}

impl TagFilter {
    /// Check the tag predicate against a scenario
    #[must_use]
    pub fn matches(&self, scenario: &Scenario) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => scenario.has_tag(tag),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

impl From<Option<String>> for TagFilter {
    fn from(tag: Option<String>) -> Self {
        match tag {
            Some(tag) if tag != "all" => Self::Tag(tag),
            _ => Self::All,
        }
    }
}

/// Current search and tag criteria for a browse session
///
/// Transient value state: defaults to an empty search with no tag
/// restriction, and is recreated rather than persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text search term; empty matches everything
    pub search_term: String,
    /// Selected tag filter
    pub tag: TagFilter,
}

impl FilterState {
    /// Create a filter from a search term and optional tag
    #[must_use]
    pub fn new(search_term: impl Into<String>, tag: TagFilter) -> Self {
        Self {
            search_term: search_term.into(),
            tag,
        }
    }

    /// Check whether a scenario satisfies both predicates
    #[must_use]
    pub fn matches(&self, scenario: &Scenario) -> bool {
        self.matches_search(scenario) && self.tag.matches(scenario)
    }

    /// The search predicate: empty term, or case-insensitive substring of
    /// title or description
    fn matches_search(&self, scenario: &Scenario) -> bool {
        if self.search_term.is_empty() {
            return true;
        }

        let term = self.search_term.to_lowercase();
        scenario.title.to_lowercase().contains(&term)
            || scenario.description.to_lowercase().contains(&term)
    }
}

/// Filter a dataset down to the scenarios matching the given state
///
/// Pure and order-preserving: the result is a subsequence of the dataset in
/// source order, and identical inputs always yield an identical sequence.
#[must_use]
pub fn query<'a>(dataset: &'a Dataset, filter: &FilterState) -> Vec<&'a Scenario> {
    dataset
        .iter()
        .filter(|scenario| filter.matches(scenario))
        .collect()
}
