//! Dataset loading, normalization, and vocabulary extraction
//!
//! A [`Dataset`] is the canonical in-memory sequence of scenarios: source
//! order, classified exactly once, never mutated afterwards. The crate ships
//! a bundled dataset (`data/scenarios.json`) and can also load an external
//! JSON file of the same shape.

use crate::classify::KeywordTable;
use crate::Scenario;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// The bundled scenario collection, embedded at compile time
const BUNDLED_SCENARIOS: &str = include_str!("../data/scenarios.json");

/// Maximum number of tags exposed as filter choices
pub const VOCABULARY_LIMIT: usize = 8;

/// Dataset error
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read
    #[error("Failed to read dataset file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    /// The dataset is not valid JSON of the expected shape
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A data-quality problem found in a loaded dataset
///
/// These are warnings, not errors: the engine tolerates malformed records
/// (empty text fields behave as empty strings in search and classification),
/// but surfacing them keeps dataset bugs from going unnoticed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A scenario has an empty title
    EmptyTitle { id: u64 },
    /// A scenario has an empty description
    EmptyDescription { id: u64 },
    /// Two scenarios share the same id
    DuplicateId { id: u64 },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle { id } => write!(f, "scenario #{id} has an empty title"),
            Self::EmptyDescription { id } => {
                write!(f, "scenario #{id} has an empty description")
            }
            Self::DuplicateId { id } => write!(f, "scenario id #{id} appears more than once"),
        }
    }
}

/// Ordered, normalized collection of scenarios
///
/// Built once per load via [`Dataset::normalize`]; every scenario carries a
/// non-empty tag set afterwards. Source order is preserved and flows through
/// filtering unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    scenarios: Vec<Scenario>,
}

impl Dataset {
    /// Normalize raw records into a dataset
    ///
    /// Applies the classifier to each record exactly once, in input order.
    /// Records that already carry tags keep them (classification is a no-op
    /// for them), so normalizing twice changes nothing.
    #[must_use]
    pub fn normalize(raw: Vec<Scenario>, table: &KeywordTable) -> Self {
        let scenarios = raw
            .into_iter()
            .map(|mut scenario| {
                scenario.tags = table.classify(&scenario);
                scenario
            })
            .collect();

        Self { scenarios }
    }

    /// Parse and normalize a dataset from a JSON string
    ///
    /// # Errors
    /// Returns `DatasetError::Parse` if the JSON is malformed
    pub fn from_json(json: &str, table: &KeywordTable) -> Result<Self, DatasetError> {
        let raw: Vec<Scenario> = serde_json::from_str(json)?;
        Ok(Self::normalize(raw, table))
    }

    /// Load and normalize a dataset from a JSON file
    ///
    /// # Errors
    /// Returns `DatasetError::Read` if the file cannot be read, or
    /// `DatasetError::Parse` if its contents are malformed
    pub fn load(path: &Path, table: &KeywordTable) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json, table)
    }

    /// The scenario collection bundled with the binary
    ///
    /// # Errors
    /// Returns `DatasetError::Parse` if the embedded JSON is malformed; the
    /// test suite keeps the bundled file valid
    pub fn bundled(table: &KeywordTable) -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_SCENARIOS, table)
    }

    /// The distinct tag vocabulary: lexicographically ascending, truncated to
    /// the first [`VOCABULARY_LIMIT`] entries
    ///
    /// Derived from current dataset contents only; every returned tag appears
    /// on at least one scenario.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .scenarios
            .iter()
            .flat_map(|scenario| scenario.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags.truncate(VOCABULARY_LIMIT);
        tags
    }

    /// Count scenarios carrying the given tag
    #[must_use]
    pub fn count_tag(&self, tag: &str) -> usize {
        self.scenarios.iter().filter(|s| s.has_tag(tag)).count()
    }

    /// Look up a scenario by id
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Report data-quality issues without rejecting the dataset
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for scenario in &self.scenarios {
            if scenario.title.trim().is_empty() {
                issues.push(ValidationIssue::EmptyTitle { id: scenario.id });
            }
            if scenario.description.trim().is_empty() {
                issues.push(ValidationIssue::EmptyDescription { id: scenario.id });
            }
            if !seen.insert(scenario.id) {
                issues.push(ValidationIssue::DuplicateId { id: scenario.id });
            }
        }

        issues
    }

    /// All scenarios in source order
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Number of scenarios in the dataset
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Check whether the dataset holds no scenarios
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Iterate scenarios in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: u64, title: &str, description: &str) -> Scenario {
        Scenario::new(id, title.to_string(), description.to_string(), vec![])
    }

    #[test]
    fn test_normalize_assigns_tags_in_order() {
        let table = KeywordTable::builtin();
        let dataset = Dataset::normalize(
            vec![
                raw(1, "Ransomware at Acme", "A wiper hit the finance server"),
                raw(2, "Vendor leak", "third-party exposed records"),
            ],
            &table,
        );

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.scenarios()[0].id, 1);
        assert_eq!(
            dataset.scenarios()[0].tags,
            vec!["malware", "infrastructure"]
        );
        assert_eq!(dataset.scenarios()[1].tags, vec!["breach", "vendor"]);
    }

    #[test]
    fn test_normalize_twice_is_noop() {
        let table = KeywordTable::builtin();
        let once = Dataset::normalize(
            vec![raw(1, "Ransomware at Acme", "A wiper hit the finance server")],
            &table,
        );
        let twice = Dataset::normalize(once.scenarios().to_vec(), &table);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_every_scenario_tagged_after_normalize() {
        let table = KeywordTable::builtin();
        let dataset = Dataset::normalize(vec![raw(1, "Quiet day", "Nothing to report")], &table);

        assert!(dataset.iter().all(|s| !s.tags.is_empty()));
        assert_eq!(dataset.scenarios()[0].tags, vec!["other"]);
    }

    #[test]
    fn test_vocabulary_sorted_distinct_and_capped() {
        let table = KeywordTable::builtin();
        let dataset = Dataset::bundled(&table).unwrap();
        let vocab = dataset.vocabulary();

        assert!(!vocab.is_empty());
        assert!(vocab.len() <= VOCABULARY_LIMIT);

        let mut sorted = vocab.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(vocab, sorted);

        // Every vocabulary tag must appear on at least one scenario
        for tag in &vocab {
            assert!(dataset.count_tag(tag) > 0, "orphan vocabulary tag {tag}");
        }
    }

    #[test]
    fn test_vocabulary_of_empty_dataset_is_empty() {
        let table = KeywordTable::builtin();
        let dataset = Dataset::normalize(vec![], &table);

        assert!(dataset.vocabulary().is_empty());
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_from_json_tolerates_missing_tags_field() {
        let table = KeywordTable::builtin();
        let json = r#"[{"id": 7, "title": "Zero-day Friday", "description": "An exploit drops"}]"#;
        let dataset = Dataset::from_json(json, &table).unwrap();

        assert_eq!(dataset.scenarios()[0].tags, vec!["vulnerability"]);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let table = KeywordTable::builtin();
        let result = Dataset::from_json("{not json", &table);

        assert!(matches!(result, Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let table = KeywordTable::builtin();
        let dataset = Dataset::bundled(&table).unwrap();

        assert!(dataset.len() >= 30);
        assert!(dataset.validate().is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let table = KeywordTable::builtin();
        let dataset = Dataset::normalize(vec![raw(42, "Quiet day", "Nothing to report")], &table);

        assert_eq!(dataset.get(42).map(|s| s.id), Some(42));
        assert!(dataset.get(7).is_none());
    }

    #[test]
    fn test_validate_reports_empty_fields_and_duplicates() {
        let table = KeywordTable::builtin();
        let dataset = Dataset::normalize(
            vec![
                raw(1, "", "A description"),
                raw(1, "A title", ""),
                raw(2, "Fine", "Also fine"),
            ],
            &table,
        );

        let issues = dataset.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&ValidationIssue::EmptyTitle { id: 1 }));
        assert!(issues.contains(&ValidationIssue::EmptyDescription { id: 1 }));
        assert!(issues.contains(&ValidationIssue::DuplicateId { id: 1 }));
    }
}
