//! Keyword-based tag classification
//!
//! Untagged scenarios get topical tags assigned by scanning their combined
//! title and description text for trigger phrases. The trigger table is a
//! declarative data value ([`KeywordTable`]), not control flow, so it can be
//! inspected and tested independently of the classifier itself.
//!
//! Matching is plain substring containment, not token matching: a short
//! trigger can match inside an unrelated word. The shortest triggers are
//! space-padded (`" ai "`, `" ml "`) to keep false positives down.

use crate::Scenario;

/// Tag assigned when no trigger phrase matches
pub const FALLBACK_TAG: &str = "other";

/// One classification rule: a tag and the phrases that trigger it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    /// Tag assigned when any trigger matches
    pub tag: String,
    /// Trigger phrases, matched as lowercase substrings
    pub triggers: Vec<String>,
}

impl KeywordRule {
    fn new(tag: &str, triggers: &[&str]) -> Self {
        Self {
            tag: tag.to_string(),
            triggers: triggers.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Check whether any trigger occurs in the given lowercased text
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| text.contains(trigger.as_str()))
    }
}

/// Ordered mapping from tag name to trigger phrases
///
/// Rule order is fixed so that assigned-tag order is stable across runs.
/// Rules are independent; several may match the same scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
}

impl KeywordTable {
    /// The built-in trigger table covering common incident topics
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                KeywordRule::new("breach", &["breach", "compromised", "leaked", "exposed"]),
                KeywordRule::new("malware", &["malware", "ransomware", "wiper", "virus", "trojan"]),
                KeywordRule::new("phishing", &["phishing", "phish", "spear", "social engineer"]),
                KeywordRule::new("insider", &["employee", "insider", "staff", "internal"]),
                KeywordRule::new("vendor", &["vendor", "supplier", "third-party", "partner"]),
                KeywordRule::new(
                    "infrastructure",
                    &["infrastructure", "server", "network", "system", "datacenter"],
                ),
                KeywordRule::new(
                    "vulnerability",
                    &["vulnerability", "vuln", "zero-day", "exploit", "flaw"],
                ),
                KeywordRule::new("legal", &["legal", "law", "warrant", "enforcement", "compliance"]),
                KeywordRule::new("physical", &["physical", "building", "office", "theft"]),
                KeywordRule::new("cloud", &["cloud", "aws", "azure", "gcp", "saas"]),
                KeywordRule::new("email", &["email", "mail", "smtp", "exchange", "outlook"]),
                KeywordRule::new("mobile", &["mobile", "phone", "android", "ios", "app"]),
                KeywordRule::new(
                    "ai",
                    &[
                        " ai ",
                        "artificial intelligence",
                        "machine learning",
                        " ml ",
                        "llm",
                        "language model",
                        "chatbot",
                        "gpt",
                        "neural",
                        "deepfake",
                        "training data",
                        "hallucination",
                        "prompt injection",
                    ],
                ),
            ],
        }
    }

    /// Classify a scenario into a non-empty set of tags
    ///
    /// Pre-tagged scenarios keep their tags unchanged. Otherwise the combined
    /// title + description text is lowercased and every rule with a matching
    /// trigger contributes its tag, in table order. When nothing matches, the
    /// result is exactly `["other"]`.
    ///
    /// Pure: identical input yields identical output across calls.
    #[must_use]
    pub fn classify(&self, scenario: &Scenario) -> Vec<String> {
        if !scenario.tags.is_empty() {
            return scenario.tags.clone();
        }

        let text = format!("{} {}", scenario.title, scenario.description).to_lowercase();

        let tags: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(&text))
            .map(|rule| rule.tag.clone())
            .collect();

        if tags.is_empty() {
            vec![FALLBACK_TAG.to_string()]
        } else {
            tags
        }
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}
