//! Test case value object

use crate::node::NodeSequence;
use serde::{Deserialize, Serialize};

/// A prompt paired with the sequence it should produce
///
/// Deserializes from `{"prompt", "expected_sequence"}` (or
/// `expectedSequence`), or from the
/// `{"User Prompt", "Correct Output"}` spelling used by existing prompt
/// collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(alias = "User Prompt")]
    pub prompt: String,
    #[serde(
        alias = "expectedSequence",
        alias = "Correct Output",
        alias = "expected"
    )]
    pub expected_sequence: NodeSequence,
}

impl TestCase {
    pub fn new(prompt: impl Into<String>, expected_sequence: NodeSequence) -> Self {
        Self {
            prompt: prompt.into(),
            expected_sequence,
        }
    }

    /// Order-sensitive comparison against an actual result
    pub fn matches(&self, actual: Option<&NodeSequence>) -> bool {
        actual == Some(&self.expected_sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_original_keys() {
        let json = r#"{"User Prompt": "Assign a value, then log it.", "Correct Output": ["Assign", "Log"]}"#;
        let case: TestCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.prompt, "Assign a value, then log it.");
        assert_eq!(case.expected_sequence, NodeSequence::from(["Assign", "Log"]));
    }

    #[test]
    fn test_deserialize_snake_case_keys() {
        let json = r#"{"prompt": "Play a sound", "expected_sequence": ["PlaySound"]}"#;
        let case: TestCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.expected_sequence, NodeSequence::from(["PlaySound"]));
    }

    #[test]
    fn test_deserialize_camel_case_keys() {
        let json = r#"{"prompt": "Fetch then show", "expectedSequence": ["FetchData", "Show"]}"#;
        let case: TestCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.expected_sequence, NodeSequence::from(["FetchData", "Show"]));
    }

    #[test]
    fn test_matches_is_order_sensitive() {
        let case = TestCase::new("x", NodeSequence::from(["Filter", "Sort", "Show"]));
        assert!(case.matches(Some(&NodeSequence::from(["Filter", "Sort", "Show"]))));
        assert!(!case.matches(Some(&NodeSequence::from(["Sort", "Filter", "Show"]))));
        assert!(!case.matches(None));
    }
}
