//! Node sequence value object

use serde::{Deserialize, Serialize};

/// An ordered list of node names (Value Object)
///
/// Order is execution order, so equality and hashing are order-sensitive:
/// `[Filter, Sort]` and `[Sort, Filter]` are different sequences. Elements
/// are raw names as produced by the model; membership in the vocabulary is
/// checked separately by [`NodeVocabulary::validate_node_names`].
///
/// # Example
///
/// ```
/// use nodeseq_domain::NodeSequence;
///
/// let a = NodeSequence::from(["FetchData", "Filter", "Show"]);
/// let b = NodeSequence::from(["FetchData", "Show", "Filter"]);
/// assert_ne!(a, b);
/// assert_eq!(a.to_string(), "[FetchData, Filter, Show]");
/// ```
///
/// [`NodeVocabulary::validate_node_names`]: super::NodeVocabulary::validate_node_names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeSequence(Vec<String>);

impl NodeSequence {
    pub fn new(nodes: Vec<String>) -> Self {
        Self(nodes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl std::fmt::Display for NodeSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

impl From<Vec<String>> for NodeSequence {
    fn from(nodes: Vec<String>) -> Self {
        Self(nodes)
    }
}

impl<const N: usize> From<[&str; N]> for NodeSequence {
    fn from(nodes: [&str; N]) -> Self {
        Self(nodes.iter().map(|s| s.to_string()).collect())
    }
}

impl FromIterator<String> for NodeSequence {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a NodeSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
