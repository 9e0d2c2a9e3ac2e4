//! Final output of a consensus run

use super::trace::ConsensusTrace;
use crate::node::NodeSequence;
use serde::{Deserialize, Serialize};

/// Which terminal state a run ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusStatus {
    /// A sequence passed the full validation streak
    Validated,
    /// Budget exhausted; the most frequent structurally valid sequence
    BestEffort,
    /// No attempt produced a structurally valid sequence
    Failed,
}

impl ConsensusStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsensusStatus::Validated => "validated",
            ConsensusStatus::BestEffort => "best_effort",
            ConsensusStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ConsensusStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one consensus run, owned by the caller
///
/// `sequence` is `None` only when no attempt produced a structurally valid
/// sequence. A present sequence with `fully_validated == false` may never
/// have passed a single semantic validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusResult {
    pub sequence: Option<NodeSequence>,
    pub fully_validated: bool,
    /// Attempts consumed before termination
    pub attempts_used: usize,
    pub trace: ConsensusTrace,
}

impl ConsensusResult {
    pub fn validated(sequence: NodeSequence, attempts_used: usize, trace: ConsensusTrace) -> Self {
        Self {
            sequence: Some(sequence),
            fully_validated: true,
            attempts_used,
            trace,
        }
    }

    pub fn best_effort(
        sequence: NodeSequence,
        attempts_used: usize,
        trace: ConsensusTrace,
    ) -> Self {
        Self {
            sequence: Some(sequence),
            fully_validated: false,
            attempts_used,
            trace,
        }
    }

    pub fn failed(attempts_used: usize, trace: ConsensusTrace) -> Self {
        Self {
            sequence: None,
            fully_validated: false,
            attempts_used,
            trace,
        }
    }

    pub fn status(&self) -> ConsensusStatus {
        match (&self.sequence, self.fully_validated) {
            (Some(_), true) => ConsensusStatus::Validated,
            (Some(_), false) => ConsensusStatus::BestEffort,
            (None, _) => ConsensusStatus::Failed,
        }
    }

    pub fn is_validated(&self) -> bool {
        self.status() == ConsensusStatus::Validated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        let seq = NodeSequence::from(["Log"]);
        assert_eq!(
            ConsensusResult::validated(seq.clone(), 1, ConsensusTrace::new()).status(),
            ConsensusStatus::Validated
        );
        assert_eq!(
            ConsensusResult::best_effort(seq, 3, ConsensusTrace::new()).status(),
            ConsensusStatus::BestEffort
        );
        assert_eq!(
            ConsensusResult::failed(3, ConsensusTrace::new()).status(),
            ConsensusStatus::Failed
        );
    }

    #[test]
    fn test_failed_has_no_sequence() {
        let result = ConsensusResult::failed(2, ConsensusTrace::new());
        assert!(result.sequence.is_none());
        assert!(!result.fully_validated);
        assert!(!result.is_validated());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ConsensusStatus::BestEffort.to_string(), "best_effort");
    }
}
