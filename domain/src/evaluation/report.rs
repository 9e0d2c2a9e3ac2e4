//! Batch report types

use super::test_case::TestCase;
use crate::consensus::ConsensusResult;
use crate::node::NodeSequence;
use serde::{Deserialize, Serialize};

/// How a single case ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseVerdict {
    Passed,
    Failed,
    Errored,
}

impl std::fmt::Display for CaseVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseVerdict::Passed => write!(f, "PASSED"),
            CaseVerdict::Failed => write!(f, "FAILED"),
            CaseVerdict::Errored => write!(f, "ERROR"),
        }
    }
}

/// One row of the batch report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub prompt: String,
    pub expected: NodeSequence,
    pub actual: Option<NodeSequence>,
    pub passed: bool,
    pub validated: bool,
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

impl CaseReport {
    /// A case whose run finished.
    ///
    /// With `require_validation` (the batch default), a matching sequence
    /// that was not fully validated still counts as failed.
    pub fn completed(
        case: &TestCase,
        result: &ConsensusResult,
        require_validation: bool,
        elapsed_ms: u64,
    ) -> Self {
        let matched = case.matches(result.sequence.as_ref());
        Self {
            prompt: case.prompt.clone(),
            expected: case.expected_sequence.clone(),
            actual: result.sequence.clone(),
            passed: matched && (result.fully_validated || !require_validation),
            validated: result.fully_validated,
            error: None,
            elapsed_ms,
        }
    }

    /// A case whose run failed before producing a result
    pub fn errored(case: &TestCase, error: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            prompt: case.prompt.clone(),
            expected: case.expected_sequence.clone(),
            actual: None,
            passed: false,
            validated: false,
            error: Some(error.into()),
            elapsed_ms,
        }
    }

    pub fn verdict(&self) -> CaseVerdict {
        if self.error.is_some() {
            CaseVerdict::Errored
        } else if self.passed {
            CaseVerdict::Passed
        } else {
            CaseVerdict::Failed
        }
    }
}

/// Aggregate outcome of a batch run
///
/// `passed + failed + errors == total` always holds for reports built with
/// [`BatchReport::from_details`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub details: Vec<CaseReport>,
}

impl BatchReport {
    pub fn from_details(details: Vec<CaseReport>) -> Self {
        let mut report = Self {
            total: details.len(),
            passed: 0,
            failed: 0,
            errors: 0,
            details: Vec::new(),
        };

        for case in &details {
            match case.verdict() {
                CaseVerdict::Passed => report.passed += 1,
                CaseVerdict::Failed => report.failed += 1,
                CaseVerdict::Errored => report.errors += 1,
            }
        }

        report.details = details;
        report
    }

    /// Percentage of passed cases (0.0 for an empty batch)
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64 * 100.0
        }
    }

    /// Mean wall-clock time per case in milliseconds
    pub fn average_elapsed_ms(&self) -> f64 {
        if self.details.is_empty() {
            0.0
        } else {
            let sum: u64 = self.details.iter().map(|d| d.elapsed_ms).sum();
            sum as f64 / self.details.len() as f64
        }
    }

    pub fn validated_count(&self) -> usize {
        self.details.iter().filter(|d| d.validated).count()
    }
}
