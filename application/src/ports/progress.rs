//! Progress notification ports
//!
//! Define the interfaces for reporting progress during a consensus run and
//! during a batch.

use nodeseq_domain::{AttemptFailure, BatchReport, CaseReport, ConsensusResult, NodeSequence};

/// Callback for progress updates during a single consensus run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, REPL, etc.)
pub trait ConsensusProgressNotifier: Send + Sync {
    /// Called when an attempt starts (1-based)
    fn on_attempt_start(&self, attempt: usize, max_attempts: usize);

    /// Called when an attempt is abandoned before validation
    fn on_attempt_failed(&self, attempt: usize, failure: &AttemptFailure);

    /// Called when a structurally valid sequence has been generated
    fn on_sequence_generated(&self, attempt: usize, sequence: &NodeSequence);

    /// Called after each semantic validation round (1-based)
    fn on_validation(&self, round: usize, threshold: usize, passed: bool);

    /// Called when the budget is exhausted and the tally decides
    fn on_fallback(&self, _candidates: usize) {}

    /// Called once the run has a result
    fn on_complete(&self, _result: &ConsensusResult) {}
}

/// Callback for progress updates during a batch
pub trait BatchProgressNotifier: Send + Sync {
    /// Called before any case starts
    fn on_batch_start(&self, total: usize);

    /// Called as each case finishes, in completion order
    fn on_case_complete(&self, index: usize, report: &CaseReport);

    /// Called once every case has finished
    fn on_batch_complete(&self, report: &BatchReport);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ConsensusProgressNotifier for NoProgress {
    fn on_attempt_start(&self, _attempt: usize, _max_attempts: usize) {}
    fn on_attempt_failed(&self, _attempt: usize, _failure: &AttemptFailure) {}
    fn on_sequence_generated(&self, _attempt: usize, _sequence: &NodeSequence) {}
    fn on_validation(&self, _round: usize, _threshold: usize, _passed: bool) {}
}

impl BatchProgressNotifier for NoProgress {
    fn on_batch_start(&self, _total: usize) {}
    fn on_case_complete(&self, _index: usize, _report: &CaseReport) {}
    fn on_batch_complete(&self, _report: &BatchReport) {}
}
