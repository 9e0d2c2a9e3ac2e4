//! Progress reporting for consensus runs and batches

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use nodeseq_application::{BatchProgressNotifier, ConsensusProgressNotifier};
use nodeseq_domain::{AttemptFailure, BatchReport, CaseReport, ConsensusResult, NodeSequence};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Reports progress with an `indicatif` bar
///
/// A single run shows attempts out of the budget; a batch shows finished
/// cases and prints each case line above the bar.
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    total: AtomicUsize,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            total: AtomicUsize::new(0),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn slot(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.bar.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn start(&self, prefix: &str, len: usize) {
        let pb = ProgressBar::new(len as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix(prefix.to_string());
        pb.set_message("Starting...");
        pb.enable_steady_tick(std::time::Duration::from_millis(120));

        self.total.store(len, Ordering::SeqCst);
        *self.slot() = Some(pb);
    }

    fn update(&self, apply: impl FnOnce(&ProgressBar)) {
        if let Some(pb) = self.slot().as_ref() {
            apply(pb);
        }
    }

    fn finish(&self, message: String) {
        if let Some(pb) = self.slot().take() {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsensusProgressNotifier for ProgressReporter {
    fn on_attempt_start(&self, attempt: usize, max_attempts: usize) {
        if attempt == 1 || self.slot().is_none() {
            self.start("Attempts", max_attempts);
        }
        self.update(|pb| {
            pb.set_position(attempt.saturating_sub(1) as u64);
            pb.set_message("generating...");
        });
    }

    fn on_attempt_failed(&self, _attempt: usize, failure: &AttemptFailure) {
        self.update(|pb| pb.set_message(format!("{} {}", "x".red(), failure.kind())));
    }

    fn on_sequence_generated(&self, _attempt: usize, sequence: &NodeSequence) {
        self.update(|pb| pb.set_message(format!("validating {}", sequence)));
    }

    fn on_validation(&self, round: usize, threshold: usize, passed: bool) {
        let mark = if passed { "v".green() } else { "x".red() };
        self.update(|pb| pb.set_message(format!("validation {}/{} {}", round, threshold, mark)));
    }

    fn on_fallback(&self, candidates: usize) {
        self.update(|pb| {
            pb.set_message(format!("picking among {} candidate(s)", candidates));
        });
    }

    fn on_complete(&self, result: &ConsensusResult) {
        self.update(|pb| pb.set_position(result.attempts_used as u64));
        self.finish(ConsoleFormatter::status_line(result).to_string());
    }
}

impl BatchProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total: usize) {
        self.start("Test cases", total);
    }

    fn on_case_complete(&self, index: usize, report: &CaseReport) {
        let total = self.total.load(Ordering::SeqCst);
        self.update(|pb| {
            pb.println(ConsoleFormatter::format_case_line(index, total, report));
            pb.inc(1);
        });
    }

    fn on_batch_complete(&self, report: &BatchReport) {
        self.finish(format!(
            "{} passed, {} failed, {} errors",
            report.passed.to_string().green(),
            report.failed.to_string().red(),
            report.errors.to_string().red()
        ));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress {
    total: AtomicUsize,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self {
            total: AtomicUsize::new(0),
        }
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsensusProgressNotifier for SimpleProgress {
    fn on_attempt_start(&self, attempt: usize, max_attempts: usize) {
        println!(
            "{} {}",
            "->".cyan(),
            format!("Attempt {}/{}", attempt, max_attempts).bold()
        );
    }

    fn on_attempt_failed(&self, _attempt: usize, failure: &AttemptFailure) {
        println!("  {} {}", "x".red(), failure);
    }

    fn on_sequence_generated(&self, _attempt: usize, sequence: &NodeSequence) {
        println!("  {} {}", "-".cyan(), sequence);
    }

    fn on_validation(&self, round: usize, threshold: usize, passed: bool) {
        if passed {
            println!("  {} Validation {}/{}", "v".green(), round, threshold);
        } else {
            println!("  {} Validation {}/{} failed", "x".red(), round, threshold);
        }
    }

    fn on_fallback(&self, candidates: usize) {
        println!(
            "{} Picking the most frequent of {} candidate(s)",
            "->".cyan(),
            candidates
        );
    }

    fn on_complete(&self, _result: &ConsensusResult) {
        println!();
    }
}

impl BatchProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total: usize) {
        self.total.store(total, Ordering::SeqCst);
        println!("{} {} ({} cases)", "->".cyan(), "Running test cases".bold(), total);
    }

    fn on_case_complete(&self, index: usize, report: &CaseReport) {
        let total = self.total.load(Ordering::SeqCst);
        println!("{}", ConsoleFormatter::format_case_line(index, total, report));
    }

    fn on_batch_complete(&self, _report: &BatchReport) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeseq_domain::{ConsensusTrace, TestCase};

    #[test]
    fn test_reporter_tracks_batch_total() {
        let reporter = ProgressReporter::new();
        reporter.on_batch_start(3);
        assert_eq!(reporter.total.load(Ordering::SeqCst), 3);

        let case = TestCase::new("Log", NodeSequence::from(["Log"]));
        let report = CaseReport::errored(&case, "boom", 0);
        reporter.on_case_complete(0, &report);
        assert_eq!(reporter.slot().as_ref().map(|pb| pb.position()), Some(1));

        reporter.on_batch_complete(&BatchReport::from_details(vec![report]));
        assert!(reporter.slot().is_none());
    }

    #[test]
    fn test_reporter_follows_attempts() {
        let reporter = ProgressReporter::new();
        reporter.on_attempt_start(1, 5);
        reporter.on_attempt_start(3, 5);
        assert_eq!(reporter.slot().as_ref().map(|pb| pb.position()), Some(2));
        assert_eq!(reporter.slot().as_ref().and_then(|pb| pb.length()), Some(5));

        let result = ConsensusResult::failed(5, ConsensusTrace::disabled());
        reporter.on_complete(&result);
        assert!(reporter.slot().is_none());
    }

    #[test]
    fn test_events_without_bar_are_ignored() {
        let reporter = ProgressReporter::new();
        reporter.on_validation(1, 3, true);
        reporter.on_fallback(2);
        assert!(reporter.slot().is_none());
    }
}
