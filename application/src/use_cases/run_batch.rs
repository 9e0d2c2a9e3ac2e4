//! Run Batch use case
//!
//! Runs one consensus per test case on a bounded worker pool and aggregates
//! the outcomes into a [`BatchReport`].

use crate::config::BatchParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{BatchProgressNotifier, NoProgress};
use crate::use_cases::run_consensus::{RunConsensusInput, RunConsensusUseCase};
use nodeseq_domain::{BatchReport, CaseReport, ConsensusPolicy, Model, TestCase};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{info, warn};

/// Input for the RunBatch use case
#[derive(Debug, Clone)]
pub struct RunBatchInput {
    pub cases: Vec<TestCase>,
    pub model: Model,
    pub params: BatchParams,
}

impl RunBatchInput {
    pub fn new(cases: Vec<TestCase>, model: Model) -> Self {
        Self {
            cases,
            model,
            params: BatchParams::default(),
        }
    }

    pub fn with_params(mut self, params: BatchParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for evaluating a set of test cases
pub struct RunBatchUseCase<G: LlmGateway + 'static> {
    consensus: RunConsensusUseCase<G>,
}

impl<G: LlmGateway + 'static> RunBatchUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self::from_consensus(RunConsensusUseCase::new(gateway))
    }

    pub fn from_consensus(consensus: RunConsensusUseCase<G>) -> Self {
        Self { consensus }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunBatchInput) -> BatchReport {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks.
    ///
    /// Never fails as a whole: a case that errors or panics becomes an
    /// errored row and its siblings keep running.
    pub async fn execute_with_progress(
        &self,
        input: RunBatchInput,
        progress: &dyn BatchProgressNotifier,
    ) -> BatchReport {
        let total = input.cases.len();
        let workers = input.params.effective_concurrency();
        info!("Starting batch of {} cases with {} workers", total, workers);
        progress.on_batch_start(total);

        let semaphore = Arc::new(Semaphore::new(workers));
        let mut join_set = JoinSet::new();
        let mut task_index = HashMap::with_capacity(total);

        for (index, case) in input.cases.iter().enumerate() {
            let consensus = self.consensus.clone();
            let semaphore = Arc::clone(&semaphore);
            let case = case.clone();
            let model = input.model.clone();
            let policy = input.params.policy;
            let require_validation = input.params.require_validation;

            let handle = join_set.spawn(async move {
                let permit = semaphore.acquire_owned().await;
                let report = match permit {
                    Ok(_permit) => {
                        Self::run_case(&consensus, &case, model, policy, require_validation).await
                    }
                    Err(e) => CaseReport::errored(&case, e.to_string(), 0),
                };
                (index, report)
            });
            task_index.insert(handle.id(), index);
        }

        let mut slots: Vec<Option<CaseReport>> = vec![None; total];

        while let Some(joined) = join_set.join_next_with_id().await {
            let (index, report) = match joined {
                Ok((_, finished)) => finished,
                Err(err) => {
                    let Some(&index) = task_index.get(&err.id()) else {
                        warn!("Join error from an unknown task: {}", err);
                        continue;
                    };
                    let message = join_error_message(err);
                    warn!("Case {} did not finish: {}", index + 1, message);
                    (index, CaseReport::errored(&input.cases[index], message, 0))
                }
            };

            progress.on_case_complete(index, &report);
            slots[index] = Some(report);
        }

        let details = slots
            .into_iter()
            .zip(&input.cases)
            .map(|(slot, case)| {
                slot.unwrap_or_else(|| CaseReport::errored(case, "Run did not report", 0))
            })
            .collect();

        let report = BatchReport::from_details(details);
        info!(
            "Batch finished: {}/{} passed, {} failed, {} errors",
            report.passed, report.total, report.failed, report.errors
        );
        progress.on_batch_complete(&report);
        report
    }

    async fn run_case(
        consensus: &RunConsensusUseCase<G>,
        case: &TestCase,
        model: Model,
        policy: ConsensusPolicy,
        require_validation: bool,
    ) -> CaseReport {
        let started = Instant::now();
        let input = RunConsensusInput::new(case.prompt.clone(), model)
            .with_policy(policy)
            .with_verbose(false);

        let outcome = consensus.execute(input).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match outcome {
            Ok(result) => CaseReport::completed(case, &result, require_validation, elapsed_ms),
            Err(e) => {
                warn!("Case '{}' errored: {}", case.prompt, e);
                CaseReport::errored(case, e.to_string(), elapsed_ms)
            }
        }
    }
}

fn join_error_message(err: JoinError) -> String {
    if !err.is_panic() {
        return format!("Run cancelled: {}", err);
    }

    let payload = err.into_panic();
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".to_string());
    format!("Run panicked: {}", detail)
}
