//! Run Consensus use case
//!
//! Drives the generate → structural gate → validation streak loop for one
//! request and falls back to the most frequent candidate when the budget
//! runs out.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{ConsensusProgressNotifier, NoProgress};
use crate::use_cases::generate::SequenceGenerator;
use crate::use_cases::validate::SemanticValidator;
use nodeseq_domain::{
    AttemptFailure, ConsensusPolicy, ConsensusResult, ConsensusTrace, DomainError, Model,
    NodeSequence, NodeVocabulary, SequenceTally, UserQuery,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur before a consensus run starts
///
/// Gateway and parse failures never surface here: they only consume
/// attempts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunConsensusError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the RunConsensus use case
#[derive(Debug, Clone)]
pub struct RunConsensusInput {
    /// The user's free-text request
    pub query: String,
    /// Model used for both generation and validation
    pub model: Model,
    /// Attempt budget and validation streak
    pub policy: ConsensusPolicy,
    /// Record a human-readable trace in the result
    pub verbose: bool,
}

impl RunConsensusInput {
    pub fn new(query: impl Into<String>, model: Model) -> Self {
        Self {
            query: query.into(),
            model,
            policy: ConsensusPolicy::default(),
            verbose: true,
        }
    }

    pub fn with_policy(mut self, policy: ConsensusPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Use case for turning one request into a node sequence
pub struct RunConsensusUseCase<G: LlmGateway + 'static> {
    generator: SequenceGenerator<G>,
    validator: SemanticValidator<G>,
    vocabulary: Arc<NodeVocabulary>,
}

impl<G: LlmGateway + 'static> Clone for RunConsensusUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
            validator: self.validator.clone(),
            vocabulary: Arc::clone(&self.vocabulary),
        }
    }
}

impl<G: LlmGateway + 'static> RunConsensusUseCase<G> {
    /// Use case over the standard vocabulary
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_vocabulary(gateway, Arc::new(NodeVocabulary::standard()))
    }

    pub fn with_vocabulary(gateway: Arc<G>, vocabulary: Arc<NodeVocabulary>) -> Self {
        let generator = SequenceGenerator::new(Arc::clone(&gateway), Arc::clone(&vocabulary));
        let validator = SemanticValidator::new(gateway, Arc::clone(generator.system_prompt()));
        Self {
            generator,
            validator,
            vocabulary,
        }
    }

    pub fn vocabulary(&self) -> &NodeVocabulary {
        &self.vocabulary
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunConsensusInput,
    ) -> Result<ConsensusResult, RunConsensusError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunConsensusInput,
        progress: &dyn ConsensusProgressNotifier,
    ) -> Result<ConsensusResult, RunConsensusError> {
        let query = UserQuery::try_new(input.query)?;
        input.policy.validate()?;

        let ConsensusPolicy {
            max_attempts,
            validation_threshold,
        } = input.policy;
        let model = input.model;

        let mut trace = if input.verbose {
            ConsensusTrace::new()
        } else {
            ConsensusTrace::disabled()
        };
        let mut tally = SequenceTally::new();

        info!(
            "Starting consensus with {} (max_attempts={}, validation_threshold={})",
            model, max_attempts, validation_threshold
        );

        for attempt in 1..=max_attempts {
            progress.on_attempt_start(attempt, max_attempts);
            trace.info(format!("Attempt {}/{}", attempt, max_attempts));

            let sequence = match self.candidate(&query, &model).await {
                Ok(sequence) => sequence,
                Err(failure) => {
                    warn!("Attempt {} abandoned ({}): {}", attempt, failure.kind(), failure);
                    match &failure {
                        AttemptFailure::Structural { .. } => {
                            trace.warning(format!("Invalid nodes in sequence: {}", failure));
                        }
                        _ => trace.error(format!("Error in attempt {}: {}", attempt, failure)),
                    }
                    progress.on_attempt_failed(attempt, &failure);
                    if attempt < max_attempts {
                        trace.info("Retrying with new sequence...");
                    }
                    continue;
                }
            };

            trace.info(format!("Generated Node Sequence: {}", sequence));
            progress.on_sequence_generated(attempt, &sequence);
            tally.record(sequence.clone());

            let validated = self
                .validation_streak(
                    &query,
                    &sequence,
                    &model,
                    validation_threshold,
                    &mut trace,
                    progress,
                )
                .await;

            if validated {
                info!("Sequence validated on attempt {}", attempt);
                trace.success(format!("All {} validations passed!", validation_threshold));
                let result = ConsensusResult::validated(sequence, attempt, trace);
                progress.on_complete(&result);
                return Ok(result);
            }

            if attempt < max_attempts {
                trace.info("Retrying with new sequence...");
            }
        }

        trace.warning(format!(
            "Could not achieve {} validations in {} attempts",
            validation_threshold, max_attempts
        ));
        progress.on_fallback(tally.len());

        let result = match Self::fallback(&tally, &mut trace) {
            Some(winner) => {
                info!("Falling back to most frequent sequence {}", winner);
                ConsensusResult::best_effort(winner, max_attempts, trace)
            }
            None => {
                warn!("No structurally valid sequence in {} attempts", max_attempts);
                ConsensusResult::failed(max_attempts, trace)
            }
        };

        progress.on_complete(&result);
        Ok(result)
    }

    /// Generate one candidate and run it through the structural gate
    async fn candidate(
        &self,
        query: &UserQuery,
        model: &Model,
    ) -> Result<NodeSequence, AttemptFailure> {
        let sequence = self.generator.generate(query, model).await?;

        let (valid, invalid_nodes) = self.vocabulary.validate_node_names(&sequence).into_parts();
        if !valid {
            return Err(AttemptFailure::Structural { invalid_nodes });
        }

        Ok(sequence)
    }

    /// Up to `threshold` sequential validations, stopping at the first "no"
    async fn validation_streak(
        &self,
        query: &UserQuery,
        sequence: &NodeSequence,
        model: &Model,
        threshold: usize,
        trace: &mut ConsensusTrace,
        progress: &dyn ConsensusProgressNotifier,
    ) -> bool {
        for round in 1..=threshold {
            trace.info(format!("Validation {}/{}...", round, threshold));

            let passed = self.validator.validate_semantics(query, sequence, model).await;
            progress.on_validation(round, threshold, passed);
            debug!("Validation {}/{}: {}", round, threshold, passed);

            if !passed {
                trace.warning(format!("Validation {} failed", round));
                return false;
            }
            trace.success(format!("Validation {} successful!", round));
        }
        true
    }

    fn fallback(tally: &SequenceTally, trace: &mut ConsensusTrace) -> Option<NodeSequence> {
        let (winner, count) = tally.most_frequent()?;

        trace.info("Analyzing most frequent sequence...");
        trace.info("Sequence Statistics:");
        for (sequence, occurrences) in tally.counts() {
            trace.info(format!("Sequence {}: {} occurrences", sequence, occurrences));
        }
        trace.info(format!(
            "Selected {} ({} of {} candidates)",
            winner,
            count,
            tally.len()
        ));

        Some(winner.clone())
    }
}
