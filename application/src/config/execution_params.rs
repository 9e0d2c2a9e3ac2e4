//! Batch runner parameters
//!
//! [`BatchParams`] groups the static parameters that control
//! [`RunBatchUseCase`](crate::use_cases::run_batch::RunBatchUseCase).
//! These are application-layer concerns, not domain policy.

use nodeseq_domain::ConsensusPolicy;
use serde::{Deserialize, Serialize};

/// Batch runner control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchParams {
    /// Attempt budget and validation streak for every case.
    pub policy: ConsensusPolicy,
    /// Worker pool size; `None` uses the available parallelism.
    pub concurrency: Option<usize>,
    /// Count a matching but unvalidated sequence as failed. On by default;
    /// turning it off accepts best-effort fallbacks that match.
    pub require_validation: bool,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            policy: ConsensusPolicy::batch(),
            concurrency: None,
            require_validation: true,
        }
    }
}

impl BatchParams {
    // ==================== Builder Methods ====================

    pub fn with_policy(mut self, policy: ConsensusPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_concurrency(mut self, concurrency: Option<usize>) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_require_validation(mut self, require: bool) -> Self {
        self.require_validation = require;
        self
    }

    /// Pool size actually used: the configured value (at least one) or the
    /// number of available processing units.
    pub fn effective_concurrency(&self) -> usize {
        match self.concurrency {
            Some(n) => n.max(1),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_batch_policy() {
        let params = BatchParams::default();
        assert_eq!(params.policy, ConsensusPolicy::batch());
        assert!(params.concurrency.is_none());
        assert!(params.require_validation);
    }

    #[test]
    fn test_effective_concurrency_clamps_zero() {
        let params = BatchParams::default().with_concurrency(Some(0));
        assert_eq!(params.effective_concurrency(), 1);
    }

    #[test]
    fn test_effective_concurrency_defaults_to_parallelism() {
        assert!(BatchParams::default().effective_concurrency() >= 1);
    }

    #[test]
    fn test_builder_chain() {
        let params = BatchParams::default()
            .with_policy(ConsensusPolicy::new(2, 1))
            .with_concurrency(Some(4))
            .with_require_validation(false);
        assert_eq!(params.policy.max_attempts, 2);
        assert_eq!(params.effective_concurrency(), 4);
        assert!(!params.require_validation);
    }
}
