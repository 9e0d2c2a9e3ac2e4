//! Attempt budget and validation streak length

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How hard a consensus run tries before falling back
///
/// - `max_attempts`: generation cycles available to the run
/// - `validation_threshold`: consecutive semantic passes a sequence needs
///
/// Both must be at least 1. No upper bound is imposed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusPolicy {
    pub max_attempts: usize,
    pub validation_threshold: usize,
}

impl ConsensusPolicy {
    pub fn new(max_attempts: usize, validation_threshold: usize) -> Self {
        Self {
            max_attempts,
            validation_threshold,
        }
    }

    /// Interactive defaults: 10 attempts, 5 validations
    pub fn interactive() -> Self {
        Self::new(10, 5)
    }

    /// Batch defaults: 3 attempts, 3 validations
    pub fn batch() -> Self {
        Self::new(3, 3)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_attempts == 0 {
            return Err(DomainError::must_be_positive("max_attempts"));
        }
        if self.validation_threshold == 0 {
            return Err(DomainError::must_be_positive("validation_threshold"));
        }
        Ok(())
    }
}

impl Default for ConsensusPolicy {
    fn default() -> Self {
        Self::interactive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ConsensusPolicy::default(), ConsensusPolicy::new(10, 5));
        assert_eq!(ConsensusPolicy::batch(), ConsensusPolicy::new(3, 3));
    }

    #[test]
    fn test_zero_rejected() {
        assert!(ConsensusPolicy::new(0, 1).validate().is_err());
        assert!(ConsensusPolicy::new(1, 0).validate().is_err());
        assert!(ConsensusPolicy::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_no_upper_bound() {
        assert!(ConsensusPolicy::new(10_000, 500).validate().is_ok());
    }
}
