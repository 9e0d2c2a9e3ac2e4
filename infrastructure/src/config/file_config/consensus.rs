//! Consensus configuration from TOML (`[consensus]` section)

use nodeseq_domain::{ConfigIssue, ConfigIssueCode, ConsensusPolicy};
use serde::{Deserialize, Serialize};

/// Interactive run budget
///
/// # Example
///
/// ```toml
/// [consensus]
/// max_attempts = 10
/// validation_threshold = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsensusConfig {
    pub max_attempts: usize,
    pub validation_threshold: usize,
}

impl Default for FileConsensusConfig {
    fn default() -> Self {
        let policy = ConsensusPolicy::interactive();
        Self {
            max_attempts: policy.max_attempts,
            validation_threshold: policy.validation_threshold,
        }
    }
}

impl FileConsensusConfig {
    pub fn to_policy(&self) -> ConsensusPolicy {
        ConsensusPolicy::new(self.max_attempts, self.validation_threshold)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        policy_issues("consensus", self.max_attempts, self.validation_threshold)
    }
}

/// Zero-budget checks shared by `[consensus]` and `[batch]`
pub(super) fn policy_issues(
    section: &str,
    max_attempts: usize,
    validation_threshold: usize,
) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    if max_attempts == 0 {
        issues.push(ConfigIssue::error(
            ConfigIssueCode::ZeroMaxAttempts,
            format!("{}.max_attempts must be at least 1", section),
        ));
    }
    if validation_threshold == 0 {
        issues.push(ConfigIssue::error(
            ConfigIssueCode::ZeroValidationThreshold,
            format!("{}.validation_threshold must be at least 1", section),
        ));
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_interactive_policy() {
        let config = FileConsensusConfig::default();
        assert_eq!(config.to_policy(), ConsensusPolicy::interactive());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_zero_values_are_errors() {
        let config = FileConsensusConfig {
            max_attempts: 0,
            validation_threshold: 0,
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
        assert_eq!(issues[0].message, "consensus.max_attempts must be at least 1");
    }
}
