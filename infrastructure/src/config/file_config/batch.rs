//! Batch configuration from TOML (`[batch]` section)

use super::consensus::policy_issues;
use crate::test_cases::{MAX_TEST_CASES, effective_limit};
use nodeseq_application::BatchParams;
use nodeseq_domain::{ConfigIssue, ConfigIssueCode, ConsensusPolicy};
use serde::{Deserialize, Serialize};

/// Batch evaluation settings
///
/// # Example
///
/// ```toml
/// [batch]
/// max_attempts = 3
/// validation_threshold = 3
/// concurrency = 4            # default: available parallelism
/// max_cases = 100
/// cases_file = "test_prompts.json"
/// report_path = "test_results.json"
/// require_validation = true  # false also passes unvalidated matches
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    pub max_attempts: usize,
    pub validation_threshold: usize,
    pub concurrency: Option<usize>,
    pub max_cases: usize,
    /// Test case file used when none is named (REPL `/test`)
    pub cases_file: String,
    pub report_path: String,
    pub require_validation: bool,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        let policy = ConsensusPolicy::batch();
        Self {
            max_attempts: policy.max_attempts,
            validation_threshold: policy.validation_threshold,
            concurrency: None,
            max_cases: MAX_TEST_CASES,
            cases_file: "test_prompts.json".to_string(),
            report_path: "test_results.json".to_string(),
            require_validation: true,
        }
    }
}

impl FileBatchConfig {
    pub fn to_params(&self) -> BatchParams {
        BatchParams::default()
            .with_policy(ConsensusPolicy::new(
                self.max_attempts,
                self.validation_threshold,
            ))
            .with_concurrency(self.concurrency)
            .with_require_validation(self.require_validation)
    }

    /// Case limit actually applied when loading (`0` reads up to the cap)
    pub fn effective_max_cases(&self) -> usize {
        effective_limit(self.max_cases)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = policy_issues("batch", self.max_attempts, self.validation_threshold);

        if self.concurrency == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroConcurrency,
                "batch.concurrency must be at least 1 (omit it to use all cores)",
            ));
        }
        if self.max_cases > MAX_TEST_CASES {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MaxCasesOverLimit,
                format!(
                    "batch.max_cases = {} exceeds the limit; only {} cases will be loaded",
                    self.max_cases, MAX_TEST_CASES
                ),
            ));
        }
        issues
    }
}
