//! Test case file loading
//!
//! A test case file is a JSON array of `{prompt, expected_sequence}`
//! records. The spellings `"User Prompt"` / `"Correct Output"` are accepted
//! too.

use nodeseq_application::{TestCaseSource, TestCaseSourceError};
use nodeseq_domain::TestCase;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Most records a single load returns
pub const MAX_TEST_CASES: usize = 100;

/// Record limit actually applied: `0` means no limit below [`MAX_TEST_CASES`]
pub fn effective_limit(limit: usize) -> usize {
    if limit == 0 {
        MAX_TEST_CASES
    } else {
        limit.min(MAX_TEST_CASES)
    }
}

#[derive(Error, Debug)]
pub enum TestCaseLoadError {
    #[error("Failed to read test cases from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid test case file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub struct TestCaseLoader;

impl TestCaseLoader {
    /// Read at most `limit` cases (never more than [`MAX_TEST_CASES`]) from `path`.
    /// A `limit` of zero reads up to the cap.
    pub fn load(path: &Path, limit: usize) -> Result<Vec<TestCase>, TestCaseLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| TestCaseLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let cases = Self::parse(&content, limit).map_err(|source| TestCaseLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded {} test cases from {}", cases.len(), path.display());
        Ok(cases)
    }

    /// Parse a JSON array, keeping at most `limit` records
    pub fn parse(content: &str, limit: usize) -> Result<Vec<TestCase>, serde_json::Error> {
        let mut cases: Vec<TestCase> = serde_json::from_str(content)?;

        let limit = effective_limit(limit);
        if cases.len() > limit {
            warn!(
                "Test case file has {} records; only the first {} are used",
                cases.len(),
                limit
            );
            cases.truncate(limit);
        }
        Ok(cases)
    }
}

/// [`TestCaseSource`] reading JSON files with a fixed record limit
#[derive(Debug, Clone, Copy)]
pub struct JsonTestCaseSource {
    limit: usize,
}

impl JsonTestCaseSource {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for JsonTestCaseSource {
    fn default() -> Self {
        Self::new(MAX_TEST_CASES)
    }
}

impl TestCaseSource for JsonTestCaseSource {
    fn load(&self, location: &Path) -> Result<Vec<TestCase>, TestCaseSourceError> {
        TestCaseLoader::load(location, self.limit).map_err(TestCaseSourceError::new)
    }
}
