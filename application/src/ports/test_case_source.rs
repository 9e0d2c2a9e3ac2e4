//! Test case source port
//!
//! Where batch test cases come from. The JSON file loader lives in the
//! infrastructure layer.

use nodeseq_domain::TestCase;
use std::path::Path;
use thiserror::Error;

/// Failure reported by a [`TestCaseSource`]
#[derive(Error, Debug)]
#[error(transparent)]
pub struct TestCaseSourceError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl TestCaseSourceError {
    pub fn new(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }
}

/// Supplier of [`TestCase`] records for a batch run
pub trait TestCaseSource: Send + Sync {
    fn load(&self, location: &Path) -> Result<Vec<TestCase>, TestCaseSourceError>;
}
