//! Infrastructure layer for nodeseq
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod ollama;
pub mod reporting;
pub mod test_cases;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigSources, FileBatchConfig, FileConfig, FileConsensusConfig,
    FileModelsConfig, FileOllamaConfig, FileOutputConfig, FileReplConfig,
};
pub use ollama::{
    client::{DEFAULT_HOST, OllamaClient},
    error::{OllamaError, Result},
    gateway::OllamaLlmGateway,
    session::OllamaSession,
};
pub use reporting::JsonReportWriter;
pub use test_cases::{JsonTestCaseSource, MAX_TEST_CASES, TestCaseLoadError, TestCaseLoader};
