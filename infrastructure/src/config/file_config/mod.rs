//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod batch;
mod consensus;
mod models;
mod ollama;
mod output;
mod repl;

pub use batch::FileBatchConfig;
pub use consensus::FileConsensusConfig;
pub use models::FileModelsConfig;
pub use ollama::{FileOllamaConfig, OLLAMA_HOST_ENV};
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use nodeseq_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Default and switchable models
    pub models: FileModelsConfig,
    /// Interactive run budget
    pub consensus: FileConsensusConfig,
    /// Batch evaluation settings
    pub batch: FileBatchConfig,
    /// Ollama server connection
    pub ollama: FileOllamaConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.models.validate();
        issues.extend(self.consensus.validate());
        issues.extend(self.batch.validate());
        issues.extend(self.ollama.validate());
        issues
    }

    /// True when any issue is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.is_error())
    }
}
