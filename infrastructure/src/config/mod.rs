//! Configuration file loading for nodeseq
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NODESEQ_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./nodeseq.toml` or `./.nodeseq.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/nodeseq/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileBatchConfig, FileConfig, FileConsensusConfig, FileModelsConfig, FileOllamaConfig,
    FileOutputConfig, FileReplConfig, OLLAMA_HOST_ENV,
};
pub use loader::{ConfigLoader, ConfigSources};
