//! CLI command definitions

use clap::{Parser, ValueEnum};
use nodeseq_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for consensus results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Status, sequence and the attempt trace
    Full,
    /// Status and sequence only
    Sequence,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Sequence => DomainOutputFormat::Sequence,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for nodeseq
#[derive(Parser, Debug)]
#[command(name = "nodeseq")]
#[command(author, version, about = "Turn plain-language requests into validated node sequences")]
#[command(long_about = r#"
nodeseq asks a local LLM to translate a request into an ordered sequence of
nodes from a fixed vocabulary, then builds confidence through consensus:

1. Generate: the model proposes a sequence
2. Check: sequences with unknown nodes are discarded
3. Validate: the model must approve the sequence several times in a row

If no sequence earns enough approvals, the most frequent valid candidate is
returned and marked as not fully validated.

Configuration files are loaded from (in priority order):
1. NODESEQ_* environment variables
2. --config <path>         Explicit config file
3. ./nodeseq.toml          Project-level config
4. ~/.config/nodeseq/config.toml   Global config

Example:
  nodeseq "Show a modal when the button is clicked"
  nodeseq -m llama3.1:8b --max-attempts 5 --validation-threshold 2 "Log every second"
  nodeseq --batch test_cases.json --report results.json
  nodeseq --chat
"#)]
pub struct Cli {
    /// The request to translate (not required in chat or batch mode)
    pub prompt: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long, conflicts_with = "batch")]
    pub chat: bool,

    /// Model to use (an Ollama model name)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Generation attempts before falling back to the most frequent sequence
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<usize>,

    /// Consecutive validations needed to accept a sequence
    #[arg(long, value_name = "N")]
    pub validation_threshold: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print the attempt trace after the result
    #[arg(long)]
    pub show_steps: bool,

    /// Run every test case in a JSON file and report the results
    #[arg(long, value_name = "FILE")]
    pub batch: Option<PathBuf>,

    /// Maximum number of test cases to load (capped at 100)
    #[arg(long, value_name = "N", requires = "batch")]
    pub max_cases: Option<usize>,

    /// Where to write the batch report
    #[arg(long, value_name = "PATH", requires = "batch")]
    pub report: Option<PathBuf>,

    /// Number of test cases run at once
    #[arg(long, value_name = "N", requires = "batch")]
    pub concurrency: Option<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
