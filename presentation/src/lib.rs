//! Presentation layer for nodeseq
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, the batch front end and the interactive chat
//! interface.

pub mod batch;
pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use batch::{BatchPresenter, TestSuite, TestSuiteError};
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
