//! Report sink port
//!
//! Where finished batch reports go. The JSON file writer lives in the
//! infrastructure layer.

use nodeseq_domain::{BatchReport, Model};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportSinkError {
    #[error("Failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(String),
}

/// Destination for a finished [`BatchReport`]
pub trait ReportSink: Send + Sync {
    /// Persist the report and return a human-readable location.
    ///
    /// `model` names the model that produced the results, when known.
    fn export(
        &self,
        report: &BatchReport,
        model: Option<&Model>,
    ) -> Result<String, ReportSinkError>;
}
