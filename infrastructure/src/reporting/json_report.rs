//! JSON file writer for batch reports.
//!
//! The document is the [`BatchReport`] itself with a `generated_at`
//! timestamp and the derived summary figures added at the top level.

use nodeseq_application::{ReportSink, ReportSinkError};
use nodeseq_domain::{BatchReport, Model};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Serialize)]
struct ReportDocument<'a> {
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    pass_rate: f64,
    average_elapsed_ms: f64,
    #[serde(flatten)]
    report: &'a BatchReport,
}

/// Writes a pretty-printed JSON report to a fixed path
pub struct JsonReportWriter {
    path: PathBuf,
}

impl JsonReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ReportSinkError {
        ReportSinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ReportSink for JsonReportWriter {
    fn export(
        &self,
        report: &BatchReport,
        model: Option<&Model>,
    ) -> Result<String, ReportSinkError> {
        let document = ReportDocument {
            generated_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            model: model.map(Model::as_str),
            pass_rate: report.pass_rate(),
            average_elapsed_ms: report.average_elapsed_ms(),
            report,
        };

        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| ReportSinkError::Serialize(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        info!("Wrote batch report to {}", self.path.display());
        Ok(self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeseq_domain::{CaseReport, ConsensusResult, ConsensusTrace, NodeSequence, TestCase};

    fn sample_report() -> BatchReport {
        let case = TestCase::new("Log on click", NodeSequence::from(["OnClick", "Log"]));
        let hit = ConsensusResult::validated(
            NodeSequence::from(["OnClick", "Log"]),
            1,
            ConsensusTrace::disabled(),
        );
        BatchReport::from_details(vec![
            CaseReport::completed(&case, &hit, false, 120),
            CaseReport::errored(&case, "Run panicked: boom", 30),
        ])
    }

    #[test]
    fn test_export_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("results.json");
        let writer = JsonReportWriter::new(&path);

        let location = writer
            .export(&sample_report(), Some(&Model::Llama31_8b))
            .unwrap();
        assert_eq!(location, path.display().to_string());

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["passed"], 1);
        assert_eq!(value["errors"], 1);
        assert_eq!(value["pass_rate"], 50.0);
        assert_eq!(value["average_elapsed_ms"], 75.0);
        assert_eq!(value["model"], "llama3.1:8b");
        assert!(value["generated_at"].as_str().unwrap().ends_with('Z'));

        let details = value["details"].as_array().unwrap();
        assert_eq!(details[0]["actual"], serde_json::json!(["OnClick", "Log"]));
        assert_eq!(details[1]["error"], "Run panicked: boom");
        assert!(details[1]["actual"].is_null());
    }

    #[test]
    fn test_export_without_model_omits_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        JsonReportWriter::new(&path)
            .export(&sample_report(), None)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value.get("model").is_none());
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let writer = JsonReportWriter::new(blocker.join("results.json"));
        let err = writer.export(&sample_report(), None).unwrap_err();
        assert!(matches!(err, ReportSinkError::Io { .. }));
    }
}
