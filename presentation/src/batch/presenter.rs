//! Loads a test suite, runs it and prints the outcome

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use nodeseq_application::{
    BatchParams, LlmGateway, NoProgress, ReportSink, ReportSinkError, RunBatchInput,
    RunBatchUseCase, TestCaseSource, TestCaseSourceError,
};
use nodeseq_domain::{BatchReport, Model};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestSuiteError {
    #[error(transparent)]
    Load(#[from] TestCaseSourceError),

    #[error("No test cases found in {0}")]
    Empty(PathBuf),

    #[error(transparent)]
    Export(#[from] ReportSinkError),
}

/// Where test cases come from, where reports go, and how cases are run
pub struct TestSuite {
    pub source: Arc<dyn TestCaseSource>,
    pub sink: Arc<dyn ReportSink>,
    /// Used when no file is named explicitly
    pub default_file: PathBuf,
    pub params: BatchParams,
}

pub struct BatchPresenter<G: LlmGateway + 'static> {
    use_case: RunBatchUseCase<G>,
    suite: TestSuite,
}

impl<G: LlmGateway + 'static> BatchPresenter<G> {
    pub fn new(use_case: RunBatchUseCase<G>, suite: TestSuite) -> Self {
        Self { use_case, suite }
    }

    pub fn suite(&self) -> &TestSuite {
        &self.suite
    }

    /// Run every case in `file` (or the default file) against `model`.
    ///
    /// With progress, case lines are printed as cases finish; without it
    /// they are printed in input order once the batch is done. The summary
    /// is printed even when exporting the report fails.
    pub async fn run(
        &self,
        file: Option<&Path>,
        model: &Model,
        show_progress: bool,
    ) -> Result<BatchReport, TestSuiteError> {
        let path = file.unwrap_or(self.suite.default_file.as_path());
        let cases = self.suite.source.load(path)?;
        if cases.is_empty() {
            return Err(TestSuiteError::Empty(path.to_path_buf()));
        }

        println!(
            "Running {} test cases from {} with {}",
            cases.len(),
            path.display(),
            model
        );

        let input = RunBatchInput::new(cases, model.clone()).with_params(self.suite.params.clone());
        let report = if show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            let report = self.use_case.execute_with_progress(input, &NoProgress).await;
            for (index, case) in report.details.iter().enumerate() {
                println!(
                    "{}",
                    ConsoleFormatter::format_case_line(index, report.total, case)
                );
            }
            report
        };

        match self.suite.sink.export(&report, Some(model)) {
            Ok(location) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_batch_summary(&report, Some(&location))
                );
                Ok(report)
            }
            Err(e) => {
                println!("{}", ConsoleFormatter::format_batch_summary(&report, None));
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nodeseq_application::{GatewayError, LlmSession};
    use nodeseq_domain::{NodeSequence, TestCase};
    use std::sync::Mutex;

    /// Always proposes `[OnClick, Log]` and always approves it
    struct FixedGateway;

    #[async_trait]
    impl LlmGateway for FixedGateway {
        async fn create_session_with_system_prompt(
            &self,
            _model: &Model,
            _system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Err(GatewayError::Other("not used".to_string()))
        }

        async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
            Ok(vec![Model::default()])
        }

        async fn chat(
            &self,
            _model: &Model,
            _system_prompt: &str,
            user_prompt: &str,
        ) -> Result<String, GatewayError> {
            if user_prompt.starts_with("Original User Request:") {
                Ok(r#"{"valid": true}"#.to_string())
            } else {
                Ok(r#"{"sequence": ["OnClick", "Log"]}"#.to_string())
            }
        }
    }

    struct StaticSource(Vec<TestCase>);

    impl TestCaseSource for StaticSource {
        fn load(&self, _location: &Path) -> Result<Vec<TestCase>, TestCaseSourceError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct MemorySink {
        exported: Mutex<Option<(BatchReport, Option<Model>)>>,
        fail: bool,
    }

    impl ReportSink for MemorySink {
        fn export(
            &self,
            report: &BatchReport,
            model: Option<&Model>,
        ) -> Result<String, ReportSinkError> {
            if self.fail {
                return Err(ReportSinkError::Serialize("disk full".to_string()));
            }
            *self.exported.lock().unwrap() = Some((report.clone(), model.cloned()));
            Ok("memory".to_string())
        }
    }

    fn presenter(cases: Vec<TestCase>, sink: Arc<MemorySink>) -> BatchPresenter<FixedGateway> {
        let suite = TestSuite {
            source: Arc::new(StaticSource(cases)),
            sink,
            default_file: PathBuf::from("test_cases.json"),
            params: BatchParams::default().with_concurrency(Some(2)),
        };
        BatchPresenter::new(RunBatchUseCase::new(Arc::new(FixedGateway)), suite)
    }

    #[tokio::test]
    async fn test_run_exports_report_with_model() {
        let sink = Arc::new(MemorySink::default());
        let cases = vec![
            TestCase::new("Log on click", NodeSequence::from(["OnClick", "Log"])),
            TestCase::new("Alert on click", NodeSequence::from(["OnClick", "Alert"])),
        ];

        let report = presenter(cases, Arc::clone(&sink))
            .run(None, &Model::Llama31_8b, false)
            .await
            .unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);

        let exported = sink.exported.lock().unwrap().clone().unwrap();
        assert_eq!(exported.0, report);
        assert_eq!(exported.1, Some(Model::Llama31_8b));
    }

    #[tokio::test]
    async fn test_empty_suite_is_an_error() {
        let sink = Arc::new(MemorySink::default());
        let err = presenter(Vec::new(), Arc::clone(&sink))
            .run(Some(Path::new("empty.json")), &Model::default(), false)
            .await
            .unwrap_err();

        assert!(matches!(err, TestSuiteError::Empty(ref p) if p == Path::new("empty.json")));
        assert!(sink.exported.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_export_failure_is_reported() {
        let sink = Arc::new(MemorySink {
            fail: true,
            ..MemorySink::default()
        });
        let cases = vec![TestCase::new("Log on click", NodeSequence::from(["OnClick", "Log"]))];

        let err = presenter(cases, sink)
            .run(None, &Model::default(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, TestSuiteError::Export(_)));
    }
}
