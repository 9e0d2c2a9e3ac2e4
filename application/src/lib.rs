//! Application layer for nodeseq
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BatchParams;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{BatchProgressNotifier, ConsensusProgressNotifier, NoProgress},
    report_sink::{ReportSink, ReportSinkError},
    test_case_source::{TestCaseSource, TestCaseSourceError},
};
pub use use_cases::generate::SequenceGenerator;
pub use use_cases::run_batch::{RunBatchInput, RunBatchUseCase};
pub use use_cases::run_consensus::{RunConsensusError, RunConsensusInput, RunConsensusUseCase};
pub use use_cases::validate::SemanticValidator;
