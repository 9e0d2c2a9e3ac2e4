//! Domain layer for nodeseq
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Node sequences
//!
//! A free-text instruction is turned into an ordered list of nodes drawn
//! from a fixed [`NodeVocabulary`]. Order is execution order, so
//! [`NodeSequence`] equality is order-sensitive.
//!
//! ## Consensus
//!
//! Model output is unreliable. A run generates candidates, rejects the
//! structurally invalid ones, asks for a streak of semantic validations,
//! and when the budget runs out trusts the most frequent candidate
//! ([`SequenceTally`]).

pub mod config;
pub mod consensus;
pub mod core;
pub mod evaluation;
pub mod node;
pub mod prompt;
pub mod response;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use consensus::{
    AttemptFailure, ConsensusPolicy, ConsensusResult, ConsensusStatus, ConsensusTrace,
    SequenceTally, TraceEntry, TraceLevel,
};
pub use core::{error::DomainError, model::Model, query::UserQuery};
pub use evaluation::{BatchReport, CaseReport, CaseVerdict, TestCase};
pub use node::{NodeCategory, NodeSequence, NodeSpec, NodeVocabulary, StructuralCheck};
pub use prompt::PromptTemplate;
pub use response::{ParseError, parse_sequence_response, parse_validation_verdict};
