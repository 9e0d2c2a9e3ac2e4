//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: LLM models that can generate and validate sequences
//! - [`query::UserQuery`]: a validated free-text instruction
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod query;
