//! Ollama adapter
//!
//! Implements the [`LlmGateway`](nodeseq_application::LlmGateway) port over
//! the Ollama REST API.

pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
