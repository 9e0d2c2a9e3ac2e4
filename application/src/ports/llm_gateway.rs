//! LLM Gateway port
//!
//! How use cases reach a language model. Generation and validation both go
//! through [`LlmGateway::chat`]; adapters only have to open sessions.

use async_trait::async_trait;
use nodeseq_domain::Model;
use thiserror::Error;

/// Failure to obtain a reply from the model server
///
/// Inside a consensus run every variant is recoverable: the attempt is
/// abandoned and the next one starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to a model server
///
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Open a session whose every request carries `system_prompt`
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Models the server can serve right now
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;

    /// System prompt plus a single user message, text back.
    ///
    /// Each call is independent; no history is shared between calls.
    async fn chat(
        &self,
        model: &Model,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        let session = self
            .create_session_with_system_prompt(model, system_prompt)
            .await?;
        session.send(user_prompt).await
    }
}

/// A session bound to one model and one system prompt
#[async_trait]
pub trait LlmSession: Send + Sync {
    fn model(&self) -> &Model;

    /// Send one user message and return the reply text
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
