//! Ollama LLM Gateway implementation

use super::client::{DEFAULT_HOST, OllamaClient};
use super::session::OllamaSession;
use async_trait::async_trait;
use nodeseq_application::{GatewayError, LlmGateway, LlmSession};
use nodeseq_domain::Model;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// LLM Gateway implementation for a local or remote Ollama server
pub struct OllamaLlmGateway {
    client: Arc<OllamaClient>,
}

impl OllamaLlmGateway {
    /// Create a gateway for `host` with an optional per-request timeout
    pub fn new(host: &str, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let client = OllamaClient::new(host, timeout)
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!("OllamaLlmGateway initialized for {}", client.host());

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Gateway for the default local server
    pub fn local() -> Result<Self, GatewayError> {
        Self::new(DEFAULT_HOST, None)
    }

    pub fn host(&self) -> &str {
        self.client.host()
    }
}

#[async_trait]
impl LlmGateway for OllamaLlmGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OllamaSession::new(
            Arc::clone(&self.client),
            model.clone(),
            Some(system_prompt.to_string()),
        )))
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        let names = self.client.list_models().await?;
        Ok(names
            .iter()
            .map(|name| {
                let Ok(model) = name.parse::<Model>();
                model
            })
            .collect())
    }
}
