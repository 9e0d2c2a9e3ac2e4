//! Ollama session
//!
//! Ollama's chat endpoint is stateless, so a session is just the model and
//! system prompt replayed with every message.

use super::client::OllamaClient;
use super::protocol::ChatMessage;
use async_trait::async_trait;
use nodeseq_application::{GatewayError, LlmSession};
use nodeseq_domain::Model;
use std::sync::Arc;

pub struct OllamaSession {
    client: Arc<OllamaClient>,
    model: Model,
    system_prompt: Option<String>,
}

impl OllamaSession {
    pub fn new(client: Arc<OllamaClient>, model: Model, system_prompt: Option<String>) -> Self {
        Self {
            client,
            model,
            system_prompt,
        }
    }
}

#[async_trait]
impl LlmSession for OllamaSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &self.system_prompt {
            messages.push(ChatMessage::system(system.clone()));
        }
        messages.push(ChatMessage::user(content));

        Ok(self.client.chat(self.model.as_str(), messages).await?)
    }
}
