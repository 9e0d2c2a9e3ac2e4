//! HTTP client for the Ollama REST API

use super::error::{OllamaError, Result};
use super::protocol::{ChatMessage, ChatRequest, ChatResponse, ErrorResponse, TagsResponse};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Where Ollama listens when nothing else is configured
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Thin wrapper over `reqwest` for the two endpoints the gateway needs
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    host: String,
}

impl OllamaClient {
    /// Create a client for `host`. `timeout` bounds each request.
    pub fn new(host: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let host = host.into().trim_end_matches('/').to_string();

        Ok(Self {
            http: builder.build()?,
            host,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Non-streaming chat completion; returns the trimmed reply text
    pub async fn chat(&self, model: &str, messages: Vec<ChatMessage>) -> Result<String> {
        let url = format!("{}/api/chat", self.host);
        debug!(%model, messages = messages.len(), "chat: sending");

        let body = ChatRequest {
            model,
            messages,
            stream: false,
        };
        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            debug!(%status, "chat: API error");

            if status == StatusCode::NOT_FOUND && message.contains("not found") {
                return Err(OllamaError::ModelNotFound(model.to_string()));
            }
            return Err(OllamaError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::InvalidResponse(e.to_string()))?;

        debug!(done = reply.done, bytes = reply.message.content.len(), "chat: success");
        Ok(reply.message.content.trim().to_string())
    }

    /// Names of the models pulled on the server
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.host);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OllamaError::ApiError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::InvalidResponse(e.to_string()))?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_chat_returns_trimmed_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(json!({"model": "llama3.1:8b", "stream": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": {"role": "assistant", "content": "  [\"Log\"]\n"},
                "done": true
            })))
            .mount(&server)
            .await;

        let client = OllamaClient::new(server.uri(), None).unwrap();
        let reply = client
            .chat("llama3.1:8b", vec![ChatMessage::user("hi")])
            .await
            .unwrap();
        assert_eq!(reply, "[\"Log\"]");
    }

    #[tokio::test]
    async fn test_chat_missing_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"error": "model 'phi3' not found, try pulling it first"})),
            )
            .mount(&server)
            .await;

        let client = OllamaClient::new(server.uri(), None).unwrap();
        let err = client
            .chat("phi3", vec![ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, OllamaError::ModelNotFound(m) if m == "phi3"));
    }

    #[tokio::test]
    async fn test_chat_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "out of memory"})),
            )
            .mount(&server)
            .await;

        let client = OllamaClient::new(server.uri(), None).unwrap();
        let err = client
            .chat("llama3.1:8b", vec![ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OllamaError::ApiError { status: 500, ref message } if message == "out of memory"
        ));
    }

    #[tokio::test]
    async fn test_chat_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = OllamaClient::new(server.uri(), None).unwrap();
        let err = client
            .chat("llama3.1:8b", vec![ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, OllamaError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_list_models() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{"name": "qwen2.5-coder:7b"}, {"name": "codegemma:7b"}]
            })))
            .mount(&server)
            .await;

        let client = OllamaClient::new(format!("{}/", server.uri()), None).unwrap();
        assert_eq!(
            client.list_models().await.unwrap(),
            vec!["qwen2.5-coder:7b", "codegemma:7b"]
        );
    }

    #[test]
    fn test_host_trailing_slash_trimmed() {
        let client = OllamaClient::new("http://example:11434/", None).unwrap();
        assert_eq!(client.host(), "http://example:11434");
    }
}
