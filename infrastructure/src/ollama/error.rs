//! Error types for the Ollama adapter

use nodeseq_application::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to an Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Ollama API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<OllamaError> for GatewayError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Network(e) if e.is_timeout() => GatewayError::Timeout,
            OllamaError::Network(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            OllamaError::Network(e) => GatewayError::RequestFailed(e.to_string()),
            OllamaError::ModelNotFound(model) => GatewayError::ModelNotAvailable(model),
            OllamaError::InvalidResponse(msg) => GatewayError::InvalidResponse(msg),
            err @ OllamaError::ApiError { .. } => GatewayError::RequestFailed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found_maps_to_unavailable() {
        let err: GatewayError = OllamaError::ModelNotFound("phi3".to_string()).into();
        assert_eq!(err, GatewayError::ModelNotAvailable("phi3".to_string()));
    }

    #[test]
    fn test_api_error_keeps_status() {
        let err: GatewayError = OllamaError::ApiError {
            status: 500,
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(
            err,
            GatewayError::RequestFailed("Ollama API error (status 500): boom".to_string())
        );
    }
}
