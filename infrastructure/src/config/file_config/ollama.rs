//! Ollama connection settings from TOML (`[ollama]` section)

use crate::ollama::client::DEFAULT_HOST;
use nodeseq_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Standard environment variable read by the Ollama tooling
pub const OLLAMA_HOST_ENV: &str = "OLLAMA_HOST";

/// # Example
///
/// ```toml
/// [ollama]
/// host = "http://gpu-box:11434"
/// request_timeout_secs = 120
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Server URL; falls back to `$OLLAMA_HOST`, then the local default
    pub host: Option<String>,
    /// Per-request timeout; unset means none
    pub request_timeout_secs: Option<u64>,
}

impl FileOllamaConfig {
    pub fn resolved_host(&self) -> String {
        self.resolve_host_with(std::env::var(OLLAMA_HOST_ENV).ok())
    }

    fn resolve_host_with(&self, env_host: Option<String>) -> String {
        self.host
            .clone()
            .or(env_host.filter(|h| !h.trim().is_empty()))
            .map(|h| with_scheme(h.trim()))
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        match &self.host {
            Some(host) if host.trim().is_empty() => vec![ConfigIssue::error(
                ConfigIssueCode::EmptyHost,
                "ollama.host cannot be empty",
            )],
            _ => Vec::new(),
        }
    }
}

/// `OLLAMA_HOST` is often given as bare `host:port`
fn with_scheme(host: &str) -> String {
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_host_wins_over_env() {
        let config = FileOllamaConfig {
            host: Some("http://configured:11434".to_string()),
            request_timeout_secs: None,
        };
        assert_eq!(
            config.resolve_host_with(Some("http://env:11434".to_string())),
            "http://configured:11434"
        );
    }

    #[test]
    fn test_env_host_used_when_unset() {
        let config = FileOllamaConfig::default();
        assert_eq!(
            config.resolve_host_with(Some("10.0.0.5:11434".to_string())),
            "http://10.0.0.5:11434"
        );
    }

    #[test]
    fn test_default_host() {
        let config = FileOllamaConfig::default();
        assert_eq!(config.resolve_host_with(None), DEFAULT_HOST);
        assert_eq!(config.resolve_host_with(Some("  ".to_string())), DEFAULT_HOST);
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = FileOllamaConfig {
            host: None,
            request_timeout_secs: Some(0),
        };
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_empty_host_is_error() {
        let config = FileOllamaConfig {
            host: Some(String::new()),
            request_timeout_secs: None,
        };
        assert_eq!(config.validate().len(), 1);
    }
}
