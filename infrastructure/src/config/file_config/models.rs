//! Model configuration from TOML (`[models]` section)

use nodeseq_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Model selection from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// default = "qwen2.5-coder:7b"
/// available = ["qwen2.5-coder:7b", "qwen2.5-coder:14b", "llama3.1:8b", "codegemma:7b"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model used when none is given on the command line
    pub default: Option<String>,
    /// Models offered for switching in the REPL
    pub available: Option<Vec<String>>,
}

impl FileModelsConfig {
    /// Parse the default model, collecting an issue for an empty name.
    pub fn parse_default(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        match self.default.as_deref() {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName,
                    "models.default: model name cannot be empty",
                )],
            ),
            Some(s) => (Some(parse_model(s)), Vec::new()),
        }
    }

    /// Parse the available list, collecting issues for empty names.
    pub fn parse_available(&self) -> (Option<Vec<Model>>, Vec<ConfigIssue>) {
        let Some(names) = &self.available else {
            return (None, Vec::new());
        };

        let mut issues = Vec::new();
        let mut models = Vec::new();
        for name in names {
            if name.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName,
                    "models.available: model name cannot be empty in list",
                ));
            } else {
                models.push(parse_model(name));
            }
        }
        (Some(models), issues)
    }

    /// Resolved default model
    pub fn default_model(&self) -> Model {
        self.parse_default().0.unwrap_or_default()
    }

    /// Resolved switchable models; the built-in list when unset or empty
    pub fn available_models(&self) -> Vec<Model> {
        match self.parse_available().0 {
            Some(models) if !models.is_empty() => models,
            _ => Model::default_models(),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_default().1;
        issues.extend(self.parse_available().1);

        let default = self.default_model();
        if !self.available_models().contains(&default) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::DefaultModelNotListed,
                format!(
                    "models.default: '{}' is not in models.available; it cannot be selected again after switching away",
                    default
                ),
            ));
        }
        issues
    }
}

fn parse_model(name: &str) -> Model {
    let Ok(model) = name.trim().parse::<Model>();
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_to_builtins() {
        let config = FileModelsConfig::default();
        assert_eq!(config.default_model(), Model::QwenCoder7b);
        assert_eq!(config.available_models(), Model::default_models());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_custom_default_model() {
        let config = FileModelsConfig {
            default: Some("mistral:7b".to_string()),
            available: Some(vec!["mistral:7b".to_string(), "llama3.1:8b".to_string()]),
        };
        assert_eq!(config.default_model(), Model::Custom("mistral:7b".to_string()));
        assert_eq!(config.available_models().len(), 2);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_default_is_error() {
        let config = FileModelsConfig {
            default: Some("  ".to_string()),
            available: None,
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].code, ConfigIssueCode::EmptyModelName);
        assert_eq!(config.default_model(), Model::default());
    }

    #[test]
    fn test_unlisted_default_warns() {
        let config = FileModelsConfig {
            default: Some("codegemma:7b".to_string()),
            available: Some(vec!["llama3.1:8b".to_string()]),
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::DefaultModelNotListed);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_empty_available_list_falls_back() {
        let config = FileModelsConfig {
            default: None,
            available: Some(vec![]),
        };
        assert_eq!(config.available_models(), Model::default_models());
    }
}
