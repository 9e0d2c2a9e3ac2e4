//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// # Example
///
/// ```toml
/// [repl]
/// show_progress = true
/// show_steps = false
/// history_file = "~/.local/share/nodeseq/history.txt"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Print attempt and validation events while a run is in progress
    pub show_progress: bool,
    /// Print the attempt trace after each answer
    pub show_steps: bool,
    /// History file; defaults to the platform data directory
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            show_steps: false,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// History path with a leading `~/` expanded
    pub fn history_path(&self) -> Option<PathBuf> {
        let raw = self.history_file.as_deref()?;
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_path_unset() {
        assert!(FileReplConfig::default().history_path().is_none());
    }

    #[test]
    fn test_history_path_absolute() {
        let config = FileReplConfig {
            history_file: Some("/tmp/nodeseq_history".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/nodeseq_history"))
        );
    }

    #[test]
    fn test_history_path_expands_home() {
        let config = FileReplConfig {
            history_file: Some("~/nodeseq/history.txt".to_string()),
            ..Default::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.history_path(), Some(home.join("nodeseq/history.txt")));
        }
    }
}
