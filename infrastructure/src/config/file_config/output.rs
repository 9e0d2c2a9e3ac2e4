//! Output configuration from TOML (`[output]` section)

use nodeseq_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// `[output]` section
///
/// ```toml
/// [output]
/// format = "full"   # full | sequence | json
/// color = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Unset means the one-node-per-line rendering
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Configured format, or the default one-node-per-line rendering
    pub fn resolved_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
