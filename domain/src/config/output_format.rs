//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for consensus results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Status, sequence and the attempt trace
    Full,
    /// Status and sequence only (default)
    #[default]
    Sequence,
    /// JSON output
    Json,
}
