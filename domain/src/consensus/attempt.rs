//! Attempt failure taxonomy

use crate::response::ParseError;
use thiserror::Error;

/// Why a single generation attempt was abandoned
///
/// None of these escape a consensus run: each one consumes one attempt of
/// the budget and the loop moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptFailure {
    #[error("Gateway error: {0}")]
    Transport(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unknown nodes: [{}]", invalid_nodes.join(", "))]
    Structural { invalid_nodes: Vec<String> },
}

impl AttemptFailure {
    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            AttemptFailure::Transport(_) => "transport",
            AttemptFailure::Parse(_) => "parse",
            AttemptFailure::Structural { .. } => "structural",
        }
    }
}
