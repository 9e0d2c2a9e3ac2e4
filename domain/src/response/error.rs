//! Parse error types

use thiserror::Error;

/// Failure to turn a model reply into a usable value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Failed to parse response: empty response")]
    EmptyResponse,

    #[error("Failed to parse response: invalid response format ({0})")]
    InvalidFormat(String),

    #[error("Failed to parse response: {0}")]
    InvalidJson(String),

    #[error("Failed to parse response: {0}")]
    InvalidLiteral(#[from] LiteralError),

    #[error("Failed to parse response: element {index} is not a string")]
    NonStringElement { index: usize },

    #[error("Failed to parse response: sequence is empty")]
    EmptySequence,
}

/// Failure inside the quoted-string list fallback
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("literal is not enclosed in brackets")]
    NotBracketed,

    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },
}
