//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl DomainError {
    /// Shorthand for a parameter that must be at least one
    pub fn must_be_positive(name: &'static str) -> Self {
        DomainError::InvalidParameter {
            name,
            reason: "must be at least 1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let error = DomainError::must_be_positive("max_attempts");
        assert_eq!(
            error.to_string(),
            "Invalid parameter `max_attempts`: must be at least 1"
        );
    }

    #[test]
    fn test_invalid_query_display() {
        let error = DomainError::InvalidQuery("empty".to_string());
        assert_eq!(error.to_string(), "Invalid query: empty");
    }
}
