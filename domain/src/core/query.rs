//! User query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A free-text instruction to convert into a node sequence (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserQuery {
    content: String,
}

impl UserQuery {
    /// Create a new query, rejecting empty or whitespace-only input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::InvalidQuery(
                "query cannot be empty".to_string(),
            ));
        }
        Ok(Self { content })
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for UserQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for UserQuery {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        UserQuery::try_new(s)
    }
}

impl TryFrom<&str> for UserQuery {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        UserQuery::try_new(s)
    }
}

impl From<UserQuery> for String {
    fn from(q: UserQuery) -> Self {
        q.content
    }
}
