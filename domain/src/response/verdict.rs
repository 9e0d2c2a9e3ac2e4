//! Validation reply parsing

use super::error::ParseError;
use super::fence::strip_code_fence;
use serde_json::Value;

/// Parse a validation reply of the form `{"valid": true}`.
///
/// Only a JSON object with a boolean `valid` key is accepted. Callers treat
/// any error as a failed validation.
pub fn parse_validation_verdict(raw: &str) -> Result<bool, ParseError> {
    let text = strip_code_fence(raw);
    if text.is_empty() {
        return Err(ParseError::EmptyResponse);
    }

    let value: Value =
        serde_json::from_str(text).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    match value.get("valid") {
        Some(Value::Bool(valid)) => Ok(*valid),
        Some(_) => Err(ParseError::InvalidFormat(
            "`valid` is not a boolean".to_string(),
        )),
        None => Err(ParseError::InvalidFormat(
            "missing `valid` key".to_string(),
        )),
    }
}
