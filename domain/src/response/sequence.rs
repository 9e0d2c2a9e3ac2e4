//! Generation reply parsing

use super::error::ParseError;
use super::fence::strip_code_fence;
use super::literal::parse_string_list;
use crate::node::NodeSequence;
use serde_json::Value;

/// One way of reading a node list out of a reply.
///
/// Strategies are tried in [`ParseStrategy::ORDER`]. A strategy that does
/// not apply to the text is skipped; one that applies but fails records its
/// error and the next strategy is tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// `{"sequence": ["A", "B"]}`
    JsonObject,
    /// `["A", "B"]`
    JsonArray,
    /// `['A', 'B']`, only when the text is not valid JSON
    BracketedLiteral,
}

impl ParseStrategy {
    pub const ORDER: [ParseStrategy; 3] = [
        ParseStrategy::JsonObject,
        ParseStrategy::JsonArray,
        ParseStrategy::BracketedLiteral,
    ];

    /// `Ok(None)` means the strategy does not apply to this text.
    fn apply(self, text: &str, json: Option<&Value>) -> Result<Option<Vec<String>>, ParseError> {
        match (self, json) {
            (ParseStrategy::JsonObject, Some(Value::Object(map))) => match map.get("sequence") {
                Some(Value::Array(items)) => string_items(items).map(Some),
                Some(_) => Err(ParseError::InvalidFormat(
                    "`sequence` is not a list".to_string(),
                )),
                None => Err(ParseError::InvalidFormat(
                    "object has no `sequence` key".to_string(),
                )),
            },
            (ParseStrategy::JsonArray, Some(Value::Array(items))) => string_items(items).map(Some),
            (ParseStrategy::BracketedLiteral, None) if is_bracketed(text) => {
                Ok(Some(parse_string_list(text)?))
            }
            _ => Ok(None),
        }
    }
}

/// Parse a generation reply into a node sequence.
///
/// Code fences are stripped first. The remaining text is read as a JSON
/// object with a `sequence` list, a bare JSON list, or (when it is not valid
/// JSON but is bracketed) a literal list of quoted strings. Elements must be
/// strings and the result must be non-empty; membership in the vocabulary is
/// not checked here.
///
/// # Examples
///
/// ```
/// use nodeseq_domain::response::parse_sequence_response;
/// use nodeseq_domain::NodeSequence;
///
/// let seq = parse_sequence_response("```json\n{\"sequence\": [\"Log\"]}\n```").unwrap();
/// assert_eq!(seq, NodeSequence::from(["Log"]));
///
/// assert!(parse_sequence_response("not json and not a list").is_err());
/// ```
pub fn parse_sequence_response(raw: &str) -> Result<NodeSequence, ParseError> {
    let text = strip_code_fence(raw);
    if text.is_empty() {
        return Err(ParseError::EmptyResponse);
    }

    let json = serde_json::from_str::<Value>(text);
    let mut last_error = None;

    for strategy in ParseStrategy::ORDER {
        match strategy.apply(text, json.as_ref().ok()) {
            Ok(Some(nodes)) if nodes.is_empty() => return Err(ParseError::EmptySequence),
            Ok(Some(nodes)) => return Ok(NodeSequence::new(nodes)),
            Ok(None) => {}
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error.unwrap_or_else(|| match json {
        Err(e) => ParseError::InvalidJson(e.to_string()),
        Ok(_) => ParseError::InvalidFormat("expected a list or an object".to_string()),
    }))
}

fn is_bracketed(text: &str) -> bool {
    text.starts_with('[') && text.ends_with(']')
}

fn string_items(items: &[Value]) -> Result<Vec<String>, ParseError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(ParseError::NonStringElement { index }),
        })
        .collect()
}
