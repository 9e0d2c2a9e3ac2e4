//! Markdown code fence removal

const FENCE: &str = "```";

/// Openers recognised at the start of a reply, longest first
const OPENERS: [&str; 3] = ["```json", "```python", FENCE];

/// Remove an enclosing markdown code fence, if present.
///
/// Handles `` ```json ``, `` ```python `` and bare `` ``` `` openers and a
/// trailing `` ``` `` closer, then trims surrounding whitespace. Text
/// without fences is only trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = OPENERS.iter().find_map(|opener| text.strip_prefix(opener)) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}
