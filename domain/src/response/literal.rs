//! Bracketed string-list literal parsing
//!
//! Accepts the list syntax some models emit instead of JSON, e.g.
//! `['OnClick', "FetchData", 'Show',]`. Only quoted strings, commas and
//! whitespace are allowed inside the brackets; nothing is evaluated.

use super::error::LiteralError;
use std::iter::Peekable;
use std::str::CharIndices;

/// Parse a bracketed list of single- or double-quoted strings.
pub fn parse_string_list(text: &str) -> Result<Vec<String>, LiteralError> {
    let body = text
        .trim()
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .ok_or(LiteralError::NotBracketed)?;

    let mut chars = body.char_indices().peekable();
    let mut items = Vec::new();

    loop {
        skip_whitespace(&mut chars);
        match chars.next() {
            None => break,
            Some((offset, quote @ ('\'' | '"'))) => {
                items.push(read_quoted(&mut chars, quote, offset)?);
                skip_whitespace(&mut chars);
                match chars.next() {
                    None => break,
                    Some((_, ',')) => continue,
                    Some((offset, ch)) => return Err(LiteralError::UnexpectedChar { ch, offset }),
                }
            }
            Some((offset, ch)) => return Err(LiteralError::UnexpectedChar { ch, offset }),
        }
    }

    Ok(items)
}

fn skip_whitespace(chars: &mut Peekable<CharIndices<'_>>) {
    while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
}

fn read_quoted(
    chars: &mut Peekable<CharIndices<'_>>,
    quote: char,
    start: usize,
) -> Result<String, LiteralError> {
    let mut value = String::new();

    while let Some((_, ch)) = chars.next() {
        match ch {
            '\\' => {
                let (_, escaped) = chars
                    .next()
                    .ok_or(LiteralError::UnterminatedString { offset: start })?;
                match escaped {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    '\\' | '\'' | '"' => value.push(escaped),
                    other => {
                        value.push('\\');
                        value.push(other);
                    }
                }
            }
            c if c == quote => return Ok(value),
            c => value.push(c),
        }
    }

    Err(LiteralError::UnterminatedString { offset: start })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quoted_list() {
        assert_eq!(
            parse_string_list("['OnClick', 'FetchData', 'DisplayModal']").unwrap(),
            vec!["OnClick", "FetchData", "DisplayModal"]
        );
    }

    #[test]
    fn test_mixed_quotes_and_trailing_comma() {
        assert_eq!(
            parse_string_list("[ \"Filter\" ,'Sort',\n 'Show', ]").unwrap(),
            vec!["Filter", "Sort", "Show"]
        );
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(parse_string_list(r"['it\'s']").unwrap(), vec!["it's"]);
    }

    #[test]
    fn test_empty_list() {
        assert!(parse_string_list("[]").unwrap().is_empty());
        assert!(parse_string_list("[   ]").unwrap().is_empty());
    }

    #[test]
    fn test_bare_identifier_rejected() {
        assert!(matches!(
            parse_string_list("[OnClick, 'Show']"),
            Err(LiteralError::UnexpectedChar { ch: 'O', .. })
        ));
    }

    #[test]
    fn test_expression_rejected() {
        assert!(parse_string_list("['a' + 'b']").is_err());
        assert!(parse_string_list("[__import__('os')]").is_err());
    }

    #[test]
    fn test_double_comma_rejected() {
        assert!(matches!(
            parse_string_list("['a',,'b']"),
            Err(LiteralError::UnexpectedChar { ch: ',', .. })
        ));
    }

    #[test]
    fn test_unterminated_string() {
        assert!(matches!(
            parse_string_list("['OnClick]"),
            Err(LiteralError::UnterminatedString { offset: 0 })
        ));
    }

    #[test]
    fn test_not_bracketed() {
        assert_eq!(
            parse_string_list("'OnClick'"),
            Err(LiteralError::NotBracketed)
        );
    }
}
