//! Token-level decoding of array literal elements.
//!
//! An array literal's inner text is a comma separated list of tokens. A token
//! is either quoted (`"mary had a \"lamb\""`) or bare (`mary`):
//!
//! - **Quoted** tokens may contain anything; `"` and `\` inside them are
//!   backslash-escaped. They are unescaped into an owned [`String`].
//! - **Bare** tokens are taken verbatim up to the next comma and borrowed from
//!   the input. The decoder is lax about their content: the only restriction is
//!   that a bare token cannot contain a comma.
//!
//! [`Tokens`] walks a whole literal token by token and is what both the string
//! decoder and the serde [`Deserializer`](crate::Deserializer) are built on.
//!
//! ```rust
//! use serde_pgarray::{Token, Tokens};
//!
//! let tokens: Vec<Token> = Tokens::from_literal(r#"{mary,"had a \"lamb\""}"#)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(tokens[0], Token::Bare("mary"));
//! assert_eq!(tokens[1], Token::Quoted("had a \"lamb\"".to_string()));
//! ```

use crate::{Error, Result};
use std::iter::FusedIterator;

/// The bare token the database writes for a NULL element.
pub const NULL_ELEMENT: &str = "NULL";

/// One decoded element of an array literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// A double-quoted element, already unescaped
    Quoted(String),
    /// An unquoted element, verbatim
    Bare(&'a str),
}

impl<'a> Token<'a> {
    /// The element text.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Quoted(s) => s,
            Token::Bare(s) => s,
        }
    }

    /// Converts the token into an owned string.
    pub fn into_string(self) -> String {
        match self {
            Token::Quoted(s) => s,
            Token::Bare(s) => s.to_string(),
        }
    }

    /// Whether the element was written inside double quotes.
    pub fn is_quoted(&self) -> bool {
        matches!(self, Token::Quoted(_))
    }

    /// Returns `true` for a bare `NULL` (any case). A quoted `"NULL"` is the
    /// four-letter string.
    pub fn is_null(&self) -> bool {
        matches!(self, Token::Bare(s) if s.eq_ignore_ascii_case(NULL_ELEMENT))
    }
}

/// Decodes the token at the start of `source`.
///
/// Returns the token and the remainder positioned at the start of the next
/// token. An empty remainder means this was the last token. `offset` is the
/// byte offset of `source` within the literal and is only used for error
/// positions.
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the token is malformed.
pub fn decode_token(source: &str, offset: usize) -> Result<(Token<'_>, &str)> {
    match source.strip_prefix('"') {
        Some(quoted) => {
            let (text, rest) = decode_quoted_token(quoted, offset + 1)?;
            Ok((Token::Quoted(text), rest))
        }
        None => {
            let (text, rest) = decode_bare_token(source, offset)?;
            Ok((Token::Bare(text), rest))
        }
    }
}

/// Decodes a bare token: everything up to the next comma.
///
/// Without a comma the whole input is the token and the remainder is empty.
/// A comma that is the very last character is rejected: a bare token cannot be
/// followed by an empty trailing element.
///
/// # Errors
///
/// Returns [`Error::Syntax`] on a dangling trailing comma.
pub fn decode_bare_token(source: &str, offset: usize) -> Result<(&str, &str)> {
    let Some(comma) = source.find(',') else {
        return Ok((source, ""));
    };
    let tail = &source[comma + 1..];
    if tail.is_empty() {
        return Err(Error::syntax(
            offset + comma,
            "dangling ',' after unquoted element",
        ));
    }
    Ok((&source[..comma], tail))
}

/// Decodes a quoted token. `source` starts right after the opening quote.
///
/// After the closing quote either nothing remains (last element) or the next
/// character must be a comma, which is consumed.
///
/// # Errors
///
/// Returns [`Error::Syntax`] for an unterminated token, an invalid escape
/// sequence, or anything other than `,` after the closing quote.
pub fn decode_quoted_token(source: &str, offset: usize) -> Result<(String, &str)> {
    let bytes = source.as_bytes();
    // Escapes like \xHH produce raw bytes, so collect bytes and validate once.
    let mut token: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut pos = 0;

    loop {
        let Some(run) = bytes[pos..].iter().position(|&b| b == b'"' || b == b'\\') else {
            return Err(Error::syntax(
                offset + bytes.len(),
                "unterminated quoted element",
            ));
        };
        token.extend_from_slice(&bytes[pos..pos + run]);
        pos += run;
        if bytes[pos] == b'"' {
            break;
        }
        pos = unescape_into(bytes, pos, offset, &mut token)?;
    }

    let text = String::from_utf8(token)
        .map_err(|_| Error::syntax(offset, "quoted element is not valid UTF-8"))?;

    let rest = &source[pos + 1..];
    if rest.is_empty() {
        return Ok((text, rest));
    }
    match rest.strip_prefix(',') {
        Some(rest) => Ok((text, rest)),
        None => Err(Error::syntax(
            offset + pos + 1,
            "expected ',' after closing quote",
        )),
    }
}

/// Decodes the escape sequence whose backslash is at `pos`, appending the
/// produced bytes. Returns the position just past the sequence.
fn unescape_into(bytes: &[u8], pos: usize, offset: usize, out: &mut Vec<u8>) -> Result<usize> {
    let Some(&c) = bytes.get(pos + 1) else {
        return Err(Error::syntax(offset + pos, "unterminated escape sequence"));
    };

    let simple = match c {
        b'a' => Some(0x07),
        b'b' => Some(0x08),
        b'f' => Some(0x0C),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0B),
        b'\\' => Some(b'\\'),
        b'"' => Some(b'"'),
        _ => None,
    };
    if let Some(byte) = simple {
        out.push(byte);
        return Ok(pos + 2);
    }

    match c {
        b'x' => {
            let value = hex_value(bytes, pos + 2, 2, offset)?;
            // at most 0xFF with two digits
            out.push(value as u8);
            Ok(pos + 4)
        }
        b'u' | b'U' => {
            let digits = if c == b'u' { 4 } else { 8 };
            let value = hex_value(bytes, pos + 2, digits, offset)?;
            let ch = char::from_u32(value)
                .ok_or_else(|| Error::syntax(offset + pos, "invalid unicode code point"))?;
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            Ok(pos + 2 + digits)
        }
        b'0'..=b'7' => {
            let digits = bytes
                .get(pos + 1..pos + 4)
                .ok_or_else(|| Error::syntax(offset + pos, "truncated octal escape"))?;
            let mut value: u32 = 0;
            for &d in digits {
                if !(b'0'..=b'7').contains(&d) {
                    return Err(Error::syntax(offset + pos, "invalid octal escape"));
                }
                value = value * 8 + u32::from(d - b'0');
            }
            if value > 0xFF {
                return Err(Error::syntax(offset + pos, "octal escape out of range"));
            }
            out.push(value as u8);
            Ok(pos + 4)
        }
        _ => Err(Error::syntax(offset + pos, "unknown escape sequence")),
    }
}

fn hex_value(bytes: &[u8], start: usize, count: usize, offset: usize) -> Result<u32> {
    let digits = bytes
        .get(start..start + count)
        .ok_or_else(|| Error::syntax(offset + start, "truncated hex escape"))?;
    digits.iter().try_fold(0u32, |acc, &d| {
        char::from(d)
            .to_digit(16)
            .map(|v| acc * 16 + v)
            .ok_or_else(|| Error::syntax(offset + start, "invalid hex digit in escape"))
    })
}

/// Strips every leading and trailing brace, returning the inner text and the
/// number of bytes removed from the front.
///
/// This is a plain character trim; brace balance is not verified.
pub(crate) fn strip_braces(literal: &str) -> (&str, usize) {
    let is_brace = |c: char| c == '{' || c == '}';
    let front = literal.trim_start_matches(is_brace);
    let leading = literal.len() - front.len();
    (front.trim_end_matches(is_brace), leading)
}

/// Iterator over the tokens of an array literal.
///
/// Yields `Ok(token)` for each element in order. On a syntax error it yields
/// the error once and then stops.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    offset: usize,
    failed: bool,
}

impl<'a> Tokens<'a> {
    /// Iterates over inner text whose braces are already stripped.
    /// `offset` is where `inner` starts in the full literal.
    pub fn new(inner: &'a str, offset: usize) -> Self {
        Tokens {
            rest: inner,
            offset,
            failed: false,
        }
    }

    /// Iterates over a full literal such as `{a,"b"}`.
    pub fn from_literal(literal: &'a str) -> Self {
        let (inner, leading) = strip_braces(literal);
        Tokens::new(inner, leading)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }
        match decode_token(self.rest, self.offset) {
            Ok((token, rest)) => {
                self.offset += self.rest.len() - rest.len();
                self.rest = rest;
                Some(Ok(token))
            }
            Err(err) => {
                log::trace!("rejecting array literal token: {err}");
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted(source: &str) -> Result<(String, &str)> {
        decode_quoted_token(source, 0)
    }

    #[test]
    fn test_quoted_last_element() {
        assert_eq!(quoted(r#"mary""#).unwrap(), ("mary".to_string(), ""));
        assert_eq!(quoted(r#"""#).unwrap(), (String::new(), ""));
    }

    #[test]
    fn test_quoted_consumes_comma() {
        assert_eq!(quoted(r#"a",b"#).unwrap(), ("a".to_string(), "b"));
        // A comma with nothing after it ends the literal for quoted tokens.
        assert_eq!(quoted(r#"a","#).unwrap(), ("a".to_string(), ""));
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(quoted(r#"\"""#).unwrap().0, "\"");
        assert_eq!(quoted(r#"\\""#).unwrap().0, "\\");
        assert_eq!(quoted(r#"a\nb\tc""#).unwrap().0, "a\nb\tc");
        assert_eq!(quoted(r#"é\U0001F600""#).unwrap().0, "é😀");
        assert_eq!(quoted(r#"\xc3\xa9\101""#).unwrap().0, "éA");
    }

    #[test]
    fn test_quoted_raw_characters_verbatim() {
        assert_eq!(quoted("line\nbreak, {x}\"").unwrap().0, "line\nbreak, {x}");
        assert_eq!(quoted("zażółć\"").unwrap().0, "zażółć");
    }

    #[test]
    fn test_quoted_errors() {
        assert!(quoted("").unwrap_err().is_syntax());
        assert!(quoted("abc").unwrap_err().is_syntax());
        assert!(quoted(r#"a"b"#).unwrap_err().is_syntax());
        assert!(quoted(r#"a"""#).unwrap_err().is_syntax());
        assert!(quoted(r#"\'""#).unwrap_err().is_syntax());
        assert!(quoted(r#"\q""#).unwrap_err().is_syntax());
        assert!(quoted(r#"\x4""#).unwrap_err().is_syntax());
        assert!(quoted(r#"\777""#).unwrap_err().is_syntax());
        assert!(quoted(r#"\uD800""#).unwrap_err().is_syntax());
        assert!(quoted(r#"\xff""#).unwrap_err().is_syntax());
        assert!(quoted("\\").unwrap_err().is_syntax());
    }

    #[test]
    fn test_quoted_error_offset() {
        let err = decode_quoted_token(r#"ab"x"#, 10).unwrap_err();
        assert_eq!(
            err,
            Error::syntax(13, "expected ',' after closing quote")
        );
    }

    #[test]
    fn test_bare_tokens() {
        assert_eq!(decode_bare_token("mary", 0).unwrap(), ("mary", ""));
        assert_eq!(decode_bare_token("mary,had", 0).unwrap(), ("mary", "had"));
        assert_eq!(decode_bare_token(",x", 0).unwrap(), ("", "x"));
        assert_eq!(decode_bare_token("a b\"c", 0).unwrap(), ("a b\"c", ""));
        assert!(decode_bare_token("mary,", 0).unwrap_err().is_syntax());
    }

    #[test]
    fn test_token_null() {
        assert!(Token::Bare("NULL").is_null());
        assert!(Token::Bare("null").is_null());
        assert!(!Token::Quoted("NULL".to_string()).is_null());
        assert!(!Token::Bare("NULLS").is_null());
    }

    #[test]
    fn test_strip_braces() {
        assert_eq!(strip_braces("{a,b}"), ("a,b", 1));
        assert_eq!(strip_braces("{}"), ("", 2));
        assert_eq!(strip_braces("{{1},{2}}"), ("1},{2", 2));
        assert_eq!(strip_braces(r#"{"}"}"#), (r#""}""#, 1));
    }

    #[test]
    fn test_tokens_stop_after_error() {
        let mut tokens = Tokens::from_literal(r#"{a,"b"c,d}"#);
        assert_eq!(tokens.next(), Some(Ok(Token::Bare("a"))));
        assert!(matches!(tokens.next(), Some(Err(Error::Syntax { offset: 6, .. }))));
        assert_eq!(tokens.next(), None);
    }
}
