//! Flat string array decoding and encoding.
//!
//! [`decode_string_array`] turns a one-dimensional literal into a `Vec<String>`,
//! accepting both quoted and bare elements. [`encode_string_array`] always
//! quotes, so every string, whatever it contains, survives a round trip:
//!
//! ```rust
//! use serde_pgarray::{decode_string_array, encode_string_array};
//!
//! let words = vec!["mary".to_string(), "had a \"lamb\"".to_string(), "a,b".to_string()];
//! let literal = encode_string_array(&words);
//! assert_eq!(literal, r#"{"mary","had a \"lamb\"","a,b"}"#);
//! assert_eq!(decode_string_array(&literal).unwrap(), words);
//! ```
//!
//! The round trip only holds in that direction. Decoding accepts bare and
//! unescaped forms that encoding always re-quotes, so `encode(decode(l))` is
//! generally not byte-identical to `l`:
//!
//! ```rust
//! use serde_pgarray::{decode_string_array, encode_string_array};
//!
//! let decoded = decode_string_array("{mary,had}").unwrap();
//! assert_eq!(encode_string_array(&decoded), r#"{"mary","had"}"#);
//! ```

use crate::token::{strip_braces, Tokens};
use crate::{Error, Result};

/// The canonical literal of an empty array.
pub const EMPTY_ARRAY: &str = "{}";

/// Decodes an array literal into its string elements.
///
/// The outer braces are removed with a plain character trim. Empty inner text
/// yields an empty vector; otherwise the literal is decoded token by token.
///
/// # Examples
///
/// ```rust
/// use serde_pgarray::decode_string_array;
///
/// assert_eq!(decode_string_array(r#"{"mary","had"}"#).unwrap(), vec!["mary", "had"]);
/// assert_eq!(decode_string_array(r#"{"\""}"#).unwrap(), vec!["\""]);
/// assert!(decode_string_array("{}").unwrap().is_empty());
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] for an unterminated quoted element, a quoted
/// element followed by anything other than `,`, or a bare element followed by
/// a dangling trailing comma. No partial result is returned.
pub fn decode_string_array(literal: &str) -> Result<Vec<String>> {
    let (inner, leading) = strip_braces(literal);
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    Tokens::new(inner, leading)
        .map(|token| token.map(|t| t.into_string()))
        .collect()
}

/// Decodes an array literal given as raw column bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] if the bytes are not UTF-8, otherwise the
/// same errors as [`decode_string_array`].
pub fn decode_string_array_bytes(literal: &[u8]) -> Result<Vec<String>> {
    let literal = std::str::from_utf8(literal).map_err(|e| Error::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;
    decode_string_array(literal)
}

/// Encodes strings as an array literal, quoting and escaping every element.
///
/// Backslashes are doubled, then quotes are escaped as `\"`. Nothing else is
/// escaped; newlines and other control characters are written as-is.
///
/// # Examples
///
/// ```rust
/// use serde_pgarray::encode_string_array;
///
/// assert_eq!(encode_string_array(&["mary", "had"]), r#"{"mary","had"}"#);
/// assert_eq!(encode_string_array(&[r"\"]), r#"{"\\"}"#);
/// assert_eq!(encode_string_array::<&str>(&[]), "{}");
/// ```
#[must_use]
pub fn encode_string_array<S: AsRef<str>>(elements: &[S]) -> String {
    // two quotes and a comma per element
    let capacity = 2 + elements
        .iter()
        .map(|s| s.as_ref().len() + 3)
        .sum::<usize>();
    let mut out = String::with_capacity(capacity);
    out.push('{');
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_quoted(&mut out, element.as_ref());
    }
    out.push('}');
    out
}

/// Appends `s` as a quoted element.
pub(crate) fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Returns `true` for the exact empty-array sentinel `{}`.
#[inline]
pub(crate) fn is_empty_literal(src: &[u8]) -> bool {
    src == EMPTY_ARRAY.as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_quoted() {
        assert_eq!(decode_string_array(r#"{"mary"}"#).unwrap(), vec!["mary"]);
        assert_eq!(decode_string_array(r#"{"\\"}"#).unwrap(), vec!["\\"]);
        assert_eq!(decode_string_array("{\"a\nb\"}").unwrap(), vec!["a\nb"]);
        assert_eq!(decode_string_array(r#"{""}"#).unwrap(), vec![""]);
    }

    #[test]
    fn test_decode_mixed() {
        assert_eq!(
            decode_string_array(r#"{mary,"had a little",lamb}"#).unwrap(),
            vec!["mary", "had a little", "lamb"]
        );
        assert_eq!(decode_string_array("{a,,b}").unwrap(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_decode_empty_is_concrete() {
        let decoded = decode_string_array(EMPTY_ARRAY).unwrap();
        assert_eq!(decoded, Vec::<String>::new());
        assert!(decode_string_array("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_malformed() {
        for bad in [r#"{"}"#, r#"{""a}"#, r#"{mary,"}"#, "{mary,}"] {
            assert!(decode_string_array(bad).unwrap_err().is_syntax(), "{bad}");
        }
    }

    #[test]
    fn test_quoted_trailing_comma_tolerated() {
        assert_eq!(decode_string_array(r#"{"a",}"#).unwrap(), vec!["a"]);
    }

    #[test]
    fn test_decode_bytes() {
        assert_eq!(
            decode_string_array_bytes(br#"{"x","y"}"#).unwrap(),
            vec!["x", "y"]
        );
        assert_eq!(
            decode_string_array_bytes(b"{\"\xff\"}").unwrap_err(),
            Error::InvalidUtf8 { offset: 2 }
        );
    }

    #[test]
    fn test_encode_escaping() {
        assert_eq!(encode_string_array(&["\""]), r#"{"\""}"#);
        assert_eq!(encode_string_array(&["a\\\"b"]), r#"{"a\\\"b"}"#);
        assert_eq!(encode_string_array(&["\n"]), "{\"\n\"}");
        assert_eq!(encode_string_array(&[""]), r#"{""}"#);
    }

    #[test]
    fn test_roundtrip_awkward_strings() {
        let strings = vec![
            "{}".to_string(),
            "}".to_string(),
            "{".to_string(),
            ",".to_string(),
            "\\\\\"".to_string(),
            "NULL".to_string(),
            " padded ".to_string(),
            String::new(),
        ];
        let literal = encode_string_array(&strings);
        assert_eq!(decode_string_array(&literal).unwrap(), strings);
    }

    #[test]
    fn test_empty_sentinel() {
        assert!(is_empty_literal(b"{}"));
        assert!(!is_empty_literal(b"{ }"));
        assert!(!is_empty_literal(b"{\"\"}"));
    }
}
