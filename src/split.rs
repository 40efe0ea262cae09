//! Structural splitting of array literals.
//!
//! These helpers cut a literal into element slices without interpreting quotes
//! or escapes. They are only valid for element types whose text can never
//! contain `{`, `}` or `,`: integers, floats, UUIDs. Slices borrow from the
//! input; nothing is copied or unescaped.

const OPENING: u8 = b'{';
const CLOSING: u8 = b'}';
const SEPARATOR: u8 = b',';

/// Removes the first and last byte of a literal, or `None` if it is shorter
/// than two bytes.
fn inner(src: &[u8]) -> Option<&[u8]> {
    if src.len() < 2 {
        return None;
    }
    Some(&src[1..src.len() - 1])
}

/// Splits a literal on every comma between its outer braces.
///
/// No nesting is tracked. Note that `{}` yields one empty slice; callers
/// check for the empty-array sentinel first.
///
/// ```rust
/// use serde_pgarray::split_top_level;
///
/// assert_eq!(split_top_level(b"{1,2,3}"), vec![&b"1"[..], b"2", b"3"]);
/// assert!(split_top_level(b"{").is_empty());
/// ```
#[must_use]
pub fn split_top_level(src: &[u8]) -> Vec<&[u8]> {
    match inner(src) {
        Some(inner) => inner.split(|&b| b == SEPARATOR).collect(),
        None => Vec::new(),
    }
}

/// Splits a literal on the commas at nesting depth zero.
///
/// `{` and `}` inside the outer braces adjust the depth, so an outer array of
/// sub-arrays splits into one slice per sub-array. Sub-literals are not
/// descended into. Whitespace is preserved.
///
/// ```rust
/// use serde_pgarray::split_nested;
///
/// let parts = split_nested(b"{ {0} , { 001200,1} }");
/// assert_eq!(parts, vec![&b" {0} "[..], b" { 001200,1} "]);
/// assert!(split_nested(b"{}").is_empty());
/// ```
#[must_use]
pub fn split_nested(src: &[u8]) -> Vec<&[u8]> {
    let Some(inner) = inner(src) else {
        return Vec::new();
    };
    let mut parts = Vec::new();
    let mut depth: isize = 0;
    let mut start = 0;
    for (i, &b) in inner.iter().enumerate() {
        match b {
            OPENING => depth += 1,
            CLOSING => depth -= 1,
            SEPARATOR if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if !inner.is_empty() {
        parts.push(&inner[start..]);
    }
    parts
}
