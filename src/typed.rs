//! Typed array adapters for scalar element types.
//!
//! Numbers never need quoting or escaping, so these adapters skip the token
//! decoder entirely: decoding splits the literal structurally with
//! [`split_top_level`] and parses each slice, encoding joins formatted
//! elements with commas.
//!
//! ```rust
//! use serde_pgarray::{decode_int64_array, encode_int64_array, encode_float64_array};
//!
//! assert_eq!(decode_int64_array("{1,2,3}").unwrap(), vec![1, 2, 3]);
//! assert_eq!(encode_int64_array(&[1, 2, 3]), "{1,2,3}");
//!
//! // Floats are written with two fractional digits by default.
//! assert_eq!(encode_float64_array(&[1.0, 0.333]), "{1.00,0.33}");
//! ```
//!
//! Any type implementing [`ArrayElement`] gets the same treatment through
//! [`decode_simple_array`] and [`encode_simple_array`].

use crate::array::is_empty_literal;
use crate::split::{split_nested, split_top_level};
use crate::{ArrayOptions, Error, Result};
use std::fmt::Write;

/// A scalar that can appear unquoted in an array literal.
///
/// Implementors promise their text form never contains `{`, `}` or `,`.
pub trait ArrayElement: Sized {
    /// Short name of the accepted grammar, used in error messages.
    const EXPECTED: &'static str;

    /// Parses one isolated element.
    fn parse_element(text: &str) -> Option<Self>;

    /// Appends the element's text form.
    fn write_element(&self, out: &mut String, options: &ArrayOptions);
}

macro_rules! impl_integer_element {
    ($($ty:ty => $expected:literal),* $(,)?) => {
        $(
            impl ArrayElement for $ty {
                const EXPECTED: &'static str = $expected;

                fn parse_element(text: &str) -> Option<Self> {
                    text.parse().ok()
                }

                fn write_element(&self, out: &mut String, _options: &ArrayOptions) {
                    // writing to a String cannot fail
                    let _ = write!(out, "{}", self);
                }
            }
        )*
    };
}

impl_integer_element! {
    i16 => "16-bit integer",
    i32 => "32-bit integer",
    i64 => "64-bit integer",
}

impl ArrayElement for f64 {
    const EXPECTED: &'static str = "floating point number";

    fn parse_element(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn write_element(&self, out: &mut String, options: &ArrayOptions) {
        write_float(out, *self, options);
    }
}

impl ArrayElement for f32 {
    const EXPECTED: &'static str = "floating point number";

    fn parse_element(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn write_element(&self, out: &mut String, options: &ArrayOptions) {
        write_float(out, f64::from(*self), options);
    }
}

impl ArrayElement for bool {
    const EXPECTED: &'static str = "boolean";

    fn parse_element(text: &str) -> Option<Self> {
        parse_bool(text)
    }

    fn write_element(&self, out: &mut String, _options: &ArrayOptions) {
        out.push(if *self { 't' } else { 'f' });
    }
}

/// Parses the boolean spellings the database emits and accepts.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("t") || text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("f") || text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Writes a float with the configured precision.
///
/// Non-finite values use the spellings the database accepts: `NaN`,
/// `Infinity` and `-Infinity`. Rust's float parser reads them back.
pub(crate) fn write_float(out: &mut String, value: f64, options: &ArrayOptions) {
    if value.is_nan() {
        out.push_str("NaN");
    } else if value.is_infinite() {
        out.push_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    } else {
        let _ = match options.float_precision {
            Some(precision) => write!(out, "{:.*}", precision, value),
            None => write!(out, "{}", value),
        };
    }
}

fn parse_slice<T: ArrayElement>(index: usize, slice: &[u8]) -> Result<T> {
    std::str::from_utf8(slice)
        .ok()
        .and_then(T::parse_element)
        .ok_or_else(|| {
            let text = String::from_utf8_lossy(slice);
            log::trace!("array element {index} ({text:?}) is not a {}", T::EXPECTED);
            Error::element(index, &text, T::EXPECTED)
        })
}

/// Decodes a literal of unquoted scalars.
///
/// `{}` short-circuits to an empty vector. Otherwise the literal is split on
/// every comma and each slice parsed; the first failure aborts the decode.
///
/// # Errors
///
/// Returns [`Error::ElementParse`] naming the first element that does not
/// parse as `T`.
pub fn decode_simple_array<T: ArrayElement>(src: impl AsRef<[u8]>) -> Result<Vec<T>> {
    let src = src.as_ref();
    if is_empty_literal(src) {
        return Ok(Vec::new());
    }
    split_top_level(src)
        .into_iter()
        .enumerate()
        .map(|(i, slice)| parse_slice(i, slice))
        .collect()
}

/// Encodes scalars as an unquoted array literal with default options.
#[must_use]
pub fn encode_simple_array<T: ArrayElement>(values: &[T]) -> String {
    encode_simple_array_with_options(values, &ArrayOptions::default())
}

/// Encodes scalars as an unquoted array literal.
#[must_use]
pub fn encode_simple_array_with_options<T: ArrayElement>(
    values: &[T],
    options: &ArrayOptions,
) -> String {
    let mut out = String::with_capacity(2 + values.len() * 8);
    out.push('{');
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        value.write_element(&mut out, options);
    }
    out.push('}');
    out
}

/// Decodes a 64-bit integer array column.
///
/// # Errors
///
/// Returns [`Error::ElementParse`] if an element is not a decimal integer.
pub fn decode_int64_array(src: impl AsRef<[u8]>) -> Result<Vec<i64>> {
    decode_simple_array(src)
}

/// Encodes 64-bit integers as decimal digits.
#[must_use]
pub fn encode_int64_array(values: &[i64]) -> String {
    encode_simple_array(values)
}

/// Decodes a float array column. The decimal separator is always `.`.
///
/// # Errors
///
/// Returns [`Error::ElementParse`] if an element is not a float literal.
pub fn decode_float64_array(src: impl AsRef<[u8]>) -> Result<Vec<f64>> {
    decode_simple_array(src)
}

/// Encodes floats rounded to two fractional digits.
///
/// The rounding is deliberate: it is the precision contract the column
/// writers rely on. Use [`encode_float64_array_with_options`] with
/// [`ArrayOptions::lossless`] to keep full precision.
#[must_use]
pub fn encode_float64_array(values: &[f64]) -> String {
    encode_simple_array(values)
}

/// Encodes floats with the precision from `options`.
#[must_use]
pub fn encode_float64_array_with_options(values: &[f64], options: &ArrayOptions) -> String {
    encode_simple_array_with_options(values, options)
}

fn trim_ascii_whitespace(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if !first.is_ascii_whitespace() {
            break;
        }
        bytes = rest;
    }
    while let [rest @ .., last] = bytes {
        if !last.is_ascii_whitespace() {
            break;
        }
        bytes = rest;
    }
    bytes
}

/// Decodes a two-dimensional literal such as `{{1,2},{3}}`.
///
/// The outer level is split with [`split_nested`]; each part must be a
/// bracketed sub-literal of scalars. Deeper nesting is rejected rather than
/// guessed at.
///
/// ```rust
/// use serde_pgarray::decode_nested_array;
///
/// let rows: Vec<Vec<i64>> = decode_nested_array("{ {1,2} , {3} }").unwrap();
/// assert_eq!(rows, vec![vec![1, 2], vec![3]]);
/// assert!(decode_nested_array::<i64>("{{{1}}}").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedNesting`] for a sub-literal that contains
/// braces, [`Error::ElementParse`] for a part that is not a sub-literal or
/// an element that does not parse.
pub fn decode_nested_array<T: ArrayElement>(src: impl AsRef<[u8]>) -> Result<Vec<Vec<T>>> {
    split_nested(src.as_ref())
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            let part = trim_ascii_whitespace(part);
            let inner = part
                .strip_prefix(b"{")
                .and_then(|p| p.strip_suffix(b"}"))
                .ok_or_else(|| {
                    Error::element(i, &String::from_utf8_lossy(part), "bracketed sub-array")
                })?;
            if inner.iter().any(|&b| b == b'{' || b == b'}') {
                log::trace!("rejecting sub-array {i}: nested deeper than one level");
                return Err(Error::unsupported_nesting(&format!(
                    "sub-array {} is nested more than one level deep",
                    i
                )));
            }
            decode_simple_array(part)
        })
        .collect()
}
