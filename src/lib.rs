//! # serde_pgarray
//!
//! Encoding and decoding of PostgreSQL one-dimensional array literals, with a
//! Serde front door.
//!
//! ## What is an array literal?
//!
//! PostgreSQL sends and accepts array columns in a compact text form: elements
//! separated by commas inside braces, with quoting only where needed.
//!
//! ```text
//! {mary,"had a \"lamb\"",NULL}
//! ```
//!
//! Database drivers hand this text to the application as-is for `text[]`,
//! `bigint[]`, `double precision[]` and `uuid[]` columns. This crate turns it
//! into Rust values and back.
//!
//! ## Key Features
//!
//! - **Single-pass decoding**: bare elements are borrowed from the input;
//!   quoted elements are unescaped once
//! - **Typed arrays**: integers, floats, booleans and UUIDs through one
//!   [`ArrayElement`] trait
//! - **Serde Compatible**: any sequence of primitives works with
//!   [`to_string`] and [`from_str`]
//! - **Column types**: [`StringArray`], [`Int64Array`], [`Float64Array`] and
//!   [`UuidArray`] parse and print themselves and serialize as plain lists
//! - **Precise errors**: byte offsets for grammar errors, element indices for
//!   typed parse failures
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_pgarray = "0.1"
//! ```
//!
//! ### Strings
//!
//! ```rust
//! use serde_pgarray::{decode_string_array, encode_string_array};
//!
//! let names = decode_string_array(r#"{mary,"had a \"lamb\""}"#).unwrap();
//! assert_eq!(names, vec!["mary", "had a \"lamb\""]);
//!
//! assert_eq!(encode_string_array(&names), r#"{"mary","had a \"lamb\""}"#);
//! ```
//!
//! ### Typed Arrays
//!
//! ```rust
//! use serde_pgarray::{decode_int64_array, encode_float64_array};
//!
//! assert_eq!(decode_int64_array("{1,2,3}").unwrap(), vec![1, 2, 3]);
//! assert_eq!(encode_float64_array(&[1.5, 2.0]), "{1.50,2.00}");
//! ```
//!
//! ### Serde
//!
//! ```rust
//! use serde_pgarray::{from_str, to_string};
//!
//! let literal = to_string(&vec![Some(1), None, Some(3)]).unwrap();
//! assert_eq!(literal, "{1,NULL,3}");
//!
//! let back: Vec<Option<i64>> = from_str(&literal).unwrap();
//! assert_eq!(back, vec![Some(1), None, Some(3)]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Decoding**: O(n) in the literal length, one pass
//! - **Encoding**: O(n); UUID arrays are written into a buffer of exact size
//! - **Memory**: bare elements borrow from the input where the target type allows
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Malformed input is reported through [`Error`], never by panicking
//!
//! ## Format Description
//!
//! See the [`grammar`] module for the literal grammar, escapes and encoding
//! rules.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Decoding and encoding text arrays
//! - **`typed_arrays.rs`** - Integers, floats, UUIDs and nested arrays
//! - **`custom_options.rs`** - Float precision and the Serde front door
//!
//! Run any example with: `cargo run --example <name>`

#[macro_use]
mod macros;

pub mod array;
pub mod de;
pub mod error;
pub mod grammar;
pub mod options;
pub mod ser;
pub mod split;
pub mod token;
pub mod typed;
pub mod uuids;
pub mod value;

pub use array::{decode_string_array, decode_string_array_bytes, encode_string_array, EMPTY_ARRAY};
pub use de::Deserializer;
pub use error::{Error, Result};
pub use options::{ArrayOptions, DEFAULT_FLOAT_PRECISION};
pub use ser::Serializer;
pub use split::{split_nested, split_top_level};
pub use token::{
    decode_bare_token, decode_quoted_token, decode_token, Token, Tokens, NULL_ELEMENT,
};
pub use typed::{
    decode_float64_array, decode_int64_array, decode_nested_array, decode_simple_array,
    encode_float64_array, encode_float64_array_with_options, encode_int64_array,
    encode_simple_array, encode_simple_array_with_options, ArrayElement,
};
pub use uuids::{
    decode_uuid_array, encode_uuid_array, encoded_uuid_array_len, unique_uuids, UUID_TEXT_LEN,
};
pub use value::{Float64Array, Int64Array, StringArray, UuidArray};

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any sequence of primitives to an array literal.
///
/// # Examples
///
/// ```rust
/// use serde_pgarray::to_string;
///
/// assert_eq!(to_string(&["a", "b"]).unwrap(), r#"{"a","b"}"#);
/// assert_eq!(to_string(&vec![true, false]).unwrap(), "{t,f}");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for values with no literal form (maps,
/// structs, bytes, a bare scalar at the top level) and
/// [`Error::UnsupportedNesting`] for sequences of sequences.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, ArrayOptions::default())
}

/// Serialize to an array literal with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_pgarray::{to_string_with_options, ArrayOptions};
///
/// let literal = to_string_with_options(&[0.1, 2.0], ArrayOptions::lossless()).unwrap();
/// assert_eq!(literal, "{0.1,2}");
/// ```
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: ArrayOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize to a writer as an array literal.
///
/// # Examples
///
/// ```rust
/// use serde_pgarray::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[1, 2]).unwrap();
/// assert_eq!(buffer, b"{1,2}");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, ArrayOptions::default())
}

/// Serialize to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: ArrayOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let literal = to_string_with_options(value, options)?;
    writer
        .write_all(literal.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize a sequence type from an array literal.
///
/// # Examples
///
/// ```rust
/// use serde_pgarray::from_str;
///
/// let tags: Vec<String> = from_str(r#"{rust,"serde, json"}"#).unwrap();
/// assert_eq!(tags, vec!["rust", "serde, json"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the literal is malformed and
/// [`Error::ElementParse`] if an element does not fit its target type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str(s);
    T::deserialize(&mut deserializer)
}

/// Deserialize from an I/O stream holding an array literal.
///
/// # Examples
///
/// ```rust
/// use serde_pgarray::from_reader;
/// use std::io::Cursor;
///
/// let ids: Vec<i64> = from_reader(Cursor::new(b"{7,8}")).unwrap();
/// assert_eq!(ids, vec![7, 8]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or decoding
/// fails as in [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&bytes)
}

/// Deserialize from raw column bytes.
///
/// # Examples
///
/// ```rust
/// use serde_pgarray::from_slice;
///
/// let flags: Vec<bool> = from_slice(b"{t,f,TRUE}").unwrap();
/// assert_eq!(flags, vec![true, false, true]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidUtf8`] if the bytes are not UTF-8, otherwise the
/// same errors as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;
    from_str(s)
}
