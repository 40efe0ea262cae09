//! Error types for array literal decoding and encoding.
//!
//! Every failure is an ordinary value returned to the caller. Decoding is
//! all-or-nothing: when an error is returned, no partially decoded sequence
//! is handed out alongside it.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: the literal violates the token grammar (unterminated
//!   quoted token, garbage after a closing quote, dangling trailing comma)
//! - **Element Errors**: a typed parser could not read one isolated element
//! - **Nesting Errors**: sub-arrays nested deeper than one level
//! - **Unsupported Types**: serde shapes that have no array-literal form
//!
//! ## Examples
//!
//! ```rust
//! use serde_pgarray::{decode_string_array, decode_int64_array};
//!
//! let err = decode_string_array(r#"{mary,}"#).unwrap_err();
//! assert!(err.is_syntax());
//!
//! let err = decode_int64_array("{1,two,3}").unwrap_err();
//! assert!(err.is_element());
//! assert!(err.to_string().contains("index 1"));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors produced while decoding or encoding array literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The literal violates the token grammar
    #[error("Syntax error at offset {offset}: {msg}")]
    Syntax { offset: usize, msg: String },

    /// A typed parser rejected one isolated element
    #[error("Invalid array element at index {index} ({element:?}): expected {expected}")]
    ElementParse {
        index: usize,
        element: String,
        expected: String,
    },

    /// Sub-arrays nested deeper than the supported single level
    #[error("Unsupported nesting: {0}")]
    UnsupportedNesting(String),

    /// Value shape that has no array-literal representation
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Raw input bytes are not valid UTF-8
    #[error("Invalid UTF-8 in array literal at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// IO error while writing an encoded literal
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at a byte offset into the literal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pgarray::Error;
    ///
    /// let err = Error::syntax(4, "expected ',' after closing quote");
    /// assert!(err.to_string().contains("offset 4"));
    /// ```
    pub fn syntax(offset: usize, msg: &str) -> Self {
        Error::Syntax {
            offset,
            msg: msg.to_string(),
        }
    }

    /// Creates an element error for the element at `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pgarray::Error;
    ///
    /// let err = Error::element(2, "x1", "64-bit integer");
    /// assert!(err.to_string().contains("expected 64-bit integer"));
    /// ```
    pub fn element(index: usize, element: &str, expected: &str) -> Self {
        Error::ElementParse {
            index,
            element: element.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Creates an error for sub-arrays nested deeper than one level.
    pub fn unsupported_nesting(msg: &str) -> Self {
        Error::UnsupportedNesting(msg.to_string())
    }

    /// Creates an unsupported type error for shapes with no literal form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` when the literal itself is malformed.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. } | Error::InvalidUtf8 { .. })
    }

    /// Returns `true` when a typed parser rejected an element.
    pub fn is_element(&self) -> bool {
        matches!(self, Error::ElementParse { .. })
    }

    /// Index of the offending element, if the error names one.
    pub fn element_index(&self) -> Option<usize> {
        match self {
            Error::ElementParse { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(Error::syntax(0, "x").is_syntax());
        assert!(Error::InvalidUtf8 { offset: 3 }.is_syntax());
        assert!(!Error::syntax(0, "x").is_element());

        let err = Error::element(7, "abc", "UUID");
        assert!(err.is_element());
        assert_eq!(err.element_index(), Some(7));
        assert_eq!(Error::custom("boom").element_index(), None);
    }

    #[test]
    fn test_display() {
        let err = Error::element(1, "two", "64-bit integer");
        assert_eq!(
            err.to_string(),
            "Invalid array element at index 1 (\"two\"): expected 64-bit integer"
        );
        assert_eq!(
            Error::unsupported_nesting("3 levels").to_string(),
            "Unsupported nesting: 3 levels"
        );
    }
}
