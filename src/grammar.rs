//! Array Literal Grammar
//!
//! This module documents the one-dimensional array literal text format as
//! read and written by this library. It contains no code.
//!
//! # Overview
//!
//! An array column travels as a brace-delimited, comma-separated list of
//! elements:
//!
//! ```text
//! {mary,"had a \"lamb\"",NULL}
//! ```
//!
//! Decoding walks the text once, left to right, producing one string per
//! element. Typed decoders then parse each element string on its own.
//!
//! # Literal
//!
//! ```text
//! literal  := "{" [ element ( "," element )* ] "}"
//! element  := quoted | bare
//! quoted   := '"' ( char | escape )* '"'
//! bare     := ( any byte except ',' )*
//! ```
//!
//! **Rules**:
//! - Every leading `{` and trailing `}` is trimmed from the literal before
//!   tokenizing, so `{{a}}` reads the same as `{a}`
//! - The literal `{}` (and the empty string) decodes to an empty array
//! - No whitespace is skipped around elements; a space is part of a bare
//!   element
//! - A bare element followed by a `,` with nothing after it is a syntax error:
//!   `{mary,}`
//! - A quoted element may be followed by a single trailing `,`: `{"mary",}`
//!   decodes to `["mary"]`
//! - After a closing quote, the next byte must be `,` or the end of input
//!
//! # Escapes
//!
//! Inside a quoted element, `\` starts an escape:
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\\` | backslash |
//! | `\"` | double quote |
//! | `\a` `\b` `\f` `\n` `\r` `\t` `\v` | control characters |
//! | `\xHH` | one raw byte |
//! | `\ooo` | one raw byte, three octal digits, at most `\377` |
//! | `\uHHHH` | a Unicode scalar value |
//! | `\UHHHHHHHH` | a Unicode scalar value |
//!
//! Any other escape, including `\'`, is a syntax error. Raw bytes produced by
//! `\x` and octal escapes are collected and the finished element must be
//! valid UTF-8.
//!
//! # NULL
//!
//! A bare `NULL`, in any letter case, is the database null. The decoders that
//! return `Vec<String>` keep it as the text `"NULL"`; the serde
//! [`Deserializer`](crate::Deserializer) turns it into `None` or `()`. A
//! quoted `"NULL"` is always the four-letter string.
//!
//! # Encoding
//!
//! | Element | Written as | Example |
//! |---------|-----------|---------|
//! | String | always quoted, `\` and `"` escaped | `{"a","b\"c"}` |
//! | Integer | decimal | `{1,-2,3}` |
//! | Float | two fractional digits by default | `{1.50,2.00}` |
//! | Non-finite float | `NaN`, `Infinity`, `-Infinity` | `{NaN}` |
//! | Boolean | `t` or `f` | `{t,f}` |
//! | UUID | lowercase hyphenated | `{67e55044-10b1-426f-9247-bb680e5fe0c8}` |
//! | None | `NULL` | `{1,NULL}` |
//!
//! An empty array is written `{}`. Float precision is configurable through
//! [`ArrayOptions`](crate::ArrayOptions).
//!
//! # Nested Arrays
//!
//! A two-dimensional literal is a list of bracketed sub-arrays:
//!
//! ```text
//! {{1,2},{3,4}}
//! ```
//!
//! Only one level of nesting is decoded, and only for unquoted typed
//! elements. Deeper literals fail with
//! [`Error::UnsupportedNesting`](crate::Error::UnsupportedNesting).
//! [`split_nested`](crate::split_nested) splits any depth at the top level
//! without interpreting the parts.
//!
//! # Errors
//!
//! - Grammar violations report a byte offset into the original literal
//! - Typed parse failures report the element index and the offending text
//! - Non-UTF-8 input reports the offset of the first invalid byte
