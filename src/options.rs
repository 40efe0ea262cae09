//! Configuration options for array literal encoding.
//!
//! Decoding has nothing to configure: the grammar is fixed by what the database
//! emits. Encoding has one knob, the textual precision used for floating point
//! elements.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pgarray::{encode_float64_array_with_options, ArrayOptions};
//!
//! let values = [1.0, 2.5, 0.126];
//!
//! // Default: two fractional digits
//! let options = ArrayOptions::new();
//! assert_eq!(encode_float64_array_with_options(&values, &options), "{1.00,2.50,0.13}");
//!
//! // Shortest text that parses back to the same value
//! let options = ArrayOptions::lossless();
//! assert_eq!(encode_float64_array_with_options(&values, &options), "{1,2.5,0.126}");
//! ```

/// Number of fractional digits written for floats unless configured otherwise.
pub const DEFAULT_FLOAT_PRECISION: usize = 2;

/// Configuration options for array literal encoding.
///
/// # Examples
///
/// ```rust
/// use serde_pgarray::ArrayOptions;
///
/// let options = ArrayOptions::new().with_float_precision(4);
/// assert_eq!(options.float_precision, Some(4));
///
/// let options = ArrayOptions::lossless();
/// assert_eq!(options.float_precision, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayOptions {
    /// Fractional digits for float elements; `None` writes the shortest
    /// round-tripping representation.
    pub float_precision: Option<usize>,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        ArrayOptions {
            float_precision: Some(DEFAULT_FLOAT_PRECISION),
        }
    }
}

impl ArrayOptions {
    /// Creates default options (floats rounded to two fractional digits).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pgarray::ArrayOptions;
    ///
    /// let options = ArrayOptions::new();
    /// assert_eq!(options.float_precision, Some(2));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that never round floats.
    #[must_use]
    pub fn lossless() -> Self {
        ArrayOptions {
            float_precision: None,
        }
    }

    /// Sets the number of fractional digits written for float elements.
    #[must_use]
    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = Some(precision);
        self
    }
}
