//! Owned array column types.
//!
//! Each type wraps a `Vec` of one element kind and knows how to parse itself
//! from, and render itself as, an array literal. They serialize with serde as
//! plain lists, so a marshaling layer sees `["a","b"]` rather than `"{a,b}"`.
//!
//! ```rust
//! use serde_pgarray::{Int64Array, StringArray};
//!
//! let tags: StringArray = r#"{rust,"serde, json"}"#.parse().unwrap();
//! assert_eq!(tags.len(), 2);
//! assert_eq!(tags.to_string(), r#"{"rust","serde, json"}"#);
//!
//! let ids: Int64Array = "{1,2,3}".parse().unwrap();
//! assert_eq!(ids.iter().sum::<i64>(), 6);
//! ```

use crate::array::{decode_string_array, decode_string_array_bytes, encode_string_array};
use crate::typed::{
    decode_float64_array, decode_int64_array, encode_float64_array, encode_int64_array,
};
use crate::uuids::{decode_uuid_array, encode_uuid_array};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

array_newtype! {
    /// A text array column.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    StringArray(String),
    decode_str = decode_string_array,
    decode_bytes = decode_string_array_bytes,
    encode = encode_string_array,
}

array_newtype! {
    /// A `bigint[]` column.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    Int64Array(i64),
    decode_str = decode_int64_array,
    decode_bytes = decode_int64_array,
    encode = encode_int64_array,
}

array_newtype! {
    /// A `double precision[]` column. Rendering rounds to two fractional digits.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(transparent)]
    Float64Array(f64),
    decode_str = decode_float64_array,
    decode_bytes = decode_float64_array,
    encode = encode_float64_array,
}

array_newtype! {
    /// A `uuid[]` column.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    UuidArray(Uuid),
    decode_str = decode_uuid_array,
    decode_bytes = decode_uuid_array,
    encode = encode_uuid_array,
}

impl UuidArray {
    /// Distinct ids in first-seen order.
    #[must_use]
    pub fn unique(&self) -> UuidArray {
        UuidArray(crate::uuids::unique_uuids(self.0.iter().copied()))
    }
}

impl StringArray {
    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|s| s == value)
    }

    /// Returns `true` if every one of `values` is present.
    pub fn contains_all<S: AsRef<str>>(&self, values: &[S]) -> bool {
        values.iter().all(|v| self.contains(v.as_ref()))
    }

    /// Like [`contains_all`](Self::contains_all) for inputs that are both
    /// sorted, in a single linear pass.
    ///
    /// ```rust
    /// use serde_pgarray::StringArray;
    ///
    /// let s = StringArray::from(vec!["a1".to_string(), "a2".to_string(), "b1".to_string()]);
    /// assert!(s.contains_all_sorted(&["a1", "b1"]));
    /// assert!(!s.contains_all_sorted(&["a1", "a3"]));
    /// assert!(s.contains_all_sorted::<&str>(&[]));
    /// ```
    pub fn contains_all_sorted<S: AsRef<str>>(&self, values: &[S]) -> bool {
        if values.len() > self.0.len() {
            return false;
        }
        let mut haystack = self.0.iter();
        values
            .iter()
            .all(|needle| haystack.any(|s| s == needle.as_ref()))
    }

    /// Copy without any of the given values.
    #[must_use]
    pub fn exclude<S: AsRef<str>>(&self, values: &[S]) -> StringArray {
        self.0
            .iter()
            .filter(|s| !values.iter().any(|v| v.as_ref() == s.as_str()))
            .cloned()
            .collect()
    }

    /// Copy keeping only the first occurrence of each element.
    #[must_use]
    pub fn distinct(&self) -> StringArray {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0
            .iter()
            .filter(|s| seen.insert(s.as_str()))
            .cloned()
            .collect()
    }

    /// Calls `f` with each pair of adjacent elements.
    pub fn for_each_pair<F: FnMut(&str, &str)>(&self, mut f: F) {
        for pair in self.0.windows(2) {
            f(&pair[0], &pair[1]);
        }
    }

    /// A new array with `f` applied to each element.
    #[must_use]
    pub fn map<F: FnMut(&str) -> String>(&self, mut f: F) -> StringArray {
        self.0.iter().map(|s| f(s)).collect()
    }

    /// A new array with leading and trailing whitespace removed from each element.
    #[must_use]
    pub fn trim_space(&self) -> StringArray {
        self.map(|s| s.trim().to_string())
    }

    /// The element at `index`, or `""` past the end.
    pub fn get_or_empty(&self, index: usize) -> &str {
        self.0.get(index).map_or("", String::as_str)
    }

    /// `None` if every element is empty (or there are none), otherwise the
    /// array unchanged.
    #[must_use]
    pub fn non_empty(self) -> Option<StringArray> {
        if self.0.iter().all(String::is_empty) {
            None
        } else {
            Some(self)
        }
    }
}
