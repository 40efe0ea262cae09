//! UUID array adapters.
//!
//! A UUID's canonical text form is always 36 characters (32 hex digits and
//! four hyphens) and never needs quoting, so the encoder computes the exact
//! output length up front and writes each identifier straight into the
//! buffer.
//!
//! ```rust
//! use serde_pgarray::{decode_uuid_array, encode_uuid_array, encoded_uuid_array_len};
//! use uuid::Uuid;
//!
//! let ids = vec![Uuid::nil(), Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8)];
//! let literal = encode_uuid_array(&ids);
//! assert_eq!(literal.len(), encoded_uuid_array_len(ids.len()));
//! assert_eq!(decode_uuid_array(&literal).unwrap(), ids);
//! ```

use crate::typed::{decode_simple_array, ArrayElement};
use crate::{ArrayOptions, Result};
use std::collections::HashSet;
use uuid::fmt::Hyphenated;
use uuid::Uuid;

/// Length of a hyphenated UUID.
pub const UUID_TEXT_LEN: usize = Hyphenated::LENGTH;

impl ArrayElement for Uuid {
    const EXPECTED: &'static str = "UUID";

    // Only the hyphenated form, bare or quoted once; the uuid crate would also
    // take simple, braced and URN forms.
    fn parse_element(text: &str) -> Option<Self> {
        let text = text
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or(text);
        if text.len() != UUID_TEXT_LEN {
            return None;
        }
        Uuid::try_parse(text).ok()
    }

    fn write_element(&self, out: &mut String, _options: &ArrayOptions) {
        out.push_str(self.hyphenated().encode_lower(&mut Uuid::encode_buffer()));
    }
}

/// Exact length of the literal [`encode_uuid_array`] produces for `count` ids.
#[must_use]
pub const fn encoded_uuid_array_len(count: usize) -> usize {
    if count == 0 {
        2
    } else {
        2 + (UUID_TEXT_LEN + 1) * count - 1
    }
}

/// Decodes a UUID array column.
///
/// Elements may be bare or wrapped in one pair of double quotes, so the
/// serde form written by [`to_string`](crate::to_string) reads back too.
///
/// # Errors
///
/// Returns [`Error::ElementParse`](crate::Error::ElementParse) for the first
/// element that is not a hyphenated UUID.
pub fn decode_uuid_array(src: impl AsRef<[u8]>) -> Result<Vec<Uuid>> {
    decode_simple_array(src)
}

/// Encodes UUIDs in their lowercase hyphenated form.
///
/// The output buffer is allocated once at its exact final size.
#[must_use]
pub fn encode_uuid_array(ids: &[Uuid]) -> String {
    let length = encoded_uuid_array_len(ids.len());
    let mut out = String::with_capacity(length);
    let mut buf = Uuid::encode_buffer();
    out.push('{');
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(id.hyphenated().encode_lower(&mut buf));
    }
    out.push('}');
    debug_assert_eq!(out.len(), length);
    out
}

/// Returns the distinct ids in the order they were first seen.
///
/// ```rust
/// use serde_pgarray::unique_uuids;
/// use uuid::Uuid;
///
/// let (a, b) = (Uuid::nil(), Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8));
/// assert_eq!(unique_uuids([a, b, a, a, b]), vec![a, b]);
/// ```
pub fn unique_uuids<I>(ids: I) -> Vec<Uuid>
where
    I: IntoIterator<Item = Uuid>,
{
    let ids = ids.into_iter();
    let mut seen = HashSet::with_capacity(ids.size_hint().0);
    ids.filter(|id| seen.insert(*id)).collect()
}
