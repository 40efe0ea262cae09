//! Property-based tests for the round-trip guarantees
//!
//! The string encoder must produce a literal that decodes back to exactly the
//! input for any strings at all, including ones full of quotes, backslashes,
//! commas, braces and newlines.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_pgarray::{
    decode_int64_array, decode_string_array, decode_uuid_array, encode_int64_array,
    encode_string_array, encode_uuid_array, encoded_uuid_array_len, from_str, split_top_level,
    to_string,
};
use uuid::Uuid;

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

/// Strings weighted towards the characters the literal grammar cares about.
fn awkward_string() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        prop::collection::vec(
            prop_oneof![
                Just('"'),
                Just('\\'),
                Just(','),
                Just('{'),
                Just('}'),
                Just('\n'),
                Just(' '),
                Just('a'),
                Just('é'),
            ],
            0..12,
        )
        .prop_map(|chars| chars.into_iter().collect()),
    ]
}

proptest! {
    #[test]
    fn prop_string_array_roundtrip(v in prop::collection::vec(awkward_string(), 0..16)) {
        let literal = encode_string_array(&v);
        prop_assert_eq!(decode_string_array(&literal).unwrap(), v);
    }

    #[test]
    fn prop_string_literal_is_braced(v in prop::collection::vec(awkward_string(), 0..8)) {
        let literal = encode_string_array(&v);
        prop_assert!(literal.starts_with('{'), "literal not opening-braced: {}", literal);
        prop_assert!(literal.ends_with('}'), "literal not closing-braced: {}", literal);
    }

    #[test]
    fn prop_int64_array_roundtrip(v in prop::collection::vec(any::<i64>(), 0..32)) {
        let literal = encode_int64_array(&v);
        prop_assert_eq!(split_top_level(literal.as_bytes()).len(), v.len().max(1));
        prop_assert_eq!(decode_int64_array(&literal).unwrap(), v);
    }

    #[test]
    fn prop_uuid_array_roundtrip(seeds in prop::collection::vec(any::<u128>(), 0..16)) {
        let ids: Vec<Uuid> = seeds.into_iter().map(Uuid::from_u128).collect();
        let literal = encode_uuid_array(&ids);
        prop_assert_eq!(literal.len(), encoded_uuid_array_len(ids.len()));
        prop_assert_eq!(decode_uuid_array(&literal).unwrap(), ids);
    }

    #[test]
    fn prop_decode_never_panics(s in "\\PC*") {
        let _ = decode_string_array(&s);
        let _ = decode_int64_array(&s);
    }

    // Serde front door
    #[test]
    fn prop_serde_vec_string(v in prop::collection::vec(awkward_string(), 0..16)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_serde_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_serde_vec_option_u64(v in prop::collection::vec(proptest::option::of(any::<u64>()), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_serde_vec_bool(v in prop::collection::vec(any::<bool>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_serde_tuple(t in (any::<i32>(), awkward_string(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }
}
