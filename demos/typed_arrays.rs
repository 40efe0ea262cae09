//! Integer, float, UUID and nested arrays.
//!
//! Run with: cargo run --example typed_arrays

use serde_pgarray::{
    decode_int64_array, decode_nested_array, decode_simple_array, decode_uuid_array,
    encode_float64_array, encode_uuid_array, encoded_uuid_array_len, unique_uuids, Int64Array,
};
use std::error::Error;
use uuid::Uuid;

fn main() -> Result<(), Box<dyn Error>> {
    // bigint[]
    let ids = decode_int64_array("{10,20,30}")?;
    println!("bigint[]: {:?}", ids);
    let column: Int64Array = ids.into_iter().map(|id| id * 2).collect();
    println!("doubled:  {}", column);

    // double precision[]: two fractional digits on the way out
    println!("\ndouble precision[]: {}", encode_float64_array(&[1.0, 2.5, 1.0 / 3.0]));

    // boolean[] and smallint[] through the generic decoder
    let flags: Vec<bool> = decode_simple_array("{t,f,true}")?;
    let small: Vec<i16> = decode_simple_array("{-7,300}")?;
    println!("boolean[]: {:?}, smallint[]: {:?}", flags, small);

    // uuid[] uses a fixed-width fast path
    let members: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
    let literal = encode_uuid_array(&members);
    assert_eq!(literal.len(), encoded_uuid_array_len(members.len()));
    println!("\nuuid[] ({} bytes):\n{}", literal.len(), literal);
    assert_eq!(decode_uuid_array(&literal)?, members);

    let repeated = [members[1], members[0], members[1]];
    println!("distinct: {:?}", unique_uuids(repeated));

    // One level of nesting
    let grid: Vec<Vec<i64>> = decode_nested_array("{{1,2,3},{4,5,6}}")?;
    println!("\nint[][]: {:?}", grid);

    // A typed failure names the element
    if let Err(e) = decode_int64_array("{1,two,3}") {
        println!("Rejected: {}", e);
    }

    Ok(())
}
