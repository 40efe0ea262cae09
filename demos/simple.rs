//! Decoding and encoding a text array column.
//!
//! Run with: cargo run --example simple

use serde_pgarray::{decode_string_array, encode_string_array, StringArray};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // What the database hands back for a text[] column
    let column = r#"{mary,"had a \"lamb\"","its fleece, was",NULL}"#;

    let values = decode_string_array(column)?;
    println!("Decoded {} elements:", values.len());
    for (i, value) in values.iter().enumerate() {
        println!("  [{}] {:?}", i, value);
    }

    // The encoder always quotes, so any string survives the round trip
    let literal = encode_string_array(&values);
    println!("\nRe-encoded:\n{}\n", literal);
    assert_eq!(decode_string_array(&literal)?, values);
    println!("✓ Round-trip successful");

    // The column type does the same through FromStr and Display
    let tags: StringArray = r#"{rust,serde,rust,"  db  "}"#.parse()?;
    println!("\nDistinct, trimmed tags: {}", tags.distinct().trim_space());

    // Malformed literals are rejected with a byte offset
    match decode_string_array("{mary,}") {
        Ok(_) => unreachable!("a dangling comma is a syntax error"),
        Err(e) => println!("\nRejected: {}", e),
    }

    Ok(())
}
