//! Float precision and the Serde front door.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use serde_pgarray::{from_str, to_string, to_string_with_options, ArrayOptions};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
enum Status {
    Active,
    Suspended,
}

fn main() -> Result<(), Box<dyn Error>> {
    let readings = vec![21.456, 19.0, f64::NAN];

    // Default: two fractional digits
    println!("Default:   {}", to_string(&readings)?);

    // Fixed precision
    let options = ArrayOptions::new().with_float_precision(1);
    println!("1 digit:   {}", to_string_with_options(&readings, options)?);

    // Shortest text that reads back to the same float
    println!("Lossless:  {}\n", to_string_with_options(&readings, ArrayOptions::lossless())?);

    // Nullable elements map to NULL
    let scores = vec![Some(90), None, Some(75)];
    let literal = to_string(&scores)?;
    println!("Scores: {}", literal);
    let back: Vec<Option<i32>> = from_str(&literal)?;
    assert_eq!(back, scores);

    // Unit enum variants travel as quoted strings
    let statuses = vec![Status::Active, Status::Suspended];
    let literal = to_string(&statuses)?;
    println!("Statuses: {}", literal);
    let back: Vec<Status> = from_str(&literal)?;
    assert_eq!(back, statuses);

    println!("\n✓ Round-trips successful");
    Ok(())
}
