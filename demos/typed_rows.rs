//! Deserialize data block rows into Rust structs.
//!
//! Run with: cargo run --example typed_rows

use axon_parser::{parse_with_options, ParseOptions};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Status {
    Open,
    Shipped,
}

#[derive(Debug, Deserialize)]
struct Order {
    id: i64,
    customer: String,
    total: f64,
    status: Status,
    placed: NaiveDateTime,
    note: Option<String>,
}

const DOCUMENT: &str = "
@schema Order
id:I
customer:S
total:F
status:S
placed:T
note:S?
@end

@data Order[2]
100|Alice|59.90|shipped|2024-11-23T10:30:00|leave at door
101|Bob|12.00|open|2024-11-24T08:15:00|_
@end
";

fn main() -> Result<(), Box<dyn Error>> {
    // every optional check on: counts, duplicate schemas, nullability
    let result = parse_with_options(DOCUMENT, ParseOptions::strict())?;

    let orders: Vec<Order> = result.data_blocks[0].deserialize_rows()?;
    for order in &orders {
        println!("{:?}", order);
    }

    let total: f64 = orders.iter().map(|o| o.total).sum();
    println!("\n{} order(s), {:.2} in total", orders.len(), total);
    Ok(())
}
