//! Parse a document and print its schemas and rows.
//!
//! Run with: cargo run --example print_document
//! Set RUST_LOG=debug to see the parser's log output.

use axon_parser::parse;
use std::error::Error;

const DOCUMENT: &str = r#"
@schema User
id:I
name:S
email:S
active:B
age:I?
@end

@data User[3]
1|Alice|alice@example.com|1|28
2|Bob|bob@example.com|0|_
3|"Carol | Ops"|carol@example.com|1|35
@end
"#;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let result = parse(DOCUMENT)?;
    println!(
        "Parsed {} schema(s) and {} data block(s)\n",
        result.schemas.len(),
        result.data_blocks.len()
    );

    for schema in &result.schemas {
        println!("Schema: {}", schema.name);
        for field in &schema.fields {
            println!("  - {}", field);
        }
        println!();
    }

    for block in &result.data_blocks {
        println!("Data: {} ({} rows)", block.schema_name, block.len());
        for row in &block.rows {
            let cells: Vec<String> = row.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            println!("  {}", cells.join(" "));
        }
        println!();
    }

    println!("As JSON:\n{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
