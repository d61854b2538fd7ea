//! # axon_parser
//!
//! A parser for AXON, a compact, line-oriented, self-describing text format.
//!
//! ## What is AXON?
//!
//! An AXON document declares named record schemas (field name, one-letter
//! type code, optional nullability), followed by data blocks that name a
//! schema and hold pipe-delimited rows of typed values:
//!
//! ```text
//! @schema User
//! id:I
//! name:S
//! active:B
//! age:I?
//! @end
//!
//! @data User[2]
//! 1|Alice|1|28
//! 2|Bob|0|_
//! @end
//! ```
//!
//! See [`format`] for the full format reference.
//!
//! ## Quick Start
//!
//! ```rust
//! use axon_parser::{parse, AxonValue};
//!
//! let doc = "@schema User\nid:I\nname:S\nactive:B\nage:I?\n@end\n\
//!            @data User[2]\n1|Alice|1|28\n2|Bob|0|_\n@end";
//!
//! let result = parse(doc).unwrap();
//! assert_eq!(result.schemas[0].fields.len(), 4);
//!
//! let rows = &result.data_blocks[0].rows;
//! assert_eq!(rows[0].get("name"), Some(&AxonValue::from("Alice")));
//! assert_eq!(rows[1].get("age"), Some(&AxonValue::Null));
//! ```
//!
//! ### Typed Rows
//!
//! Rows deserialize into your own types through serde:
//!
//! ```rust
//! use axon_parser::parse;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug)]
//! struct User { id: i64, name: String, active: bool, age: Option<i64> }
//!
//! let doc = "@schema User\nid:I\nname:S\nactive:B\nage:I?\n@end\n\
//!            @data User[1]\n2|Bob|0|_\n@end";
//!
//! let users: Vec<User> = parse(doc).unwrap().data_blocks[0].deserialize_rows().unwrap();
//! assert_eq!(users[0].age, None);
//! ```
//!
//! ## Behavior
//!
//! - **Single pass**: O(lines), no backtracking
//! - **Fail fast**: the first malformed header, unknown schema, unknown type
//!   code or uncoercible token aborts the parse
//! - **Permissive elsewhere**: stray lines, missing `@end`, short rows and
//!   unchecked row counts are accepted; [`ParseOptions`] turns on stricter checks
//! - **No unsafe code**

pub mod coerce;
pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod tokenizer;
pub mod types;
pub mod value;

pub use de::{from_row, RowDeserializer, ValueDeserializer};
pub use error::{Error, Result};
pub use map::Row;
pub use options::ParseOptions;
pub use parser::Parser;
pub use types::{AxonType, DataBlock, FieldDefinition, ParseResult, Schema};
pub use value::AxonValue;

use std::io;

/// Parses an AXON document with default options.
///
/// # Examples
///
/// ```rust
/// use axon_parser::parse;
///
/// let result = parse("@schema Point\nx:F\ny:F\n@end\n@data Point[1]\n1.5|2\n@end").unwrap();
/// assert_eq!(result.data_blocks[0].rows[0].len(), 2);
/// ```
///
/// # Errors
///
/// Returns the first fatal error: a malformed `@data` header, a reference to
/// an undeclared schema, an unknown type code, or a token that cannot be
/// coerced to its field's type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<ParseResult> {
    parse_with_options(input, ParseOptions::default())
}

/// Parses an AXON document with custom options.
///
/// # Examples
///
/// ```rust
/// use axon_parser::{parse_with_options, ParseOptions};
///
/// let doc = "@schema A\nx:I\n@end\n@schema A\ny:S\n@end";
/// assert!(parse_with_options(doc, ParseOptions::new()).is_ok());
/// assert!(parse_with_options(doc, ParseOptions::new().with_reject_duplicate_schemas(true)).is_err());
/// ```
///
/// # Errors
///
/// As [`parse`], plus whatever checks `options` enables.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<ParseResult> {
    Parser::new(input, options).parse()
}

/// Parses a document, passing each row to `callback` as soon as it is built
/// instead of collecting it. Returns the declared schemas.
///
/// The callback receives the row's schema, the row's index within its data
/// block, and the row itself. Returning an error stops the parse.
///
/// # Examples
///
/// ```rust
/// use axon_parser::{parse_with_callback, ParseOptions};
///
/// let doc = "@schema N\nn:I\n@end\n@data N[3]\n1\n2\n3\n@end";
/// let mut total = 0;
/// parse_with_callback(doc, ParseOptions::default(), |_schema, _index, row| {
///     total += row.get("n").and_then(|v| v.as_i64()).unwrap_or(0);
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(total, 6);
/// ```
///
/// # Errors
///
/// Returns the first fatal parse error or the first error returned by `callback`.
pub fn parse_with_callback<F>(input: &str, options: ParseOptions, callback: F) -> Result<Vec<Schema>>
where
    F: FnMut(&Schema, usize, Row) -> Result<()>,
{
    Parser::new(input, options).parse_with_callback(callback)
}

/// Parses an AXON document read from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use axon_parser::parse_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"@schema A\nx:I\n@end\n@data A[1]\n5\n@end");
/// let result = parse_reader(cursor).unwrap();
/// assert_eq!(result.data_blocks.len(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8, or
/// any error [`parse`] can return.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R>(mut reader: R) -> Result<ParseResult>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&string)
}

/// Parses an AXON document from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, or any error
/// [`parse`] can return.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(v: &[u8]) -> Result<ParseResult> {
    let s = std::str::from_utf8(v).map_err(Error::custom)?;
    parse(s)
}
