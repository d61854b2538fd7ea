//! AXON document parsing.
//!
//! This module provides the [`Parser`] that walks a document line by line:
//!
//! - `@schema Name` ... `@end` blocks become [`Schema`]s
//! - `@data Name[count]` ... `@end` blocks become [`DataBlock`]s, each line
//!   tokenized with [`split_row`] and coerced against the named schema
//! - every other line is skipped
//!
//! Schemas must be declared before the data blocks that use them. A block
//! that reaches the end of input without `@end` simply ends there.
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use axon_parser::parse;
//!
//! let result = parse("@schema P\nx:I\n@end\n@data P[1]\n7\n@end").unwrap();
//! assert_eq!(result.data_blocks[0].rows[0].get("x").and_then(|v| v.as_i64()), Some(7));
//! ```

use crate::coerce::coerce;
use crate::tokenizer::split_row;
use crate::{
    AxonType, DataBlock, Error, FieldDefinition, ParseOptions, ParseResult, Result, Row, Schema,
};
use log::{debug, trace, warn};
use regex::Regex;
use std::sync::OnceLock;

pub const SCHEMA_DIRECTIVE: &str = "@schema";
pub const DATA_DIRECTIVE: &str = "@data";
pub const END_DIRECTIVE: &str = "@end";

const NULLABLE_MARKER: char = '?';

fn data_header_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"@data\s+(\w+)\[(\d+)\]").expect("data header pattern is valid")
    })
}

/// Receives the rows of each data block as they are parsed.
trait RowSink {
    fn start_block(&mut self, schema_name: &str, declared_count: usize);

    fn row(&mut self, schema: &Schema, index: usize, row: Row) -> Result<()>;
}

/// Collects rows into [`DataBlock`]s.
#[derive(Default)]
struct BlockCollector {
    blocks: Vec<DataBlock>,
}

impl RowSink for BlockCollector {
    fn start_block(&mut self, schema_name: &str, declared_count: usize) {
        self.blocks.push(DataBlock {
            schema_name: schema_name.to_string(),
            declared_count,
            rows: Vec::with_capacity(declared_count.min(1024)),
        });
    }

    fn row(&mut self, _schema: &Schema, _index: usize, row: Row) -> Result<()> {
        if let Some(block) = self.blocks.last_mut() {
            block.rows.push(row);
        }
        Ok(())
    }
}

/// Forwards rows to a user callback without keeping them.
struct CallbackSink<F>(F);

impl<F> RowSink for CallbackSink<F>
where
    F: FnMut(&Schema, usize, Row) -> Result<()>,
{
    fn start_block(&mut self, _schema_name: &str, _declared_count: usize) {}

    fn row(&mut self, schema: &Schema, index: usize, row: Row) -> Result<()> {
        (self.0)(schema, index, row)
    }
}

/// The AXON parser.
///
/// Holds the document split into lines, a cursor, and the schemas declared
/// so far. Created via [`Parser::new`] and consumed by [`Parser::parse`] or
/// [`Parser::parse_with_callback`].
pub struct Parser<'a> {
    lines: Vec<&'a str>,
    position: usize,
    options: ParseOptions,
    schemas: Vec<Schema>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            lines: input.split('\n').collect(),
            position: 0,
            options,
            schemas: Vec::new(),
        }
    }

    /// Parses the whole document, collecting every row.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error encountered; no partial result is kept.
    pub fn parse(mut self) -> Result<ParseResult> {
        let mut collector = BlockCollector::default();
        self.scan(&mut collector)?;
        Ok(ParseResult {
            schemas: self.schemas,
            data_blocks: collector.blocks,
        })
    }

    /// Parses the document, handing each row to `callback` instead of
    /// collecting it. Returns the declared schemas.
    ///
    /// # Errors
    ///
    /// Returns the first fatal parse error, or the first error returned by
    /// `callback`.
    pub fn parse_with_callback<F>(mut self, callback: F) -> Result<Vec<Schema>>
    where
        F: FnMut(&Schema, usize, Row) -> Result<()>,
    {
        let mut sink = CallbackSink(callback);
        self.scan(&mut sink)?;
        Ok(self.schemas)
    }

    fn scan<S: RowSink>(&mut self, sink: &mut S) -> Result<()> {
        while self.position < self.lines.len() {
            let line = self.lines[self.position].trim();

            if line.starts_with(SCHEMA_DIRECTIVE) {
                self.parse_schema()?;
            } else if line.starts_with(DATA_DIRECTIVE) {
                self.parse_data_block(sink)?;
            } else {
                self.position += 1;
            }
        }
        Ok(())
    }

    /// Returns the next non-blank body line with its 1-based line number,
    /// consuming blank lines. Returns `None` after consuming `@end` or at end
    /// of input.
    fn next_body_line(&mut self) -> Option<(usize, &'a str)> {
        while self.position < self.lines.len() {
            let index = self.position;
            let line: &'a str = self.lines[index].trim();
            self.position += 1;

            if line == END_DIRECTIVE {
                return None;
            }
            if !line.is_empty() {
                return Some((index + 1, line));
            }
        }
        None
    }

    fn parse_schema(&mut self) -> Result<()> {
        let header_line = self.position + 1;
        let header = self.lines[self.position].trim();
        let name = header
            .strip_prefix(SCHEMA_DIRECTIVE)
            .unwrap_or(header)
            .trim()
            .to_string();
        self.position += 1;

        if self.schemas.iter().any(|s| s.name == name) {
            if self.options.reject_duplicate_schemas {
                return Err(Error::duplicate_schema(header_line, &name));
            }
            warn!(
                "schema {:?} redeclared at line {}; data blocks keep using the first declaration",
                name, header_line
            );
        }

        let mut fields = Vec::new();
        while let Some((line_number, line)) = self.next_body_line() {
            if let Some(field) = parse_field(line, line_number)? {
                fields.push(field);
            }
        }

        debug!(
            "parsed schema {:?} with {} field(s) (line {})",
            name,
            fields.len(),
            header_line
        );
        self.schemas.push(Schema::new(name, fields));
        Ok(())
    }

    fn parse_data_block<S: RowSink>(&mut self, sink: &mut S) -> Result<()> {
        let header_line = self.position + 1;
        let header: &'a str = self.lines[self.position].trim();
        let (schema_name, declared_count) = parse_data_header(header)
            .ok_or_else(|| Error::malformed_data_header(header_line, header))?;

        // First declaration wins for duplicate names.
        let schema_index = self
            .schemas
            .iter()
            .position(|s| s.name == schema_name)
            .ok_or_else(|| Error::unknown_schema(header_line, schema_name))?;
        self.position += 1;

        sink.start_block(schema_name, declared_count);

        let mut row_count = 0;
        while let Some((line_number, line)) = self.next_body_line() {
            let schema = &self.schemas[schema_index];
            let row = build_row(schema, line, line_number, &self.options)?;
            trace!("line {}: {} value(s)", line_number, row.len());
            sink.row(schema, row_count, row)?;
            row_count += 1;
        }

        if self.options.strict_row_count && row_count != declared_count {
            return Err(Error::row_count_mismatch(
                header_line,
                schema_name,
                declared_count,
                row_count,
            ));
        }

        debug!(
            "parsed data block {:?}: {} row(s), {} declared (line {})",
            schema_name, row_count, declared_count, header_line
        );
        Ok(())
    }
}

/// Reads `@data Name[count]`, returning the name and count.
fn parse_data_header(header: &str) -> Option<(&str, usize)> {
    let captures = data_header_pattern().captures(header)?;
    let name = captures.get(1)?.as_str();
    let count = captures.get(2)?.as_str().parse().ok()?;
    Some((name, count))
}

/// Reads a `name:T` or `name:T?` schema line.
///
/// Lines that do not split into exactly two parts on `:` are ignored.
fn parse_field(line: &str, line_number: usize) -> Result<Option<FieldDefinition>> {
    let mut parts = line.split(':');
    let (Some(name), Some(type_token), None) = (parts.next(), parts.next(), parts.next()) else {
        return Ok(None);
    };

    let name = name.trim();
    let mut type_token = type_token.trim();
    let nullable = type_token.ends_with(NULLABLE_MARKER);
    if nullable {
        type_token = &type_token[..type_token.len() - NULLABLE_MARKER.len_utf8()];
    }

    // Only the first character carries the type.
    let field_type = type_token
        .chars()
        .next()
        .and_then(AxonType::from_code)
        .ok_or_else(|| Error::unknown_type_code(line_number, name, type_token))?;

    Ok(Some(FieldDefinition::new(name, field_type, nullable)))
}

/// Pairs tokens with schema fields by position and coerces each one.
///
/// Fields beyond the last token are left out of the row; extra tokens are
/// ignored.
fn build_row(schema: &Schema, line: &str, line_number: usize, options: &ParseOptions) -> Result<Row> {
    let tokens = split_row(line);
    let mut row = Row::with_capacity(schema.fields.len().min(tokens.len()));

    for (field, token) in schema.fields.iter().zip(&tokens) {
        let value = coerce(token, field.field_type).map_err(|failure| {
            Error::value_coercion(
                line_number,
                &field.name,
                failure.expected.name(),
                token,
                failure.reason,
            )
        })?;

        if value.is_null() && !field.nullable && options.enforce_nullability {
            return Err(Error::null_in_non_nullable(line_number, &field.name));
        }

        row.insert(field.name.clone(), value);
    }

    Ok(row)
}
