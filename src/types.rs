//! Schema and document model.
//!
//! A parse produces a [`ParseResult`]: the [`Schema`]s declared by the
//! document and the [`DataBlock`]s that reference them, both in document
//! order.

use crate::{Result, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five value types a schema field can declare.
///
/// Each type is written in a schema as a single character code.
///
/// # Examples
///
/// ```rust
/// use axon_parser::AxonType;
///
/// assert_eq!(AxonType::from_code('I'), Some(AxonType::Integer));
/// assert_eq!(AxonType::Integer.code(), 'I');
/// assert_eq!(AxonType::from_code('X'), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxonType {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
}

impl AxonType {
    pub const ALL: [AxonType; 5] = [
        AxonType::String,
        AxonType::Integer,
        AxonType::Float,
        AxonType::Boolean,
        AxonType::Timestamp,
    ];

    /// Decodes a type code character. Codes are case-sensitive.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'S' => Some(AxonType::String),
            'I' => Some(AxonType::Integer),
            'F' => Some(AxonType::Float),
            'B' => Some(AxonType::Boolean),
            'T' => Some(AxonType::Timestamp),
            _ => None,
        }
    }

    /// Returns the character this type is written as in a schema.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            AxonType::String => 'S',
            AxonType::Integer => 'I',
            AxonType::Float => 'F',
            AxonType::Boolean => 'B',
            AxonType::Timestamp => 'T',
        }
    }

    /// Upper-case type name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AxonType::String => "STRING",
            AxonType::Integer => "INTEGER",
            AxonType::Float => "FLOAT",
            AxonType::Boolean => "BOOLEAN",
            AxonType::Timestamp => "TIMESTAMP",
        }
    }
}

impl fmt::Display for AxonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One `name:T` line of a schema block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub name: String,
    pub field_type: AxonType,
    pub nullable: bool,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: AxonType, nullable: bool) -> Self {
        FieldDefinition {
            name: name.into(),
            field_type,
            nullable,
        }
    }
}

impl fmt::Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.field_type)?;
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// A named, ordered list of fields. Row tokens map onto fields by position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl Schema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Schema {
            name: name.into(),
            fields,
        }
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// The rows of one `@data Name[count]` block.
///
/// `declared_count` is copied from the header as written; it is only
/// compared with `rows.len()` when
/// [`ParseOptions::strict_row_count`](crate::ParseOptions) is enabled.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataBlock {
    pub schema_name: String,
    pub declared_count: usize,
    pub rows: Vec<Row>,
}

impl DataBlock {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Deserializes every row into `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axon_parser::parse;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize, Debug, PartialEq)]
    /// struct Point { x: i64, y: i64 }
    ///
    /// let doc = "@schema Point\nx:I\ny:I\n@end\n@data Point[2]\n1|2\n3|4\n@end";
    /// let result = parse(doc).unwrap();
    /// let points: Vec<Point> = result.data_blocks[0].deserialize_rows().unwrap();
    /// assert_eq!(points, vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if a row does not fit `T`.
    pub fn deserialize_rows<T>(&self) -> Result<Vec<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.rows.iter().map(crate::from_row).collect()
    }
}

/// Everything parsed from one document, in document order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParseResult {
    pub schemas: Vec<Schema>,
    pub data_blocks: Vec<DataBlock>,
}

impl ParseResult {
    /// Returns the first schema declared with `name`, the one data blocks
    /// resolve against.
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.name == name)
    }

    /// Data blocks that reference `name`, in document order.
    pub fn blocks_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DataBlock> + 'a {
        self.data_blocks
            .iter()
            .filter(move |b| b.schema_name == name)
    }
}
