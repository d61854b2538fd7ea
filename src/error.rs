//! Error types for AXON parsing.
//!
//! Every failure is fatal: the parse stops at the first problem and no
//! partial result is returned. Errors raised while reading a document
//! carry the 1-based line number of the offending line.
//!
//! ## Error Categories
//!
//! - **Structural errors**: a malformed `@data` header, a reference to a
//!   schema that was never declared, an unknown type code
//! - **Coercion errors**: a token that cannot be read as its field's type
//! - **Strict-mode errors**: only raised when enabled in [`ParseOptions`](crate::ParseOptions)
//! - **I/O errors**: reader failures in [`parse_reader`](crate::parse_reader)
//!
//! ## Examples
//!
//! ```rust
//! use axon_parser::{parse, Error};
//!
//! let result = parse("@data Ghost[1]\n1\n@end");
//! match result {
//!     Err(Error::UnknownSchema { line, name }) => {
//!         assert_eq!(line, 1);
//!         assert_eq!(name, "Ghost");
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing AXON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `@data` header does not have the `@data Name[count]` shape
    #[error("Malformed @data header at line {line}: {header:?}\nHelp: expected `@data Name[count]`")]
    MalformedDataHeader { line: usize, header: String },

    /// Data block references a schema that has not been declared yet
    #[error("Unknown schema {name:?} referenced at line {line}\nHelp: declare `@schema {name}` before its data blocks")]
    UnknownSchema { line: usize, name: String },

    /// Schema field uses a type character outside `S`, `I`, `F`, `B`, `T`
    #[error("Unknown type code {code:?} for field {field:?} at line {line}")]
    UnknownTypeCode {
        line: usize,
        field: String,
        code: String,
    },

    /// A raw token cannot be read as the field's declared type
    #[error("Cannot read {token:?} as {expected} for field {field:?} at line {line}: {reason}")]
    ValueCoercion {
        line: usize,
        field: String,
        expected: String,
        token: String,
        reason: String,
    },

    /// Schema name declared twice (only with `reject_duplicate_schemas`)
    #[error("Schema {name:?} declared again at line {line}")]
    DuplicateSchema { line: usize, name: String },

    /// Block row count differs from its header (only with `strict_row_count`)
    #[error("Data block {schema:?} at line {line} declares {declared} row(s) but contains {actual}")]
    RowCountMismatch {
        line: usize,
        schema: String,
        declared: usize,
        actual: usize,
    },

    /// `_` used for a non-nullable field (only with `enforce_nullability`)
    #[error("Null value for non-nullable field {field:?} at line {line}")]
    NullInNonNullable { line: usize, field: String },

    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed `@data` header error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axon_parser::Error;
    ///
    /// let err = Error::malformed_data_header(3, "@data User");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn malformed_data_header(line: usize, header: &str) -> Self {
        Error::MalformedDataHeader {
            line,
            header: header.to_string(),
        }
    }

    pub fn unknown_schema(line: usize, name: &str) -> Self {
        Error::UnknownSchema {
            line,
            name: name.to_string(),
        }
    }

    pub fn unknown_type_code(line: usize, field: &str, code: &str) -> Self {
        Error::UnknownTypeCode {
            line,
            field: field.to_string(),
            code: code.to_string(),
        }
    }

    /// Creates a coercion error for a token that does not fit its field type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axon_parser::Error;
    ///
    /// let err = Error::value_coercion(7, "age", "INTEGER", "abc", "invalid digit");
    /// assert!(err.to_string().contains("\"abc\""));
    /// ```
    pub fn value_coercion(
        line: usize,
        field: &str,
        expected: &str,
        token: &str,
        reason: impl fmt::Display,
    ) -> Self {
        Error::ValueCoercion {
            line,
            field: field.to_string(),
            expected: expected.to_string(),
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn duplicate_schema(line: usize, name: &str) -> Self {
        Error::DuplicateSchema {
            line,
            name: name.to_string(),
        }
    }

    pub fn row_count_mismatch(line: usize, schema: &str, declared: usize, actual: usize) -> Self {
        Error::RowCountMismatch {
            line,
            schema: schema.to_string(),
            declared,
            actual,
        }
    }

    pub fn null_in_non_nullable(line: usize, field: &str) -> Self {
        Error::NullInNonNullable {
            line,
            field: field.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the 1-based line number the error points at, if it has one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axon_parser::Error;
    ///
    /// assert_eq!(Error::unknown_schema(4, "Ghost").line(), Some(4));
    /// assert_eq!(Error::custom("boom").line(), None);
    /// ```
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedDataHeader { line, .. }
            | Error::UnknownSchema { line, .. }
            | Error::UnknownTypeCode { line, .. }
            | Error::ValueCoercion { line, .. }
            | Error::DuplicateSchema { line, .. }
            | Error::RowCountMismatch { line, .. }
            | Error::NullInNonNullable { line, .. } => Some(*line),
            Error::Io(_) | Error::Custom(_) => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_line() {
        let err = Error::malformed_data_header(2, "@data User[x]");
        assert!(err.to_string().contains("line 2"));
        assert!(err.to_string().contains("@data User[x]"));

        let err = Error::unknown_type_code(5, "flag", "X");
        assert!(err.to_string().contains("\"X\""));
        assert!(err.to_string().contains("\"flag\""));
    }

    #[test]
    fn test_line_accessor() {
        assert_eq!(Error::row_count_mismatch(9, "User", 2, 3).line(), Some(9));
        assert_eq!(Error::null_in_non_nullable(1, "id").line(), Some(1));
        assert_eq!(Error::io("closed").line(), None);
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::de::Error>::custom("missing field `id`");
        assert_eq!(err, Error::Custom("missing field `id`".to_string()));
    }
}
