//! Configuration options for AXON parsing.
//!
//! The defaults are permissive: declared row counts are not checked,
//! duplicate schema names are accepted (first declaration wins) and `_`
//! is accepted as null for every field. Each check can be switched on
//! individually.
//!
//! ## Examples
//!
//! ```rust
//! use axon_parser::{parse_with_options, Error, ParseOptions};
//!
//! let doc = "@schema P\nx:I\n@end\n@data P[2]\n1\n@end";
//!
//! // Permissive by default
//! assert!(parse_with_options(doc, ParseOptions::default()).is_ok());
//!
//! // Opt into row count checking
//! let strict = ParseOptions::new().with_strict_row_count(true);
//! assert!(matches!(
//!     parse_with_options(doc, strict),
//!     Err(Error::RowCountMismatch { declared: 2, actual: 1, .. })
//! ));
//! ```

/// Configuration options for AXON parsing.
///
/// # Examples
///
/// ```rust
/// use axon_parser::ParseOptions;
///
/// // Default permissive options
/// let options = ParseOptions::new();
/// assert!(!options.strict_row_count);
///
/// // Every check enabled
/// let options = ParseOptions::strict();
/// assert!(options.reject_duplicate_schemas);
/// assert!(options.enforce_nullability);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub strict_row_count: bool,
    pub reject_duplicate_schemas: bool,
    pub enforce_nullability: bool,
}

impl ParseOptions {
    /// Creates default options (no optional checks).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with every optional check enabled.
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            strict_row_count: true,
            reject_duplicate_schemas: true,
            enforce_nullability: true,
        }
    }

    /// Fail when a data block's row count differs from the `[count]` in its header.
    #[must_use]
    pub fn with_strict_row_count(mut self, enabled: bool) -> Self {
        self.strict_row_count = enabled;
        self
    }

    /// Fail when a schema name is declared more than once.
    ///
    /// When disabled, later declarations are still recorded but data blocks
    /// resolve against the first one.
    #[must_use]
    pub fn with_reject_duplicate_schemas(mut self, enabled: bool) -> Self {
        self.reject_duplicate_schemas = enabled;
        self
    }

    /// Fail when the null sentinel `_` fills a field not declared with `?`.
    #[must_use]
    pub fn with_enforce_nullability(mut self, enabled: bool) -> Self {
        self.enforce_nullability = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_flags() {
        let options = ParseOptions::new()
            .with_strict_row_count(true)
            .with_enforce_nullability(true);
        assert!(options.strict_row_count);
        assert!(!options.reject_duplicate_schemas);
        assert!(options.enforce_nullability);
    }

    #[test]
    fn test_strict_can_be_relaxed() {
        let options = ParseOptions::strict().with_reject_duplicate_schemas(false);
        assert!(options.strict_row_count);
        assert!(!options.reject_duplicate_schemas);
    }
}
