//! AXON Format Reference
//!
//! This module documents the AXON text format as implemented by this library.
//! It contains no code.
//!
//! # Overview
//!
//! An AXON document is line oriented. Schema blocks declare record layouts,
//! data blocks hold pipe-delimited rows that follow one of those layouts.
//! Lines outside blocks are ignored, so comments need no special syntax.
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
//! # Schema Blocks
//!
//! ```text
//! @schema <Name>
//! <field>:<type>[?]
//! ...
//! @end
//! ```
//!
//! **Rules**:
//! - The name is whatever follows `@schema` on the header line, trimmed
//! - Each field line splits on `:` into exactly two parts; other lines are skipped
//! - A trailing `?` marks the field nullable
//! - Only the first character of the type is read; it must be one of the codes below
//! - Blank lines inside the block are ignored
//!
//! | Code | Type | Example token | Value |
//! |------|------|---------------|-------|
//! | `S` | String | `Alice` | `"Alice"` |
//! | `I` | Integer (i64) | `-42` | `-42` |
//! | `F` | Float (f64) | `3.5` | `3.5` |
//! | `B` | Boolean | `1` | `true` (any other token is `false`) |
//! | `T` | Timestamp | `2024-01-15T10:30:00` | local date-time, no offset |
//!
//! # Data Blocks
//!
//! ```text
//! @data <Name>[<count>]
//! <token>|<token>|...
//! ...
//! @end
//! ```
//!
//! **Rules**:
//! - `<Name>` is one or more word characters and must name a schema declared
//!   earlier in the document; with duplicate names the first declaration wins
//! - `<count>` is recorded as written and not checked unless strict row
//!   counting is enabled
//! - Tokens map onto schema fields by position
//! - A row with fewer tokens than fields leaves the trailing fields out of
//!   the row; surplus tokens are ignored
//!
//! ## Tokens
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `\|` | token separator |
//! | `"a\|b"` | quotes protect separators; the quotes themselves are dropped |
//! | `\n` `\t` `\r` | newline, tab, carriage return |
//! | `\x` | any other escaped character is taken literally (`\\`, `\"`, `\|`) |
//! | `_` | null, for any field type |
//!
//! A trailing `|` produces one final empty token.
//!
//! # Termination
//!
//! Both block kinds end at a line that is exactly `@end` (after trimming). If
//! the input ends first, the block ends with it.
//!
//! # Errors
//!
//! Parsing stops at the first of:
//!
//! - a `@data` header that is not `@data Name[count]`
//! - a data block naming an undeclared schema
//! - an unknown type code
//! - a token that does not parse as its field's integer, float or timestamp type
