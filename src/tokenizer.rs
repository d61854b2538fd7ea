//! Row tokenizer: splits one data line into raw tokens.
//!
//! The scan is a single left-to-right pass with three pieces of state:
//! whether we are inside double quotes, whether the previous character was
//! a backslash, and the token being accumulated.
//!
//! - `\n`, `\t` and `\r` become newline, tab and carriage return; a
//!   backslash before any other character yields that character literally
//! - `"` toggles quoting and is never part of the token
//! - `|` outside quotes ends the current token
//!
//! A trailing `|` produces a final empty token. An unterminated quote or a
//! dangling backslash at the end of the line is dropped silently.
//!
//! This is the only place escape sequences are resolved; string coercion
//! takes tokens verbatim.
//!
//! ```rust
//! use axon_parser::tokenizer::split_row;
//!
//! assert_eq!(split_row(r#""x|y"|z"#), vec!["x|y", "z"]);
//! assert_eq!(split_row("a|b|"), vec!["a", "b", ""]);
//! ```

pub const DELIMITER: char = '|';
pub const QUOTE: char = '"';
pub const ESCAPE: char = '\\';

/// Resolves the character following a backslash.
#[inline]
#[must_use]
pub const fn unescape_char(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}

/// Splits a trimmed data line into raw tokens.
#[must_use]
pub fn split_row(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut escaped = false;

    for c in line.chars() {
        if escaped {
            current.push(unescape_char(c));
            escaped = false;
        } else if c == ESCAPE {
            escaped = true;
        } else if c == QUOTE {
            in_quote = !in_quote;
        } else if c == DELIMITER && !in_quote {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() || line.ends_with(DELIMITER) {
        tokens.push(current);
    }

    tokens
}
