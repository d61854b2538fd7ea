//! Ordered row type.
//!
//! This module provides [`Row`], a wrapper around [`IndexMap`] that keeps
//! fields in schema order. Iterating a row yields its fields in the order
//! the schema declared them, which is what printers and the serde bridge
//! rely on.
//!
//! A field missing from a row (the line had fewer tokens than the schema
//! has fields) is absent from the map, which is different from a field
//! present with [`AxonValue::Null`].
//!
//! ## Examples
//!
//! ```rust
//! use axon_parser::{AxonValue, Row};
//!
//! let mut row = Row::new();
//! row.insert("id".to_string(), AxonValue::from(1));
//! row.insert("age".to_string(), AxonValue::Null);
//!
//! assert_eq!(row.get("age"), Some(&AxonValue::Null));
//! assert_eq!(row.get("email"), None);
//! ```

use crate::AxonValue;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// An ordered map of field names to values.
///
/// # Examples
///
/// ```rust
/// use axon_parser::{AxonValue, Row};
///
/// let mut row = Row::new();
/// row.insert("second".to_string(), AxonValue::from(2));
/// row.insert("first".to_string(), AxonValue::from(1));
///
/// // Iteration keeps insertion order
/// let keys: Vec<_> = row.keys().cloned().collect();
/// assert_eq!(keys, vec!["second", "first"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Row(IndexMap<String, AxonValue>);

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Row(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Row(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field value, returning the previous value for that name.
    pub fn insert(&mut self, key: String, value: AxonValue) -> Option<AxonValue> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AxonValue> {
        self.0.get(key)
    }

    /// Returns `true` if the row has a value (possibly null) for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, AxonValue> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, AxonValue> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, AxonValue> {
        self.0.iter()
    }
}

impl From<Row> for HashMap<String, AxonValue> {
    fn from(row: Row) -> Self {
        row.0.into_iter().collect()
    }
}

impl IntoIterator for Row {
    type Item = (String, AxonValue);
    type IntoIter = indexmap::map::IntoIter<String, AxonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a AxonValue);
    type IntoIter = indexmap::map::Iter<'a, String, AxonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, AxonValue)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, AxonValue)>>(iter: T) -> Self {
        Row(IndexMap::from_iter(iter))
    }
}
