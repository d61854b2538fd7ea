//! Typed values produced by coercing row tokens.
//!
//! This module provides the [`AxonValue`] enum: one variant per field type
//! plus [`AxonValue::Null`] for the `_` sentinel.
//!
//! ## Usage Patterns
//!
//! ### Type Checking
//!
//! ```rust
//! use axon_parser::AxonValue;
//!
//! let value = AxonValue::from(42);
//! assert!(value.is_integer());
//! assert!(!value.is_string());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use axon_parser::AxonValue;
//! use std::convert::TryFrom;
//!
//! let value = AxonValue::from(42);
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::AxonType;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// Format used when rendering timestamps back to text.
pub(crate) const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A single field value of a parsed row.
///
/// # Examples
///
/// ```rust
/// use axon_parser::AxonValue;
///
/// let null = AxonValue::Null;
/// let num = AxonValue::Integer(42);
/// let text = AxonValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert_eq!(num.as_i64(), Some(42));
/// assert_eq!(text.as_str(), Some("hello"));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AxonValue {
    #[default]
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(NaiveDateTime),
}

impl AxonValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, AxonValue::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, AxonValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, AxonValue::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, AxonValue::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, AxonValue::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, AxonValue::Timestamp(_))
    }

    /// The field type this value belongs to, or `None` for null.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axon_parser::{AxonType, AxonValue};
    ///
    /// assert_eq!(AxonValue::Boolean(true).type_code(), Some(AxonType::Boolean));
    /// assert_eq!(AxonValue::Null.type_code(), None);
    /// ```
    #[must_use]
    pub const fn type_code(&self) -> Option<AxonType> {
        match self {
            AxonValue::Null => None,
            AxonValue::String(_) => Some(AxonType::String),
            AxonValue::Integer(_) => Some(AxonType::Integer),
            AxonValue::Float(_) => Some(AxonType::Float),
            AxonValue::Boolean(_) => Some(AxonType::Boolean),
            AxonValue::Timestamp(_) => Some(AxonType::Timestamp),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AxonValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AxonValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as `f64` for floats and integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use axon_parser::AxonValue;
    ///
    /// assert_eq!(AxonValue::Float(2.5).as_f64(), Some(2.5));
    /// assert_eq!(AxonValue::Integer(2).as_f64(), Some(2.0));
    /// assert_eq!(AxonValue::Null.as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AxonValue::Float(f) => Some(*f),
            AxonValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AxonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_timestamp(&self) -> Option<&NaiveDateTime> {
        match self {
            AxonValue::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }
}

impl fmt::Display for AxonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxonValue::Null => write!(f, "null"),
            AxonValue::String(s) => write!(f, "{}", s),
            AxonValue::Integer(i) => write!(f, "{}", i),
            AxonValue::Float(fl) => write!(f, "{}", fl),
            AxonValue::Boolean(b) => write!(f, "{}", b),
            AxonValue::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_DISPLAY_FORMAT)),
        }
    }
}

impl Serialize for AxonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AxonValue::Null => serializer.serialize_unit(),
            AxonValue::String(s) => serializer.serialize_str(s),
            AxonValue::Integer(i) => serializer.serialize_i64(*i),
            AxonValue::Float(f) => serializer.serialize_f64(*f),
            AxonValue::Boolean(b) => serializer.serialize_bool(*b),
            AxonValue::Timestamp(ts) => {
                serializer.collect_str(&ts.format(TIMESTAMP_DISPLAY_FORMAT))
            }
        }
    }
}

// TryFrom implementations for extracting values from AxonValue
impl TryFrom<AxonValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: AxonValue) -> crate::Result<Self> {
        match value {
            AxonValue::Integer(i) => Ok(i),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<AxonValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: AxonValue) -> crate::Result<Self> {
        match value {
            AxonValue::Float(f) => Ok(f),
            AxonValue::Integer(i) => Ok(i as f64),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<AxonValue> for bool {
    type Error = crate::Error;

    fn try_from(value: AxonValue) -> crate::Result<Self> {
        match value {
            AxonValue::Boolean(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected boolean, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<AxonValue> for String {
    type Error = crate::Error;

    fn try_from(value: AxonValue) -> crate::Result<Self> {
        match value {
            AxonValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<AxonValue> for NaiveDateTime {
    type Error = crate::Error;

    fn try_from(value: AxonValue) -> crate::Result<Self> {
        match value {
            AxonValue::Timestamp(ts) => Ok(ts),
            _ => Err(crate::Error::custom(format!(
                "expected timestamp, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for AxonValue {
    fn from(value: bool) -> Self {
        AxonValue::Boolean(value)
    }
}

impl From<i32> for AxonValue {
    fn from(value: i32) -> Self {
        AxonValue::Integer(value as i64)
    }
}

impl From<i64> for AxonValue {
    fn from(value: i64) -> Self {
        AxonValue::Integer(value)
    }
}

impl From<u32> for AxonValue {
    fn from(value: u32) -> Self {
        AxonValue::Integer(value as i64)
    }
}

impl From<f64> for AxonValue {
    fn from(value: f64) -> Self {
        AxonValue::Float(value)
    }
}

impl From<String> for AxonValue {
    fn from(value: String) -> Self {
        AxonValue::String(value)
    }
}

impl From<&str> for AxonValue {
    fn from(value: &str) -> Self {
        AxonValue::String(value.to_string())
    }
}

impl From<NaiveDateTime> for AxonValue {
    fn from(value: NaiveDateTime) -> Self {
        AxonValue::Timestamp(value)
    }
}

impl<T: Into<AxonValue>> From<Option<T>> for AxonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AxonValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::convert::TryFrom;

    fn sample_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_tryfrom_i64() {
        let result: i64 = TryFrom::try_from(AxonValue::Integer(42)).unwrap();
        assert_eq!(result, 42);
        assert!(i64::try_from(AxonValue::Float(42.0)).is_err());
        assert!(i64::try_from(AxonValue::Null).is_err());
    }

    #[test]
    fn test_tryfrom_f64_widens_integers() {
        assert_eq!(f64::try_from(AxonValue::Float(3.5)).unwrap(), 3.5);
        assert_eq!(f64::try_from(AxonValue::Integer(2)).unwrap(), 2.0);
        assert!(f64::try_from(AxonValue::from("2")).is_err());
    }

    #[test]
    fn test_tryfrom_bool_and_string() {
        assert!(bool::try_from(AxonValue::Boolean(true)).unwrap());
        assert!(bool::try_from(AxonValue::Integer(1)).is_err());
        assert_eq!(String::try_from(AxonValue::from("hi")).unwrap(), "hi");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(AxonValue::from(None::<i64>), AxonValue::Null);
        assert_eq!(AxonValue::from(Some(7i64)), AxonValue::Integer(7));
    }

    #[test]
    fn test_display() {
        assert_eq!(AxonValue::Null.to_string(), "null");
        assert_eq!(AxonValue::Boolean(false).to_string(), "false");
        assert_eq!(AxonValue::Float(1.5).to_string(), "1.5");
        assert_eq!(
            AxonValue::Timestamp(sample_timestamp()).to_string(),
            "2024-01-15T10:30:00"
        );
    }

    #[test]
    fn test_type_code_matches_variant() {
        assert_eq!(AxonValue::from("x").type_code(), Some(AxonType::String));
        assert_eq!(
            AxonValue::Timestamp(sample_timestamp()).type_code(),
            Some(AxonType::Timestamp)
        );
        assert!(AxonValue::Timestamp(sample_timestamp()).is_timestamp());
    }
}
