//! Value coercion: raw token + declared type -> [`AxonValue`].

use crate::{AxonType, AxonValue};
use chrono::NaiveDateTime;

/// Token that stands for null in any field.
pub const NULL_SENTINEL: &str = "_";

/// Accepted timestamp layouts: ISO-8601 local date-time, no offset.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Why a token could not be coerced. The parser attaches line and field
/// context before surfacing it as [`Error::ValueCoercion`](crate::Error::ValueCoercion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionFailure {
    pub expected: AxonType,
    pub reason: String,
}

/// Converts a raw token to a value of `ty`.
///
/// `_` is null for every type; whether the field is nullable is the
/// caller's concern.
///
/// # Examples
///
/// ```rust
/// use axon_parser::{coerce::coerce, AxonType, AxonValue};
///
/// assert_eq!(coerce("42", AxonType::Integer), Ok(AxonValue::Integer(42)));
/// assert_eq!(coerce("_", AxonType::Integer), Ok(AxonValue::Null));
/// assert_eq!(coerce("yes", AxonType::Boolean), Ok(AxonValue::Boolean(false)));
/// assert!(coerce("4x", AxonType::Integer).is_err());
/// ```
pub fn coerce(raw: &str, ty: AxonType) -> Result<AxonValue, CoercionFailure> {
    if raw == NULL_SENTINEL {
        return Ok(AxonValue::Null);
    }

    let fail = |reason: String| CoercionFailure {
        expected: ty,
        reason,
    };

    match ty {
        AxonType::String => Ok(AxonValue::String(raw.to_string())),
        AxonType::Integer => raw
            .parse::<i64>()
            .map(AxonValue::Integer)
            .map_err(|e| fail(e.to_string())),
        AxonType::Float => raw
            .parse::<f64>()
            .map(AxonValue::Float)
            .map_err(|e| fail(e.to_string())),
        AxonType::Boolean => Ok(AxonValue::Boolean(raw == "1")),
        AxonType::Timestamp => parse_timestamp(raw)
            .map(AxonValue::Timestamp)
            .map_err(fail),
    }
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    let mut last_error = String::from("empty timestamp");
    for fmt in TIMESTAMP_FORMATS {
        match NaiveDateTime::parse_from_str(raw, fmt) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => last_error = e.to_string(),
        }
    }
    Err(last_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_null_sentinel_for_every_type() {
        for ty in AxonType::ALL {
            assert_eq!(coerce("_", ty), Ok(AxonValue::Null));
        }
        // only the bare sentinel is null
        assert_eq!(coerce("__", AxonType::String), Ok(AxonValue::from("__")));
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(coerce("a\\nb", AxonType::String), Ok(AxonValue::from("a\\nb")));
        assert_eq!(coerce("", AxonType::String), Ok(AxonValue::from("")));
    }

    #[test]
    fn test_integers() {
        assert_eq!(coerce("-42", AxonType::Integer), Ok(AxonValue::Integer(-42)));
        assert_eq!(
            coerce("9223372036854775807", AxonType::Integer),
            Ok(AxonValue::Integer(i64::MAX))
        );
        let err = coerce("9223372036854775808", AxonType::Integer).unwrap_err();
        assert_eq!(err.expected, AxonType::Integer);
        assert!(coerce("1.5", AxonType::Integer).is_err());
        assert!(coerce("", AxonType::Integer).is_err());
    }

    #[test]
    fn test_floats() {
        assert_eq!(coerce("3.14159", AxonType::Float), Ok(AxonValue::Float(3.14159)));
        assert_eq!(coerce("-2", AxonType::Float), Ok(AxonValue::Float(-2.0)));
        assert_eq!(coerce("1e3", AxonType::Float), Ok(AxonValue::Float(1000.0)));
        assert!(coerce("abc", AxonType::Float).is_err());
    }

    #[test]
    fn test_booleans_only_one_is_true() {
        assert_eq!(coerce("1", AxonType::Boolean), Ok(AxonValue::Boolean(true)));
        assert_eq!(coerce("0", AxonType::Boolean), Ok(AxonValue::Boolean(false)));
        assert_eq!(coerce("true", AxonType::Boolean), Ok(AxonValue::Boolean(false)));
        assert_eq!(coerce("", AxonType::Boolean), Ok(AxonValue::Boolean(false)));
    }

    #[test]
    fn test_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 11, 23)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(
            coerce("2024-11-23T10:30:00", AxonType::Timestamp),
            Ok(AxonValue::Timestamp(expected))
        );
        assert_eq!(
            coerce("2024-11-23T10:30", AxonType::Timestamp),
            Ok(AxonValue::Timestamp(expected))
        );

        let with_millis = NaiveDate::from_ymd_opt(2024, 11, 23)
            .unwrap()
            .and_hms_milli_opt(10, 30, 0, 250)
            .unwrap();
        assert_eq!(
            coerce("2024-11-23T10:30:00.250", AxonType::Timestamp),
            Ok(AxonValue::Timestamp(with_millis))
        );
    }

    #[test]
    fn test_timestamp_rejects_offsets_and_garbage() {
        assert!(coerce("2024-11-23T10:30:00Z", AxonType::Timestamp).is_err());
        assert!(coerce("2024-11-23 10:30:00", AxonType::Timestamp).is_err());
        assert!(coerce("2024-11-23", AxonType::Timestamp).is_err());
        assert!(coerce("yesterday", AxonType::Timestamp).is_err());
    }
}
