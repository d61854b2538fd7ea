//! Deserializing parsed rows into Rust types.
//!
//! [`from_row`] drives any `T: Deserialize` from a [`Row`], treating the row
//! as a map in schema order:
//!
//! - `Null` deserializes as `None` (or unit)
//! - timestamps are handed over as ISO-8601 strings, which `chrono`'s own
//!   `Deserialize` impls accept
//! - string values can name unit enum variants
//! - fields absent from the row are missing map keys, so `Option` fields
//!   become `None` and other fields fail with serde's "missing field" error
//!
//! ```rust
//! use axon_parser::{from_row, row};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct User { id: i64, name: String, age: Option<i64> }
//!
//! let row = row! { "id" => 1, "name" => "Alice" };
//! let user: User = from_row(&row).unwrap();
//! assert_eq!(user, User { id: 1, name: "Alice".to_string(), age: None });
//! ```

use crate::value::TIMESTAMP_DISPLAY_FORMAT;
use crate::{AxonValue, Error, Result, Row};
use serde::de::value::StrDeserializer;
use serde::de::{self, DeserializeSeed, IntoDeserializer, MapAccess, Visitor};
use serde::forward_to_deserialize_any;

/// Deserializes a `T` from one row.
///
/// # Errors
///
/// Returns an error if the row's values do not fit `T`.
pub fn from_row<T>(row: &Row) -> Result<T>
where
    T: de::DeserializeOwned,
{
    T::deserialize(RowDeserializer { row })
}

/// Presents a [`Row`] as a serde map.
pub struct RowDeserializer<'a> {
    row: &'a Row,
}

impl<'a> RowDeserializer<'a> {
    pub fn new(row: &'a Row) -> Self {
        RowDeserializer { row }
    }
}

impl<'de, 'a> de::Deserializer<'de> for RowDeserializer<'a> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(RowAccess {
            iter: self.row.iter(),
            pending: None,
        })
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct RowAccess<'a> {
    iter: indexmap::map::Iter<'a, String, AxonValue>,
    pending: Option<&'a AxonValue>,
}

impl<'de, 'a> MapAccess<'de> for RowAccess<'a> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.pending = Some(value);
                let key: StrDeserializer<'_, Error> = key.as_str().into_deserializer();
                seed.deserialize(key).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: DeserializeSeed<'de>,
    {
        let value = self
            .pending
            .take()
            .ok_or_else(|| Error::custom("row value requested before its key"))?;
        seed.deserialize(ValueDeserializer { value })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// Presents a single [`AxonValue`] to serde.
pub struct ValueDeserializer<'a> {
    value: &'a AxonValue,
}

impl<'a> ValueDeserializer<'a> {
    pub fn new(value: &'a AxonValue) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de, 'a> de::Deserializer<'de> for ValueDeserializer<'a> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            AxonValue::Null => visitor.visit_unit(),
            AxonValue::String(s) => visitor.visit_str(s),
            AxonValue::Integer(i) => visitor.visit_i64(*i),
            AxonValue::Float(f) => visitor.visit_f64(*f),
            AxonValue::Boolean(b) => visitor.visit_bool(*b),
            AxonValue::Timestamp(ts) => {
                visitor.visit_string(ts.format(TIMESTAMP_DISPLAY_FORMAT).to_string())
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            AxonValue::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            AxonValue::String(s) => {
                let variant: StrDeserializer<'_, Error> = s.as_str().into_deserializer();
                visitor.visit_enum(variant)
            }
            other => Err(Error::custom(format!(
                "expected a string naming an enum variant, found {:?}",
                other
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}
