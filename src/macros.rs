/// Builds a [`Row`](crate::Row) from `"name" => value` pairs, keeping their order.
///
/// Values go through `AxonValue::from`, so plain Rust literals work;
/// use `AxonValue::Null` for an explicit null.
///
/// ```rust
/// use axon_parser::{row, AxonValue};
///
/// let row = row! { "id" => 1, "name" => "Alice", "age" => AxonValue::Null };
/// assert_eq!(row.len(), 3);
/// assert_eq!(row.get("id"), Some(&AxonValue::Integer(1)));
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::new()
    };

    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut row = $crate::Row::new();
        $(
            row.insert($key.to_string(), $crate::AxonValue::from($value));
        )+
        row
    }};
}

#[cfg(test)]
mod tests {
    use crate::{AxonValue, Row};

    #[test]
    fn test_row_macro_empty() {
        assert_eq!(row!(), Row::new());
    }

    #[test]
    fn test_row_macro_keeps_order_and_types() {
        let row = row! {
            "z" => 1,
            "a" => 2.5,
            "m" => true,
            "s" => "text",
        };
        let keys: Vec<_> = row.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m", "s"]);
        assert_eq!(row.get("a"), Some(&AxonValue::Float(2.5)));
        assert_eq!(row.get("m"), Some(&AxonValue::Boolean(true)));
        assert_eq!(row.get("s"), Some(&AxonValue::String("text".to_string())));
    }
}
