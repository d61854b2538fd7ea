//! Property-based tests for the tokenizer, coercion and schema parsing.

use axon_parser::coerce::coerce;
use axon_parser::tokenizer::split_row;
use axon_parser::{parse, AxonType, AxonValue};
use proptest::prelude::*;

/// Segment text with no quotes, backslashes, delimiters or line breaks.
fn plain_segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:@#_-]{1,12}"
}

proptest! {
    #[test]
    fn prop_plain_segments_roundtrip(segments in prop::collection::vec(plain_segment(), 1..8)) {
        let line = segments.join("|");
        prop_assert_eq!(split_row(&line), segments);
    }

    #[test]
    fn prop_quoted_segments_keep_delimiters(
        left in "[a-z|]{1,8}",
        right in "[a-z]{1,8}",
    ) {
        let line = format!("\"{}\"|{}", left, right);
        prop_assert_eq!(split_row(&line), vec![left, right]);
    }

    #[test]
    fn prop_i64_coercion(n in any::<i64>()) {
        prop_assert_eq!(coerce(&n.to_string(), AxonType::Integer), Ok(AxonValue::Integer(n)));
    }

    #[test]
    fn prop_finite_f64_coercion(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        prop_assert_eq!(coerce(&f.to_string(), AxonType::Float), Ok(AxonValue::Float(f)));
    }

    #[test]
    fn prop_null_sentinel_any_type(index in 0usize..5) {
        prop_assert_eq!(coerce("_", AxonType::ALL[index]), Ok(AxonValue::Null));
    }

    #[test]
    fn prop_field_count_matches_two_part_lines(
        names in prop::collection::vec("[a-z]{1,6}", 0..10),
        noise in prop::collection::vec("[a-z ]{0,6}", 0..5),
    ) {
        let mut body: Vec<String> = names.iter().map(|n| format!("{}:S", n)).collect();
        // lines without a colon are skipped, blank ones too
        body.extend(noise.iter().cloned());
        body.push("x:y:z".to_string());
        let input = format!("@schema T\n{}\n@end", body.join("\n"));

        let result = parse(&input).unwrap();
        prop_assert_eq!(result.schemas[0].fields.len(), names.len());
    }
}
