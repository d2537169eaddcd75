//! Property-based tests for the parser round-trip and diff idempotence.

use jsoncmp::{diff_values, parse_flexible, DiffOptions, Value};
use proptest::prelude::*;

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(|n| Value::Number(n as f64)),
        "[a-z ]{0,10}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..5)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

/// A record: an object with only scalar fields.
fn arb_record() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-z]{1,6}", arb_scalar()), 0..5)
        .prop_map(|pairs| Value::Object(pairs.into_iter().collect()))
}

fn to_json_string(value: &Value) -> String {
    serde_json::Value::from(value).to_string()
}

proptest! {
    // Any value a standard JSON encoder emits must survive the flexible
    // parser unchanged.
    #[test]
    fn prop_flexible_parser_round_trips_strict_json(value in arb_value()) {
        let text = to_json_string(&value);
        let parsed = parse_flexible(&text).unwrap();
        prop_assert!(parsed.deep_equal(&value), "round trip failed for {text}");
    }

    // Diffing a document against itself reports nothing but unchanged
    // entries.
    #[test]
    fn prop_diff_array_against_itself_is_clean(records in prop::collection::vec(arb_record(), 1..4)) {
        let rows = Value::Array(records.clone());
        let report = diff_values(&rows, &rows, &DiffOptions::default()).unwrap();
        prop_assert_eq!(report.summary.added, 0);
        prop_assert_eq!(report.summary.removed, 0);
        prop_assert_eq!(report.summary.modified, 0);
        prop_assert_eq!(report.summary.unchanged, records.len());
    }

    #[test]
    fn prop_diff_object_against_itself_is_clean(record in arb_record()) {
        let report = diff_values(&record, &record, &DiffOptions::default()).unwrap();
        prop_assert_eq!(report.summary.added, 0);
        prop_assert_eq!(report.summary.removed, 0);
        prop_assert_eq!(report.summary.modified, 0);
        let field_count = record.as_object().map_or(0, |map| map.len());
        prop_assert_eq!(report.summary.unchanged, field_count);
    }

    // The four field-diff buckets always partition the key union.
    #[test]
    fn prop_field_diff_partitions_key_union(left in arb_record(), right in arb_record()) {
        let (Value::Object(left_map), Value::Object(right_map)) = (&left, &right) else {
            unreachable!("arb_record always builds objects");
        };
        let diff = jsoncmp::compute_field_diff(left_map, right_map);

        let mut buckets: Vec<&String> = diff.added.keys()
            .chain(diff.removed.keys())
            .chain(diff.modified.keys())
            .chain(diff.unchanged.keys())
            .collect();
        buckets.sort();
        let bucket_count = buckets.len();
        buckets.dedup();
        prop_assert_eq!(bucket_count, buckets.len(), "buckets overlap");

        let mut union: Vec<&String> = left_map.keys().chain(right_map.keys()).collect();
        union.sort();
        union.dedup();
        prop_assert_eq!(buckets, union);
    }
}
