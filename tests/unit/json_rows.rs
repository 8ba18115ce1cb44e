//! Loosely typed rows: JSON values and delimited text.

use gapseq::json::{
    is_subsequence_value, is_valid_sequence_value, sequence_length_value, splice_value,
    table_from_value,
};
use gapseq::row::{diagnose_row, parse_row, render_row, Verdict};
use gapseq::{splice, GapLimits, SpliceError};
use serde_json::json;

#[test]
fn json_scenarios_match_typed_ones() {
    let limits = GapLimits::new(2, 0.4).unwrap();
    assert!(is_valid_sequence_value(&json!([1, 2, null, 4, 5]), limits));
    assert!(!is_valid_sequence_value(
        &json!([1, null, null, null, 5]),
        GapLimits::new(2, 1.0).unwrap()
    ));
    assert_eq!(
        sequence_length_value(&json!({"2": 2, "3": 3, "4": 4}), GapLimits::default()),
        Some(4)
    );
}

#[test]
fn nil_and_scalars_never_match() {
    assert!(!is_subsequence_value(&json!(null), &json!([1]), false));
    assert!(!is_subsequence_value(&json!([1]), &json!(null), false));
    assert!(!is_subsequence_value(&json!([1]), &json!(1), true));
    assert!(is_subsequence_value(&json!([1, 2]), &json!([]), true));
}

#[test]
fn nested_values_compare_structurally() {
    let haystack = json!([{"a": 1}, [1, 2], "x"]);
    assert!(is_subsequence_value(&haystack, &json!([[1, 2], {"a": 1}]), false));
    assert!(!is_subsequence_value(&haystack, &json!([[1, 2], {"a": 1}]), true));
}

#[test]
fn splice_value_reports_distinct_argument_errors() {
    let mut r = json!([1, 2]);
    let limits = GapLimits::default();
    assert_eq!(
        splice_value(&mut r, &json!(0), &json!(1), limits),
        Err(SpliceError::IndexBelowOne)
    );
    assert_eq!(
        splice_value(&mut r, &json!(true), &json!(1), limits),
        Err(SpliceError::NonIntegerIndex)
    );
    assert_eq!(
        splice_value(&mut r, &json!(1), &json!(0.5), limits),
        Err(SpliceError::NonIntegerCount)
    );
    assert_eq!(r, json!([1, 2]));
}

#[test]
fn splice_value_with_zero_count_succeeds() {
    let mut r = json!([1, null, 3]);
    assert!(splice_value(&mut r, &json!(2), &json!(0), GapLimits::default()).is_ok());
    assert_eq!(r, json!([1, null, 3]));
}

#[test]
fn zero_count_leaves_object_rows_alone() {
    let limits = GapLimits::default();
    for original in [
        json!({"1": "a", "3": "c"}),
        json!({"2": "b", "3": null}),
        json!({}),
    ] {
        let mut r = original.clone();
        assert!(splice_value(&mut r, &json!(1), &json!(0), limits).is_ok());
        assert_eq!(r, original);
    }
}

#[test]
fn no_op_splices_past_the_end_leave_rows_alone() {
    let limits = GapLimits::default();
    let original = json!({"1": "a", "3": "c"});
    let mut r = original.clone();
    splice_value(&mut r, &json!(5), &json!(2), limits).unwrap();
    splice_value(&mut r, &json!(4), &json!(-3), limits).unwrap();
    assert_eq!(r, original);
}

#[test]
fn object_rows_stay_objects_after_a_splice() {
    let mut r = json!({"1": "a", "2": "b"});
    splice_value(&mut r, &json!(2), &json!(1), GapLimits::default()).unwrap();
    assert_eq!(r, json!({"1": "a", "3": "b"}));
}

#[test]
fn colliding_keys_are_not_a_sequence() {
    let limits = GapLimits::default();
    let original = json!({"1": "a", "01": "b"});
    assert!(!is_valid_sequence_value(&original, limits));
    assert_eq!(sequence_length_value(&json!({"1": "a", "1.0": "b", "2": "c"}), limits), None);

    let mut r = original.clone();
    assert_eq!(
        splice_value(&mut r, &json!(1), &json!(0), limits),
        Err(SpliceError::NotASequence)
    );
    assert_eq!(r, original);
    assert_eq!(table_from_value(&original).unwrap().len(), 2);
}

#[test]
fn integers_beyond_i64_overflow() {
    let mut r = json!([1, 2]);
    let limits = GapLimits::default();
    assert_eq!(
        splice_value(&mut r, &json!(u64::MAX), &json!(1), limits),
        Err(SpliceError::Overflow)
    );
    assert_eq!(
        splice_value(&mut r, &json!(1), &json!(18446744073709551615u64), limits),
        Err(SpliceError::Overflow)
    );
    assert_eq!(
        splice_value(&mut r, &json!(2e19), &json!(1), limits),
        Err(SpliceError::Overflow)
    );
    assert_eq!(r, json!([1, 2]));
}

#[test]
fn object_rows_round_trip_through_tables() {
    let table = table_from_value(&json!({"1": "a", "3": "c", "skip": null})).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn delimited_row_pipeline() {
    let mut r = parse_row("id, name,, city", ',');
    let report = diagnose_row(1, &r, &GapLimits::default());
    assert_eq!(report.verdict, Verdict::Valid);

    splice(&mut r, 2, 1).unwrap();
    assert_eq!(render_row(&r, ',').as_deref(), Some("id,,name,,city"));

    splice(&mut r, 2, -1).unwrap();
    assert_eq!(render_row(&r, ',').as_deref(), Some("id,name,,city"));
}

#[test]
fn mostly_empty_row_is_flagged() {
    let r = parse_row("a,,,b,,,c", ',');
    let report = diagnose_row(7, &r, &GapLimits::default());
    assert!(matches!(report.verdict, Verdict::RatioTooHigh { .. }));
    assert!(report.to_string().starts_with("row 7: hole ratio"));
}
