//! The documented reference scenarios, one test each.

use super::common::{full, row};
use gapseq::{is_subsequence_of, is_valid_sequence, sequence_length, splice, GapLimits, SpliceError, Table};

fn limits(gap: u64, ratio: f64) -> GapLimits {
    GapLimits::new(gap, ratio).unwrap()
}

#[test]
fn one_short_hole_is_valid() {
    let r = row(&[Some(1), Some(2), None, Some(4), Some(5)]);
    assert!(is_valid_sequence(&r, limits(2, 0.4)));
}

#[test]
fn three_hole_run_breaks_gap_of_two() {
    let r = row(&[Some(1), None, None, None, Some(5)]);
    assert!(!is_valid_sequence(&r, limits(2, 1.0)));
}

#[test]
fn leading_hole_counts_in_length() {
    let r: Table<i32> = [(2, 2), (3, 3), (4, 4)].into_iter().collect();
    assert_eq!(sequence_length(&r, limits(10, 0.5)), Some(4));
}

#[test]
fn insert_two_holes_at_three() {
    let mut r = full(&[1, 2, 3, 4, 5]);
    assert!(splice(&mut r, 3, 2).is_ok());
    assert_eq!(
        r,
        row(&[Some(1), Some(2), None, None, Some(3), Some(4), Some(5)])
    );
}

#[test]
fn remove_two_holes_at_two() {
    let mut r = row(&[Some(1), None, None, None, Some(2), None, Some(3)]);
    assert!(splice(&mut r, 2, -2).is_ok());
    assert_eq!(r, row(&[Some(1), None, Some(2), None, Some(3)]));
}

#[test]
fn huge_insert_is_a_gap_violation() {
    let mut r = row(&[Some(1), None, Some(3), Some(4), Some(5)]);
    let before = r.clone();
    assert_eq!(splice(&mut r, 2, 200), Err(SpliceError::GapViolation));
    assert_eq!(r, before);
}

#[test]
fn order_sensitivity_of_matcher() {
    let haystack = full(&[1, 2, 3, 4]);
    let needle = full(&[3, 2]);
    assert!(!is_subsequence_of(&haystack, &needle, true));
    assert!(is_subsequence_of(&haystack, &needle, false));
}
