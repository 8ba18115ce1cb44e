//! Validator properties against the naive reference walk.

use super::common::{naive_stats, slots_strategy, table_strategy};
use gapseq::{gap_stats, is_valid_sequence, sequence_length, GapLimits, Table};
use proptest::prelude::*;

proptest! {
    /// The key-gap scan agrees with walking every position.
    #[test]
    fn prop_stats_match_reference(table in table_strategy()) {
        prop_assert_eq!(gap_stats(&table), naive_stats(&table));
    }

    /// Valid implies `sequence_length` is the highest key; invalid implies `None`.
    #[test]
    fn prop_length_agrees_with_validity(
        table in table_strategy(),
        gap in 0u64..8,
        ratio in 0.0f64..=1.0,
    ) {
        let limits = GapLimits::new(gap, ratio).unwrap();
        match sequence_length(&table, limits) {
            Some(length) => {
                prop_assert!(is_valid_sequence(&table, limits));
                let highest = table.keys().filter_map(|k| k.position()).max().unwrap_or(0);
                prop_assert_eq!(length, highest);
            }
            None => prop_assert!(!is_valid_sequence(&table, limits)),
        }
    }

    /// A run of exactly `max_nil_gap` is valid, one more is not.
    #[test]
    fn prop_gap_threshold_is_inclusive(run in 0i64..20, head in 1i32..5) {
        let table: Table<i32> = [(1i64, head), (run + 2, head)].into_iter().collect();
        let at = GapLimits::new(run as u64, 1.0).unwrap();
        prop_assert!(is_valid_sequence(&table, at));
        if run > 0 {
            let below = GapLimits::new(run as u64 - 1, 1.0).unwrap();
            prop_assert!(!is_valid_sequence(&table, below));
        }
    }

    /// A ratio of exactly `max_nil_ratio` is valid, marginally above is not.
    #[test]
    fn prop_ratio_threshold_is_inclusive(slots in slots_strategy()) {
        let table = Table::from_slots(slots);
        let stats = gap_stats(&table).unwrap();
        prop_assume!(stats.hole_count > 0);

        let exact = GapLimits::new(u64::MAX, stats.hole_ratio()).unwrap();
        prop_assert!(is_valid_sequence(&table, exact));

        let below = GapLimits::new(u64::MAX, stats.hole_ratio() - 1e-9).unwrap();
        prop_assert!(!is_valid_sequence(&table, below));
    }
}
