//! Splice laws.

use super::common::{slots_strategy, snapshot, table_strategy};
use gapseq::{gap_stats, splice, GapLimits, Table, ValidSequence};
use proptest::prelude::*;

proptest! {
    /// `splice(s, i, 0)` succeeds and changes nothing.
    #[test]
    fn prop_zero_count_is_identity(slots in slots_strategy(), index in 1i64..40) {
        let mut table = Table::from_slots(slots);
        prop_assume!(gap_stats(&table).is_some_and(|s| s.gap_ok(&GapLimits::default())));
        let before = table.clone();
        prop_assert!(splice(&mut table, index, 0).is_ok());
        prop_assert_eq!(table, before);
    }

    /// A successful insert is undone by the matching removal.
    #[test]
    fn prop_insert_then_remove_restores(
        slots in slots_strategy(),
        index in 1i64..40,
        count in 1i64..12,
    ) {
        let original = Table::from_slots(slots);
        let mut table = original.clone();
        if splice(&mut table, index, count).is_ok() {
            prop_assert!(splice(&mut table, index, -count).is_ok());
            prop_assert_eq!(table, original);
        }
    }

    /// Failure is all-or-nothing, whatever the input shape.
    #[test]
    fn prop_failed_splice_leaves_table_unchanged(
        table in table_strategy(),
        index in -2i64..40,
        count in -12i64..12,
    ) {
        let mut table = table;
        let before = snapshot(&table);
        if splice(&mut table, index, count).is_err() {
            prop_assert_eq!(snapshot(&table), before);
        }
    }

    /// Successful splices keep the gap bound and preserve the values in order.
    #[test]
    fn prop_splice_preserves_values(
        slots in slots_strategy(),
        index in 1i64..40,
        count in -6i64..8,
    ) {
        let mut table = Table::from_slots(slots);
        let values: Vec<i32> = table.values().copied().collect();
        if let Ok(stats) = splice(&mut table, index, count) {
            prop_assert_eq!(gap_stats(&table), Some(stats));
            prop_assert!(stats.gap_ok(&GapLimits::default()));
            prop_assert_eq!(table.values().copied().collect::<Vec<_>>(), values);
        }
    }

    /// The wrapper never ends up outside its limits.
    #[test]
    fn prop_valid_sequence_stays_valid(
        slots in slots_strategy(),
        ops in prop::collection::vec((1i64..30, -5i64..6), 0..8),
    ) {
        let limits = GapLimits::new(4, 0.4).unwrap();
        let Ok(mut seq) = ValidSequence::new(Table::from_slots(slots), limits) else {
            return Ok(());
        };
        for (index, count) in ops {
            let before = seq.clone();
            if seq.splice(index, count).is_err() {
                prop_assert_eq!(&seq, &before);
            }
            prop_assert!(seq.stats().satisfies(&limits));
        }
    }
}
