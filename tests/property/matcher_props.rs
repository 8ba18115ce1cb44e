//! Matcher properties.

use super::common::{slots_strategy, table_strategy};
use gapseq::{gap_stats, is_subsequence_of, Table};
use proptest::prelude::*;

proptest! {
    /// A needle longer than the haystack never matches.
    #[test]
    fn prop_quick_reject(haystack in table_strategy(), needle in table_strategy(), ordered in any::<bool>()) {
        if let (Some(h), Some(n)) = (gap_stats(&haystack), gap_stats(&needle)) {
            if n.length > h.length {
                prop_assert!(!is_subsequence_of(&haystack, &needle, ordered));
            }
        }
    }

    /// Every table contains itself, in order.
    #[test]
    fn prop_reflexive(slots in slots_strategy()) {
        let table = Table::from_slots(slots);
        prop_assert!(is_subsequence_of(&table, &table, true));
    }

    /// Ordered containment implies unordered containment.
    #[test]
    fn prop_ordered_implies_unordered(haystack in slots_strategy(), needle in slots_strategy()) {
        let haystack = Table::from_slots(haystack);
        let needle = Table::from_slots(needle);
        if is_subsequence_of(&haystack, &needle, true) {
            prop_assert!(is_subsequence_of(&haystack, &needle, false));
        }
    }

    /// Dropping haystack positions from the front keeps an ordered subsequence.
    #[test]
    fn prop_suffix_of_values_is_subsequence(slots in slots_strategy(), skip in 0usize..8) {
        let haystack = Table::from_slots(slots.clone());
        let tail: Vec<Option<i32>> = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| if i < skip { None } else { *slot })
            .collect();
        let needle = Table::from_slots(tail);
        prop_assert!(is_subsequence_of(&haystack, &needle, true));
    }
}
