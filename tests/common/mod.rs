//! Shared test utilities and fixtures.

#![allow(dead_code)]

use gapseq::{GapStats, Key, Position, Table};
use proptest::prelude::*;

// ============================================================================
// BUILDERS
// ============================================================================

/// Dense 1-based row, `None` = hole.
pub fn row(slots: &[Option<i32>]) -> Table<i32> {
    Table::from_slots(slots.iter().copied())
}

/// Fully populated row.
pub fn full(values: &[i32]) -> Table<i32> {
    Table::from_slots(values.iter().copied().map(Some))
}

/// Snapshot of every entry, for before/after comparisons.
pub fn snapshot<V: Clone>(table: &Table<V>) -> Vec<(Key, V)> {
    table.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

// ============================================================================
// REFERENCE IMPLEMENTATION
// ============================================================================

/// Walk every position `1..=length` the obvious way.
///
/// Only meaningful for small, integer-keyed tables.
pub fn naive_stats<V>(table: &Table<V>) -> Option<GapStats> {
    let mut length: Position = 0;
    for key in table.keys() {
        length = length.max(key.position()?);
    }

    let mut stats = GapStats {
        length,
        ..GapStats::default()
    };
    let mut run = 0;
    for position in 1..=length {
        if table.get(position).is_some() {
            run = 0;
        } else {
            run += 1;
            stats.hole_count += 1;
            stats.max_hole_run = stats.max_hole_run.max(run);
        }
    }
    Some(stats)
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Rows of up to 32 slots, mostly populated.
pub fn slots_strategy() -> impl Strategy<Value = Vec<Option<i32>>> {
    prop::collection::vec(prop::option::weighted(0.75, 0i32..50), 0..32)
}

/// Keys of every shape, biased toward small positions.
pub fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        8 => (1i64..40).prop_map(Key::Index),
        1 => (-3i64..=0).prop_map(Key::Index),
        1 => (0.1f64..10.0).prop_map(Key::from),
        1 => "[a-z]{1,3}".prop_map(Key::Name),
    ]
}

/// Arbitrary keyed collections, including malformed ones.
pub fn table_strategy() -> impl Strategy<Value = Table<i32>> {
    prop::collection::vec((key_strategy(), 0i32..50), 0..16)
        .prop_map(|entries| entries.into_iter().collect())
}
