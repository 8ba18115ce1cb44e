// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Classification of keyed collections as bounded-gap sequences.
//!
//! The walk is over populated keys, not positions: the gap between two
//! consecutive keys is exactly one hole run, and the gap between 0 and the first
//! key is the leading run. That makes the cost proportional to the number of
//! entries, so a lone key at `i64::MAX` is cheap to reject.

use crate::types::{GapLimits, GapStats, Position, Table};
use crate::verify::contracts::check_stats_match_naive;

/// Hole statistics for a table, or `None` if any key is not an integer `>= 1`.
///
/// Mixed tables are rejected outright: there is no "sequence part".
pub fn gap_stats<V>(table: &Table<V>) -> Option<GapStats> {
    let mut positions = Vec::with_capacity(table.len());
    for key in table.keys() {
        positions.push(key.position()?);
    }
    let stats = scan_positions(positions.iter().copied());
    check_stats_match_naive(table, &stats);
    Some(stats)
}

/// Fold strictly ascending positions into [`GapStats`].
pub(crate) fn scan_positions<I>(positions: I) -> GapStats
where
    I: IntoIterator<Item = Position>,
{
    let mut stats = GapStats::default();
    let mut previous: Position = 0;
    for position in positions {
        // previous < position, both in 0..=i64::MAX: cannot overflow
        let run = (position - previous - 1) as u64;
        stats.hole_count += run;
        stats.max_hole_run = stats.max_hole_run.max(run);
        previous = position;
    }
    stats.length = previous;
    stats
}

/// Whether `table` is a bounded-gap sequence under `limits`.
///
/// The empty table is always valid.
pub fn is_valid_sequence<V>(table: &Table<V>, limits: GapLimits) -> bool {
    gap_stats(table).is_some_and(|stats| stats.satisfies(&limits))
}

/// The logical length of a valid sequence, `None` when `table` is not one.
///
/// `Some(0)` is the (valid) empty sequence.
pub fn sequence_length<V>(table: &Table<V>, limits: GapLimits) -> Option<Position> {
    gap_stats(table)
        .filter(|stats| stats.satisfies(&limits))
        .map(|stats| stats.length)
}
