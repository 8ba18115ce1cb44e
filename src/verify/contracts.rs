// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode contracts for the sequence engine.
//!
//! Each check is a `debug_assert!`, so release builds pay nothing. They guard
//! the places where a fast path stands in for the obvious definition:
//!
//! | Contract                  | Fast path it shadows                            |
//! |---------------------------|-------------------------------------------------|
//! | `check_stats_match_naive` | key-gap scan vs. walking positions `1..length`  |
//! | `check_layout_ascending`  | shifted keys keep their order and stay `>= 1`   |
//! | `check_within_limits`     | `ValidSequence` never holds an out-of-bounds row |

use crate::types::{GapLimits, GapStats, Key, Position, Table};

/// Longest sequence the naive walk will re-check. Anything larger is trusted.
const NAIVE_WALK_LIMIT: Position = 4096;

/// Recompute hole statistics by walking every position and compare.
///
/// # Panics (debug builds only)
/// Panics if the walk disagrees with `stats`.
#[inline]
pub fn check_stats_match_naive<V>(table: &Table<V>, stats: &GapStats) {
    if !cfg!(debug_assertions) || stats.length > NAIVE_WALK_LIMIT {
        return;
    }

    let mut hole_count = 0u64;
    let mut max_hole_run = 0u64;
    let mut run = 0u64;
    for position in 1..=stats.length {
        if table.get(Key::Index(position)).is_some() {
            run = 0;
        } else {
            run += 1;
            hole_count += 1;
            max_hole_run = max_hole_run.max(run);
        }
    }

    debug_assert_eq!(
        (hole_count, max_hole_run),
        (stats.hole_count, stats.max_hole_run),
        "Contract violation: hole stats for length {} disagree with naive walk",
        stats.length
    );
}

/// Check a planned key layout is strictly ascending and positive.
///
/// # Panics (debug builds only)
/// Panics on the first out-of-order or non-positive position.
#[inline]
pub fn check_layout_ascending(layout: &[Position]) {
    debug_assert!(
        layout.first().map_or(true, |&first| first >= 1),
        "Contract violation: layout starts below position 1: {:?}",
        layout.first()
    );
    for i in 1..layout.len() {
        debug_assert!(
            layout[i - 1] < layout[i],
            "Contract violation: layout not ascending at {}: {} >= {}",
            i,
            layout[i - 1],
            layout[i]
        );
    }
}

/// Check stats satisfy limits.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_within_limits(stats: &GapStats, limits: &GapLimits) {
    debug_assert!(
        stats.gap_ok(limits),
        "Contract violation: hole run {} > max_nil_gap {}",
        stats.max_hole_run,
        limits.max_nil_gap
    );
    debug_assert!(
        stats.ratio_ok(limits),
        "Contract violation: hole ratio {} > max_nil_ratio {}",
        stats.hole_ratio(),
        limits.max_nil_ratio
    );
}
