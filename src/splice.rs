// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inserting and removing runs of holes.
//!
//! A splice is computed in two phases. [`plan`] works purely on keys: it checks
//! the table shape and the arguments, guards every shifted position against
//! `i64` overflow, lays the shifted keys out in a scratch buffer and re-validates
//! that layout. Nothing about the caller's table changes until a plan exists.
//! [`SplicePlan::apply`] then moves the values to their new keys, which cannot
//! fail. Either the whole splice happens or none of it does.
//!
//! # Semantics
//!
//! - `count > 0`: every key `>= index` moves right by `count`, leaving
//!   `index..index+count` as holes.
//! - `count < 0`: `index..index+|count|` must all be holes; keys after the run
//!   move left by `|count|`.
//! - `count == 0`: no-op.
//!
//! Positions past the last key are holes, so inserting beyond the end shifts
//! nothing, and removing a run that lies beyond the end succeeds without change.
//! Removal only ever shortens hole runs, so only insertion is re-validated.

use tracing::{debug, trace};

use crate::error::SpliceError;
use crate::types::{GapLimits, GapStats, Key, Position, Table};
use crate::validate::{gap_stats, scan_positions};
use crate::verify::contracts::check_layout_ascending;

/// Insert (`count > 0`) or remove (`count < 0`) holes at `index`, checked
/// against the default gap bound.
///
/// On success returns the stats of the spliced table.
///
/// Positions past the last populated key count as holes. Inserting at an
/// `index` beyond the length, or removing a run that reaches past it, succeeds
/// without moving anything; removal fails with
/// [`SpliceError::InsufficientHoles`] only when a populated position lies in
/// the run. This keeps every successful insert undoable by the matching
/// removal.
pub fn splice<V>(table: &mut Table<V>, index: Position, count: i64) -> Result<GapStats, SpliceError> {
    splice_with_limits(table, index, count, GapLimits::default())
}

/// [`splice`] with a caller-chosen gap bound.
///
/// Only `limits.max_nil_gap` is enforced: a splice target may carry any hole
/// ratio, and removal never raises it. The beyond-length policy of [`splice`]
/// applies unchanged.
pub fn splice_with_limits<V>(
    table: &mut Table<V>,
    index: Position,
    count: i64,
    limits: GapLimits,
) -> Result<GapStats, SpliceError> {
    commit(table, index, count, limits).map(|plan| plan.stats)
}

/// Plan and apply a splice, returning the plan that was applied.
pub(crate) fn commit<V>(
    table: &mut Table<V>,
    index: Position,
    count: i64,
    limits: GapLimits,
) -> Result<SplicePlan, SpliceError> {
    match plan(table, index, count, limits.gap_only()) {
        Ok(plan) => {
            plan.apply(table);
            debug!(
                index,
                count,
                length = plan.stats.length,
                max_hole_run = plan.stats.max_hole_run,
                moved = !plan.is_noop(),
                "splice committed"
            );
            Ok(plan)
        }
        Err(error) => {
            trace!(%error, index, count, "splice rejected");
            Err(error)
        }
    }
}

/// A validated splice, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SplicePlan {
    /// Keys at or after this position move.
    from: Position,
    /// Signed shift applied to moving keys.
    shift: i64,
    /// Stats of the table after the splice.
    pub(crate) stats: GapStats,
}

impl SplicePlan {
    fn unchanged(stats: GapStats) -> Self {
        Self {
            from: 1,
            shift: 0,
            stats,
        }
    }

    /// Whether applying the plan leaves every key where it is.
    pub(crate) fn is_noop(&self) -> bool {
        self.shift == 0
    }

    /// Move values to their planned keys. Infallible: the plan already proved
    /// every target position is representable.
    pub(crate) fn apply<V>(&self, table: &mut Table<V>) {
        if self.is_noop() {
            return;
        }
        let entries = table
            .take_entries()
            .into_iter()
            .map(|(key, value)| match key {
                Key::Index(position) if position >= self.from => {
                    (Key::Index(position + self.shift), value)
                }
                other => (other, value),
            })
            .collect();
        table.set_entries(entries);
    }
}

/// Check shape, arguments and overflow, and lay out the result.
pub(crate) fn plan<V>(
    table: &Table<V>,
    index: Position,
    count: i64,
    limits: GapLimits,
) -> Result<SplicePlan, SpliceError> {
    let before = gap_stats(table)
        .filter(|stats| stats.satisfies(&limits))
        .ok_or(SpliceError::NotASequence)?;

    if index < 1 {
        return Err(SpliceError::IndexBelowOne);
    }

    match count.signum() {
        0 => Ok(SplicePlan::unchanged(before)),
        1 => plan_insert(table, before, index, count, &limits),
        _ => plan_remove(table, before, index, count),
    }
}

fn plan_insert<V>(
    table: &Table<V>,
    before: GapStats,
    index: Position,
    count: i64,
    limits: &GapLimits,
) -> Result<SplicePlan, SpliceError> {
    index.checked_add(count).ok_or(SpliceError::Overflow)?;

    if index > before.length {
        return Ok(SplicePlan::unchanged(before));
    }
    // The last key moves furthest.
    before
        .length
        .checked_add(count)
        .ok_or(SpliceError::Overflow)?;

    let layout: Vec<Position> = table
        .positioned()
        .map(|(position, _)| {
            if position >= index {
                position + count
            } else {
                position
            }
        })
        .collect();
    check_layout_ascending(&layout);

    let after = scan_positions(layout);
    if !after.gap_ok(limits) {
        return Err(SpliceError::GapViolation);
    }

    Ok(SplicePlan {
        from: index,
        shift: count,
        stats: after,
    })
}

fn plan_remove<V>(
    table: &Table<V>,
    before: GapStats,
    index: Position,
    count: i64,
) -> Result<SplicePlan, SpliceError> {
    let width = count.checked_neg().ok_or(SpliceError::Overflow)?;
    let last = index.checked_add(width - 1).ok_or(SpliceError::Overflow)?;

    if table.any_populated_in(index, last) {
        return Err(SpliceError::InsufficientHoles);
    }
    if last >= before.length {
        return Ok(SplicePlan::unchanged(before));
    }

    let layout: Vec<Position> = table
        .positioned()
        .map(|(position, _)| if position > last { position - width } else { position })
        .collect();
    check_layout_ascending(&layout);

    Ok(SplicePlan {
        from: last + 1,
        shift: -width,
        stats: scan_positions(layout),
    })
}
