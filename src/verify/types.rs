// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A wrapper that makes unvalidated rows unrepresentable.
//!
//! Instead of hoping every caller remembered `is_valid_sequence`, wrap the table
//! in `ValidSequence`. The check is paid once at construction and again only by
//! mutations, which go through the splice engine and keep the invariant.
//!
//! ```ignore
//! let row = ValidSequence::new(table, GapLimits::default())?;
//! assert!(row.length() >= row.stats().hole_count as i64);
//! ```

use thiserror::Error;

use crate::error::{LimitsError, SpliceError};
use crate::splice::plan;
use crate::types::{GapLimits, GapStats, Key, Position, Table};
use crate::validate::gap_stats;
use crate::verify::contracts::check_within_limits;

/// Why a table could not become a [`ValidSequence`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantError {
    /// A key is not an integer `>= 1`.
    #[error("key {key} is not a positive integer position")]
    InvalidKey { key: Key },
    /// The longest hole run exceeds `max_nil_gap`.
    #[error("hole run of {run} exceeds max_nil_gap {max}")]
    GapTooLong { run: u64, max: u64 },
    /// The hole ratio exceeds `max_nil_ratio`.
    #[error("hole ratio {ratio} exceeds max_nil_ratio {max}")]
    RatioTooHigh { ratio: f64, max: f64 },
    /// The limits themselves are malformed.
    #[error(transparent)]
    Limits(#[from] LimitsError),
}

/// A table proven to be a bounded-gap sequence under its limits.
///
/// # Invariants (enforced at construction and by `splice`)
/// - every key is an integer `>= 1`
/// - `stats().max_hole_run <= limits().max_nil_gap`
/// - `stats().hole_ratio() <= limits().max_nil_ratio`
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSequence<V> {
    table: Table<V>,
    limits: GapLimits,
    stats: GapStats,
}

impl<V> ValidSequence<V> {
    /// Validate `table` under `limits`.
    pub fn new(table: Table<V>, limits: GapLimits) -> Result<Self, InvariantError> {
        limits.validate()?;

        let Some(stats) = gap_stats(&table) else {
            let key = table
                .first_invalid_key()
                .cloned()
                .unwrap_or(Key::Index(0));
            return Err(InvariantError::InvalidKey { key });
        };
        if !stats.gap_ok(&limits) {
            return Err(InvariantError::GapTooLong {
                run: stats.max_hole_run,
                max: limits.max_nil_gap,
            });
        }
        if !stats.ratio_ok(&limits) {
            return Err(InvariantError::RatioTooHigh {
                ratio: stats.hole_ratio(),
                max: limits.max_nil_ratio,
            });
        }

        Ok(Self {
            table,
            limits,
            stats,
        })
    }

    /// Highest populated position (0 when empty).
    pub fn length(&self) -> Position {
        self.stats.length
    }

    pub fn stats(&self) -> GapStats {
        self.stats
    }

    pub fn limits(&self) -> GapLimits {
        self.limits
    }

    pub fn get(&self, position: Position) -> Option<&V> {
        self.table.get(Key::Index(position))
    }

    /// Every position `1..=length`, `None` for holes.
    pub fn slots(&self) -> impl Iterator<Item = Option<&V>> + '_ {
        let mut populated = self.table.positioned().peekable();
        (1..=self.stats.length).map(move |position| {
            populated
                .next_if(|(at, _)| *at == position)
                .map(|(_, value)| value)
        })
    }

    pub fn as_table(&self) -> &Table<V> {
        &self.table
    }

    pub fn into_inner(self) -> Table<V> {
        self.table
    }

    /// Splice holes while keeping both limits.
    ///
    /// Unlike the free [`crate::splice`], an insert that would push the hole
    /// ratio past `max_nil_ratio` is refused with [`SpliceError::RatioViolation`].
    pub fn splice(&mut self, index: Position, count: i64) -> Result<GapStats, SpliceError> {
        let plan = plan(&self.table, index, count, self.limits.gap_only())?;
        if !plan.stats.ratio_ok(&self.limits) {
            return Err(SpliceError::RatioViolation);
        }
        plan.apply(&mut self.table);
        self.stats = plan.stats;
        check_within_limits(&self.stats, &self.limits);
        Ok(self.stats)
    }
}

impl<V> TryFrom<Table<V>> for ValidSequence<V> {
    type Error = InvariantError;

    /// Validate under the default limits.
    fn try_from(table: Table<V>) -> Result<Self, Self::Error> {
        Self::new(table, GapLimits::default())
    }
}
