// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Delimited-text rows as bounded-gap sequences.
//!
//! A line like `a, b,,d` becomes the table `{1: "a", 2: "b", 4: "d"}`: cells are
//! trimmed and blank cells are holes. Rendering goes the other way, writing an
//! empty cell for every hole up to the row length.

use std::fmt;

use serde::Serialize;

use crate::types::{GapLimits, GapStats, Position, Table};
use crate::validate::gap_stats;

/// Split `line` on `delimiter` into a 1-based table of trimmed, non-blank cells.
pub fn parse_row(line: &str, delimiter: char) -> Table<String> {
    Table::from_slots(line.split(delimiter).map(|cell| {
        let cell = cell.trim();
        (!cell.is_empty()).then(|| cell.to_string())
    }))
}

/// Join the cells of an integer-keyed table, leaving holes empty.
///
/// Returns `None` if the table has non-position keys.
pub fn render_row(table: &Table<String>, delimiter: char) -> Option<String> {
    let stats = gap_stats(table)?;
    let mut out = String::new();
    let mut next: Position = 1;
    for (position, cell) in table.positioned() {
        // one delimiter per slot boundary, holes included
        while next < position {
            out.push(delimiter);
            next += 1;
        }
        out.push_str(cell);
        if position < stats.length {
            out.push(delimiter);
        }
        next = position + 1;
    }
    Some(out)
}

/// Number of blank cells after the last non-blank one.
///
/// A blank line is one blank cell; `a,b,,` has two.
pub fn trailing_blanks(line: &str, delimiter: char) -> usize {
    line.split(delimiter)
        .rev()
        .take_while(|cell| cell.trim().is_empty())
        .count()
}

/// [`render_row`], then restore `trailing` blank cells after the last value.
///
/// Used to keep a fixed-width row's column count through a splice.
pub fn render_row_padded(table: &Table<String>, delimiter: char, trailing: usize) -> Option<String> {
    let mut out = render_row(table, delimiter)?;
    let pad = if table.is_empty() {
        // the blank cells are the whole row
        trailing.saturating_sub(1)
    } else {
        trailing
    };
    out.extend(std::iter::repeat(delimiter).take(pad));
    Some(out)
}

/// Outcome of checking one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    GapTooLong { run: u64, max: u64 },
    RatioTooHigh { ratio: f64, max: f64 },
    NotASequence,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Diagnostic for one input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowReport {
    /// 1-based line number in the input.
    pub line: usize,
    #[serde(flatten)]
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<GapStats>,
}

/// Check a parsed row against `limits`.
///
/// The gap bound is reported before the ratio when both are broken.
pub fn diagnose_row<V>(line: usize, table: &Table<V>, limits: &GapLimits) -> RowReport {
    let stats = gap_stats(table);
    let verdict = match stats {
        None => Verdict::NotASequence,
        Some(stats) if !stats.gap_ok(limits) => Verdict::GapTooLong {
            run: stats.max_hole_run,
            max: limits.max_nil_gap,
        },
        Some(stats) if !stats.ratio_ok(limits) => Verdict::RatioTooHigh {
            ratio: stats.hole_ratio(),
            max: limits.max_nil_ratio,
        },
        Some(_) => Verdict::Valid,
    };
    RowReport {
        line,
        verdict,
        stats,
    }
}

impl fmt::Display for RowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: ", self.line)?;
        match (self.verdict, self.stats) {
            (Verdict::Valid, Some(stats)) => write!(
                f,
                "length {} with {} hole{}",
                stats.length,
                stats.hole_count,
                if stats.hole_count == 1 { "" } else { "s" }
            ),
            (Verdict::GapTooLong { run, max }, _) => {
                write!(f, "longest gap {} exceeds {}", run, max)
            }
            (Verdict::RatioTooHigh { ratio, max }, _) => {
                write!(f, "hole ratio {:.3} exceeds {}", ratio, max)
            }
            _ => write!(f, "not a sequence"),
        }
    }
}
