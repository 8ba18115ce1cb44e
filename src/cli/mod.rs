// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the gapseq command-line interface.
//!
//! Three subcommands: `check` to classify every row of a delimited file,
//! `splice` to insert or remove holes in every row, and `contains` to test
//! one JSON row against another.

pub mod display;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gapseq::GapLimits;

#[derive(Parser)]
#[command(
    name = "gapseq",
    about = "Validate and splice table rows with bounded holes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report length and hole statistics for every row
    Check {
        /// Delimited input file (`-` or omitted for stdin)
        file: Option<PathBuf>,

        /// Cell delimiter
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Emit one JSON report per line instead of text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Insert (positive count) or remove (negative count) holes in every row
    ///
    /// Cells are trimmed on output. Trailing empty cells are kept as they were,
    /// so removing holes that lie entirely past a row's last value changes
    /// nothing.
    Splice {
        /// Delimited input file (`-` or omitted for stdin)
        file: Option<PathBuf>,

        /// 1-based position where the splice starts
        #[arg(short, long)]
        index: i64,

        /// Number of holes to insert (> 0) or remove (< 0)
        #[arg(short, long, allow_negative_numbers = true)]
        count: i64,

        /// Cell delimiter
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Test whether one JSON row's values all appear in another
    Contains {
        /// Row to search in, as JSON (array or object)
        #[arg(long)]
        haystack: String,

        /// Row whose values must be found, as JSON
        #[arg(long)]
        needle: String,

        /// Require matches in increasing position order
        #[arg(long)]
        ordered: bool,
    },
}

/// Limit overrides shared by `check` and `splice`.
#[derive(Args, Debug, Clone, Default)]
pub struct LimitArgs {
    /// JSON file with `max_nil_gap` / `max_nil_ratio`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Longest allowed run of empty cells (overrides config)
    #[arg(long)]
    pub max_gap: Option<u64>,

    /// Largest allowed fraction of empty cells (overrides config)
    #[arg(long)]
    pub max_ratio: Option<f64>,
}

impl LimitArgs {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<GapLimits> {
        let mut limits = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str::<GapLimits>(&raw)
                    .with_context(|| format!("Invalid config {}", path.display()))?
            }
            None => GapLimits::default(),
        };
        if let Some(gap) = self.max_gap {
            limits.max_nil_gap = gap;
        }
        if let Some(ratio) = self.max_ratio {
            limits.max_nil_ratio = ratio;
        }
        limits.validate()?;
        Ok(limits)
    }
}
