//! Arrays with bounded holes.
//!
//! A row imported from delimited text is a fixed-width array with the occasional
//! missing cell. This crate decides whether such a row still looks like a row,
//! computes its logical length, and widens or narrows its hole region without
//! ever leaving it half-modified.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│ validate.rs  │────▶│  splice.rs   │
//! │ (Key, Table,│     │ (gap_stats,  │     │ (plan, then  │
//! │  GapLimits) │     │  length)     │     │  apply)      │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                         │
//! │  (ValidSequence wrapper, debug-mode contracts)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `matcher` (subsequence tests), `json` (loosely typed inputs) and `row`
//! (delimited text) sit on top of `validate`.
//!
//! # Usage
//!
//! ```
//! use gapseq::{is_valid_sequence, splice, GapLimits, Table};
//!
//! let mut row = Table::from_slots(vec![Some(1), Some(2), Some(3)]);
//! splice(&mut row, 2, 2).unwrap();
//! assert_eq!(row.get(4), Some(&2));
//! assert!(is_valid_sequence(&row, GapLimits::default()));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]

// Module declarations
pub mod error;
pub mod json;
mod matcher;
pub mod row;
mod splice;
mod types;
mod validate;
pub mod verify;

// Re-exports for public API
pub use error::{LimitsError, SpliceError, SpliceErrorKind};
pub use matcher::is_subsequence_of;
pub use splice::{splice, splice_with_limits};
pub use types::{
    GapLimits, GapStats, Key, Position, Table, DEFAULT_MAX_NIL_GAP, DEFAULT_MAX_NIL_RATIO,
};
pub use validate::{gap_stats, is_valid_sequence, sequence_length};
pub use verify::{InvariantError, ValidSequence};

/// Crate version, e.g. `"0.3.0"`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Semantic version parts of [`VERSION`].
pub fn version() -> (u64, u64, u64) {
    let mut parts = VERSION
        .split(['.', '-', '+'])
        .map(|part| part.parse::<u64>().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}
