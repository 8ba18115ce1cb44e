// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the splice engine.
//!
//! Random splice sequences, including extreme indices and counts near the `i64`
//! edges. Failure must leave the table untouched; success must keep the gap
//! bound and the value order.

#![no_main]

use arbitrary::Arbitrary;
use gapseq::{gap_stats, splice_with_limits, GapLimits, Table};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    /// Sparse starting row: (position, value)
    entries: Vec<(i64, u8)>,
    max_nil_gap: u8,
    ops: Vec<(i64, i64)>,
}

fuzz_target!(|input: Input| {
    let mut table: Table<u8> = input.entries.into_iter().collect();
    let limits = GapLimits {
        max_nil_gap: u64::from(input.max_nil_gap),
        max_nil_ratio: 1.0,
    };

    for (index, count) in input.ops {
        let before = table.clone();
        let values: Vec<u8> = table.values().copied().collect();

        match splice_with_limits(&mut table, index, count, limits) {
            Ok(stats) => {
                assert_eq!(gap_stats(&table), Some(stats));
                assert!(stats.max_hole_run <= limits.max_nil_gap);
                assert_eq!(table.values().copied().collect::<Vec<_>>(), values);
            }
            Err(_) => assert_eq!(table, before),
        }
    }
});
