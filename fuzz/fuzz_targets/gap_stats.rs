// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the validator.
//!
//! Arbitrary keys (including huge, negative and non-integer ones) must never
//! panic, and when the table is a sequence the derived stats must be coherent.

#![no_main]

use arbitrary::Arbitrary;
use gapseq::{gap_stats, is_valid_sequence, sequence_length, GapLimits, Key, Table};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzKey {
    Index(i64),
    Number(f64),
    Name(String),
}

impl From<FuzzKey> for Key {
    fn from(key: FuzzKey) -> Self {
        match key {
            FuzzKey::Index(i) => Key::Index(i),
            FuzzKey::Number(n) => Key::from(n),
            FuzzKey::Name(s) => Key::Name(s),
        }
    }
}

#[derive(Arbitrary, Debug)]
struct Input {
    entries: Vec<(FuzzKey, u8)>,
    max_nil_gap: u64,
    ratio_permille: u16,
}

fuzz_target!(|input: Input| {
    let table: Table<u8> = input.entries.into_iter().collect();
    let limits = GapLimits {
        max_nil_gap: input.max_nil_gap,
        max_nil_ratio: f64::from(input.ratio_permille % 1001) / 1000.0,
    };

    let valid = is_valid_sequence(&table, limits);
    let length = sequence_length(&table, limits);
    assert_eq!(valid, length.is_some());

    if let Some(stats) = gap_stats(&table) {
        assert!(stats.max_hole_run <= stats.hole_count);
        assert!(stats.hole_count <= stats.length as u64);
        assert_eq!(stats.populated(), table.len() as u64);
        if let Some(length) = length {
            assert_eq!(length, stats.length);
        }
    } else {
        assert!(table.first_invalid_key().is_some());
        assert!(!valid);
    }
});
