// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the JSON entry points.
//!
//! Whatever bytes parse as JSON, classification must not panic, and a failed
//! or zero-count `splice_value` must leave the row exactly as it was.

#![no_main]

use gapseq::json::{is_subsequence_value, is_valid_sequence_value, splice_value};
use gapseq::GapLimits;
use libfuzzer_sys::fuzz_target;
use serde_json::{json, Value};

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    if is_valid_sequence_value(&value, GapLimits::default()) {
        assert!(is_subsequence_value(&value, &value, true));
    }

    let mut row = value.clone();
    if splice_value(&mut row, &json!(1), &json!(0), GapLimits::default()).is_ok() {
        assert_eq!(row, value);
    }
    if splice_value(&mut row, &json!(1), &json!(1), GapLimits::default()).is_err() {
        assert_eq!(row, value);
    }
});
