// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Value containment between integer-keyed tables.

use crate::types::Table;
use crate::validate::gap_stats;

/// Whether every element of `needle` appears, by value, somewhere in `haystack`.
///
/// Both tables need integer keys `>= 1`; their hole ratio is irrelevant. Any
/// other shape yields `false`. A needle longer than the haystack is rejected
/// without looking at values, and the empty needle always matches.
///
/// Duplicates in `needle` may all be satisfied by one haystack element. With
/// `require_order`, each match must sit at a strictly greater haystack position
/// than the previous one, making this a genuine subsequence test.
pub fn is_subsequence_of<V: PartialEq>(
    haystack: &Table<V>,
    needle: &Table<V>,
    require_order: bool,
) -> bool {
    let (Some(hay), Some(wanted)) = (gap_stats(haystack), gap_stats(needle)) else {
        return false;
    };
    if wanted.length > hay.length {
        return false;
    }

    if require_order {
        ordered_match(haystack, needle)
    } else {
        needle
            .values()
            .all(|value| haystack.values().any(|candidate| candidate == value))
    }
}

// Greedy earliest match is optimal for subsequence testing. The shared cursor
// only moves forward, so successive matches land at strictly greater positions.
fn ordered_match<V: PartialEq>(haystack: &Table<V>, needle: &Table<V>) -> bool {
    let mut cursor = haystack.positioned();
    needle
        .values()
        .all(|value| cursor.any(|(_, candidate)| candidate == value))
}
