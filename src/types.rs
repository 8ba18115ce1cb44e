// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a bounded-gap sequence.
//!
//! A row arrives as a keyed collection: whatever keys the caller had, mapped to
//! values. Only tables whose keys are all integers `>= 1` can be sequences; every
//! other shape is representable here so that it can be *rejected* rather than
//! refused at the type level.
//!
//! | Type        | Purpose                                             |
//! |-------------|-----------------------------------------------------|
//! | `Key`       | A key as the caller supplied it                     |
//! | `Table<V>`  | Ordered `Key -> V` map, absent key = hole           |
//! | `GapLimits` | `max_nil_gap` / `max_nil_ratio` thresholds           |
//! | `GapStats`  | Derived length, hole count and longest hole run     |
//!
//! # Invariants
//!
//! - **Key order**: `Index < Number < Name`, indices ascending. Consequently a
//!   table is integer-keyed iff its first key is `Index(>= 1)` and its last key
//!   is an `Index`.
//!
//! - **GapStats**: `max_hole_run <= hole_count <= length`. Holes are only counted
//!   in `1..length`; nothing lies past the last populated key.

use std::cmp::Ordering;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LimitsError;

/// A 1-based sequence position. Valid positions are `1..=i64::MAX`.
pub type Position = i64;

/// Default inclusive bound on the longest hole run.
pub const DEFAULT_MAX_NIL_GAP: u64 = 10;

/// Default inclusive bound on the hole ratio.
pub const DEFAULT_MAX_NIL_RATIO: f64 = 0.5;

// =============================================================================
// KEYS
// =============================================================================

/// A collection key as a loosely typed caller supplies it.
///
/// Integral floats normalise to `Index`, so `Key::from(2.0) == Key::Index(2)`.
#[derive(Debug, Clone)]
pub enum Key {
    /// Integer key. Only values `>= 1` are sequence positions.
    Index(i64),
    /// Non-integral (or out of `i64` range) numeric key.
    Number(f64),
    /// Any non-numeric key.
    Name(String),
}

impl Key {
    /// The sequence position this key denotes, if it is one.
    #[inline]
    pub fn position(&self) -> Option<Position> {
        match self {
            Key::Index(i) if *i >= 1 => Some(*i),
            _ => None,
        }
    }

    /// Parse a textual key: integers, then numbers, then plain names.
    pub fn parse(raw: &str) -> Key {
        if let Ok(i) = raw.parse::<i64>() {
            return Key::Index(i);
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => Key::from(f),
            _ => Key::Name(raw.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Key::Index(_) => 0,
            Key::Number(_) => 1,
            Key::Name(_) => 2,
        }
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Index(a), Key::Index(b)) => a.cmp(b),
            (Key::Number(a), Key::Number(b)) => a.total_cmp(b),
            (Key::Name(a), Key::Name(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Number(n) => write!(f, "{}", n),
            Key::Name(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Index(i64::from(i))
    }
}

impl From<u32> for Key {
    fn from(i: u32) -> Self {
        Key::Index(i64::from(i))
    }
}

impl From<f64> for Key {
    fn from(f: f64) -> Self {
        // 2^63 is exactly representable; anything >= it does not fit in i64
        const BOUND: f64 = 9_223_372_036_854_775_808.0;
        if f.is_finite() && f.fract() == 0.0 && (-BOUND..BOUND).contains(&f) {
            Key::Index(f as i64)
        } else {
            Key::Number(f)
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

// =============================================================================
// TABLE
// =============================================================================

/// An ordered keyed collection. A missing key is a hole.
///
/// `Table` accepts any key shape; whether it *is* a bounded-gap
/// sequence is decided by [`crate::gap_stats`] and friends.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<V> {
    entries: BTreeMap<Key, V>,
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Table<V> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Build a table from dense 1-based slots where `None` marks a hole.
    ///
    /// Trailing `None`s vanish: they lie past the last populated position.
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<V>>,
    {
        let entries = (1..)
            .zip(slots)
            .filter_map(|(position, slot)| slot.map(|value| (Key::Index(position), value)))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        self.entries.get(&key.into())
    }

    pub fn remove(&mut self, key: impl Into<Key>) -> Option<V> {
        self.entries.remove(&key.into())
    }

    /// Number of populated keys (not the sequence length).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, Key, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> btree_map::Values<'_, Key, V> {
        self.entries.values()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Key, V> {
        self.entries.iter()
    }

    /// The first key that is not a sequence position, in key order.
    pub fn first_invalid_key(&self) -> Option<&Key> {
        self.entries.keys().find(|key| key.position().is_none())
    }

    /// Populated `(position, value)` pairs in ascending order, skipping any
    /// non-position keys.
    pub(crate) fn positioned(&self) -> impl Iterator<Item = (Position, &V)> + '_ {
        self.entries
            .iter()
            .filter_map(|(key, value)| key.position().map(|position| (position, value)))
    }

    /// Whether any key lies in `first..=last`.
    pub(crate) fn any_populated_in(&self, first: Position, last: Position) -> bool {
        self.entries
            .range(Key::Index(first)..=Key::Index(last))
            .next()
            .is_some()
    }

    pub(crate) fn take_entries(&mut self) -> BTreeMap<Key, V> {
        std::mem::take(&mut self.entries)
    }

    pub(crate) fn set_entries(&mut self, entries: BTreeMap<Key, V>) {
        self.entries = entries;
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for Table<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a, V> IntoIterator for &'a Table<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = btree_map::Iter<'a, Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// LIMITS
// =============================================================================

/// Validity thresholds. Both comparisons are inclusive.
///
/// Deserializes from `{"max_nil_gap": 4, "max_nil_ratio": 0.25}`; missing fields
/// take the module defaults. Deserialization does not range-check, call
/// [`GapLimits::validate`] on anything read from outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapLimits {
    /// Longest allowed run of consecutive holes.
    pub max_nil_gap: u64,
    /// Largest allowed `holes / length`, within `[0, 1]`.
    pub max_nil_ratio: f64,
}

impl Default for GapLimits {
    fn default() -> Self {
        Self {
            max_nil_gap: DEFAULT_MAX_NIL_GAP,
            max_nil_ratio: DEFAULT_MAX_NIL_RATIO,
        }
    }
}

impl GapLimits {
    pub fn new(max_nil_gap: u64, max_nil_ratio: f64) -> Result<Self, LimitsError> {
        let limits = Self {
            max_nil_gap,
            max_nil_ratio,
        };
        limits.validate()?;
        Ok(limits)
    }

    pub fn validate(&self) -> Result<(), LimitsError> {
        if (0.0..=1.0).contains(&self.max_nil_ratio) {
            Ok(())
        } else {
            Err(LimitsError::RatioOutOfRange(self.max_nil_ratio))
        }
    }

    /// Same gap bound, ratio unconstrained. The splice engine checks against this.
    pub fn gap_only(self) -> Self {
        Self {
            max_nil_ratio: 1.0,
            ..self
        }
    }
}

// =============================================================================
// STATS
// =============================================================================

/// Derived shape of an integer-keyed table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GapStats {
    /// Highest populated position, 0 when empty.
    pub length: Position,
    /// Absent positions in `1..length`.
    pub hole_count: u64,
    /// Longest run of consecutive absent positions.
    pub max_hole_run: u64,
}

impl GapStats {
    /// `hole_count / length`, with the empty sequence at 0.
    pub fn hole_ratio(&self) -> f64 {
        if self.length == 0 {
            0.0
        } else {
            self.hole_count as f64 / self.length as f64
        }
    }

    pub fn gap_ok(&self, limits: &GapLimits) -> bool {
        self.max_hole_run <= limits.max_nil_gap
    }

    pub fn ratio_ok(&self, limits: &GapLimits) -> bool {
        self.hole_ratio() <= limits.max_nil_ratio
    }

    pub fn satisfies(&self, limits: &GapLimits) -> bool {
        self.gap_ok(limits) && self.ratio_ok(limits)
    }

    /// Number of populated positions.
    pub fn populated(&self) -> u64 {
        self.length as u64 - self.hole_count
    }
}
