// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loosely typed entry points over `serde_json::Value`.
//!
//! Rows that come from JSON (or any dynamically typed source) may not be
//! collections at all, and splice arguments may not be integers. These wrappers
//! classify such inputs the way the typed API cannot express:
//!
//! - arrays are 1-based slot lists, `null` elements are holes
//! - objects map their keys through [`Key::parse`], `null` values are holes
//! - everything else is "not a keyed collection": invalid / `false` /
//!   [`SpliceError::NotASequence`], never a panic
//!
//! Object keys that spell the same position (`"1"`, `"01"`, `"1.0"`) are
//! ambiguous. The first one the object yields takes the position and the others stay
//! as names, so the row keeps every cell and is not a sequence.

use serde_json::{Map, Value};

use crate::error::SpliceError;
use crate::matcher::is_subsequence_of;
use crate::splice::commit;
use crate::types::{GapLimits, GapStats, Key, Position, Table};
use crate::validate::{gap_stats, is_valid_sequence, sequence_length};

/// Dense rows up to this length serialize as arrays; longer ones as objects.
pub const MAX_DENSE_LENGTH: Position = 1 << 20;

/// 2^63, the first float past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Interpret a JSON value as a keyed collection.
pub fn table_from_value(value: &Value) -> Option<Table<Value>> {
    match value {
        Value::Array(items) => Some(Table::from_slots(items.iter().map(present))),
        Value::Object(map) => {
            let mut table = Table::new();
            for (raw, item) in map {
                let Some(item) = present(item) else {
                    continue;
                };
                let key = Key::parse(raw);
                if table.get(key.clone()).is_some() {
                    table.insert(Key::Name(raw.clone()), item);
                } else {
                    table.insert(key, item);
                }
            }
            Some(table)
        }
        _ => None,
    }
}

fn present(item: &Value) -> Option<Value> {
    (!item.is_null()).then(|| item.clone())
}

/// Render a table back to JSON.
///
/// Integer-keyed tables up to [`MAX_DENSE_LENGTH`] become arrays with `null`
/// holes; anything else becomes an object keyed by the key's text.
pub fn table_to_value(table: &Table<Value>) -> Value {
    if let Some(stats) = gap_stats(table).filter(|stats| stats.length <= MAX_DENSE_LENGTH) {
        let mut items = vec![Value::Null; stats.length as usize];
        for (position, item) in table.positioned() {
            items[(position - 1) as usize] = item.clone();
        }
        return Value::Array(items);
    }
    table_to_object(table)
}

/// Render a table as an object keyed by the key's text, holes omitted.
pub fn table_to_object(table: &Table<Value>) -> Value {
    let map: Map<String, Value> = table
        .iter()
        .map(|(key, item)| {
            let text = match key {
                Key::Name(name) => name.clone(),
                other => other.to_string(),
            };
            (text, item.clone())
        })
        .collect();
    Value::Object(map)
}

/// Integer argument, accepting integral floats such as `2.0`.
///
/// Integers outside `i64` are an overflow, not a type error.
fn integer_arg(value: &Value, not_integer: SpliceError) -> Result<i64, SpliceError> {
    if let Some(i) = value.as_i64() {
        return Ok(i);
    }
    if value.is_u64() {
        return Err(SpliceError::Overflow);
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => {
            if (-I64_BOUND..I64_BOUND).contains(&f) {
                Ok(f as i64)
            } else {
                Err(SpliceError::Overflow)
            }
        }
        _ => Err(not_integer),
    }
}

pub fn is_valid_sequence_value(value: &Value, limits: GapLimits) -> bool {
    table_from_value(value).is_some_and(|table| is_valid_sequence(&table, limits))
}

pub fn sequence_length_value(value: &Value, limits: GapLimits) -> Option<Position> {
    table_from_value(value).and_then(|table| sequence_length(&table, limits))
}

pub fn is_subsequence_value(haystack: &Value, needle: &Value, require_order: bool) -> bool {
    match (table_from_value(haystack), table_from_value(needle)) {
        (Some(haystack), Some(needle)) => is_subsequence_of(&haystack, &needle, require_order),
        _ => false,
    }
}

/// Splice a JSON row in place.
///
/// `row` is rewritten only when keys actually move, and keeps its shape: arrays
/// stay arrays (up to [`MAX_DENSE_LENGTH`]), objects stay objects. On error, or
/// when the splice moves nothing, `row` is untouched.
pub fn splice_value(
    row: &mut Value,
    index: &Value,
    count: &Value,
    limits: GapLimits,
) -> Result<GapStats, SpliceError> {
    let mut table = table_from_value(row).ok_or(SpliceError::NotASequence)?;
    let index = integer_arg(index, SpliceError::NonIntegerIndex)?;
    let count = integer_arg(count, SpliceError::NonIntegerCount)?;

    let plan = commit(&mut table, index, count, limits)?;
    if !plan.is_noop() {
        *row = if row.is_object() {
            table_to_object(&table)
        } else {
            table_to_value(&table)
        };
    }
    Ok(plan.stats)
}
