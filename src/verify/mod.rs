// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrapper** (`ValidSequence`) that makes an unchecked row
//!    unrepresentable. If you hold one, it satisfies its limits.
//!
//! 2. **Runtime contracts** that panic in debug builds when the engine's own
//!    bookkeeping disagrees with a naive recomputation. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
