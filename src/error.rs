// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the splice engine and limit configuration.
//!
//! The validator and matcher never fail: malformed input is simply "not a
//! sequence". Only the splice engine reports errors, and every one of them
//! leaves the caller's table exactly as it was.

use thiserror::Error;

/// Coarse classification of [`SpliceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpliceErrorKind {
    /// The table is not a bounded-gap sequence.
    Shape,
    /// `index` or `count` is malformed.
    Argument,
    /// Position arithmetic left the `i64` range.
    Overflow,
    /// The result would break a limit.
    LimitViolation,
    /// Removal hit a populated position.
    InsufficientHoles,
}

/// Why a splice was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpliceError {
    #[error("not a valid sparse sequence")]
    NotASequence,

    #[error("expected integer index")]
    NonIntegerIndex,

    #[error("expected integer count")]
    NonIntegerCount,

    #[error("index cannot be less than 1")]
    IndexBelowOne,

    #[error("operation would exceed maximum integer value")]
    Overflow,

    #[error("insert count exceeds maximum allowed gap")]
    GapViolation,

    /// Only raised by [`crate::ValidSequence::splice`], which also guards the ratio.
    #[error("insert count exceeds maximum allowed nil ratio")]
    RatioViolation,

    #[error("not enough nils to remove")]
    InsufficientHoles,
}

impl SpliceError {
    pub fn kind(&self) -> SpliceErrorKind {
        match self {
            SpliceError::NotASequence => SpliceErrorKind::Shape,
            SpliceError::NonIntegerIndex
            | SpliceError::NonIntegerCount
            | SpliceError::IndexBelowOne => SpliceErrorKind::Argument,
            SpliceError::Overflow => SpliceErrorKind::Overflow,
            SpliceError::GapViolation | SpliceError::RatioViolation => {
                SpliceErrorKind::LimitViolation
            }
            SpliceError::InsufficientHoles => SpliceErrorKind::InsufficientHoles,
        }
    }
}

/// Rejected [`crate::GapLimits`] configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LimitsError {
    #[error("max_nil_ratio must be within [0, 1], got {0}")]
    RatioOutOfRange(f64),
}
