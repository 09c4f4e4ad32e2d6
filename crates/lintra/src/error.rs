// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Errors for the few fallible entry points (slice import, order parsing).
//!
//! Numeric operations never return errors; degenerate inputs propagate
//! `NaN`/`±∞` and can be audited with `is_nan`/`is_inf`.

use thiserror::Error;

/// Failure while importing or parsing math values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A slice did not contain exactly the number of elements required.
    #[error("expected {expected} elements, got {actual}")]
    SliceLength {
        /// Number of elements the target type needs.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },
    /// A rotation order name was not recognised.
    #[error("unknown rotation order: {0}")]
    UnknownRotationOrder(String),
}
