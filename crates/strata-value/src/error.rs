//! Error types for numeric conversions
//!
//! Self-contained thiserror enum — no central error crate dependency.

use thiserror::Error;

use crate::number::NumberKind;

/// Errors produced when converting out of [`crate::Number`]
///
/// Arithmetic itself never fails (integer addition wraps, float addition
/// follows IEEE 754); only lossy extraction of a concrete scalar can.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    /// The number holds a different kind than the one requested
    #[error("kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        expected: NumberKind,
        actual: NumberKind,
    },
}

impl NumberError {
    /// Convenience constructor for a kind mismatch
    pub fn kind_mismatch(expected: NumberKind, actual: NumberKind) -> Self {
        Self::KindMismatch { expected, actual }
    }
}
