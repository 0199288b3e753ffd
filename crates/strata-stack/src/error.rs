//! Error types for stack operations
//!
//! The container itself has no failure modes — empty access degrades to
//! `Option::None`. Only the numeric fold can refuse to run, and callers
//! who want the explicit form get it as a `Result` from
//! [`crate::ArrayStack::try_add_top_two`].

use thiserror::Error;

/// Stack operation errors
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Not enough elements for an operation that consumes several
    #[error("not enough elements: operation needs {required}, stack holds {available}")]
    Underflow { required: usize, available: usize },
}
