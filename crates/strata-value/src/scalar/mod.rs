//! Scalar types for strata-value
//!
//! This module contains the two scalar numeric types the value model is
//! built from.

pub mod float;
pub mod integer;

// Re-exports
pub use float::Float;
pub use integer::Integer;
