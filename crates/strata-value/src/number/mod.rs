//! `Number`: the closed numeric enum
//!
//! A `Number` is either an [`Integer`] or a [`Float`]. Arithmetic between
//! two numbers follows the promotion rule in [`NumberKind::promote`]:
//! integral ⊕ integral stays integral (wrapping on overflow), everything
//! else is computed in f64.

pub mod kind;

pub use kind::NumberKind;

use std::fmt;

use crate::error::NumberError;
use crate::scalar::{Float, Integer};

/// A numeric value: integer or float
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    Integer(Integer),
    Float(Float),
}

impl Number {
    /// The kind of this number
    pub const fn kind(&self) -> NumberKind {
        match self {
            Self::Integer(_) => NumberKind::Integer,
            Self::Float(_) => NumberKind::Float,
        }
    }

    /// Widen to f64 (integers beyond 2^53 lose precision)
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(i) => i.as_f64(),
            Self::Float(f) => f.value(),
        }
    }

    /// Extract the integer scalar
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::KindMismatch`] if this number is a float.
    pub fn try_into_integer(self) -> Result<Integer, NumberError> {
        match self {
            Self::Integer(i) => Ok(i),
            Self::Float(_) => Err(NumberError::kind_mismatch(
                NumberKind::Integer,
                NumberKind::Float,
            )),
        }
    }

    /// Add two numbers under the promotion rule
    ///
    /// Integer + Integer wraps on two's-complement overflow; any operand
    /// being a float promotes the whole operation to f64.
    pub fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Self::Integer(a.wrapping_add(b)),
            _ => Self::Float(Float::new(self.as_f64() + other.as_f64())),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => i.fmt(f),
            Self::Float(v) => v.fmt(f),
        }
    }
}

impl From<Integer> for Number {
    fn from(v: Integer) -> Self {
        Self::Integer(v)
    }
}

impl From<Float> for Number {
    fn from(v: Float) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(Integer::new(v))
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Integer(Integer::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(Float::new(v))
    }
}
