//! Numeric kinds and the promotion rule
//!
//! `NumberKind` is the closed classification for [`crate::Number`]. The
//! promotion table is the single source of truth for what kind a binary
//! arithmetic operation produces.

use std::fmt;

/// The kind of a [`crate::Number`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberKind {
    Integer,
    Float,
}

impl NumberKind {
    /// Promotion rule for binary arithmetic
    ///
    /// Integer ⊕ Integer → Integer; any combination involving Float → Float.
    pub const fn promote(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer, Self::Integer) => Self::Integer,
            _ => Self::Float,
        }
    }

    /// Check if this kind is integral
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer)
    }

    /// Human-readable kind name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
