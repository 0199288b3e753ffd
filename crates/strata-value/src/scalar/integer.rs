use std::fmt;

/// Signed 64-bit integer
///
/// Newtype wrapper around i64. Arithmetic comes in two flavours:
/// - `checked_*` operations return `None` on overflow
/// - `wrapping_add` wraps on two's-complement overflow, which is the
///   semantics the numeric fold in the stack crate uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Integer(i64);

impl Integer {
    /// Create a new integer
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Checked addition (returns None on overflow)
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction (returns None on overflow)
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Wrapping addition (two's-complement wrap on overflow)
    pub const fn wrapping_add(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }

    /// Widen to f64 (may lose precision beyond 2^53)
    pub const fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i8> for Integer {
    fn from(v: i8) -> Self {
        Self(i64::from(v))
    }
}

impl From<i16> for Integer {
    fn from(v: i16) -> Self {
        Self(i64::from(v))
    }
}

impl From<i32> for Integer {
    fn from(v: i32) -> Self {
        Self(i64::from(v))
    }
}

impl From<i64> for Integer {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

impl From<u32> for Integer {
    fn from(v: u32) -> Self {
        Self(i64::from(v))
    }
}

impl TryFrom<u64> for Integer {
    type Error = std::num::TryFromIntError;

    fn try_from(v: u64) -> Result<Self, Self::Error> {
        i64::try_from(v).map(Self)
    }
}
