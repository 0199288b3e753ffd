use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// IEEE 754 double-precision floating point number
///
/// **IMPORTANT**: this type does NOT implement `Eq` or `Hash` because
/// NaN != NaN. Use `total_cmp()` for ordering that includes NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Float(f64);

impl Float {
    /// Create a new float
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if this is NaN
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Check if this is finite (not NaN or infinite)
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total ordering comparison that includes NaN
    ///
    /// Order: -Infinity < finite < +Infinity < NaN
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Float {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Float {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<f32> for Float {
    fn from(v: f32) -> Self {
        Self(f64::from(v))
    }
}
