//! Numeric value model for strata
//!
//! This crate provides the closed set of numeric kinds used by the stack
//! crate:
//! - [`Integer`]: i64 newtype with checked and wrapping arithmetic
//! - [`Float`]: f64 newtype (NaN-aware, no `Eq`)
//! - [`Number`]: closed enum over the two scalars, with an explicit
//!   promotion rule for mixed-kind arithmetic ([`NumberKind::promote`])
//!
//! The promotion rule is the whole point of the crate: Integer ⊕ Integer
//! stays Integer, any combination involving Float becomes Float. There is
//! no runtime type inspection anywhere — kind dispatch is a `match` over
//! the closed enum.

pub mod error;
pub mod number;
pub mod scalar;

pub use error::NumberError;
pub use number::{Number, NumberKind};
pub use scalar::{Float, Integer};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Float, Integer, Number, NumberError, NumberKind};
}
