//! Instrumented array-backed LIFO stack
//!
//! [`ArrayStack<T>`] is a last-in-first-out container over a contiguous
//! growable buffer (initial capacity 10, geometric growth ×1.5). Every
//! public probe — push, pop, peek, len, is_empty — counts toward a
//! per-instance operation counter, and every stack belongs to a
//! [`StackRegistry`] that tracks how many stacks were ever constructed and
//! how many elements are currently live across all of them.
//!
//! Empty access is a soft failure: `pop` and `peek` return `Option`, and
//! the numeric fold [`ArrayStack::add_top_two`] logs a diagnostic instead
//! of erroring. Nothing here panics or raises.
//!
//! ```
//! use strata_stack::ArrayStack;
//! use strata_value::Number;
//!
//! let mut stack = ArrayStack::new();
//! stack.push(Number::from(3i64));
//! stack.push(Number::from(4i64));
//! stack.add_top_two();
//! assert_eq!(stack.pop(), Some(Number::from(7i64)));
//! ```

pub mod error;
pub mod registry;
pub mod stack;
pub mod stats;

pub use error::StackError;
pub use registry::{RegistryStats, StackRegistry};
pub use stack::{ArrayStack, DEFAULT_CAPACITY};
pub use stats::StackStats;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{ArrayStack, RegistryStats, StackError, StackRegistry, StackStats};
    pub use strata_value::{Float, Integer, Number, NumberKind};
}
