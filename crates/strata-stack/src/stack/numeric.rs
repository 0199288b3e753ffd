//! Numeric fold on stacks of [`Number`]
//!
//! The base container is fully generic; this impl block is the
//! numeric-only surface. Folding the top two elements follows the
//! promotion rule of the value crate: integral + integral stays integral,
//! anything else is summed in f64.

use strata_value::Number;

use crate::error::StackError;
use crate::stack::ArrayStack;

impl ArrayStack<Number> {
    /// Pop the top two numbers, push their sum back (net size −1)
    ///
    /// The length probe, both pops and the push each count as an
    /// operation, like any other call.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] without touching the stack when
    /// fewer than two elements are present.
    pub fn try_add_top_two(&mut self) -> Result<Number, StackError> {
        let available = self.len();
        if available < 2 {
            return Err(StackError::Underflow {
                required: 2,
                available,
            });
        }
        let underflow = StackError::Underflow {
            required: 2,
            available,
        };
        let first = self.pop().ok_or(underflow)?;
        let second = self.pop().ok_or(underflow)?;
        let sum = first.add(second);
        self.push(sum);
        Ok(sum)
    }

    /// Soft-failure form of [`Self::try_add_top_two`]
    ///
    /// On underflow the diagnostic goes to the log side channel and the
    /// stack is left untouched. No error reaches the caller.
    pub fn add_top_two(&mut self) {
        if let Err(error) = self.try_add_top_two() {
            tracing::warn!(
                stack_id = self.stack_id(),
                %error,
                "not enough elements to perform addition",
            );
        }
    }
}
