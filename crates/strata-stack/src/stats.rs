//! Per-instance stack statistics

use std::fmt;

/// Point-in-time view of one stack's counters
///
/// Produced by [`crate::ArrayStack::stats`], which is a pure read: taking
/// a snapshot does not count as an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackStats {
    /// Registry-assigned instance id
    pub stack_id: u64,
    /// Current logical size
    pub len: usize,
    /// Operations invoked on this instance so far
    pub operations: u64,
}

impl fmt::Display for StackStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stack #{}: Size={}, Operations={}",
            self.stack_id, self.len, self.operations
        )
    }
}
