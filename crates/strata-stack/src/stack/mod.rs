//! The array-backed stack

pub mod numeric;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::registry::StackRegistry;
use crate::stats::StackStats;

/// Initial buffer capacity of a freshly constructed stack
pub const DEFAULT_CAPACITY: usize = 10;

/// Capacity after one geometric growth step: `floor(capacity * 1.5)`
///
/// The `+ 1` floor guards degenerate capacities below 2, where
/// `capacity / 2` would round the step away entirely.
const fn grown_capacity(capacity: usize) -> usize {
    let grown = capacity + capacity / 2;
    if grown > capacity { grown } else { capacity + 1 }
}

/// Last-in-first-out container over a contiguous growable buffer
///
/// Every public probe (`push`, `pop`, `peek`, `len`, `is_empty`) counts
/// toward the instance's operation counter — that accounting is part of
/// the contract, not an implementation detail. [`ArrayStack::stats`] and
/// [`ArrayStack::capacity`] are pure reads and count nothing.
///
/// Mutation takes `&mut self`; there is no concurrent-access contract.
/// The counters are relaxed atomics only so that read-only probes can
/// take `&self` and the registry can be shared across stacks.
#[derive(Debug)]
pub struct ArrayStack<T> {
    buffer: Vec<T>,
    operations: AtomicU64,
    stack_id: u64,
    registry: Arc<StackRegistry>,
}

impl<T> ArrayStack<T> {
    /// Create a stack in the process-wide default registry
    pub fn new() -> Self {
        Self::with_registry(StackRegistry::global())
    }

    /// Create a stack in an explicit registry
    pub fn with_registry(registry: Arc<StackRegistry>) -> Self {
        let stack_id = registry.next_stack_id();
        Self {
            buffer: Vec::with_capacity(DEFAULT_CAPACITY),
            operations: AtomicU64::new(0),
            stack_id,
            registry,
        }
    }

    fn record_op(&self) {
        self.operations.fetch_add(1, Ordering::Relaxed);
    }

    /// Push an element on top of the stack
    ///
    /// Grows the buffer by ×1.5 when full. Growth is unbounded; there is
    /// no error path.
    pub fn push(&mut self, element: T) {
        self.record_op();
        if self.buffer.len() == self.buffer.capacity() {
            let target = grown_capacity(self.buffer.capacity());
            self.buffer.reserve_exact(target - self.buffer.len());
        }
        self.buffer.push(element);
        self.registry.record_push();
    }

    /// Remove and return the top element
    ///
    /// Returns `None` on an empty stack — soft failure, the caller
    /// checks. The vacated slot holds nothing afterwards.
    pub fn pop(&mut self) -> Option<T> {
        self.record_op();
        let popped = self.buffer.pop();
        if popped.is_some() {
            self.registry.record_pop();
        }
        popped
    }

    /// Return the top element without removing it
    ///
    /// Returns `None` on an empty stack. Never changes the size.
    pub fn peek(&self) -> Option<&T> {
        self.record_op();
        self.buffer.last()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.record_op();
        self.buffer.is_empty()
    }

    /// The number of elements on the stack
    pub fn len(&self) -> usize {
        self.record_op();
        self.buffer.len()
    }

    /// Current buffer capacity (pure read, counts nothing)
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Registry-assigned instance id (pure read)
    pub const fn stack_id(&self) -> u64 {
        self.stack_id
    }

    /// Operations invoked on this instance so far (pure read)
    pub fn operations(&self) -> u64 {
        self.operations.load(Ordering::Relaxed)
    }

    /// The registry this stack reports to
    pub fn registry(&self) -> &Arc<StackRegistry> {
        &self.registry
    }

    /// Snapshot this instance's counters (pure read, counts nothing)
    pub fn stats(&self) -> StackStats {
        StackStats {
            stack_id: self.stack_id,
            len: self.buffer.len(),
            operations: self.operations(),
        }
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
