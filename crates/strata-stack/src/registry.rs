//! Registry-wide stack accounting
//!
//! The original design kept two process-wide counters: stacks ever
//! constructed and elements currently live across all of them. Here that
//! state is an explicitly constructed [`StackRegistry`] shared by `Arc`, so
//! tests build private registries instead of resetting globals. A
//! process-wide default ([`StackRegistry::global`]) covers the common case.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;

static GLOBAL: Lazy<Arc<StackRegistry>> = Lazy::new(|| Arc::new(StackRegistry::new()));

/// Shared accounting domain for a family of stacks
///
/// Counters only ever move with push/pop and construction. Dropping a
/// stack without draining it leaves its elements in the live total — a
/// known quirk of the accounting contract, kept on purpose. Nothing is
/// ever reset.
#[derive(Debug, Default)]
pub struct StackRegistry {
    /// Stacks ever constructed in this registry; also the id source.
    stacks_created: AtomicU64,
    /// Elements currently live across all stacks of this registry.
    live_elements: AtomicU64,
}

impl StackRegistry {
    /// Create a fresh, zeroed accounting domain
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide default registry
    ///
    /// Stacks built with [`crate::ArrayStack::new`] land here.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Hand out the next instance id (1, 2, 3, … in construction order)
    pub(crate) fn next_stack_id(&self) -> u64 {
        self.stacks_created.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Record one element entering a stack
    pub(crate) fn record_push(&self) {
        self.live_elements.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one element leaving a stack
    ///
    /// Only called after a successful pop, so the live total cannot go
    /// below zero.
    pub(crate) fn record_pop(&self) {
        self.live_elements.fetch_sub(1, Ordering::Relaxed);
    }

    /// Snapshot both counters
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            stacks_created: self.stacks_created.load(Ordering::Relaxed),
            live_elements: self.live_elements.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of a registry's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistryStats {
    /// Stacks ever constructed (never decremented)
    pub stacks_created: u64,
    /// Elements currently live across all stacks
    pub live_elements: u64,
}

impl fmt::Display for RegistryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total stacks: {}, Total elements: {}",
            self.stacks_created, self.live_elements
        )
    }
}
