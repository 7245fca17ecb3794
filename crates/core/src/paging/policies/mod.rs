//! Page Replacement Policies.
//!
//! Implements the victim selection rules for a fixed set of memory frames.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Optimal`: Belady's farthest-next-use rule.
//!
//! A policy is only consulted once every frame is occupied. Ties always go to the
//! lowest frame slot.

use std::fmt;

use serde::Serialize;

use crate::common::PageId;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (farthest next use) replacement policy.
pub mod optimal;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

/// The three policies simulated side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PolicyKind {
    /// First-In, First-Out.
    Fifo,
    /// Least Recently Used.
    Lru,
    /// Optimal.
    Optimal,
}

impl PolicyKind {
    /// All policies in display order.
    pub const ALL: [Self; 3] = [Self::Fifo, Self::Lru, Self::Optimal];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Optimal => "Optimal",
        }
    }

    /// Builds a fresh policy instance for `frames` slots.
    pub fn build(self, frames: usize) -> Box<dyn ReplacementPolicy> {
        match self {
            Self::Fifo => Box::new(FifoPolicy::new(frames)),
            Self::Lru => Box::new(LruPolicy::new(frames)),
            Self::Optimal => Box::new(OptimalPolicy::new()),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trait for page replacement policies.
///
/// Defines the interface for tracking frame usage and selecting a victim slot.
pub trait ReplacementPolicy: fmt::Debug + Send + Sync {
    /// Which rule this policy implements.
    fn kind(&self) -> PolicyKind;

    /// Notes that `slot` received a new page at reference `position`.
    fn record_fill(&mut self, slot: usize, position: usize);

    /// Notes that the page in `slot` was referenced again at `position`.
    fn record_hit(&mut self, slot: usize, position: usize);

    /// Selects the slot to evict.
    ///
    /// # Arguments
    ///
    /// * `resident` - The page in each slot; every slot is occupied.
    /// * `upcoming` - References after the one being served.
    ///
    /// # Returns
    ///
    /// The index of the slot to overwrite.
    fn victim(&mut self, resident: &[PageId], upcoming: &[PageId]) -> usize;

    /// Forgets all usage history.
    fn reset(&mut self);
}
