//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the page that has been resident the longest, regardless of how
//! recently it was referenced. Frames fill in slot order, so insertion order is a
//! round-robin over the slots: a single pointer marks the oldest page.
//!
//! # Performance
//!
//! - `record_fill()`: O(1)
//! - `victim()`: O(1)

use super::{PolicyKind, ReplacementPolicy};
use crate::common::PageId;

/// FIFO policy state.
#[derive(Debug, Clone)]
pub struct FifoPolicy {
    /// Slot holding the oldest page.
    next_slot: usize,
    frames: usize,
}

impl FifoPolicy {
    /// Creates a FIFO policy over `frames` slots.
    pub const fn new(frames: usize) -> Self {
        Self {
            next_slot: 0,
            frames,
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    /// Advances the pointer when the oldest slot is refilled, making its new page the youngest.
    fn record_fill(&mut self, slot: usize, _position: usize) {
        if slot == self.next_slot {
            self.next_slot = (self.next_slot + 1) % self.frames;
        }
    }

    fn record_hit(&mut self, _slot: usize, _position: usize) {}

    fn victim(&mut self, _resident: &[PageId], _upcoming: &[PageId]) -> usize {
        self.next_slot
    }

    fn reset(&mut self) {
        self.next_slot = 0;
    }
}
