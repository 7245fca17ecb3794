//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the page whose most recent reference lies furthest in the past.
//! Each slot remembers the reference position at which its page was last touched;
//! the victim is the slot with the smallest such position.
//!
//! # Performance
//!
//! - `record_hit()` / `record_fill()`: O(1)
//! - `victim()`: O(F) where F is the number of frames

use super::{PolicyKind, ReplacementPolicy};
use crate::common::PageId;

/// LRU policy state.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    /// Reference position of the last use of each slot.
    last_used: Vec<usize>,
}

impl LruPolicy {
    /// Creates an LRU policy over `frames` slots.
    pub fn new(frames: usize) -> Self {
        Self {
            last_used: vec![0; frames],
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn record_fill(&mut self, slot: usize, position: usize) {
        self.last_used[slot] = position;
    }

    fn record_hit(&mut self, slot: usize, position: usize) {
        self.last_used[slot] = position;
    }

    /// Returns the least recently used slot; the lowest slot wins a tie.
    fn victim(&mut self, _resident: &[PageId], _upcoming: &[PageId]) -> usize {
        let mut victim = 0;
        for (slot, &used) in self.last_used.iter().enumerate().skip(1) {
            if used < self.last_used[victim] {
                victim = slot;
            }
        }
        victim
    }

    fn reset(&mut self) {
        self.last_used.fill(0);
    }
}
