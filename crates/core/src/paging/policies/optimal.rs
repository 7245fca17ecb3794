//! Optimal (Belady) Replacement Policy.
//!
//! This policy evicts the resident page whose next reference is furthest in the future.
//! A page that is never referenced again counts as infinitely far away. It needs the
//! rest of the reference string, which the simulator passes to `victim`.
//!
//! # Performance
//!
//! - `victim()`: O(F × R) where R is the length of the remaining reference string

use super::{PolicyKind, ReplacementPolicy};
use crate::common::PageId;

/// Optimal policy. Stateless: every decision is made from the upcoming references.
#[derive(Debug, Clone, Default)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    /// Creates an Optimal policy.
    pub const fn new() -> Self {
        Self
    }
}

/// Distance to the next use of `page`, `usize::MAX` when it is never used again.
fn next_use(page: PageId, upcoming: &[PageId]) -> usize {
    upcoming
        .iter()
        .position(|&p| p == page)
        .unwrap_or(usize::MAX)
}

impl ReplacementPolicy for OptimalPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn record_fill(&mut self, _slot: usize, _position: usize) {}

    fn record_hit(&mut self, _slot: usize, _position: usize) {}

    /// Returns the slot whose page is needed last; the lowest slot wins a tie.
    fn victim(&mut self, resident: &[PageId], upcoming: &[PageId]) -> usize {
        let mut victim = 0;
        let mut farthest = 0;
        for (slot, &page) in resident.iter().enumerate() {
            let distance = next_use(page, upcoming);
            if slot == 0 || distance > farthest {
                victim = slot;
                farthest = distance;
            }
        }
        victim
    }

    fn reset(&mut self) {}
}
