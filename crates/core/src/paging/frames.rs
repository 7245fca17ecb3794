//! Fixed-capacity frame sets.
//!
//! A `FrameSet` is one policy's view of memory: `frame_count` slots, each empty or
//! holding one page, plus the counters for that policy. Empty slots are always filled
//! lowest-first; the policy is only asked for a victim once every slot is occupied.

use serde::Serialize;
use tracing::debug;

use super::policies::{PolicyKind, ReplacementPolicy};
use crate::common::PageId;
use crate::stats::PolicyStats;

/// How a policy served a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessOutcome {
    /// The page was already resident in `slot`.
    Hit {
        /// Slot holding the page.
        slot: usize,
    },
    /// Fault served by filling an empty slot.
    Filled {
        /// Slot that received the page.
        slot: usize,
    },
    /// Fault served by evicting a resident page.
    Replaced {
        /// Slot that received the page.
        slot: usize,
        /// Page that was evicted.
        evicted: PageId,
    },
}

impl AccessOutcome {
    /// True for a page fault (fill or replacement).
    pub const fn is_fault(self) -> bool {
        !matches!(self, Self::Hit { .. })
    }

    /// Slot touched by this access.
    pub const fn slot(self) -> usize {
        match self {
            Self::Hit { slot } | Self::Filled { slot } | Self::Replaced { slot, .. } => slot,
        }
    }
}

/// One policy's memory frames and counters.
#[derive(Debug)]
pub struct FrameSet {
    frames: Vec<Option<PageId>>,
    policy: Box<dyn ReplacementPolicy>,
    stats: PolicyStats,
}

impl FrameSet {
    /// Creates `frame_count` empty slots managed by `kind`.
    pub fn new(kind: PolicyKind, frame_count: usize) -> Self {
        Self {
            frames: vec![None; frame_count],
            policy: kind.build(frame_count),
            stats: PolicyStats::default(),
        }
    }

    /// Serves a reference to `page` at `position`.
    ///
    /// # Arguments
    ///
    /// * `page` - Page being referenced.
    /// * `position` - Index of this reference in the reference string.
    /// * `upcoming` - References after this one (used by Optimal).
    pub fn access(&mut self, page: PageId, position: usize, upcoming: &[PageId]) -> AccessOutcome {
        if let Some(slot) = self.slot_of(page) {
            self.policy.record_hit(slot, position);
            self.stats.hits += 1;
            return AccessOutcome::Hit { slot };
        }

        self.stats.faults += 1;
        let outcome = match self.frames.iter().position(Option::is_none) {
            Some(slot) => AccessOutcome::Filled { slot },
            None => {
                let resident: Vec<PageId> = self.frames.iter().flatten().copied().collect();
                let slot = self.policy.victim(&resident, upcoming);
                self.stats.evictions += 1;
                AccessOutcome::Replaced {
                    slot,
                    evicted: resident[slot],
                }
            }
        };

        let slot = outcome.slot();
        self.frames[slot] = Some(page);
        self.policy.record_fill(slot, position);
        debug!(policy = %self.kind(), page, ?outcome, "page fault");
        outcome
    }

    /// Empties every slot and clears the counters.
    pub fn reset(&mut self) {
        self.frames.fill(None);
        self.policy.reset();
        self.stats = PolicyStats::default();
    }

    /// Slot holding `page`, if resident.
    pub fn slot_of(&self, page: PageId) -> Option<usize> {
        self.frames.iter().position(|&f| f == Some(page))
    }

    /// Slot contents in slot order, `None` for an empty slot.
    pub fn frames(&self) -> &[Option<PageId>] {
        &self.frames
    }

    /// Resident pages in slot order.
    pub fn resident(&self) -> impl Iterator<Item = PageId> + '_ {
        self.frames.iter().flatten().copied()
    }

    /// Page faults so far.
    pub const fn faults(&self) -> u64 {
        self.stats.faults
    }

    /// Counters so far.
    pub const fn stats(&self) -> PolicyStats {
        self.stats
    }

    /// Policy managing this set.
    pub fn kind(&self) -> PolicyKind {
        self.policy.kind()
    }
}
