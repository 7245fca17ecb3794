//! Page-Replacement Simulator.
//!
//! Runs FIFO, LRU and Optimal side by side over one reference string. A shared cursor
//! selects the next reference; `step_once` serves it through all three frame sets and
//! moves the cursor on. The cursor lives in `0..=N`:
//! - `0` is the initial state, every frame empty and every counter zero.
//! - `N` is terminal; further steps are no-ops.

/// Fixed-capacity frame sets and access outcomes.
pub mod frames;

/// Replacement policy implementations (FIFO, LRU, Optimal).
pub mod policies;

use serde::Serialize;
use tracing::{debug, info};

pub use self::frames::{AccessOutcome, FrameSet};
pub use self::policies::PolicyKind;
use crate::common::{EngineError, PageId, Result};
use crate::stats::PolicyStats;

/// Outcome of serving one reference under one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyOutcome {
    /// Policy that served the reference.
    pub policy: PolicyKind,
    /// How it was served.
    pub outcome: AccessOutcome,
}

/// What happened during one call to `step_once`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Index of the reference served.
    pub position: usize,
    /// Page referenced.
    pub page: PageId,
    /// One entry per policy, in `PolicyKind::ALL` order.
    pub outcomes: Vec<PolicyOutcome>,
}

impl StepReport {
    /// Outcome for `kind`.
    pub fn outcome(&self, kind: PolicyKind) -> Option<AccessOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.policy == kind)
            .map(|o| o.outcome)
    }
}

/// Lockstep FIFO/LRU/Optimal simulation over a fixed reference string.
#[derive(Debug)]
pub struct PageReplacementSimulator {
    reference: Vec<PageId>,
    frame_count: usize,
    sets: Vec<FrameSet>,
    step: usize,
    last_report: Option<StepReport>,
}

impl PageReplacementSimulator {
    /// Creates a simulator with all frames empty and all counters at zero.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidFrameCount` if `frame_count` is zero.
    pub fn new(reference: Vec<PageId>, frame_count: usize) -> Result<Self> {
        if frame_count == 0 {
            return Err(EngineError::InvalidFrameCount);
        }
        Ok(Self {
            reference,
            frame_count,
            sets: PolicyKind::ALL
                .iter()
                .map(|&kind| FrameSet::new(kind, frame_count))
                .collect(),
            step: 0,
            last_report: None,
        })
    }

    /// Serves the reference under the cursor through every policy, then advances.
    ///
    /// # Returns
    ///
    /// The per-policy outcomes, or `None` if the cursor was already terminal.
    pub fn step_once(&mut self) -> Option<StepReport> {
        let position = self.step;
        let page = *self.reference.get(position)?;
        let upcoming = &self.reference[position + 1..];

        let outcomes = self
            .sets
            .iter_mut()
            .map(|set| PolicyOutcome {
                policy: set.kind(),
                outcome: set.access(page, position, upcoming),
            })
            .collect();

        self.step += 1;
        let report = StepReport {
            position,
            page,
            outcomes,
        };
        debug!(step = self.step, page, "reference served");
        if self.is_complete() {
            info!(
                fifo = self.faults(PolicyKind::Fifo),
                lru = self.faults(PolicyKind::Lru),
                optimal = self.faults(PolicyKind::Optimal),
                "reference string exhausted"
            );
        }
        self.last_report = Some(report.clone());
        Some(report)
    }

    /// Rewinds one reference by replaying the prefix from a reset. No-op at step 0.
    pub fn step_back(&mut self) {
        let Some(target) = self.step.checked_sub(1) else {
            return;
        };
        self.reset();
        for _ in 0..target {
            let _ = self.step_once();
        }
    }

    /// Serves every remaining reference.
    pub fn run_to_end(&mut self) {
        while self.step_once().is_some() {}
    }

    /// Empties every frame, zeroes every counter and rewinds the cursor.
    pub fn reset(&mut self) {
        for set in &mut self.sets {
            set.reset();
        }
        self.step = 0;
        self.last_report = None;
    }

    /// True once every reference has been served.
    pub fn is_complete(&self) -> bool {
        self.step >= self.reference.len()
    }

    /// Cursor position, in `0..=reference().len()`.
    pub const fn step(&self) -> usize {
        self.step
    }

    /// The page the next `step_once` will serve.
    pub fn current_page(&self) -> Option<PageId> {
        self.reference.get(self.step).copied()
    }

    /// The full reference string.
    pub fn reference(&self) -> &[PageId] {
        &self.reference
    }

    /// Slots per policy.
    pub const fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Frame set managed by `kind`.
    pub fn set(&self, kind: PolicyKind) -> &FrameSet {
        // Sets are built from `PolicyKind::ALL`, so every kind is present.
        let index = PolicyKind::ALL
            .iter()
            .position(|&k| k == kind)
            .unwrap_or_default();
        &self.sets[index]
    }

    /// Slot contents for `kind`.
    pub fn frames(&self, kind: PolicyKind) -> &[Option<PageId>] {
        self.set(kind).frames()
    }

    /// Fault count for `kind`.
    pub fn faults(&self, kind: PolicyKind) -> u64 {
        self.set(kind).faults()
    }

    /// Report from the most recent `step_once`, cleared by `reset`.
    pub const fn last_report(&self) -> Option<&StepReport> {
        self.last_report.as_ref()
    }

    /// Captures the state a renderer draws at this step.
    pub fn snapshot(&self) -> PagingSnapshot {
        PagingSnapshot {
            reference: self.reference.clone(),
            frame_count: self.frame_count,
            step: self.step,
            current_page: self.current_page(),
            policies: self
                .sets
                .iter()
                .map(|set| PolicySnapshot {
                    policy: set.kind(),
                    frames: set.frames().to_vec(),
                    faults: set.faults(),
                    stats: set.stats(),
                })
                .collect(),
            last_report: self.last_report.clone(),
            complete: self.is_complete(),
        }
    }
}

/// Read-only view of one policy's frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicySnapshot {
    /// Policy shown.
    pub policy: PolicyKind,
    /// Slot contents, `None` for empty.
    pub frames: Vec<Option<PageId>>,
    /// Page faults so far.
    pub faults: u64,
    /// Full counters.
    pub stats: PolicyStats,
}

/// Read-only view of a `PageReplacementSimulator` at one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagingSnapshot {
    /// The full reference string.
    pub reference: Vec<PageId>,
    /// Slots per policy.
    pub frame_count: usize,
    /// Cursor position.
    pub step: usize,
    /// Page the next step will serve.
    pub current_page: Option<PageId>,
    /// One entry per policy, in `PolicyKind::ALL` order.
    pub policies: Vec<PolicySnapshot>,
    /// Outcome of the most recent step.
    pub last_report: Option<StepReport>,
    /// True at the terminal step.
    pub complete: bool,
}

impl PagingSnapshot {
    /// Snapshot entry for `kind`.
    pub fn policy(&self, kind: PolicyKind) -> Option<&PolicySnapshot> {
        self.policies.iter().find(|p| p.policy == kind)
    }
}
