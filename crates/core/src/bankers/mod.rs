//! Banker's Algorithm safety check.
//!
//! The `SafetyChecker` owns the Max, Allocation and Need matrices plus the Available
//! vector, and a safe sequence fixed at construction. A step cursor walks that
//! sequence so a renderer can show the algorithm one process at a time:
//! 1. **Cursor:** `advance`, `retreat` and `reset` move the step, clamping at both ends.
//! 2. **Derived state:** `current_available` and `current_highlight` are pure functions of the step.
//! 3. **Snapshots:** `snapshot` captures everything a renderer needs, read-only.

/// Safe-sequence search and validation.
pub mod sequence;

use serde::Serialize;
use tracing::debug;

use crate::common::matrix::add_into;
use crate::common::{Matrix, ProcessId, Result, Units};

/// Display state of a single process at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProcessStatus {
    /// Already finished and returned its allocation.
    Completed,
    /// Next in the safe sequence; being checked at this step.
    Executing,
    /// Not yet reached.
    Waiting,
}

/// Banker's Algorithm state plus a cursor over its safe sequence.
#[derive(Debug, Clone)]
pub struct SafetyChecker {
    max: Matrix,
    allocation: Matrix,
    need: Matrix,
    available: Vec<Units>,
    sequence: Vec<ProcessId>,
    step: usize,
}

impl SafetyChecker {
    /// Builds a checker and derives the safe sequence.
    ///
    /// # Arguments
    ///
    /// * `max` - Maximum claim per process, one row per process.
    /// * `allocation` - Units currently held, same shape as `max`.
    /// * `available` - Unallocated units; its length fixes the number of resource types.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidMatrixShape` or `AllocationExceedsMax` on inconsistent input,
    /// with `UnsafeState` if no safe sequence exists, and with `ResourceOverflow` if
    /// returned allocations exceed `Units::MAX`.
    pub fn new(max: &[Vec<Units>], allocation: &[Vec<Units>], available: &[Units]) -> Result<Self> {
        let (max, allocation, need) = Self::matrices(max, allocation, available)?;
        let sequence = sequence::compute(&need, &allocation, available)?;
        Ok(Self::assemble(max, allocation, need, available, sequence))
    }

    /// Builds a checker around a precomputed safe sequence.
    ///
    /// The sequence is replayed once to make sure it is a permutation of all processes
    /// and that every process fits when its turn comes.
    ///
    /// # Errors
    ///
    /// Fails on inconsistent matrices, with `InvalidSafeSequence` if the order does not replay,
    /// or with `ResourceOverflow` if replaying it exceeds `Units::MAX`.
    pub fn with_sequence(
        max: &[Vec<Units>],
        allocation: &[Vec<Units>],
        available: &[Units],
        safe_sequence: Vec<ProcessId>,
    ) -> Result<Self> {
        let (max, allocation, need) = Self::matrices(max, allocation, available)?;
        sequence::validate(&safe_sequence, &need, &allocation, available)?;
        Ok(Self::assemble(max, allocation, need, available, safe_sequence))
    }

    fn matrices(
        max: &[Vec<Units>],
        allocation: &[Vec<Units>],
        available: &[Units],
    ) -> Result<(Matrix, Matrix, Matrix)> {
        let resources = available.len();
        let max = Matrix::from_rows("max", max, max.len(), resources)?;
        let allocation = Matrix::from_rows("allocation", allocation, max.rows(), resources)?;
        let need = max.checked_sub(&allocation)?;
        Ok((max, allocation, need))
    }

    fn assemble(
        max: Matrix,
        allocation: Matrix,
        need: Matrix,
        available: &[Units],
        sequence: Vec<ProcessId>,
    ) -> Self {
        Self {
            max,
            allocation,
            need,
            available: available.to_vec(),
            sequence,
            step: 0,
        }
    }

    /// Moves the cursor one process forward. No-op once every process has completed.
    pub fn advance(&mut self) {
        if self.step < self.sequence.len() {
            self.step += 1;
            debug!(step = self.step, process = self.sequence[self.step - 1], "process completed");
        }
    }

    /// Moves the cursor one process back. No-op at step 0.
    pub fn retreat(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Returns the cursor to step 0.
    pub fn reset(&mut self) {
        self.step = 0;
    }

    /// Available plus the allocations returned by every process completed so far.
    pub fn current_available(&self) -> Vec<Units> {
        let mut work = self.available.clone();
        for &p in &self.sequence[..self.step] {
            add_into(&mut work, self.allocation.row(p));
        }
        work
    }

    /// The process next to be checked, or `None` once the sequence is exhausted.
    pub fn current_highlight(&self) -> Option<ProcessId> {
        self.sequence.get(self.step).copied()
    }

    /// The process whose completion produced the current available vector.
    pub fn last_completed(&self) -> Option<ProcessId> {
        self.step.checked_sub(1).map(|i| self.sequence[i])
    }

    /// Status of process `p` at the current step.
    pub fn process_status(&self, p: ProcessId) -> ProcessStatus {
        if self.sequence[..self.step].contains(&p) {
            ProcessStatus::Completed
        } else if self.current_highlight() == Some(p) {
            ProcessStatus::Executing
        } else {
            ProcessStatus::Waiting
        }
    }

    /// One-line description of what the current step shows.
    pub fn headline(&self) -> String {
        match self.current_highlight() {
            Some(p) => format!(
                "Step {}: Checking if P{p} can be allocated resources",
                self.step + 1
            ),
            None => "Safety Check Complete - System is in Safe State".to_string(),
        }
    }

    /// True once every process in the sequence has completed.
    pub fn is_complete(&self) -> bool {
        self.step == self.sequence.len()
    }

    /// Current cursor position, in `0..=sequence().len()`.
    pub const fn step(&self) -> usize {
        self.step
    }

    /// The safe sequence being replayed.
    pub fn sequence(&self) -> &[ProcessId] {
        &self.sequence
    }

    /// The Max matrix.
    pub const fn max(&self) -> &Matrix {
        &self.max
    }

    /// The Allocation matrix.
    pub const fn allocation(&self) -> &Matrix {
        &self.allocation
    }

    /// The Need matrix (`max - allocation`).
    pub const fn need(&self) -> &Matrix {
        &self.need
    }

    /// Units unallocated before any process completes.
    pub fn available(&self) -> &[Units] {
        &self.available
    }

    /// Number of processes.
    pub const fn process_count(&self) -> usize {
        self.max.rows()
    }

    /// Number of resource types.
    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    /// Captures the state a renderer draws at this step.
    pub fn snapshot(&self) -> SafetySnapshot {
        SafetySnapshot {
            max: self.max.to_rows(),
            allocation: self.allocation.to_rows(),
            need: self.need.to_rows(),
            available: self.available.clone(),
            current_available: self.current_available(),
            step: self.step,
            sequence: self.sequence.clone(),
            highlight: self.current_highlight(),
            last_completed: self.last_completed(),
            statuses: (0..self.process_count())
                .map(|p| self.process_status(p))
                .collect(),
            headline: self.headline(),
        }
    }
}

/// Read-only view of a `SafetyChecker` at one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetySnapshot {
    /// Max matrix rows.
    pub max: Vec<Vec<Units>>,
    /// Allocation matrix rows.
    pub allocation: Vec<Vec<Units>>,
    /// Need matrix rows.
    pub need: Vec<Vec<Units>>,
    /// Initial available vector.
    pub available: Vec<Units>,
    /// Available after the completed prefix returned its allocations.
    pub current_available: Vec<Units>,
    /// Cursor position.
    pub step: usize,
    /// Full safe sequence.
    pub sequence: Vec<ProcessId>,
    /// Process being checked, if any.
    pub highlight: Option<ProcessId>,
    /// Most recently completed process, if any.
    pub last_completed: Option<ProcessId>,
    /// Status per process, indexed by process id.
    pub statuses: Vec<ProcessStatus>,
    /// Title line for this step.
    pub headline: String,
}

impl SafetySnapshot {
    /// The completed prefix of the safe sequence; the whole sequence if `step` runs past it.
    pub fn completed(&self) -> &[ProcessId] {
        self.sequence.get(..self.step).unwrap_or(&self.sequence)
    }
}
