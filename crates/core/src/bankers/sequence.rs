//! Safe-sequence search and validation.
//!
//! The search walks the processes in index order, pass after pass. Every process whose
//! Need fits in the work vector is scheduled on the spot and its Allocation is returned
//! to the pool. The search ends when a full pass schedules nothing.

use tracing::{info, warn};

use crate::common::matrix::{checked_add_into, fits};
use crate::common::{EngineError, Matrix, ProcessId, Result, Units};

/// Derives a safe sequence for the given state.
///
/// # Arguments
///
/// * `need` - Remaining need per process.
/// * `allocation` - Units currently held per process.
/// * `available` - Units currently unallocated.
///
/// # Returns
///
/// A permutation of all process indices in which each process can finish in turn.
///
/// # Errors
///
/// Returns `EngineError::UnsafeState` if some processes can never be scheduled, and
/// `EngineError::ResourceOverflow` if returning an allocation overflows the work vector.
pub fn compute(need: &Matrix, allocation: &Matrix, available: &[Units]) -> Result<Vec<ProcessId>> {
    let processes = need.rows();
    let mut work = available.to_vec();
    let mut finished = vec![false; processes];
    let mut sequence = Vec::with_capacity(processes);

    loop {
        let before = sequence.len();
        for p in 0..processes {
            if !finished[p] && fits(need.row(p), &work) {
                checked_add_into(&mut work, allocation.row(p), p)?;
                finished[p] = true;
                sequence.push(p);
            }
        }
        if sequence.len() == processes {
            break;
        }
        if sequence.len() == before {
            let blocked: Vec<ProcessId> = (0..processes).filter(|&p| !finished[p]).collect();
            warn!(completed = ?sequence, blocked = ?blocked, "no schedulable process remains");
            return Err(EngineError::UnsafeState {
                completed: sequence,
                blocked,
            });
        }
    }

    info!(sequence = ?sequence, "derived safe sequence");
    Ok(sequence)
}

/// Checks that `sequence` is a permutation of all processes and replays safely.
///
/// # Errors
///
/// Returns `EngineError::InvalidSafeSequence` describing the first problem found, or
/// `EngineError::ResourceOverflow` if the replay overflows the work vector.
pub fn validate(
    sequence: &[ProcessId],
    need: &Matrix,
    allocation: &Matrix,
    available: &[Units],
) -> Result<()> {
    let processes = need.rows();
    let invalid = |reason: String| Err(EngineError::InvalidSafeSequence { reason });

    if sequence.len() != processes {
        return invalid(format!(
            "expected {processes} entries, found {}",
            sequence.len()
        ));
    }

    let mut seen = vec![false; processes];
    let mut work = available.to_vec();
    for (step, &p) in sequence.iter().enumerate() {
        if p >= processes {
            return invalid(format!("P{p} at step {step} does not exist"));
        }
        if seen[p] {
            return invalid(format!("P{p} appears more than once"));
        }
        seen[p] = true;
        if !fits(need.row(p), &work) {
            return invalid(format!(
                "P{p} needs {:?} at step {step} but only {work:?} is available",
                need.row(p)
            ));
        }
        checked_add_into(&mut work, allocation.row(p), p)?;
    }
    Ok(())
}
