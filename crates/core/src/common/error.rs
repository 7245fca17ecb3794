//! Engine error definitions.
//!
//! Stepping past either end of a cursor is never an error; it clamps. The variants
//! here cover the only failures the engines can report:
//! 1. **Shape errors:** Matrices and vectors that disagree on dimensions.
//! 2. **Inconsistent input:** Allocations above the declared maximum.
//! 3. **Unsafe states:** No process can be scheduled next.
//! 4. **Bad sequences:** A supplied safe sequence that does not replay.
//! 5. **Overflow:** Returned allocations that no longer fit in a unit count.

use thiserror::Error;

use super::ProcessId;

/// Errors raised while constructing an engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A matrix does not have the dimensions implied by the other inputs.
    #[error(
        "{matrix} matrix has shape {rows}x{cols}, expected {expected_rows}x{expected_cols}"
    )]
    InvalidMatrixShape {
        /// Which input was malformed (`"max"`, `"allocation"`).
        matrix: &'static str,
        /// Number of process rows required.
        expected_rows: usize,
        /// Number of resource columns required.
        expected_cols: usize,
        /// Number of rows found.
        rows: usize,
        /// Width of the offending row (or of the first row if the row count is wrong).
        cols: usize,
    },

    /// A process holds more of a resource than its declared maximum.
    #[error("P{process} holds {allocation} of R{resource} but declares a maximum of {max}")]
    AllocationExceedsMax {
        /// Offending process.
        process: ProcessId,
        /// Offending resource type.
        resource: usize,
        /// Units allocated.
        allocation: u32,
        /// Units declared in the Max matrix.
        max: u32,
    },

    /// No unfinished process can obtain its remaining need.
    #[error("unsafe state: completed {completed:?}, blocked {blocked:?}")]
    UnsafeState {
        /// Processes that could be completed before the search stalled, in order.
        completed: Vec<ProcessId>,
        /// Processes whose need exceeds what is left.
        blocked: Vec<ProcessId>,
    },

    /// Returning a process's allocation would overflow the work vector.
    #[error("returning P{process}'s allocation of R{resource} overflows the available count")]
    ResourceOverflow {
        /// Process whose allocation was being returned.
        process: ProcessId,
        /// Resource type that overflowed.
        resource: usize,
    },

    /// A supplied safe sequence is not a valid safe ordering.
    #[error("invalid safe sequence: {reason}")]
    InvalidSafeSequence {
        /// Human-readable explanation.
        reason: String,
    },

    /// A page-replacement simulator was asked for zero frames.
    #[error("frame count must be at least 1")]
    InvalidFrameCount,
}

/// Result alias used throughout the engines.
pub type Result<T> = std::result::Result<T, EngineError>;
