//! The fixed demonstration scenarios.
//!
//! Both engines run a single hard-coded scenario: a five-process, three-resource
//! Banker's state and an eight-reference string served by three frames.

use crate::bankers::SafetyChecker;
use crate::common::{PageId, ProcessId, Result, Units};
use crate::config::SafeSequenceSource;
use crate::paging::PageReplacementSimulator;

/// Maximum claim per process (rows P0..P4, columns R0..R2).
pub const MAX: [[Units; 3]; 5] = [[7, 5, 3], [3, 2, 2], [9, 0, 2], [2, 2, 2], [4, 3, 3]];

/// Units currently held per process.
pub const ALLOCATION: [[Units; 3]; 5] = [[0, 1, 0], [2, 0, 0], [3, 0, 2], [2, 1, 1], [0, 0, 2]];

/// Units not allocated to any process.
pub const AVAILABLE: [Units; 3] = [3, 3, 2];

/// Precomputed safe order for the state above.
pub const SAFE_SEQUENCE: [ProcessId; 5] = [1, 3, 4, 0, 2];

/// Page reference string.
pub const REFERENCE_STRING: [PageId; 8] = [7, 0, 1, 2, 0, 3, 0, 4];

/// Frames available to each policy.
pub const FRAME_COUNT: usize = 3;

fn rows<const R: usize, const C: usize>(matrix: &[[Units; C]; R]) -> Vec<Vec<Units>> {
    matrix.iter().map(|row| row.to_vec()).collect()
}

/// Builds the Banker's checker for the fixed state.
///
/// # Errors
///
/// Only fails if the constants above are edited into an inconsistent or unsafe state.
pub fn safety_checker(source: SafeSequenceSource) -> Result<SafetyChecker> {
    let max = rows(&MAX);
    let allocation = rows(&ALLOCATION);
    match source {
        SafeSequenceSource::Supplied => {
            SafetyChecker::with_sequence(&max, &allocation, &AVAILABLE, SAFE_SEQUENCE.to_vec())
        }
        SafeSequenceSource::Computed => SafetyChecker::new(&max, &allocation, &AVAILABLE),
    }
}

/// Builds the page-replacement simulator for the fixed reference string.
///
/// # Errors
///
/// Only fails if `FRAME_COUNT` is edited to zero.
pub fn page_simulator() -> Result<PageReplacementSimulator> {
    PageReplacementSimulator::new(REFERENCE_STRING.to_vec(), FRAME_COUNT)
}
