//! Common types used by both engines.
//!
//! This module provides:
//! 1. **Identifiers:** Aliases for page ids, process indices and resource units.
//! 2. **Matrices:** A shape-checked, row-major matrix of resource units.
//! 3. **Error Handling:** The `EngineError` taxonomy and crate `Result` alias.

/// Error types for construction-time failures.
pub mod error;

/// Shape-checked resource matrices and vector helpers.
pub mod matrix;

pub use error::{EngineError, Result};
pub use matrix::Matrix;

/// Identifier of a virtual page in a reference string.
pub type PageId = u32;

/// Index of a process row in the Banker's matrices.
pub type ProcessId = usize;

/// Count of resource units of a single resource type.
pub type Units = u32;
