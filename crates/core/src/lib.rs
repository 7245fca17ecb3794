//! Step engines for two classroom operating-systems demonstrations.
//!
//! This crate holds the algorithmic core behind the visualizer. It provides:
//! 1. **Banker's Algorithm:** A `SafetyChecker` with a step cursor over a safe sequence.
//! 2. **Page Replacement:** A `PageReplacementSimulator` running FIFO, LRU and Optimal in lockstep.
//! 3. **Controller:** Key/timer commands mapped onto the engines, with a `Renderer` seam.
//! 4. **Configuration:** JSON-backed behaviour settings and the fixed demonstration scenarios.
//!
//! Engines never draw anything. A renderer receives immutable snapshots after every
//! state change and decides how to display them.

/// Banker's Algorithm safety check and its step cursor.
pub mod bankers;
/// Shared types, vector helpers and error definitions.
pub mod common;
/// Behaviour configuration (tick interval, safe-sequence source, tracing).
pub mod config;
/// Controller that maps commands onto engines and feeds a renderer.
pub mod controller;
/// Page-replacement simulator and its policies.
pub mod paging;
/// The fixed demonstration scenarios.
pub mod scenario;
/// Per-policy hit/fault counters.
pub mod stats;

/// Banker's safety checker; construct with `SafetyChecker::new` or `scenario::safety_checker`.
pub use crate::bankers::SafetyChecker;
/// Crate-wide error and result types.
pub use crate::common::error::{EngineError, Result};
/// Root configuration type; use `Config::default()` or `Config::load`.
pub use crate::config::Config;
/// Controller and renderer seam.
pub use crate::controller::{Command, Controller, Renderer, Target};
/// Lockstep FIFO/LRU/Optimal simulator.
pub use crate::paging::PageReplacementSimulator;
