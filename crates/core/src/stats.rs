//! Page-replacement statistics.
//!
//! Tracks, per policy, how each reference was served. It provides:
//! 1. **Counters:** Hits, faults and evictions (faults that replaced a resident page).
//! 2. **Derived metrics:** Hit and fault ratios over the references served so far.
//! 3. **Reporting:** A fixed-width table line per policy.

use std::fmt;

use serde::Serialize;

/// Counters for a single replacement policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PolicyStats {
    /// References served by a resident page.
    pub hits: u64,
    /// References that missed (compulsory fills included).
    pub faults: u64,
    /// Faults that overwrote a resident page.
    pub evictions: u64,
}

impl PolicyStats {
    /// Total references served.
    pub const fn references(&self) -> u64 {
        self.hits + self.faults
    }

    /// Fraction of references that hit, `0.0` before any reference.
    pub fn hit_ratio(&self) -> f64 {
        match self.references() {
            0 => 0.0,
            n => self.hits as f64 / n as f64,
        }
    }

    /// Fraction of references that faulted, `0.0` before any reference.
    pub fn fault_ratio(&self) -> f64 {
        match self.references() {
            0 => 0.0,
            n => self.faults as f64 / n as f64,
        }
    }
}

impl fmt::Display for PolicyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "refs: {:<4} | hits: {:<4} | faults: {:<4} | evictions: {:<4} | fault_rate: {:.2}%",
            self.references(),
            self.hits,
            self.faults,
            self.evictions,
            self.fault_ratio() * 100.0
        )
    }
}
