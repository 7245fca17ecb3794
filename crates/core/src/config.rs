//! Configuration for the visualizer.
//!
//! This module defines the behaviour settings layered over the fixed scenarios. It provides:
//! 1. **Defaults:** Baseline constants (tick interval, safe-sequence source).
//! 2. **Structures:** General, controller and Banker's sections.
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! The matrices and the reference string are fixed; see `scenario`.

use std::path::Path;
use std::{fs, io};

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants.
mod defaults {
    /// Delay between automatic simulator steps (7 s), matching the classroom pacing.
    pub const TICK_INTERVAL_MS: u64 = 7000;

    /// Whether the simulator advances on its own timer.
    pub const AUTO_ADVANCE: bool = true;
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was opened.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The contents are not valid configuration JSON.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the Banker's checker gets its safe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SafeSequenceSource {
    /// Use the precomputed order shipped with the scenario (validated on load).
    #[default]
    #[serde(alias = "supplied")]
    Supplied,
    /// Derive the order at construction with the repeated-pass search.
    #[serde(alias = "computed")]
    Computed,
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use osvis_core::config::{Config, SafeSequenceSource};
///
/// let json = r#"{
///     "general": { "trace": true },
///     "controller": { "tick_interval_ms": 250 },
///     "bankers": { "safe_sequence": "Computed" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace);
/// assert_eq!(config.controller.tick_interval_ms, 250);
/// assert!(config.controller.auto_advance);
/// assert_eq!(config.bankers.safe_sequence, SafeSequenceSource::Computed);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Timer and input settings
    #[serde(default)]
    pub controller: ControllerConfig,
    /// Banker's Algorithm settings
    #[serde(default)]
    pub bankers: BankersConfig,
}

impl Config {
    /// Parses a configuration from JSON text. Missing sections take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed JSON or unknown enum values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, `ConfigError::Parse` otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every step, fault and eviction at debug level
    #[serde(default)]
    pub trace: bool,
}

/// Controller timer settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ControllerConfig {
    /// Milliseconds between automatic simulator steps
    #[serde(default = "ControllerConfig::default_tick_interval")]
    pub tick_interval_ms: u64,

    /// Advance the simulator on its timer; when false, steps run back-to-back without delay
    #[serde(default = "ControllerConfig::default_auto_advance")]
    pub auto_advance: bool,
}

impl ControllerConfig {
    /// Returns the default tick interval in milliseconds.
    const fn default_tick_interval() -> u64 {
        defaults::TICK_INTERVAL_MS
    }

    /// Returns the default auto-advance flag.
    const fn default_auto_advance() -> bool {
        defaults::AUTO_ADVANCE
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: defaults::TICK_INTERVAL_MS,
            auto_advance: defaults::AUTO_ADVANCE,
        }
    }
}

/// Banker's Algorithm settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankersConfig {
    /// Source of the safe sequence
    #[serde(default)]
    pub safe_sequence: SafeSequenceSource,
}
