//! Simulator configuration.
//!
//! Loaded from TOML. Every section and field has a default, so an empty
//! document yields [`Config::default`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::common::error::SimError;

const DEFAULT_IMEM_SIZE: usize = 16 * 1024;
const DEFAULT_DMEM_SIZE: usize = 8 * 1024;
const DEFAULT_MAX_CYCLES: u64 = 100_000;
const DEFAULT_DONE_VALUE: u64 = 0xDEAD_BEEF;

/// Top-level configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Run control.
    pub general: GeneralConfig,
    /// Memory sizes.
    pub memory: MemoryConfig,
    /// Pipeline behaviour.
    pub pipeline: PipelineConfig,
    /// Completion detection and result checks.
    pub harness: HarnessConfig,
}

impl Config {
    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SimError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }
}

/// Run control settings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit per-stage trace events.
    pub trace_instructions: bool,
    /// Initial program counter.
    pub start_pc: u64,
    /// Upper bound on simulated cycles.
    pub max_cycles: u64,
    /// Initial value of x2 (sp), if any.
    pub stack_pointer: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: cfg!(feature = "always-trace"),
            start_pc: 0,
            max_cycles: DEFAULT_MAX_CYCLES,
            stack_pointer: None,
        }
    }
}

/// Memory sizes in bytes.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct MemoryConfig {
    /// Instruction store size.
    pub imem_size: usize,
    /// Data store size.
    pub dmem_size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_size: DEFAULT_IMEM_SIZE,
            dmem_size: DEFAULT_DMEM_SIZE,
        }
    }
}

/// What happens to wrong-path instructions when a branch or jump is taken.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlushPolicy {
    /// Convert IF/ID and ID/EX to bubbles in the cycle the redirect resolves.
    #[default]
    Taken,
    /// Redirect the PC but let wrong-path instructions continue.
    Never,
}

/// Pipeline behaviour.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Wrong-path flush policy.
    pub branch_flush: FlushPolicy,
}

/// A data-memory location and the value it must hold after the run.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Check {
    /// Byte address of the doubleword.
    pub addr: u64,
    /// Expected value.
    pub expected: u64,
}

/// Completion detection and result checks.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct HarnessConfig {
    /// Doubleword polled after every tick to detect completion.
    pub done_addr: Option<u64>,
    /// Value of `done_addr` that ends the run.
    pub done_value: u64,
    /// Locations compared after the run.
    pub checks: Vec<Check>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            done_addr: None,
            done_value: DEFAULT_DONE_VALUE,
            checks: Vec::new(),
        }
    }
}
