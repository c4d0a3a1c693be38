//! Simulation harness, image loaders and the sequential reference model.

/// Program image loading (hex and raw binary).
pub mod loader;

/// One-instruction-at-a-time executor used as a correctness oracle.
pub mod reference;

/// Run loop, completion detection and result checks.
pub mod simulator;

pub use reference::ReferenceModel;
pub use simulator::{CheckResult, RunOutcome, Simulator};
