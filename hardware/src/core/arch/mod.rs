//! RISC-V architectural state.
//!
//! Holds the state that persists across the lifetime of the simulated
//! machine independently of the pipeline: the integer register file.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::RegisterFile;
