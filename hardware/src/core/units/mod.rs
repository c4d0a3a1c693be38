//! Execution units.

/// Integer ALU and ALU control.
pub mod alu;
