//! CPU core: architectural state, the pipeline and its execution units.

/// Architectural state (general-purpose registers).
pub mod arch;

/// The pipelined core and its clock.
pub mod cpu;

/// Pipeline latches, control, hazards and stages.
pub mod pipeline;

/// Execution units.
pub mod units;

pub use cpu::Cpu;
