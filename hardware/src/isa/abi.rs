//! Register ABI names used by the simulator.

/// Hardwired zero.
pub const REG_ZERO: usize = 0;
/// Return address.
pub const REG_RA: usize = 1;
/// Stack pointer.
pub const REG_SP: usize = 2;
