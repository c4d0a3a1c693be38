//! RISC-V General-Purpose Register File.
//!
//! This module implements the register file containing 32 registers
//! (x0-x31). It enforces the architectural invariant that register x0 is
//! always hardwired to zero. Outside reset, the write-back stage is its only writer.

use std::fmt;

/// Number of architectural integer registers.
pub const NUM_REGS: usize = 32;

/// General-purpose register file.
///
/// Contains 32 64-bit registers. Register x0 is hardwired to zero and
/// cannot be modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u64; NUM_REGS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    ///
    /// # Returns
    ///
    /// The 64-bit value stored in the specified register.
    /// Register x0 (index 0) always returns 0 regardless of storage.
    pub fn read(&self, idx: usize) -> u64 {
        if idx == 0 {
            0
        } else {
            self.regs[idx & (NUM_REGS - 1)]
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to register x0 (index 0) are silently ignored.
    pub fn write(&mut self, idx: usize, val: u64) {
        if idx != 0 {
            self.regs[idx & (NUM_REGS - 1)] = val;
        }
    }

    /// Returns a copy of all 32 registers, x0 included.
    pub fn snapshot(&self) -> [u64; NUM_REGS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }
}

impl fmt::Display for RegisterFile {
    /// Formats registers in pairs (two per line) with hexadecimal values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            writeln!(
                f,
                "x{:<2}={:#018x} x{:<2}={:#018x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
