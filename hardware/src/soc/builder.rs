//! System-on-Chip (SoC) Builder.
//!
//! This module defines the `System` structure, which holds the two memory
//! ports seen by the core, and wires them up from the configuration.

use crate::common::error::SimError;
use crate::config::Config;
use crate::soc::memory::{DataMemory, InstructionMemory};
use crate::soc::traits::{DataPort, InstructionPort};

/// The memories attached to the core.
pub struct System {
    /// Instruction-fetch port.
    pub imem: Box<dyn InstructionPort>,
    /// Data-memory port.
    pub dmem: Box<dyn DataPort>,
}

impl std::fmt::Debug for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("System").finish_non_exhaustive()
    }
}

impl System {
    /// Creates a system from arbitrary port implementations.
    pub fn new(imem: Box<dyn InstructionPort>, dmem: Box<dyn DataPort>) -> Self {
        Self { imem, dmem }
    }

    /// Creates array-backed memories sized by `config`, with `program`
    /// placed at word 0 of instruction memory.
    ///
    /// # Errors
    ///
    /// [`SimError::ImageTooLarge`] if `program` exceeds the instruction store.
    pub fn with_program(config: &Config, program: &[u32]) -> Result<Self, SimError> {
        let mut imem = InstructionMemory::new(config.memory.imem_size);
        let capacity = imem.len_words();
        if imem.load_words(0, program) != 0 {
            return Err(SimError::ImageTooLarge {
                needed: program.len(),
                capacity,
            });
        }
        let dmem = DataMemory::new(config.memory.dmem_size);
        Ok(Self::new(Box::new(imem), Box::new(dmem)))
    }
}
