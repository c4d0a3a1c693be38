//! System-on-Chip components: the memory ports and their default
//! array-backed implementations.

/// System container and construction from configuration.
pub mod builder;

/// Instruction and data memories.
pub mod memory;

/// Port interfaces between the core and memory.
pub mod traits;

pub use builder::System;
pub use memory::{DataMemory, InstructionMemory};
pub use traits::{DataPort, InstructionPort};
