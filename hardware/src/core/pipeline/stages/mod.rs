//! Pipeline stage implementations.
//!
//! Contains the five stages of the instruction pipeline:
//! - Fetch: Retrieves the instruction at the PC
//! - Decode: Splits fields, reads registers, computes the immediate and control signals
//! - Execute: Forwards operands, runs the ALU and resolves branches and jumps
//! - Memory: Issues loads and stores to the data port
//! - Writeback: Commits results to the register file
//!
//! Each stage reads its input latch and overwrites its output latch. The
//! CPU calls them from the back of the pipeline to the front so that every
//! stage sees the latch contents from the start of the cycle.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;
