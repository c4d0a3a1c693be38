//! Instruction Set Architecture definitions.
//!
//! Encoding constants for the RV64I base integer set and the Zba
//! address-generation extension, field extraction helpers, and the
//! immediate decoder used by the decode stage.

/// ABI register indices.
pub mod abi;

/// Secondary opcode field values (bits 12-14).
pub mod funct3;

/// Tertiary opcode field values (bits 25-31).
pub mod funct7;

/// Immediate extraction and sign extension for all five encodings.
pub mod imm;

/// Instruction field extraction.
pub mod instruction;

/// Major opcode values (bits 0-6).
pub mod opcodes;

pub use imm::{ImmFormat, ImmediateDecoder};
pub use instruction::InstructionBits;
