//! Pipeline latch structures for inter-stage communication.
//!
//! Each latch holds exactly one instruction or a bubble. The bubble of every
//! latch is its `Default` value: `valid` is false and the control bundle has
//! every enable cleared, with destination register x0.

use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;

/// IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfId {
    /// A fetched instruction occupies the latch.
    pub valid: bool,
    /// Program counter of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// ID/EX pipeline latch (Decode to Execute stage).
///
/// Contains decoded fields, the register values read in decode, the
/// immediate and the control signals.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// A decoded, supported instruction occupies the latch.
    pub valid: bool,
    /// Program counter of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// First source register index (rs1).
    pub rs1: usize,
    /// Second source register index (rs2).
    pub rs2: usize,
    /// Destination register index (rd).
    pub rd: usize,
    /// funct3 field, kept for ALU control.
    pub funct3: u32,
    /// funct7 field, kept for ALU control.
    pub funct7: u32,
    /// Decoded immediate.
    pub imm: u64,
    /// Value read from rs1 in decode.
    pub rv1: u64,
    /// Value read from rs2 in decode.
    pub rv2: u64,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// An executed instruction occupies the latch.
    pub valid: bool,
    /// Program counter of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index (rd).
    pub rd: usize,
    /// ALU result, memory address, or link address for jumps.
    pub alu: u64,
    /// Forwarded rs2 value captured in execute, for stores.
    pub store_data: u64,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// A completed instruction occupies the latch.
    pub valid: bool,
    /// Program counter of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index (rd).
    pub rd: usize,
    /// ALU result (for non-load instructions).
    pub alu: u64,
    /// Data loaded from memory (for load instructions).
    pub load_data: u64,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
}

impl MemWb {
    /// The value this instruction commits to its destination register.
    pub fn result(&self) -> u64 {
        if self.ctrl.mem_to_reg {
            self.load_data
        } else {
            self.alu
        }
    }
}

macro_rules! impl_latch {
    ($($latch:ty),+) => {
        $(
            impl PipelineLatch for $latch {
                fn flush(&mut self) {
                    *self = Self::default();
                }

                fn is_bubble(&self) -> bool {
                    !self.valid
                }
            }
        )+
    };
}

impl_latch!(IfId, IdEx, ExMem, MemWb);
