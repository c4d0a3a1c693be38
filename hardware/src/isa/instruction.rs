//! Instruction field extraction.
//!
//! Provides bit extraction for the fixed-position fields of a 32-bit
//! RISC-V instruction word. The word itself is never modified.

/// Bit mask for the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

const RD_SHIFT: u32 = 7;
const FUNCT3_SHIFT: u32 = 12;
const RS1_SHIFT: u32 = 15;
const RS2_SHIFT: u32 = 20;
const FUNCT7_SHIFT: u32 = 25;

/// Field accessors for an encoded instruction.
///
/// Every accessor is total: any 32-bit value yields some field value,
/// whether or not the instruction actually uses that field.
pub trait InstructionBits {
    /// Major opcode (bits 0-6).
    fn opcode(&self) -> u32;

    /// Destination register index (bits 7-11).
    fn rd(&self) -> usize;

    /// First source register index (bits 15-19).
    fn rs1(&self) -> usize;

    /// Second source register index (bits 20-24).
    fn rs2(&self) -> usize;

    /// funct3 (bits 12-14).
    fn funct3(&self) -> u32;

    /// funct7 (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}
