//! Immediate decoder.
//!
//! Classifies an instruction by opcode into one of the five immediate
//! encodings and produces the 64-bit operand. I, S, B and J immediates are
//! sign-extended from their top bit. The U immediate is placed in bits
//! 31:12 with everything above bit 31 left zero; it is not sign-extended
//! to bit 63.

use super::instruction::InstructionBits;
use super::opcodes;

/// Immediate encoding selected by the major opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmFormat {
    /// Loads, register-immediate ALU ops, JALR.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// LUI and AUIPC.
    U,
    /// JAL.
    J,
    /// Opcode carries no immediate (register-register) or is unrecognised.
    None,
}

impl ImmFormat {
    /// Selects the immediate encoding for a major opcode.
    pub fn from_opcode(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_LOAD | opcodes::OP_IMM | opcodes::OP_JALR => Self::I,
            opcodes::OP_STORE => Self::S,
            opcodes::OP_BRANCH => Self::B,
            opcodes::OP_LUI | opcodes::OP_AUIPC => Self::U,
            opcodes::OP_JAL => Self::J,
            _ => Self::None,
        }
    }
}

/// Sign-extends the low `bits` bits of `value` to 64 bits.
#[inline(always)]
fn sign_extend(value: u64, bits: u32) -> u64 {
    let shift = 64 - bits;
    (((value << shift) as i64) >> shift) as u64
}

/// Pure immediate extraction.
#[derive(Debug)]
pub struct ImmediateDecoder;

impl ImmediateDecoder {
    /// Decodes the immediate operand of `inst`.
    ///
    /// Returns 0 for register-register and unrecognised opcodes.
    pub fn decode(inst: u32) -> u64 {
        Self::decode_as(inst, ImmFormat::from_opcode(inst.opcode()))
    }

    /// Decodes the immediate of `inst` using an explicit encoding.
    pub fn decode_as(inst: u32, format: ImmFormat) -> u64 {
        let raw = inst as u64;
        match format {
            ImmFormat::I => sign_extend(raw >> 20, 12),
            ImmFormat::S => {
                let hi = (raw >> 25) & 0x7F;
                let lo = (raw >> 7) & 0x1F;
                sign_extend((hi << 5) | lo, 12)
            }
            ImmFormat::B => {
                let b12 = (raw >> 31) & 0x1;
                let b11 = (raw >> 7) & 0x1;
                let b10_5 = (raw >> 25) & 0x3F;
                let b4_1 = (raw >> 8) & 0xF;
                sign_extend((b12 << 12) | (b11 << 11) | (b10_5 << 5) | (b4_1 << 1), 13)
            }
            ImmFormat::U => raw & 0xFFFF_F000,
            ImmFormat::J => {
                let b20 = (raw >> 31) & 0x1;
                let b19_12 = (raw >> 12) & 0xFF;
                let b11 = (raw >> 20) & 0x1;
                let b10_1 = (raw >> 21) & 0x3FF;
                sign_extend((b20 << 20) | (b19_12 << 12) | (b11 << 11) | (b10_1 << 1), 21)
            }
            ImmFormat::None => 0,
        }
    }
}
