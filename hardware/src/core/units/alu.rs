//! Arithmetic Logic Unit (ALU) and ALU control.
//!
//! This module implements the second decode level ([`AluControl`]), which
//! refines the control unit's operation class with funct3/funct7 into a
//! concrete [`AluOp`], and the combinational integer ALU used by the
//! Execute stage.

use crate::core::pipeline::signals::{AluOp, AluOpClass};
use crate::isa::{funct3, funct7};

/// Bit mask for shift amount in RV64 (6 bits: 0-63).
const SHAMT_MASK_RV64: u64 = 0x3f;

/// Mask keeping the low 32 bits of a result.
const LOW_WORD_MASK: u64 = 0xFFFF_FFFF;

/// Second-level decoder.
#[derive(Debug)]
pub struct AluControl;

impl AluControl {
    /// Refines an operation class into a concrete ALU operation.
    ///
    /// Total over all inputs: a Zba funct combination that matches no
    /// variant selects [`AluOp::Add`].
    pub fn refine(class: AluOpClass, f3: u32, f7: u32) -> AluOp {
        let alt = f7 & funct7::ALT_BIT != 0;
        match class {
            AluOpClass::Add => AluOp::Add,
            AluOpClass::Sub => AluOp::Sub,
            AluOpClass::Slt => AluOp::Slt,
            AluOpClass::Sltu => AluOp::Sltu,
            AluOpClass::RegArith => Self::arith(f3, alt, alt),
            // ADDI has no subtracting form; bit 30 there is immediate data.
            AluOpClass::ImmArith => Self::arith(f3, false, alt),
            AluOpClass::Zba => match (f7, f3) {
                (funct7::SHADD, funct3::SH1ADD) => AluOp::Sh1Add,
                (funct7::SHADD, funct3::SH2ADD) => AluOp::Sh2Add,
                (funct7::SHADD, funct3::SH3ADD) => AluOp::Sh3Add,
                _ => AluOp::Add,
            },
            AluOpClass::ZbaWord => match (f7, f3) {
                (funct7::ADD_UW, funct3::ADD_UW) => AluOp::AddUw,
                (funct7::SHADD, funct3::SH1ADD) => AluOp::Sh1AddUw,
                (funct7::SHADD, funct3::SH2ADD) => AluOp::Sh2AddUw,
                (funct7::SHADD, funct3::SH3ADD) => AluOp::Sh3AddUw,
                _ => AluOp::Add,
            },
        }
    }

    fn arith(f3: u32, sub: bool, sra: bool) -> AluOp {
        match f3 {
            funct3::ADD_SUB if sub => AluOp::Sub,
            funct3::ADD_SUB => AluOp::Add,
            funct3::SLL => AluOp::Sll,
            funct3::SLT => AluOp::Slt,
            funct3::SLTU => AluOp::Sltu,
            funct3::XOR => AluOp::Xor,
            funct3::SRL_SRA if sra => AluOp::Sra,
            funct3::SRL_SRA => AluOp::Srl,
            funct3::OR => AluOp::Or,
            _ => AluOp::And,
        }
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `a` - First operand
    /// * `b` - Second operand (also the shift amount, low 6 bits)
    /// * `op` - The ALU operation to perform
    ///
    /// # Returns
    ///
    /// `(result, zero)` where `zero` is `result == 0`.
    pub fn execute(a: u64, b: u64, op: AluOp) -> (u64, bool) {
        let result = Self::compute(a, b, op);
        (result, result == 0)
    }

    /// Computes the result only.
    pub fn compute(a: u64, b: u64, op: AluOp) -> u64 {
        let sh6 = (b & SHAMT_MASK_RV64) as u32;
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::And => a & b,
            AluOp::Or => a | b,
            AluOp::Xor => a ^ b,
            AluOp::Sll => a.wrapping_shl(sh6),
            AluOp::Srl => a.wrapping_shr(sh6),
            AluOp::Sra => ((a as i64) >> sh6) as u64,
            AluOp::Slt => ((a as i64) < (b as i64)) as u64,
            AluOp::Sltu => (a < b) as u64,
            AluOp::Sh1Add => a.wrapping_add(b << 1),
            AluOp::Sh2Add => a.wrapping_add(b << 2),
            AluOp::Sh3Add => a.wrapping_add(b << 3),
            AluOp::AddUw => a.wrapping_add(b) & LOW_WORD_MASK,
            AluOp::Sh1AddUw => a.wrapping_add(b << 1) & LOW_WORD_MASK,
            AluOp::Sh2AddUw => a.wrapping_add(b << 2) & LOW_WORD_MASK,
            AluOp::Sh3AddUw => a.wrapping_add(b << 3) & LOW_WORD_MASK,
        }
    }
}
