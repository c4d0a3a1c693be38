//! Main control unit.
//!
//! First decode level: maps (opcode, funct3, funct7) to the control bundle
//! and a coarse ALU operation class. The mapping is total. Every encoding
//! outside the supported RV64I + Zba subset yields
//! [`ControlSignals::BUBBLE`], so an illegal instruction flows through the
//! pipeline with no side effect instead of raising a trap.

use crate::core::pipeline::signals::{
    AluOpClass, BranchKind, ControlSignals, JumpKind, OpASrc, OpBSrc,
};
use crate::isa::{funct3, funct7, opcodes};

/// Instruction group recognised by the control unit.
///
/// Grouping happens before signal generation so that every supported
/// encoding lands in exactly one variant and everything else in
/// [`InstClass::Unsupported`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstClass {
    /// OP base integer register-register instruction.
    RegArith,
    /// OP Zba shift-add.
    Zba,
    /// OP-32 Zba unsigned-word instruction.
    ZbaWord,
    /// OP-IMM instruction.
    ImmArith,
    /// Doubleword load.
    Load,
    /// Doubleword store.
    Store,
    /// Conditional branch of the given kind.
    Branch(BranchKind),
    /// LUI.
    Lui,
    /// AUIPC.
    Auipc,
    /// JAL.
    Jal,
    /// JALR.
    Jalr,
    /// Anything else.
    Unsupported,
}

impl InstClass {
    /// Classifies an encoding.
    pub fn classify(opcode: u32, f3: u32, f7: u32) -> Self {
        match opcode {
            opcodes::OP_REG => match (f7, f3) {
                (funct7::DEFAULT, _) => Self::RegArith,
                (funct7::SUB_SRA, funct3::ADD_SUB | funct3::SRL_SRA) => Self::RegArith,
                (funct7::SHADD, funct3::SH1ADD | funct3::SH2ADD | funct3::SH3ADD) => Self::Zba,
                _ => Self::Unsupported,
            },
            opcodes::OP_REG_32 => match (f7, f3) {
                (funct7::ADD_UW, funct3::ADD_UW) => Self::ZbaWord,
                (funct7::SHADD, funct3::SH1ADD | funct3::SH2ADD | funct3::SH3ADD) => {
                    Self::ZbaWord
                }
                _ => Self::Unsupported,
            },
            opcodes::OP_IMM => {
                // RV64 shift amounts are six bits wide, so instruction bit 25
                // belongs to shamt and only bits 31:26 select the operation.
                let f6 = f7 >> 1;
                match f3 {
                    funct3::SLL if f6 != 0 => Self::Unsupported,
                    funct3::SRL_SRA if f6 != 0 && f6 != funct7::SUB_SRA >> 1 => {
                        Self::Unsupported
                    }
                    _ => Self::ImmArith,
                }
            }
            opcodes::OP_LOAD if f3 == funct3::LD => Self::Load,
            opcodes::OP_STORE if f3 == funct3::SD => Self::Store,
            opcodes::OP_BRANCH => match f3 {
                funct3::BEQ => Self::Branch(BranchKind::Beq),
                funct3::BNE => Self::Branch(BranchKind::Bne),
                funct3::BLT => Self::Branch(BranchKind::Blt),
                funct3::BGE => Self::Branch(BranchKind::Bge),
                funct3::BLTU => Self::Branch(BranchKind::Bltu),
                funct3::BGEU => Self::Branch(BranchKind::Bgeu),
                _ => Self::Unsupported,
            },
            opcodes::OP_LUI => Self::Lui,
            opcodes::OP_AUIPC => Self::Auipc,
            opcodes::OP_JAL => Self::Jal,
            opcodes::OP_JALR if f3 == funct3::JALR => Self::Jalr,
            _ => Self::Unsupported,
        }
    }

    /// Returns true if the instruction consumes the register named by rs1.
    pub fn reads_rs1(self) -> bool {
        !matches!(self, Self::Lui | Self::Auipc | Self::Jal | Self::Unsupported)
    }

    /// Returns true if the instruction consumes the register named by rs2.
    pub fn reads_rs2(self) -> bool {
        matches!(
            self,
            Self::RegArith | Self::Zba | Self::ZbaWord | Self::Store | Self::Branch(_)
        )
    }
}

/// Main decoder.
#[derive(Debug)]
pub struct ControlUnit;

impl ControlUnit {
    /// Produces the control bundle for an encoding.
    pub fn decode(opcode: u32, f3: u32, f7: u32) -> ControlSignals {
        Self::signals_for(InstClass::classify(opcode, f3, f7))
    }

    /// Produces the control bundle for an already classified instruction.
    pub fn signals_for(class: InstClass) -> ControlSignals {
        let alu_writer = ControlSignals {
            reg_write: true,
            ..ControlSignals::BUBBLE
        };

        match class {
            InstClass::RegArith => ControlSignals {
                alu_op: AluOpClass::RegArith,
                ..alu_writer
            },
            InstClass::Zba => ControlSignals {
                alu_op: AluOpClass::Zba,
                ..alu_writer
            },
            InstClass::ZbaWord => ControlSignals {
                alu_op: AluOpClass::ZbaWord,
                ..alu_writer
            },
            InstClass::ImmArith => ControlSignals {
                b_src: OpBSrc::Imm,
                alu_op: AluOpClass::ImmArith,
                ..alu_writer
            },
            InstClass::Load => ControlSignals {
                mem_read: true,
                mem_to_reg: true,
                b_src: OpBSrc::Imm,
                ..alu_writer
            },
            InstClass::Store => ControlSignals {
                mem_write: true,
                b_src: OpBSrc::Imm,
                ..ControlSignals::BUBBLE
            },
            InstClass::Branch(kind) => ControlSignals {
                branch: kind,
                alu_op: match kind {
                    BranchKind::Blt | BranchKind::Bge => AluOpClass::Slt,
                    BranchKind::Bltu | BranchKind::Bgeu => AluOpClass::Sltu,
                    _ => AluOpClass::Sub,
                },
                ..ControlSignals::BUBBLE
            },
            InstClass::Lui => ControlSignals {
                a_src: OpASrc::Zero,
                b_src: OpBSrc::Imm,
                ..alu_writer
            },
            InstClass::Auipc => ControlSignals {
                a_src: OpASrc::Pc,
                b_src: OpBSrc::Imm,
                ..alu_writer
            },
            InstClass::Jal => ControlSignals {
                a_src: OpASrc::Pc,
                b_src: OpBSrc::Imm,
                jump: JumpKind::Jal,
                ..alu_writer
            },
            InstClass::Jalr => ControlSignals {
                b_src: OpBSrc::Imm,
                jump: JumpKind::Jalr,
                ..alu_writer
            },
            InstClass::Unsupported => ControlSignals::BUBBLE,
        }
    }
}
