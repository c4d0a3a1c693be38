//! Pipeline control signals and operation types.
//!
//! This module defines the control bundle produced by the decode stage and
//! carried by an instruction through ID/EX, EX/MEM and MEM/WB, together with
//! the two levels of ALU operation encoding (the coarse class chosen by the
//! control unit and the concrete operation chosen by ALU control).

/// Coarse ALU operation class selected by the control unit.
///
/// The ALU control unit refines a class plus funct3/funct7 into a concrete
/// [`AluOp`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOpClass {
    /// Plain addition (address generation, LUI, AUIPC, JAL, JALR).
    #[default]
    Add,
    /// Subtraction, used for BEQ/BNE comparison.
    Sub,
    /// Signed set-less-than, used for BLT/BGE comparison.
    Slt,
    /// Unsigned set-less-than, used for BLTU/BGEU comparison.
    Sltu,
    /// Register-register arithmetic/logic/shift (OP).
    RegArith,
    /// Register-immediate arithmetic/logic/shift (OP-IMM).
    ImmArith,
    /// Zba shift-adds encoded under OP.
    Zba,
    /// Zba unsigned-word forms encoded under OP-32.
    ZbaWord,
}

/// Concrete ALU operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// 64-bit wrapping addition.
    #[default]
    Add,
    /// 64-bit wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Set less than (signed).
    Slt,
    /// Set less than (unsigned).
    Sltu,
    /// `a + (b << 1)`.
    Sh1Add,
    /// `a + (b << 2)`.
    Sh2Add,
    /// `a + (b << 3)`.
    Sh3Add,
    /// Addition truncated to the low word, zero-extended.
    AddUw,
    /// [`AluOp::Sh1Add`] truncated to the low word, zero-extended.
    Sh1AddUw,
    /// [`AluOp::Sh2Add`] truncated to the low word, zero-extended.
    Sh2AddUw,
    /// [`AluOp::Sh3Add`] truncated to the low word, zero-extended.
    Sh3AddUw,
}

/// Conditional branch kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BranchKind {
    /// Not a branch.
    #[default]
    None,
    /// Taken iff the SUB result is zero.
    Beq,
    /// Taken iff the SUB result is nonzero.
    Bne,
    /// Taken iff SLT produced 1.
    Blt,
    /// Taken iff SLT produced 0.
    Bge,
    /// Taken iff SLTU produced 1.
    Bltu,
    /// Taken iff SLTU produced 0.
    Bgeu,
}

impl BranchKind {
    /// Resolves the branch condition from the ALU outputs.
    ///
    /// Always `false` for [`BranchKind::None`].
    pub fn taken(self, result: u64, zero: bool) -> bool {
        let lt = result & 1 == 1;
        match self {
            Self::None => false,
            Self::Beq => zero,
            Self::Bne => !zero,
            Self::Blt | Self::Bltu => lt,
            Self::Bge | Self::Bgeu => !lt,
        }
    }
}

/// Unconditional jump kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JumpKind {
    /// Not a jump.
    #[default]
    None,
    /// PC-relative jump.
    Jal,
    /// Register-indirect jump.
    Jalr,
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Forwarded rs1 value.
    #[default]
    Reg1,
    /// The instruction's own PC (AUIPC, JAL).
    Pc,
    /// Zero (LUI).
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Forwarded rs2 value.
    #[default]
    Reg2,
    /// Decoded immediate.
    Imm,
}

/// Control signals generated during instruction decode.
///
/// The default value is the bubble: every enable is false, so an
/// instruction carrying it has no architectural effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable data-memory read (load).
    pub mem_read: bool,
    /// Enable data-memory write (store).
    pub mem_write: bool,
    /// Write back the loaded value instead of the ALU result.
    pub mem_to_reg: bool,
    /// Source of ALU operand A.
    pub a_src: OpASrc,
    /// Source of ALU operand B.
    pub b_src: OpBSrc,
    /// Conditional branch kind.
    pub branch: BranchKind,
    /// Unconditional jump kind.
    pub jump: JumpKind,
    /// ALU operation class, refined by ALU control in execute.
    pub alu_op: AluOpClass,
}

impl ControlSignals {
    /// The inert control bundle.
    pub const BUBBLE: Self = Self {
        reg_write: false,
        mem_read: false,
        mem_write: false,
        mem_to_reg: false,
        a_src: OpASrc::Reg1,
        b_src: OpBSrc::Reg2,
        branch: BranchKind::None,
        jump: JumpKind::None,
        alu_op: AluOpClass::Add,
    };

    /// Returns `true` if no enable is asserted.
    pub fn is_bubble(&self) -> bool {
        !self.reg_write
            && !self.mem_read
            && !self.mem_write
            && self.branch == BranchKind::None
            && self.jump == JumpKind::None
    }

    /// Returns `true` for a taken-or-not conditional branch or any jump.
    pub fn is_control_flow(&self) -> bool {
        self.branch != BranchKind::None || self.jump != JumpKind::None
    }
}
