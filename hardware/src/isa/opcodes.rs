//! RV64I major opcodes.
//!
//! Only the opcodes recognised by the control unit are listed. Any other
//! 7-bit value decodes to a pipeline bubble.

/// Load instructions (LD).
pub const OP_LOAD: u32 = 0b000_0011;

/// Integer register-immediate instructions (ADDI, SLLI, ...).
pub const OP_IMM: u32 = 0b001_0011;

/// Add upper immediate to PC.
pub const OP_AUIPC: u32 = 0b001_0111;

/// Store instructions (SD).
pub const OP_STORE: u32 = 0b010_0011;

/// Integer register-register instructions, including the Zba shift-adds.
pub const OP_REG: u32 = 0b011_0011;

/// Load upper immediate.
pub const OP_LUI: u32 = 0b011_0111;

/// 32-bit register-register instructions. Only the Zba `.uw` forms are supported.
pub const OP_REG_32: u32 = 0b011_1011;

/// Conditional branches.
pub const OP_BRANCH: u32 = 0b110_0011;

/// Jump and link register.
pub const OP_JALR: u32 = 0b110_0111;

/// Jump and link.
pub const OP_JAL: u32 = 0b110_1111;
