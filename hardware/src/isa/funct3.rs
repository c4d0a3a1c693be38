//! funct3 encodings.

/// ADD / ADDI / SUB.
pub const ADD_SUB: u32 = 0b000;
/// Shift left logical.
pub const SLL: u32 = 0b001;
/// Set less than.
pub const SLT: u32 = 0b010;
/// Set less than unsigned.
pub const SLTU: u32 = 0b011;
/// Exclusive or.
pub const XOR: u32 = 0b100;
/// Shift right logical / arithmetic.
pub const SRL_SRA: u32 = 0b101;
/// Inclusive or.
pub const OR: u32 = 0b110;
/// And.
pub const AND: u32 = 0b111;

/// Doubleword load.
pub const LD: u32 = 0b011;
/// Doubleword store.
pub const SD: u32 = 0b011;

/// Branch if equal.
pub const BEQ: u32 = 0b000;
/// Branch if not equal.
pub const BNE: u32 = 0b001;
/// Branch if less than (signed).
pub const BLT: u32 = 0b100;
/// Branch if greater or equal (signed).
pub const BGE: u32 = 0b101;
/// Branch if less than (unsigned).
pub const BLTU: u32 = 0b110;
/// Branch if greater or equal (unsigned).
pub const BGEU: u32 = 0b111;

/// JALR.
pub const JALR: u32 = 0b000;

/// Zba: add rs1 to rs2 shifted left by 1.
pub const SH1ADD: u32 = 0b010;
/// Zba: add rs1 to rs2 shifted left by 2.
pub const SH2ADD: u32 = 0b100;
/// Zba: add rs1 to rs2 shifted left by 3.
pub const SH3ADD: u32 = 0b110;
/// Zba: ADD.UW shares funct3 with ADD.
pub const ADD_UW: u32 = 0b000;
