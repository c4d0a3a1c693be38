//! funct7 encodings.

/// Standard encoding (ADD, SRL, ...).
pub const DEFAULT: u32 = 0b000_0000;

/// Alternate encoding (SUB, SRA).
pub const SUB_SRA: u32 = 0b010_0000;

/// Zba shift-add group (SH1ADD, SH2ADD, SH3ADD and their `.uw` forms).
pub const SHADD: u32 = 0b001_0000;

/// Zba ADD.UW.
pub const ADD_UW: u32 = 0b000_0100;

/// Bit 5 of funct7 (instruction bit 30): selects SUB over ADD and SRA over SRL.
pub const ALT_BIT: u32 = 0b010_0000;
