//! Shared helpers for the integration tests: an instruction encoder and a
//! small harness around [`Simulator`].

#![allow(dead_code)]

use riscv_pipeline::config::{Config, FlushPolicy};
use riscv_pipeline::isa::funct3::*;
use riscv_pipeline::isa::funct7;
use riscv_pipeline::isa::opcodes::*;
use riscv_pipeline::sim::Simulator;

/// Field-by-field instruction encoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    funct7: u32,
    imm: i32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: u32) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    fn r(self, op: u32, f3: u32, f7: u32, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.opcode(op).funct3(f3).funct7(f7).rd(rd).rs1(rs1).rs2(rs2)
    }

    fn i(self, op: u32, f3: u32, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode(op).funct3(f3).rd(rd).rs1(rs1).imm(imm)
    }

    fn b(self, f3: u32, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode(OP_BRANCH).funct3(f3).rs1(rs1).rs2(rs2).imm(imm)
    }

    pub fn build(self) -> u32 {
        let opcode = self.opcode & 0x7F;
        let rd = (self.rd & 0x1F) << 7;
        let funct3 = (self.funct3 & 0x7) << 12;
        let rs1 = (self.rs1 & 0x1F) << 15;
        let rs2 = (self.rs2 & 0x1F) << 20;
        let funct7 = (self.funct7 & 0x7F) << 25;
        let imm = self.imm as u32;

        match opcode {
            OP_REG | OP_REG_32 => funct7 | rs2 | rs1 | funct3 | rd | opcode,
            OP_IMM | OP_LOAD | OP_JALR => ((imm & 0xFFF) << 20) | rs1 | funct3 | rd | opcode,
            OP_STORE => {
                let imm_11_5 = ((imm >> 5) & 0x7F) << 25;
                let imm_4_0 = (imm & 0x1F) << 7;
                imm_11_5 | rs2 | rs1 | funct3 | imm_4_0 | opcode
            }
            OP_BRANCH => {
                let bit_12 = ((imm >> 12) & 0x1) << 31;
                let bits_10_5 = ((imm >> 5) & 0x3F) << 25;
                let bits_4_1 = ((imm >> 1) & 0xF) << 8;
                let bit_11 = ((imm >> 11) & 0x1) << 7;
                bit_12 | bits_10_5 | rs2 | rs1 | funct3 | bits_4_1 | bit_11 | opcode
            }
            // `imm` is the 20-bit upper immediate, unshifted.
            OP_LUI | OP_AUIPC => ((imm & 0xFFFFF) << 12) | rd | opcode,
            OP_JAL => {
                let bit_20 = ((imm >> 20) & 0x1) << 31;
                let bits_10_1 = ((imm >> 1) & 0x3FF) << 21;
                let bit_11 = ((imm >> 11) & 0x1) << 20;
                let bits_19_12 = ((imm >> 12) & 0xFF) << 12;
                bit_20 | bits_10_1 | bit_11 | bits_19_12 | rd | opcode
            }
            _ => panic!("Unsupported opcode: {:#x}", opcode),
        }
    }

    // --- Helpers for Common Instructions ---

    pub fn add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, ADD_SUB, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sub(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, ADD_SUB, funct7::SUB_SRA, rd, rs1, rs2)
    }

    pub fn sll(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, SLL, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn slt(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, SLT, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sltu(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, SLTU, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn xor(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, XOR, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn srl(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, SRL_SRA, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sra(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, SRL_SRA, funct7::SUB_SRA, rd, rs1, rs2)
    }

    pub fn or(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, OR, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn and(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, AND, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sh1add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, SH1ADD, funct7::SHADD, rd, rs1, rs2)
    }

    pub fn sh2add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, SH2ADD, funct7::SHADD, rd, rs1, rs2)
    }

    pub fn sh3add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG, SH3ADD, funct7::SHADD, rd, rs1, rs2)
    }

    pub fn add_uw(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG_32, ADD_UW, funct7::ADD_UW, rd, rs1, rs2)
    }

    pub fn sh1add_uw(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG_32, SH1ADD, funct7::SHADD, rd, rs1, rs2)
    }

    pub fn sh2add_uw(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG_32, SH2ADD, funct7::SHADD, rd, rs1, rs2)
    }

    pub fn sh3add_uw(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r(OP_REG_32, SH3ADD, funct7::SHADD, rd, rs1, rs2)
    }

    pub fn addi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, ADD_SUB, rd, rs1, imm)
    }

    pub fn slti(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, SLT, rd, rs1, imm)
    }

    pub fn sltiu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, SLTU, rd, rs1, imm)
    }

    pub fn xori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, XOR, rd, rs1, imm)
    }

    pub fn ori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, OR, rd, rs1, imm)
    }

    pub fn andi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_IMM, AND, rd, rs1, imm)
    }

    pub fn slli(self, rd: u32, rs1: u32, shamt: i32) -> Self {
        self.i(OP_IMM, SLL, rd, rs1, shamt & 0x3F)
    }

    pub fn srli(self, rd: u32, rs1: u32, shamt: i32) -> Self {
        self.i(OP_IMM, SRL_SRA, rd, rs1, shamt & 0x3F)
    }

    pub fn srai(self, rd: u32, rs1: u32, shamt: i32) -> Self {
        self.i(OP_IMM, SRL_SRA, rd, rs1, 0x400 | (shamt & 0x3F))
    }

    pub fn ld(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_LOAD, LD, rd, rs1, imm)
    }

    pub fn sd(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode(OP_STORE).funct3(SD).rs1(rs1).rs2(rs2).imm(imm)
    }

    pub fn beq(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(BEQ, rs1, rs2, imm)
    }

    pub fn bne(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(BNE, rs1, rs2, imm)
    }

    pub fn blt(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(BLT, rs1, rs2, imm)
    }

    pub fn bge(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(BGE, rs1, rs2, imm)
    }

    pub fn bltu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(BLTU, rs1, rs2, imm)
    }

    pub fn bgeu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b(BGEU, rs1, rs2, imm)
    }

    pub fn jal(self, rd: u32, imm: i32) -> Self {
        self.opcode(OP_JAL).rd(rd).imm(imm)
    }

    pub fn jalr(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i(OP_JALR, JALR, rd, rs1, imm)
    }

    pub fn lui(self, rd: u32, imm: i32) -> Self {
        self.opcode(OP_LUI).rd(rd).imm(imm)
    }

    pub fn auipc(self, rd: u32, imm: i32) -> Self {
        self.opcode(OP_AUIPC).rd(rd).imm(imm)
    }

    pub fn nop(self) -> Self {
        self.addi(0, 0, 0)
    }
}

/// Shorthand for a fresh builder.
pub fn inst() -> InstructionBuilder {
    InstructionBuilder::new()
}

/// Configuration used by the pipeline tests: defaults with no done-word.
pub fn test_config() -> Config {
    Config::default()
}

/// Builds a simulator for `program` under `policy`.
pub fn sim_with(program: &[u32], policy: FlushPolicy) -> Simulator {
    let mut config = test_config();
    config.pipeline.branch_flush = policy;
    Simulator::new(config, program).expect("program fits")
}

/// Builds a simulator for `program` with the default configuration.
pub fn sim(program: &[u32]) -> Simulator {
    sim_with(program, FlushPolicy::Taken)
}

/// Cycles after which every instruction of a straight-line program of
/// `len` words has left write-back, allowing for one stall per instruction.
pub fn drain_cycles(len: usize) -> u64 {
    2 * len as u64 + 5
}
