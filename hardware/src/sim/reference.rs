//! Sequential reference model.
//!
//! Executes one instruction per step with no overlap, so it has no
//! hazards to resolve. It shares the decode and execution units with the
//! pipeline, so any disagreement between the two points at the pipeline's
//! latching, forwarding, stall or flush logic.

use crate::core::arch::RegisterFile;
use crate::core::pipeline::control::ControlUnit;
use crate::core::pipeline::signals::{JumpKind, OpASrc, OpBSrc};
use crate::core::units::alu::{Alu, AluControl};
use crate::isa::{ImmediateDecoder, InstructionBits};
use crate::soc::memory::{DataMemory, InstructionMemory, WORD_BYTES};
use crate::soc::traits::{DataPort, InstructionPort};

/// Single-cycle executor over its own memories.
#[derive(Clone, Debug)]
pub struct ReferenceModel {
    pub regs: RegisterFile,
    pub pc: u64,
    pub imem: InstructionMemory,
    pub dmem: DataMemory,
    /// Supported instructions executed.
    pub retired: u64,
}

impl ReferenceModel {
    /// Creates a model with `program` at address 0 and `dmem_size` bytes of data memory.
    pub fn new(program: &[u32], dmem_size: usize) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            imem: InstructionMemory::from_words(program.to_vec()),
            dmem: DataMemory::new(dmem_size),
            retired: 0,
        }
    }

    /// Executes the instruction at the PC.
    ///
    /// An unsupported encoding has no effect beyond advancing the PC.
    pub fn step(&mut self) {
        let pc = self.pc;
        let inst = self.imem.fetch(pc);
        let next = pc.wrapping_add(WORD_BYTES);
        let ctrl = ControlUnit::decode(inst.opcode(), inst.funct3(), inst.funct7());
        if ctrl.is_bubble() {
            self.pc = next;
            return;
        }

        let imm = ImmediateDecoder::decode(inst);
        let rv1 = self.regs.read(inst.rs1());
        let rv2 = self.regs.read(inst.rs2());
        let a = match ctrl.a_src {
            OpASrc::Reg1 => rv1,
            OpASrc::Pc => pc,
            OpASrc::Zero => 0,
        };
        let b = match ctrl.b_src {
            OpBSrc::Reg2 => rv2,
            OpBSrc::Imm => imm,
        };
        let op = AluControl::refine(ctrl.alu_op, inst.funct3(), inst.funct7());
        let (result, zero) = Alu::execute(a, b, op);

        let (mut value, target) = match ctrl.jump {
            JumpKind::Jal => (next, result),
            JumpKind::Jalr => (next, result & !1),
            JumpKind::None if ctrl.branch.taken(result, zero) => (result, pc.wrapping_add(imm)),
            JumpKind::None => (result, next),
        };

        if ctrl.mem_read {
            value = self.dmem.read(result);
        }
        if ctrl.mem_write {
            self.dmem.write(result, rv2);
            self.dmem.clock();
        }
        if ctrl.reg_write {
            self.regs.write(inst.rd(), value);
        }

        self.pc = target;
        self.retired += 1;
    }

    /// Steps until the PC leaves the program or `max_steps` is reached.
    ///
    /// Returns the number of steps taken.
    pub fn run(&mut self, max_steps: u64) -> u64 {
        let end = self.imem.len_words() as u64 * WORD_BYTES;
        let mut steps = 0;
        while self.pc < end && steps < max_steps {
            self.step();
            steps += 1;
        }
        steps
    }
}
