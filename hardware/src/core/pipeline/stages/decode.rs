//! Instruction Decode (ID) Stage.
//!
//! Splits the IF/ID instruction into its fields, reads both source
//! registers, decodes the immediate and runs the control unit. An
//! unrecognised encoding produces the ID/EX bubble.

use tracing::trace;

use crate::core::pipeline::control::ControlUnit;
use crate::core::pipeline::latches::IdEx;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::Cpu;
use crate::isa::{ImmediateDecoder, InstructionBits};

/// Executes the decode stage.
pub fn decode_stage(cpu: &mut Cpu) {
    let if_id = cpu.if_id;
    if if_id.is_bubble() {
        cpu.id_ex.flush();
        return;
    }

    let inst = if_id.inst;
    let ctrl = ControlUnit::decode(inst.opcode(), inst.funct3(), inst.funct7());
    if ctrl.is_bubble() {
        trace!(target: "pipeline", "ID  pc={:#x} inst={:#010x} # unsupported, bubble", if_id.pc, inst);
        cpu.id_ex.flush();
        return;
    }

    let (rs1, rs2) = (inst.rs1(), inst.rs2());
    let entry = IdEx {
        valid: true,
        pc: if_id.pc,
        inst,
        rs1,
        rs2,
        rd: inst.rd(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm: ImmediateDecoder::decode(inst),
        rv1: cpu.regs.read(rs1),
        rv2: cpu.regs.read(rs2),
        ctrl,
    };

    trace!(
        target: "pipeline",
        "ID  pc={:#x} rd=x{} rs1=x{}={:#x} rs2=x{}={:#x} imm={:#x}",
        entry.pc,
        entry.rd,
        rs1,
        entry.rv1,
        rs2,
        entry.rv2,
        entry.imm
    );

    cpu.id_ex = entry;
}
