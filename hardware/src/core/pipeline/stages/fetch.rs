//! Instruction Fetch (IF) Stage.
//!
//! Reads the instruction word at the PC through the instruction port,
//! latches it into IF/ID and advances the PC to the sequential successor.
//! The CPU overrides that successor when execute resolves a taken branch
//! or jump, and skips this stage entirely during a load-use stall.

use tracing::trace;

use crate::core::pipeline::latches::IfId;
use crate::core::Cpu;

/// Byte distance between sequential instructions.
pub const INST_SIZE: u64 = 4;

/// Executes the fetch stage.
pub fn fetch_stage(cpu: &mut Cpu) {
    let pc = cpu.pc;
    let inst = cpu.bus.imem.fetch(pc);

    trace!(target: "pipeline", "IF  pc={:#x} inst={:#010x}", pc, inst);

    cpu.if_id = IfId {
        valid: true,
        pc,
        inst,
    };
    cpu.pc = pc.wrapping_add(INST_SIZE);
}
