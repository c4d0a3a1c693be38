//! Writeback (WB) Stage.
//!
//! Selects between the loaded value and the ALU result and commits it to
//! the register file. Apart from reset, this is the register file's only writer.

use tracing::trace;

use crate::core::Cpu;

/// Executes the writeback stage.
pub fn wb_stage(cpu: &mut Cpu) {
    let wb = cpu.mem_wb;
    if !wb.valid {
        cpu.stats.bubbles_retired += 1;
        return;
    }

    cpu.stats.instructions_retired += 1;
    if wb.ctrl.mem_read {
        cpu.stats.inst_load += 1;
    } else if wb.ctrl.mem_write {
        cpu.stats.inst_store += 1;
    } else if wb.ctrl.is_control_flow() {
        cpu.stats.inst_branch += 1;
    } else {
        cpu.stats.inst_alu += 1;
    }

    if wb.ctrl.reg_write {
        let val = wb.result();
        trace!(target: "pipeline", "WB  pc={:#x} x{} <= {:#x}", wb.pc, wb.rd, val);
        cpu.regs.write(wb.rd, val);
    } else {
        trace!(target: "pipeline", "WB  pc={:#x}", wb.pc);
    }
}
