//! Memory Access (MEM) Stage.
//!
//! Issues the EX/MEM load or store to the data port. The address is the
//! latched ALU result and the store data is the rs2 value forwarded in
//! execute; it is not forwarded again here.

use tracing::trace;

use crate::core::pipeline::latches::MemWb;
use crate::core::Cpu;

/// Executes the memory stage.
pub fn mem_stage(cpu: &mut Cpu) {
    let ex = cpu.ex_mem;
    let mut load_data = 0;

    if ex.ctrl.mem_read {
        load_data = cpu.bus.dmem.read(ex.alu);
        trace!(target: "pipeline", "MEM pc={:#x} LOAD addr={:#x} data={:#x}", ex.pc, ex.alu, load_data);
    }
    if ex.ctrl.mem_write {
        cpu.bus.dmem.write(ex.alu, ex.store_data);
        trace!(target: "pipeline", "MEM pc={:#x} STORE addr={:#x} data={:#x}", ex.pc, ex.alu, ex.store_data);
    }

    cpu.mem_wb = MemWb {
        valid: ex.valid,
        pc: ex.pc,
        inst: ex.inst,
        rd: ex.rd,
        alu: ex.alu,
        load_data,
        ctrl: ex.ctrl,
    };
}
