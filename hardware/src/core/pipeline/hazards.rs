//! Data Hazard Detection and Forwarding.
//!
//! This module implements the forwarding unit, which resolves
//! read-after-write hazards by redirecting execute-stage operands to
//! results still in flight, and the hazard unit, which detects the one
//! case forwarding cannot cover: a load followed immediately by a consumer.

use crate::core::pipeline::control::InstClass;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::isa::InstructionBits;

/// Where an execute-stage operand was taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardSource {
    /// Value read from the register file in decode.
    RegFile,
    /// ALU result latched in EX/MEM.
    ExMem,
    /// Commit value latched in MEM/WB.
    MemWb,
}

/// Operand values resolved by the forwarding unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Forwarded {
    /// Resolved rs1 value.
    pub rs1: u64,
    /// Resolved rs2 value.
    pub rs2: u64,
    /// Source of the rs1 value.
    pub rs1_src: ForwardSource,
    /// Source of the rs2 value.
    pub rs2_src: ForwardSource,
}

/// Returns true if a latch writing `rd` with `reg_write` feeds source `src`.
fn writes(reg_write: bool, rd: usize, src: usize) -> bool {
    reg_write && rd != 0 && rd == src
}

/// Selects one operand value.
///
/// EX/MEM is checked first so it strictly dominates MEM/WB when both
/// target the same register.
fn select(src: usize, reg_val: u64, ex_mem: &ExMem, mem_wb: &MemWb) -> (u64, ForwardSource) {
    if writes(ex_mem.ctrl.reg_write, ex_mem.rd, src) {
        (ex_mem.alu, ForwardSource::ExMem)
    } else if writes(mem_wb.ctrl.reg_write, mem_wb.rd, src) {
        (mem_wb.result(), ForwardSource::MemWb)
    } else {
        (reg_val, ForwardSource::RegFile)
    }
}

/// Forwards register values from later pipeline stages to resolve data hazards.
///
/// # Arguments
///
/// * `id_entry` - The ID/EX entry whose operands are being resolved
/// * `ex_mem` - The EX/MEM latch as it stood at the start of the cycle
/// * `mem_wb` - The MEM/WB latch as it stood at the start of the cycle
///
/// # Returns
///
/// The resolved rs1 and rs2 values with their sources.
pub fn forward_rs(id_entry: &IdEx, ex_mem: &ExMem, mem_wb: &MemWb) -> Forwarded {
    let (rs1, rs1_src) = select(id_entry.rs1, id_entry.rv1, ex_mem, mem_wb);
    let (rs2, rs2_src) = select(id_entry.rs2, id_entry.rv2, ex_mem, mem_wb);
    Forwarded {
        rs1,
        rs2,
        rs1_src,
        rs2_src,
    }
}

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction in the EX stage is a load
/// whose nonzero destination matches a source register the instruction in
/// the ID stage actually reads. Immediate bits that happen to occupy the
/// rs1 or rs2 field of an I, U or J-type encoding never cause a stall.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch holding the executing instruction
/// * `if_id` - The IF/ID latch holding the instruction being decoded
///
/// # Returns
///
/// `true` if a stall is needed to resolve the load-use hazard, `false` otherwise.
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    if !id_ex.ctrl.mem_read || id_ex.rd == 0 || !if_id.valid {
        return false;
    }
    let inst = if_id.inst;
    let class = InstClass::classify(inst.opcode(), inst.funct3(), inst.funct7());
    (class.reads_rs1() && id_ex.rd == inst.rs1())
        || (class.reads_rs2() && id_ex.rd == inst.rs2())
}
