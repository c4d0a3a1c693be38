//! Execute (EX) Stage.
//!
//! This module implements the execution stage of the pipeline. It is responsible for:
//! - Resolving operand values using forwarding logic (from EX/MEM or MEM/WB).
//! - Selecting operand sources and running ALU control and the ALU.
//! - Resolving conditional branches and computing branch and jump targets.
//!
//! Resolution is late: the redirect target is returned to the CPU, which
//! discards the wrong-path work already admitted to IF/ID and ID/EX.

use tracing::trace;

use crate::core::pipeline::hazards::{self, ForwardSource};
use crate::core::pipeline::latches::ExMem;
use crate::core::pipeline::signals::{JumpKind, OpASrc, OpBSrc};
use crate::core::pipeline::stages::fetch::INST_SIZE;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::alu::{Alu, AluControl};
use crate::core::Cpu;

/// Bit mask to clear bit 0, forcing JALR target addresses to be even.
const JALR_ALIGNMENT_MASK: u64 = !1;

/// Executes the Execute stage of the pipeline.
///
/// # Logic Flow
/// 1. **Forwarding**: Resolves rs1/rs2 against the EX/MEM and MEM/WB
///    latches as they stood at the start of the cycle.
/// 2. **Execution**: Selects operands A and B, refines the ALU operation
///    and runs the ALU.
/// 3. **Control Flow**: Decides branch direction; jumps are always taken.
///
/// # Returns
///
/// The redirect target if the instruction is a taken branch or any jump.
pub fn execute_stage(cpu: &mut Cpu) -> Option<u64> {
    let id = cpu.id_ex;
    if id.is_bubble() {
        cpu.ex_mem.flush();
        return None;
    }

    let fwd = hazards::forward_rs(&id, &cpu.ex_mem, &cpu.wb_latch);
    if fwd.rs1_src != ForwardSource::RegFile {
        trace!(target: "pipeline", "[Forward] pc={:#x} rs1=x{} val={:#x} src={:?}", id.pc, id.rs1, fwd.rs1, fwd.rs1_src);
    }
    if fwd.rs2_src != ForwardSource::RegFile {
        trace!(target: "pipeline", "[Forward] pc={:#x} rs2=x{} val={:#x} src={:?}", id.pc, id.rs2, fwd.rs2, fwd.rs2_src);
    }

    let op_a = match id.ctrl.a_src {
        OpASrc::Reg1 => fwd.rs1,
        OpASrc::Pc => id.pc,
        OpASrc::Zero => 0,
    };
    let op_b = match id.ctrl.b_src {
        OpBSrc::Reg2 => fwd.rs2,
        OpBSrc::Imm => id.imm,
    };

    let op = AluControl::refine(id.ctrl.alu_op, id.funct3, id.funct7);
    let (result, zero) = Alu::execute(op_a, op_b, op);

    let link = id.pc.wrapping_add(INST_SIZE);
    let (alu, redirect) = match id.ctrl.jump {
        JumpKind::Jal => (link, Some(result)),
        JumpKind::Jalr => (link, Some(result & JALR_ALIGNMENT_MASK)),
        JumpKind::None => {
            let taken = id.ctrl.branch.taken(result, zero);
            (result, taken.then(|| id.pc.wrapping_add(id.imm)))
        }
    };

    trace!(
        target: "pipeline",
        "EX  pc={:#x} {:?} a={:#x} b={:#x} -> {:#x}{}",
        id.pc,
        op,
        op_a,
        op_b,
        alu,
        redirect.map(|t| format!(" redirect={:#x}", t)).unwrap_or_default()
    );

    cpu.ex_mem = ExMem {
        valid: true,
        pc: id.pc,
        inst: id.inst,
        rd: id.rd,
        alu,
        store_data: fwd.rs2,
        ctrl: id.ctrl,
    };

    redirect
}
