use tracing::debug;

use super::arch::RegisterFile;
use super::pipeline::hazards;
use super::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use super::pipeline::stages;
use super::pipeline::traits::PipelineLatch;
use crate::config::{Config, FlushPolicy};
use crate::isa::abi;
use crate::soc::System;
use crate::stats::SimStats;

/// The five-stage pipelined core.
///
/// Owns the architectural state (register file and PC), the four pipeline
/// latches and the memory ports. Everything advances on [`Cpu::tick`].
#[derive(Debug)]
pub struct Cpu {
    /// Architectural integer registers.
    pub regs: RegisterFile,
    /// Address of the next instruction to fetch.
    pub pc: u64,
    /// Log the pipeline diagram at the start of every cycle.
    pub trace: bool,
    /// Instruction and data memory ports.
    pub bus: System,

    /// IF/ID latch.
    pub if_id: IfId,
    /// ID/EX latch.
    pub id_ex: IdEx,
    /// EX/MEM latch.
    pub ex_mem: ExMem,
    /// MEM/WB latch.
    pub mem_wb: MemWb,
    /// MEM/WB as it stood at the start of the current cycle.
    pub wb_latch: MemWb,

    /// Counters updated every tick.
    pub stats: SimStats,
    /// Handling of wrong-path instructions after a taken redirect.
    pub flush_policy: FlushPolicy,

    start_pc: u64,
    stack_pointer: Option<u64>,
}

impl Cpu {
    pub fn new(system: System, config: &Config) -> Self {
        let mut cpu = Self {
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            trace: config.general.trace_instructions,
            bus: system,
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            wb_latch: MemWb::default(),
            stats: SimStats::default(),
            flush_policy: config.pipeline.branch_flush,
            start_pc: config.general.start_pc,
            stack_pointer: config.general.stack_pointer,
        };
        cpu.reset();
        cpu
    }

    /// Returns the core to its power-on state.
    ///
    /// Clears every register and latch, reloads the PC and the optional
    /// stack pointer, and zeroes the statistics. Memory contents are kept.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new();
        if let Some(sp) = self.stack_pointer {
            self.regs.write(abi::REG_SP, sp);
        }
        self.pc = self.start_pc;
        self.if_id.flush();
        self.id_ex.flush();
        self.ex_mem.flush();
        self.mem_wb.flush();
        self.wb_latch.flush();
        self.stats = SimStats::default();
    }

    /// Advances the pipeline by one clock cycle.
    ///
    /// Stages run back to front so each one consumes the latch value from
    /// the start of the cycle. Register writes from write-back are visible
    /// to decode in the same cycle. The data-memory write issued by MEM
    /// commits at the end of the cycle.
    pub fn tick(&mut self) {
        self.stats.cycles += 1;

        if self.trace {
            self.print_pipeline_diagram();
        }

        stages::wb_stage(self);

        self.wb_latch = self.mem_wb;

        stages::mem_stage(self);
        let redirect = stages::execute_stage(self);

        // Hazard detection sees the pair that was in EX and ID this cycle.
        let is_load_use_hazard = hazards::need_stall_load_use(&self.id_ex, &self.if_id);

        if is_load_use_hazard {
            debug!(target: "pipeline", "load-use stall at pc={:#x}", self.if_id.pc);
            self.id_ex.flush();
            self.stats.stalls_data += 1;
        } else {
            stages::decode_stage(self);
            stages::fetch_stage(self);
        }

        if let Some(target) = redirect {
            self.stats.taken_redirects += 1;
            if self.flush_policy == FlushPolicy::Taken {
                let squashed = u64::from(!self.id_ex.is_bubble()) + u64::from(!self.if_id.is_bubble());
                self.stats.flushed_instructions += squashed;
                self.id_ex.flush();
                self.if_id.flush();
            }
            debug!(target: "pipeline", "redirect to {:#x}", target);
            self.pc = target;
        }

        self.bus.dmem.clock();
    }

    /// Returns true when no decoded instruction is in flight.
    ///
    /// IF/ID is not considered: fetch keeps running past the end of the
    /// program and the words it finds there decode as bubbles.
    pub fn is_drained(&self) -> bool {
        self.id_ex.is_bubble()
            && self.ex_mem.is_bubble()
            && self.mem_wb.is_bubble()
    }

    pub fn dump_state(&self) {
        println!("PC = {:#018x}", self.pc);
        print!("{}", self.regs);
    }

    pub fn print_pipeline_diagram(&self) {
        let slot = |valid: bool, pc: u64| {
            if valid {
                format!("{:#x}", pc)
            } else {
                "--".to_string()
            }
        };
        debug!(
            target: "pipeline",
            "cycle {:>6} | IF:{} -> ID:{} -> EX:{} -> MEM:{} -> WB:{}",
            self.stats.cycles,
            slot(true, self.pc),
            slot(self.if_id.valid, self.if_id.pc),
            slot(self.id_ex.valid, self.id_ex.pc),
            slot(self.ex_mem.valid, self.ex_mem.pc),
            slot(self.mem_wb.valid, self.mem_wb.pc),
        );
    }
}
