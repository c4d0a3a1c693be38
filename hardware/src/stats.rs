//! Simulation statistics collection and reporting.
//!
//! Tracks cycle and retirement counts together with the two sources of
//! lost cycles in this pipeline: load-use stalls and wrong-path flushes.

use serde::Serialize;

/// Simulation statistics.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct SimStats {
    /// Clock ticks simulated.
    pub cycles: u64,
    /// Valid instructions that left write-back.
    pub instructions_retired: u64,
    /// Retired loads.
    pub inst_load: u64,
    /// Retired stores.
    pub inst_store: u64,
    /// Retired branches and jumps.
    pub inst_branch: u64,
    /// Retired ALU instructions.
    pub inst_alu: u64,
    /// Branches and jumps resolved as taken.
    pub taken_redirects: u64,
    /// Cycles lost to load-use stalls.
    pub stalls_data: u64,
    /// Wrong-path instructions discarded by flushes.
    pub flushed_instructions: u64,
    /// Bubbles that reached write-back.
    pub bubbles_retired: u64,
}

impl SimStats {
    /// Instructions per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Cycles per instruction.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints a formatted summary of all simulation statistics.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("RV64I PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", self.ipc());
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("inst.load                {}", self.inst_load);
        println!("inst.store               {}", self.inst_store);
        println!("inst.branch              {}", self.inst_branch);
        println!("inst.alu                 {}", self.inst_alu);
        println!("----------------------------------------------------------");
        println!("branch.taken             {}", self.taken_redirects);
        println!("stalls.data              {}", self.stalls_data);
        println!("flush.instructions       {}", self.flushed_instructions);
        println!("bubbles.retired          {}", self.bubbles_retired);
        println!("==========================================================");
    }
}
