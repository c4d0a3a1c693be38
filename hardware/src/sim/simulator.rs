//! Run harness.
//!
//! Drives the clock of a [`Cpu`] until the configured done-word appears in
//! data memory or the cycle budget runs out, then compares the configured
//! result locations.

use serde::Serialize;
use tracing::{debug, info};

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::System;

/// How a run ended.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct RunOutcome {
    /// Cycles ticked by this call.
    pub cycles: u64,
    /// The done-word was observed.
    pub done: bool,
}

/// Result of one configured check.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct CheckResult {
    pub addr: u64,
    pub expected: u64,
    pub actual: u64,
    pub passed: bool,
}

/// A core together with the configuration that drives it.
#[derive(Debug)]
pub struct Simulator {
    pub cpu: Cpu,
    pub config: Config,
}

impl Simulator {
    /// Builds array-backed memories holding `program` and a core over them.
    pub fn new(config: Config, program: &[u32]) -> Result<Self, SimError> {
        let system = System::with_program(&config, program)?;
        Ok(Self::with_system(config, system))
    }

    /// Builds a core over caller-supplied memory ports.
    pub fn with_system(config: Config, system: System) -> Self {
        let cpu = Cpu::new(system, &config);
        Self { cpu, config }
    }

    /// Returns true if the done-word holds the done value.
    pub fn is_done(&self) -> bool {
        self.config
            .harness
            .done_addr
            .is_some_and(|addr| self.cpu.bus.dmem.read(addr) == self.config.harness.done_value)
    }

    /// Ticks until done or until `general.max_cycles` cycles have elapsed.
    pub fn run(&mut self) -> RunOutcome {
        let limit = self.config.general.max_cycles;
        let mut cycles = 0;
        let mut done = self.is_done();

        while !done && cycles < limit {
            self.cpu.tick();
            cycles += 1;
            done = self.is_done();
        }

        if done {
            info!("done-word observed after {} cycles", cycles);
        } else {
            debug!("cycle limit {} reached", limit);
        }
        RunOutcome { cycles, done }
    }

    /// Ticks exactly `n` cycles.
    pub fn step(&mut self, n: u64) {
        for _ in 0..n {
            self.cpu.tick();
        }
    }

    /// Compares every configured check against data memory.
    pub fn check(&self) -> Vec<CheckResult> {
        self.config
            .harness
            .checks
            .iter()
            .map(|c| {
                let actual = self.cpu.bus.dmem.read(c.addr);
                CheckResult {
                    addr: c.addr,
                    expected: c.expected,
                    actual,
                    passed: actual == c.expected,
                }
            })
            .collect()
    }
}
