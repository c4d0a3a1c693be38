//! RISC-V Pipelined Core Simulator CLI.
//!
//! Loads a configuration and a program image, runs the pipeline until the
//! done-word appears or the cycle budget is spent, then reports the result
//! checks and statistics.
//!
//! # Exit codes
//!
//! * `0`: every configured check passed.
//! * `1`: at least one check failed.
//! * `2`: the configuration or image could not be loaded.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use riscv_pipeline::config::Config;
use riscv_pipeline::sim::loader;
use riscv_pipeline::sim::{CheckResult, RunOutcome, Simulator};
use riscv_pipeline::stats::SimStats;
use riscv_pipeline::SimError;

/// Command-line arguments for the pipelined core simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "RV64I + Zba Five-Stage Pipeline Simulator")]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Program image (`.hex` or raw little-endian binary).
    #[arg(short, long)]
    image: PathBuf,

    /// Override `general.max_cycles`.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Emit per-stage trace events.
    #[arg(long)]
    trace: bool,

    /// Print a JSON report instead of the text summary.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    outcome: RunOutcome,
    checks: &'a [CheckResult],
    stats: &'a SimStats,
}

fn init_logging(trace: bool, verbose: u8) {
    let level = if trace || verbose >= 2 {
        "trace"
    } else if verbose == 1 {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn print_config(config: &Config) {
    println!("Global Configuration");
    println!("--------------------");
    println!("General:");
    println!("  Trace Instructions: {}", config.general.trace_instructions);
    println!("  Start PC:           {:#x}", config.general.start_pc);
    println!("  Max Cycles:         {}", config.general.max_cycles);
    if let Some(sp) = config.general.stack_pointer {
        println!("  Stack Pointer:      {:#x}", sp);
    }
    println!("Memory:");
    println!("  IMEM Size:          {} KB", config.memory.imem_size / 1024);
    println!("  DMEM Size:          {} KB", config.memory.dmem_size / 1024);
    println!("Pipeline:");
    println!("  Branch Flush:       {:?}", config.pipeline.branch_flush);
    println!("Harness:");
    match config.harness.done_addr {
        Some(addr) => println!(
            "  Done Word:          {:#x} == {:#x}",
            addr, config.harness.done_value
        ),
        None => println!("  Done Word:          (none)"),
    }
    println!("  Checks:             {}", config.harness.checks.len());
    println!("--------------------");
}

fn load_config(args: &Args) -> Result<Config, SimError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(max) = args.max_cycles {
        config.general.max_cycles = max;
    }
    if args.trace {
        config.general.trace_instructions = true;
    }
    Ok(config)
}

fn setup(args: &Args, config: Result<Config, SimError>) -> Result<Simulator, SimError> {
    let config = config?;
    let program = loader::load_image(&args.image)?;
    if !args.json {
        print_config(&config);
        println!("[Loader] {} words from {}", program.len(), args.image.display());
    }
    Simulator::new(config, &program)
}

/// Main entry point for the pipelined core simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments and loads the TOML configuration file.
/// 2. **Initialization**: Loads the image and builds the memories and the `Cpu`.
/// 3. **Simulation Loop**: Ticks the CPU until the done-word appears or the cycle limit is hit.
/// 4. **Teardown**: Reports checks and statistics and exits with the check status.
fn main() {
    let args = Args::parse();
    let config = load_config(&args);
    let trace = config
        .as_ref()
        .is_ok_and(|c| c.general.trace_instructions);
    init_logging(trace, args.verbose);

    let mut sim = match setup(&args, config) {
        Ok(sim) => sim,
        Err(e) => {
            error!("{}", e);
            eprintln!("[!] FATAL: {}", e);
            process::exit(2);
        }
    };

    let outcome = sim.run();
    let checks = sim.check();
    let all_passed = checks.iter().all(|c| c.passed);

    if args.json {
        let report = Report {
            outcome,
            checks: &checks,
            stats: &sim.cpu.stats,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("[!] FATAL: could not serialise report: {}", e);
                process::exit(2);
            }
        }
    } else {
        if outcome.done {
            println!("\n[*] Done-word observed after {} cycles", outcome.cycles);
        } else {
            println!("\n[*] Stopped after {} cycles", outcome.cycles);
        }
        for c in &checks {
            println!(
                "[{}] {:#06x}: expected {:#x}, got {:#x}",
                if c.passed { "PASS" } else { "FAIL" },
                c.addr,
                c.expected,
                c.actual
            );
        }
        if sim.config.general.trace_instructions {
            sim.cpu.dump_state();
        }
        sim.cpu.stats.print();
    }

    process::exit(if all_passed { 0 } else { 1 });
}
