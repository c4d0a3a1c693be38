//! RISC-V 64-bit Pipelined Core Simulator Library.
//!
//! This crate implements a cycle-accurate model of a classic five-stage
//! in-order pipeline for the RV64I base integer set plus the Zba
//! address-generation extension.
//!
//! # Architecture
//!
//! * **Core**: Fetch, Decode, Execute, Memory, Writeback with full
//!   operand forwarding, a one-cycle load-use interlock and branch
//!   resolution in Execute.
//! * **Memory**: Separate instruction and data ports with array-backed
//!   default implementations.
//! * **Harness**: Image loading, a sequential reference model and a run
//!   loop with done-word detection and result checks.
//!
//! # Modules
//!
//! * `common`: Error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: CPU core implementation.
//! * `isa`: Instruction Set Architecture definitions.
//! * `sim`: Simulation harness, loaders and reference model.
//! * `soc`: Memory ports and their implementations.
//! * `stats`: Performance statistics collection.

/// Shared error type.
pub mod common;

/// Configuration for memory sizes, pipeline behaviour and the run harness.
///
/// Loads and parses TOML configuration files to customize simulator behavior.
pub mod config;

/// CPU core implementation including pipeline stages and execution units.
///
/// Implements the 5-stage in-order pipeline (Fetch, Decode, Execute, Memory, Writeback)
/// and the architectural register file.
pub mod core;

/// Instruction Set Architecture definitions and decoders.
///
/// Implements RV64I and Zba field extraction, encoding constants and the
/// immediate decoder.
pub mod isa;

/// Simulation harness, image loaders, and the sequential reference model.
pub mod sim;

/// Instruction and data memory ports.
pub mod soc;

/// Performance statistics collection and reporting.
///
/// Tracks cycle counts, retirement counts, stalls and flushes during
/// simulation execution.
pub mod stats;

pub use crate::common::SimError;
pub use crate::config::Config;
pub use crate::core::Cpu;
pub use crate::sim::Simulator;
