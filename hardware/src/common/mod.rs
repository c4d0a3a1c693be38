//! Common utilities and types used throughout the simulator.

/// Host-side error type.
pub mod error;

pub use error::SimError;
