//! Host-side error handling.
//!
//! The core has no error path: illegal encodings become bubbles and
//! out-of-range accesses are absorbed by the memory ports. Errors exist
//! only around it, when reading configuration files and program images.

use thiserror::Error;

/// Errors raised while setting up or driving a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A file could not be read.
    #[error("could not read `{path}`: {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid TOML for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A hex image contained a malformed token.
    #[error("hex image line {line}: {msg}")]
    HexImage {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        msg: String,
    },

    /// The program does not fit in the instruction store.
    #[error("image needs {needed} words but instruction memory holds {capacity}")]
    ImageTooLarge {
        /// Highest word slot written, plus one.
        needed: usize,
        /// Store capacity in words.
        capacity: usize,
    },
}
