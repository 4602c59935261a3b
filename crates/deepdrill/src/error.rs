//! # Simulation Error Types
//!
//! Only setup can fail: reading and validating a configuration, or
//! building the world from it. A running step never returns an error.

use deepdrill_procedural::GenerationError;
use thiserror::Error;

/// Errors raised while configuring a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has mistyped fields.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but makes no physical sense.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// World or generation parameters were rejected.
    #[error("invalid world: {0}")]
    Generation(#[from] GenerationError),
}

/// Result type for simulation setup.
pub type SimResult<T> = Result<T, SimError>;
