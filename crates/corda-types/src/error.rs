//! Error types for the Corda simulator.
//!
//! All crates return `CordaResult<T>` from fallible operations.
//! Geometric degeneracies (collapsed links, coincident points) are
//! *not* errors — they are handled as defined numeric special cases
//! inside the collision routines.

use thiserror::Error;

/// Unified error type for the Corda simulator.
#[derive(Debug, Error)]
pub enum CordaError {
    /// Chain construction data is malformed or inconsistent.
    #[error("Invalid chain: {0}")]
    InvalidChain(String),

    /// Configuration value is invalid (zero radius, negative friction, NaN).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for `Result<T, CordaError>`.
pub type CordaResult<T> = Result<T, CordaError>;
