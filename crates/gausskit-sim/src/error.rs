//! Error types for the simulation crate.

use thiserror::Error;

/// Errors produced by statevector execution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit width does not match the statevector width.
    #[error("Circuit has {circuit} qubits but statevector has {state}")]
    WidthMismatch {
        /// Width of the circuit being executed.
        circuit: u32,
        /// Width of the statevector.
        state: usize,
    },

    /// Requested width would exceed the dense-amplitude allocation limit.
    #[error("{requested} qubits exceeds the supported maximum of {max}")]
    TooManyQubits {
        /// The requested number of qubits.
        requested: usize,
        /// The supported maximum.
        max: usize,
    },
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
