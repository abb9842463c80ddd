//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors raised while constructing circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// Operation references a wire outside the circuit.
    #[error("Qubit {qubit} out of range for circuit of width {width}")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the circuit being built.
        width: u32,
    },

    /// The same wire appears twice in one operation.
    #[error("Duplicate qubit {qubit} in operation")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
    },

    /// A controlled block's target list does not match the sub-circuit width.
    #[error("Controlled block expects {expected} target qubits, got {got}")]
    TargetCountMismatch {
        /// Width of the nested sub-circuit.
        expected: u32,
        /// Number of target wires supplied.
        got: u32,
    },
}

/// Result type for IR operations.
pub type CircuitResult<T> = Result<T, CircuitError>;
