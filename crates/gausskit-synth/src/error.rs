//! Error types for the synthesis crate.

use thiserror::Error;

/// Errors produced by theta evaluation and circuit synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Variance parameter is exactly zero, so 1/var² is undefined.
    #[error("Variance must be nonzero")]
    ZeroVariance,

    /// Variance parameter is unusable for state preparation.
    #[error("Variance must be positive and finite, got {0}")]
    InvalidVariance(f64),

    /// Mean parameter is not a finite number.
    #[error("Mean must be finite, got {0}")]
    InvalidMean(f64),

    /// State preparation needs at least one qubit.
    #[error("n_qubits must be at least 1")]
    ZeroQubits,

    /// Working precision outside the supported range (8..=2²⁴ bits).
    #[error("Precision of {bits} bits is outside the supported range")]
    InvalidPrecision {
        /// The requested precision in bits.
        bits: u32,
    },

    /// Theta series failed to converge within the term limit.
    #[error("Theta series for (mean={mean}, var={var}) did not converge after {terms} terms")]
    ThetaConvergence {
        /// Mean parameter of the failing evaluation.
        mean: f64,
        /// Variance parameter of the failing evaluation.
        var: f64,
        /// Number of terms summed before giving up.
        terms: u32,
    },

    /// Theta quotient denominator evaluated to zero.
    #[error("Theta denominator is zero for (mean={mean}, var={var})")]
    ThetaDenominatorZero {
        /// Mean parameter of the failing evaluation.
        mean: f64,
        /// Variance parameter of the failing evaluation.
        var: f64,
    },

    /// cos²α landed outside [0, 1] under the strict domain policy, or was
    /// not a number under any policy.
    #[error("cos²α = {cos_alpha_sqrd} outside [0, 1] for (mean={mean}, var={var})")]
    AngleOutOfDomain {
        /// The offending quotient value, rounded to f64.
        cos_alpha_sqrd: f64,
        /// Mean parameter of the failing evaluation.
        mean: f64,
        /// Variance parameter of the failing evaluation.
        var: f64,
    },

    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Circuit(#[from] gausskit_ir::CircuitError),
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
