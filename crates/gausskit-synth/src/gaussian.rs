//! Recursive Gaussian state-preparation synthesis.
//!
//! To load the discretized Gaussian
//!
//!   P(j) ∝ Σ_t exp(-((j + 2ⁿt) - μ)² / σ²),   j ∈ [0, 2ⁿ)
//!
//! the construction rotates the top wire by 2α(μ, σ), splitting amplitude
//! between the even and odd halves of the lattice, then recurses on the
//! remaining wires with rescaled parameters: (μ/2, σ/2) on the even branch
//! and ((μ-1)/2, σ/2) on the odd branch. Each branch runs under control of
//! the top wire, with an X conjugation selecting the |0⟩ case.
//!
//! Wire n−1 therefore carries the least-significant bit of the prepared
//! value; [`basis_value`] converts a statevector index back to the lattice
//! point it holds.

use gausskit_ir::{Circuit, QubitId};
use tracing::debug;

use crate::angle::{DomainPolicy, rotation_angle_with};
use crate::error::{SynthError, SynthResult};
use crate::theta::{DEFAULT_PRECISION, check_precision};

/// Recursive Gaussian state-preparation synthesiser.
///
/// # Example
///
/// ```rust
/// use gausskit_synth::GaussianState;
///
/// let circuit = GaussianState::new(0.0, 1.0, 3).circuit().unwrap();
/// assert_eq!(circuit.num_qubits(), 3);
/// assert_eq!(circuit.rotation_count(), 7);
/// ```
pub struct GaussianState {
    mean: f64,
    var: f64,
    n_qubits: u32,
    precision: u32,
    policy: DomainPolicy,
}

impl GaussianState {
    /// Construct a synthesiser for an `n_qubits`-wire discretization of the
    /// Gaussian with the given mean and variance parameters.
    pub fn new(mean: f64, var: f64, n_qubits: u32) -> Self {
        Self {
            mean,
            var,
            n_qubits,
            precision: DEFAULT_PRECISION,
            policy: DomainPolicy::default(),
        }
    }

    /// Override the theta-series working precision, in bits.
    #[must_use]
    pub fn with_precision(mut self, bits: u32) -> Self {
        self.precision = bits;
        self
    }

    /// Override the domain policy applied to each branch angle.
    #[must_use]
    pub fn with_policy(mut self, policy: DomainPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Synthesise the state-preparation circuit.
    pub fn circuit(&self) -> SynthResult<Circuit> {
        self.validate()?;
        debug!(
            mean = self.mean,
            var = self.var,
            n_qubits = self.n_qubits,
            precision = self.precision,
            "synthesising Gaussian state-preparation circuit"
        );
        self.build(self.mean, self.var, self.n_qubits)
    }

    fn build(&self, mean: f64, var: f64, n_qubits: u32) -> SynthResult<Circuit> {
        let mut circuit = Circuit::new(format!("gaussian_{n_qubits}q"), n_qubits);
        let top = QubitId(n_qubits - 1);

        let alpha = rotation_angle_with(mean, var, self.precision, self.policy)?;
        circuit.ry(2.0 * alpha, top)?;

        if n_qubits > 1 {
            let targets: Vec<QubitId> = (0..n_qubits - 1).map(QubitId).collect();
            // Even half: values with LSB 0, lattice rescaled by 2.
            circuit.x(top)?;
            circuit.controlled(
                top,
                targets.clone(),
                self.build(mean / 2.0, var / 2.0, n_qubits - 1)?,
            )?;
            circuit.x(top)?;
            // Odd half: shift the lattice by one before rescaling.
            circuit.controlled(
                top,
                targets,
                self.build((mean - 1.0) / 2.0, var / 2.0, n_qubits - 1)?,
            )?;
        }

        Ok(circuit)
    }

    fn validate(&self) -> SynthResult<()> {
        if self.n_qubits == 0 {
            return Err(SynthError::ZeroQubits);
        }
        if !self.var.is_finite() || self.var <= 0.0 {
            return Err(SynthError::InvalidVariance(self.var));
        }
        if !self.mean.is_finite() {
            return Err(SynthError::InvalidMean(self.mean));
        }
        check_precision(self.precision)
    }
}

// ---------------------------------------------------------------------------
// Basis-order helpers
// ---------------------------------------------------------------------------

/// Lattice value held by a statevector basis index.
///
/// Statevector conventions put qubit `k` on bit `k` of the index, while the
/// prepared value keeps its least-significant bit on wire `n−1`, so the two
/// orderings are n-bit reversals of each other.
#[must_use]
pub fn basis_value(index: usize, n_qubits: u32) -> u64 {
    reverse_bits(index as u64, n_qubits)
}

/// Statevector basis index holding a lattice value. Inverse of
/// [`basis_value`].
#[must_use]
pub fn basis_index(value: u64, n_qubits: u32) -> usize {
    reverse_bits(value, n_qubits) as usize
}

fn reverse_bits(x: u64, n: u32) -> u64 {
    let mut out = 0;
    for k in 0..n {
        out = (out << 1) | ((x >> k) & 1);
    }
    out
}
