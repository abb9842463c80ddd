//! Jacobi theta-function evaluation.
//!
//! The Gaussian construction needs θ₃ at a purely imaginary argument:
//!
//!   θ(μ, σ) = θ₃(μ / (iσ²), e^{-1/σ²})
//!           = 1 + 2 Σ_{n≥1} e^{-n²/σ²} cosh(2nμ/σ²)
//!
//! which is real and ≥ 1 for every finite μ and σ ≠ 0. The series is summed
//! in MPFR floats because its terms grow like e^{μ²/σ²} before the quotient
//! taken in the angle solver cancels that factor: (μ=3, σ=0.1) already peaks
//! near e^{900}, far outside f64 range.

use rug::Float;
use tracing::trace;

use crate::error::{SynthError, SynthResult};

/// Default working precision for theta evaluation, in bits.
pub const DEFAULT_PRECISION: u32 = 128;

pub(crate) const MIN_PRECISION: u32 = 8;
pub(crate) const MAX_PRECISION: u32 = 1 << 24;

/// Hard cap on series terms before reporting non-convergence.
const MAX_TERMS: u32 = 60_000;

pub(crate) fn check_precision(bits: u32) -> SynthResult<()> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&bits) {
        return Err(SynthError::InvalidPrecision { bits });
    }
    Ok(())
}

/// Evaluate θ(mean, var) at `precision` bits.
///
/// Terms are accumulated with an incremental recurrence for `q^(n²)`
/// (`q^(n²) = q^((n-1)²) · q^(2n-1)`). Summation stops at the first term
/// past the magnitude peak near `n = |mean|` that falls below the running
/// sum by more than the working precision, and fails with
/// [`SynthError::ThetaConvergence`] if that never happens within the term
/// limit.
///
/// # Example
///
/// ```rust
/// use gausskit_synth::theta::jacobi_theta3;
///
/// let theta = jacobi_theta3(0.0, 1.0, 128).unwrap();
/// assert!((theta.to_f64() - 1.772_637_204_826_652_1).abs() < 1e-12);
/// ```
pub fn jacobi_theta3(mean: f64, var: f64, precision: u32) -> SynthResult<Float> {
    check_precision(precision)?;
    if var == 0.0 {
        return Err(SynthError::ZeroVariance);
    }

    // 1/σ², q = e^{-1/σ²}, w = 2μ/σ².
    let inv_var_sq = Float::with_val(precision, var).square().recip();
    let q = Float::with_val(precision, -&inv_var_sq).exp();
    let w = Float::with_val(precision, 2.0 * mean) * &inv_var_sq;

    let q_sq = Float::with_val(precision, &q * &q);
    let mut q_pow = q.clone();
    let mut q_step = Float::with_val(precision, &q_sq * &q);

    let mut series = Float::new(precision);
    let eps = Float::with_val(precision, 1u32) >> (precision + 8);
    // Terms grow until n ≈ |μ|; only test for convergence past the peak.
    let peak = (mean.abs().ceil() as u32).saturating_add(1);
    let mut converged = false;

    for n in 1..=MAX_TERMS {
        let term = Float::with_val(precision, &w * n).cosh() * &q_pow;
        series += &term;
        if n >= peak && term < Float::with_val(precision, &series * &eps) {
            trace!(mean, var, terms = n, "theta series converged");
            converged = true;
            break;
        }
        q_pow *= &q_step;
        q_step *= &q_sq;
    }

    if !converged {
        return Err(SynthError::ThetaConvergence {
            mean,
            var,
            terms: MAX_TERMS,
        });
    }

    Ok(Float::with_val(precision, &series * 2u32) + 1u32)
}
