//! Kitaev rotation angles.
//!
//! The branch rotation for one recursion level is α = acos √(cos²α) with
//!
//!   cos²α = θ(μ/2, σ/2) / θ(μ, σ)
//!
//! i.e. the fraction of discretized-Gaussian mass sitting on even lattice
//! points. Both theta values carry the same e^{μ²/σ²} growth, which cancels
//! in the quotient, so the division runs at working precision and only the
//! final α is rounded to f64. A naive f64 evaluation returns ∞/∞ = NaN for
//! parameters as mild as (μ=3, σ=0.1).

use rug::Float;
use tracing::{debug, warn};

use crate::error::{SynthError, SynthResult};
use crate::theta::jacobi_theta3;

/// Clamp excesses above this size are logged at warn level.
const CLAMP_WARN_THRESHOLD: f64 = 1e-9;

/// How the angle solver treats a cos²α quotient outside [0, 1].
///
/// Round-off in the theta quotient can land a few ulp past 1 when nearly
/// all lattice mass is even (μ ≈ 0, σ ≪ 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DomainPolicy {
    /// Clamp the quotient into [0, 1] and log the excess.
    #[default]
    Clamp,
    /// Fail with [`SynthError::AngleOutOfDomain`].
    Strict,
}

/// Rotation angle α(mean, var) under the default [`DomainPolicy::Clamp`].
///
/// The result is finite and lies in [0, π/2].
pub fn rotation_angle(mean: f64, var: f64, precision: u32) -> SynthResult<f64> {
    rotation_angle_with(mean, var, precision, DomainPolicy::Clamp)
}

/// Rotation angle α(mean, var) under an explicit domain policy.
pub fn rotation_angle_with(
    mean: f64,
    var: f64,
    precision: u32,
    policy: DomainPolicy,
) -> SynthResult<f64> {
    // Halving is exact in f64, so the two evaluations share a lattice.
    let numerator = jacobi_theta3(mean / 2.0, var / 2.0, precision)?;
    let denominator = jacobi_theta3(mean, var, precision)?;
    if denominator.is_zero() {
        return Err(SynthError::ThetaDenominatorZero { mean, var });
    }

    let ratio = Float::with_val(precision, &numerator / &denominator);
    let cos_sq = constrain(ratio, mean, var, policy)?;
    Ok(cos_sq.sqrt().acos().to_f64())
}

fn constrain(ratio: Float, mean: f64, var: f64, policy: DomainPolicy) -> SynthResult<Float> {
    if ratio.is_nan() {
        return Err(SynthError::AngleOutOfDomain {
            cos_alpha_sqrd: f64::NAN,
            mean,
            var,
        });
    }
    if ratio >= 0.0 && ratio <= 1.0 {
        return Ok(ratio);
    }

    match policy {
        DomainPolicy::Strict => Err(SynthError::AngleOutOfDomain {
            cos_alpha_sqrd: ratio.to_f64(),
            mean,
            var,
        }),
        DomainPolicy::Clamp => {
            let precision = ratio.prec();
            let (clamped, excess) = if ratio > 1.0 {
                (Float::with_val(precision, 1u32), ratio.to_f64() - 1.0)
            } else {
                (Float::new(precision), -ratio.to_f64())
            };
            if excess > CLAMP_WARN_THRESHOLD {
                warn!(cos_alpha_sqrd = ratio.to_f64(), mean, var, "clamping cos²α into [0, 1]");
            } else {
                debug!(cos_alpha_sqrd = ratio.to_f64(), mean, var, "clamping cos²α into [0, 1]");
            }
            Ok(clamped)
        }
    }
}
