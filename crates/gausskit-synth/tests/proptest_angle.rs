//! Property-based tests for rotation angles and synthesised circuits.
//!
//! The lattice identities exercised here (2-periodicity in the mean and the
//! parity flip under a unit shift) follow from cos²α being the even-point
//! mass fraction of the discretized Gaussian.

use gausskit_synth::{DEFAULT_PRECISION, GaussianState, rotation_angle};
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn arb_mean() -> impl Strategy<Value = f64> {
    -4.0..4.0f64
}

fn arb_var() -> impl Strategy<Value = f64> {
    0.05..5.0f64
}

proptest! {
    /// Angles always land in [0, π/2] and are finite.
    #[test]
    fn angle_within_range(mean in arb_mean(), var in arb_var()) {
        let alpha = rotation_angle(mean, var, DEFAULT_PRECISION).unwrap();
        prop_assert!(alpha.is_finite());
        prop_assert!((0.0..=FRAC_PI_2).contains(&alpha));
    }

    /// Shifting the mean by two lattice points preserves the angle.
    #[test]
    fn angle_two_periodic_in_mean(mean in arb_mean(), var in arb_var()) {
        let base = rotation_angle(mean, var, DEFAULT_PRECISION).unwrap();
        let shifted = rotation_angle(mean + 2.0, var, DEFAULT_PRECISION).unwrap();
        prop_assert!((base - shifted).abs() < 1e-10);
    }

    /// Shifting the mean by one swaps even and odd lattice mass.
    #[test]
    fn angle_parity_flip(mean in arb_mean(), var in arb_var()) {
        let base = rotation_angle(mean, var, DEFAULT_PRECISION).unwrap();
        let flipped = rotation_angle(mean + 1.0, var, DEFAULT_PRECISION).unwrap();
        prop_assert!((base + flipped - FRAC_PI_2).abs() < 1e-10);
    }

    /// A half-integer mean splits lattice mass evenly for any variance.
    #[test]
    fn half_integer_mean_is_quarter_pi(var in arb_var()) {
        let alpha = rotation_angle(0.5, var, DEFAULT_PRECISION).unwrap();
        prop_assert!((alpha - FRAC_PI_4).abs() < 1e-12);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Synthesised circuits carry the full recursive census and only
    /// in-range rotation angles.
    #[test]
    fn circuit_census(mean in arb_mean(), var in 0.2..3.0f64, n_qubits in 1u32..=5) {
        let circuit = GaussianState::new(mean, var, n_qubits).circuit().unwrap();
        let rotations = (1usize << n_qubits) - 1;
        prop_assert_eq!(circuit.rotation_count(), rotations);
        prop_assert_eq!(circuit.gate_count("x"), rotations - 1);

        let flat = circuit.flatten();
        prop_assert_eq!(flat.num_ops(), 2 * rotations - 1);
        for op in flat.ops() {
            if let Some(theta) = op.gate().and_then(|gate| gate.angle()) {
                prop_assert!((0.0..=PI).contains(&theta));
            }
        }
    }

    /// Two syntheses of the same parameters agree structurally.
    #[test]
    fn synthesis_is_deterministic(mean in arb_mean(), var in 0.2..3.0f64, n_qubits in 1u32..=4) {
        let first = GaussianState::new(mean, var, n_qubits).circuit().unwrap();
        let second = GaussianState::new(mean, var, n_qubits).circuit().unwrap();
        prop_assert_eq!(first, second);
    }
}
