//! Integration tests against independently computed reference values.
//!
//! The constants below were produced with mpmath at 300-bit precision:
//! `re(jtheta(3, mean/(i*var**2), exp(-1/var**2)))` for theta and
//! `acos(sqrt(theta(mean/2, var/2) / theta(mean, var)))` for the angles.

use gausskit_synth::{
    DEFAULT_PRECISION, DomainPolicy, GaussianState, jacobi_theta3, rotation_angle,
};

/// (mean, var, theta)
const THETA_REFERENCES: &[(f64, f64, f64)] = &[
    (0.0, 0.5, 1.036_631_502_847_818_4),
    (0.0, 0.75, 1.339_658_831_553_512_5),
    (0.0, 1.0, 1.772_637_204_826_652_1),
    (0.0, 2.0, 3.544_907_701_811_032_2),
    (0.25, 0.5, 1.137_820_181_686_879_6),
    (0.25, 0.75, 1.485_563_231_964_814_2),
    (0.25, 1.0, 1.886_767_302_976_543_5),
    (0.25, 2.0, 3.600_731_875_265_850_2),
    (0.5, 0.5, 2.000_670_925_331_307_5),
    (0.5, 0.75, 2.057_177_620_858_016),
    (0.5, 1.0, 2.275_640_363_373_759_2),
    (0.5, 2.0, 3.773_534_605_953_087),
    (1.0, 0.5, 56.598_162_321_568_97),
    (1.0, 0.75, 7.926_350_822_329_533),
    (1.0, 1.0, 4.818_527_502_330_723),
    (1.0, 2.0, 4.551_751_588_937_494_6),
    (-0.75, 0.5, 8.407_417_152_979_818),
    (-0.75, 0.75, 3.613_521_819_384_386_6),
    (-0.75, 1.0, 3.110_753_385_278_940_6),
    (-0.75, 2.0, 4.080_163_754_365_910_8),
];

/// (mean, var, alpha)
const ANGLE_REFERENCES: &[(f64, f64, f64)] = &[
    (0.0, 1.0, 0.700_190_130_928_083_2),
    (0.0, 0.5, 0.189_106_039_660_674_88),
    (0.0, 2.0, 0.785_346_440_211_152_3),
    (0.0, 0.25, 4.744_157_624_567_463e-4),
    (0.5, 1.0, 0.785_398_163_397_448_3),
    (1.0, 2.0, 0.785_449_886_583_744_4),
    (-0.25, 0.5, 0.355_463_121_718_876_3),
    (0.3, 0.8, 0.662_866_930_271_222_3),
    (3.0, 0.1, 1.570_796_326_794_896_6),
];

#[test]
fn theta_matches_references() {
    for &(mean, var, expected) in THETA_REFERENCES {
        let theta = jacobi_theta3(mean, var, DEFAULT_PRECISION).unwrap().to_f64();
        let rel = ((theta - expected) / expected).abs();
        assert!(
            rel < 1e-10,
            "theta({mean}, {var}) = {theta}, expected {expected}, rel {rel}"
        );
    }
}

#[test]
fn angle_matches_references() {
    for &(mean, var, expected) in ANGLE_REFERENCES {
        let alpha = rotation_angle(mean, var, DEFAULT_PRECISION).unwrap();
        assert!(
            (alpha - expected).abs() < 1e-12,
            "alpha({mean}, {var}) = {alpha}, expected {expected}"
        );
    }
}

#[test]
fn single_qubit_rotation_for_standard_normal() {
    let circuit = GaussianState::new(0.0, 1.0, 1).circuit().unwrap();
    let flat = circuit.flatten();
    assert_eq!(flat.num_ops(), 1);

    let theta = flat.ops()[0]
        .gate()
        .and_then(gausskit_ir::StandardGate::angle)
        .unwrap();
    assert!((theta - 1.400_380_261_856_166_5).abs() < 1e-12);
}

#[test]
fn three_qubit_flattened_census() {
    let circuit = GaussianState::new(0.0, 1.0, 3).circuit().unwrap();
    let flat = circuit.flatten();
    assert_eq!(circuit.rotation_count(), 7);
    assert_eq!(circuit.gate_count("x"), 6);
    assert_eq!(flat.num_ops(), 13);
}

#[test]
fn strict_policy_handles_full_recursion() {
    // Every branch quotient for these parameters sits inside [0, 1], so the
    // strict policy must synthesise the same circuit as the default.
    let strict = GaussianState::new(0.0, 1.0, 4)
        .with_policy(DomainPolicy::Strict)
        .circuit()
        .unwrap();
    let clamped = GaussianState::new(0.0, 1.0, 4).circuit().unwrap();
    assert_eq!(strict, clamped);
}

#[test]
fn raised_precision_refines_consistently() {
    let coarse = GaussianState::new(0.3, 0.8, 2)
        .with_precision(64)
        .circuit()
        .unwrap();
    let fine = GaussianState::new(0.3, 0.8, 2)
        .with_precision(512)
        .circuit()
        .unwrap();

    let angles = |circuit: &gausskit_ir::Circuit| -> Vec<f64> {
        circuit
            .flatten()
            .ops()
            .iter()
            .filter_map(|op| op.gate().and_then(gausskit_ir::StandardGate::angle))
            .collect()
    };
    for (a, b) in angles(&coarse).iter().zip(angles(&fine)) {
        assert!((a - b).abs() < 1e-12);
    }
}
