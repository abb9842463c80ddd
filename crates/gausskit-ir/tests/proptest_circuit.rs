//! Property-based tests for circuit construction and flattening.
//!
//! Strategy: generate random circuits (flat streams plus one nested
//! controlled block) and check the structural invariants flattening and
//! serialization must preserve.

use gausskit_ir::{Circuit, QubitId, StandardGate};
use proptest::prelude::*;

/// A single random gate application.
#[derive(Debug, Clone)]
enum GateOp {
    X(u32),
    H(u32),
    Ry(f64, u32),
    Rz(f64, u32),
}

impl GateOp {
    fn apply(&self, circuit: &mut Circuit) {
        match self {
            GateOp::X(q) => {
                circuit.x(QubitId(*q)).unwrap();
            }
            GateOp::H(q) => {
                circuit.h(QubitId(*q)).unwrap();
            }
            GateOp::Ry(theta, q) => {
                circuit.ry(*theta, QubitId(*q)).unwrap();
            }
            GateOp::Rz(theta, q) => {
                circuit.rz(*theta, QubitId(*q)).unwrap();
            }
        }
    }
}

fn arb_gate_op(width: u32) -> impl Strategy<Value = GateOp> {
    let angle = -10.0..10.0f64;
    prop_oneof![
        (0..width).prop_map(GateOp::X),
        (0..width).prop_map(GateOp::H),
        (angle.clone(), 0..width).prop_map(|(theta, q)| GateOp::Ry(theta, q)),
        (angle, 0..width).prop_map(|(theta, q)| GateOp::Rz(theta, q)),
    ]
}

fn arb_flat_circuit(width: u32, max_len: usize) -> impl Strategy<Value = Circuit> {
    prop::collection::vec(arb_gate_op(width), 0..=max_len).prop_map(move |ops| {
        let mut circuit = Circuit::new("flat", width);
        for op in &ops {
            op.apply(&mut circuit);
        }
        circuit
    })
}

/// A circuit with one controlled block nesting a narrower sub-circuit.
fn arb_nested_circuit() -> impl Strategy<Value = Circuit> {
    (2u32..=5).prop_flat_map(|width| {
        (arb_flat_circuit(width, 6), arb_flat_circuit(width - 1, 6)).prop_map(
            move |(mut outer, inner)| {
                let targets: Vec<QubitId> = (0..width - 1).map(QubitId).collect();
                outer.controlled(QubitId(width - 1), targets, inner).unwrap();
                outer
            },
        )
    })
}

proptest! {
    /// Flattening never changes what gates the circuit contains.
    #[test]
    fn flatten_preserves_census(circuit in arb_nested_circuit()) {
        let flat = circuit.flatten();
        prop_assert_eq!(flat.primitive_count(), circuit.primitive_count());
        prop_assert_eq!(flat.rotation_count(), circuit.rotation_count());
        prop_assert_eq!(flat.gate_count("x"), circuit.gate_count("x"));
        prop_assert_eq!(flat.gate_count("h"), circuit.gate_count("h"));
    }

    /// A flat circuit is a fixed point of flattening.
    #[test]
    fn flatten_is_idempotent(circuit in arb_nested_circuit()) {
        let flat = circuit.flatten();
        prop_assert_eq!(flat.flatten(), flat);
    }

    /// Flat circuits have one op per primitive gate.
    #[test]
    fn flatten_ops_equal_primitives(circuit in arb_nested_circuit()) {
        let flat = circuit.flatten();
        prop_assert_eq!(flat.num_ops(), flat.primitive_count());
    }

    /// JSON serialization round-trips nested circuits exactly.
    #[test]
    fn serde_round_trip(circuit in arb_nested_circuit()) {
        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, circuit);
    }

    /// The builder rejects any wire at or past the declared width.
    #[test]
    fn builder_rejects_out_of_range(width in 1u32..8, excess in 0u32..4) {
        let mut circuit = Circuit::new("bounds", width);
        prop_assert!(circuit.x(QubitId(width + excess)).is_err());
        prop_assert!(circuit
            .gate(StandardGate::Ry(0.1), QubitId(width + excess))
            .is_err());
        prop_assert!(circuit.is_empty());
    }
}
