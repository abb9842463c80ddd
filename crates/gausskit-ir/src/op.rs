//! Circuit operations.

use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::gate::StandardGate;
use crate::qubit::QubitId;

/// One element of a circuit's operation list.
///
/// Circuits nest: a [`Op::Controlled`] block holds a whole sub-circuit that
/// executes only where its control wire is |1⟩. [`Circuit::flatten`] rewrites
/// nested blocks into [`Op::ControlledGate`] primitives when a consumer wants
/// a flat gate stream.
///
/// [`Circuit::flatten`]: crate::circuit::Circuit::flatten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Op {
    /// A primitive gate on a single wire.
    Gate {
        /// The gate applied.
        gate: StandardGate,
        /// The wire it acts on.
        qubit: QubitId,
    },

    /// A primitive gate applied only where every control wire is |1⟩.
    ControlledGate {
        /// Control wires, all of which must read |1⟩.
        controls: Vec<QubitId>,
        /// The gate applied.
        gate: StandardGate,
        /// The wire it acts on.
        qubit: QubitId,
    },

    /// A sub-circuit applied under a single control wire.
    Controlled {
        /// The control wire in the parent circuit.
        control: QubitId,
        /// Parent wire carrying the sub-circuit's local qubit `k` at
        /// position `k`.
        targets: Vec<QubitId>,
        /// The nested sub-circuit.
        circuit: Circuit,
    },
}

impl Op {
    /// The primitive gate, if this op carries one directly.
    #[must_use]
    pub fn gate(&self) -> Option<&StandardGate> {
        match self {
            Op::Gate { gate, .. } | Op::ControlledGate { gate, .. } => Some(gate),
            Op::Controlled { .. } => None,
        }
    }

    /// Whether this op executes under any control wire.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        match self {
            Op::Gate { .. } => false,
            Op::ControlledGate { .. } | Op::Controlled { .. } => true,
        }
    }

    /// Number of primitive gates in this op, nested blocks included.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        match self {
            Op::Gate { .. } | Op::ControlledGate { .. } => 1,
            Op::Controlled { circuit, .. } => circuit.primitive_count(),
        }
    }
}
