//! Gausskit Circuit Intermediate Representation
//!
//! Core data structures for the circuits produced by the Gausskit
//! synthesiser and consumed by its executors.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered operation list over a fixed set of wires.
//! Unlike flat gate streams, the op list nests: [`Op::Controlled`] holds a
//! whole sub-circuit under a control wire, which is the natural shape of
//! recursively synthesised state-preparation routines. Consumers that want
//! plain multi-controlled primitives call [`Circuit::flatten`].
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing wires
//! - **Gates**: [`StandardGate`] for the X / H / Ry / Rz vocabulary
//! - **Operations**: [`Op`] for plain, controlled, and nested elements
//! - **Circuit**: [`Circuit`] validating builder, census, flattening,
//!   textual listing
//!
//! # Example
//!
//! ```rust
//! use gausskit_ir::{Circuit, QubitId};
//!
//! // One wire of a rotation, applied under a control.
//! let mut inner = Circuit::new("half", 1);
//! inner.ry(0.7, QubitId(0)).unwrap();
//!
//! let mut circuit = Circuit::new("prep", 2);
//! circuit.ry(1.4, QubitId(1)).unwrap();
//! circuit.x(QubitId(1)).unwrap();
//! circuit.controlled(QubitId(1), vec![QubitId(0)], inner).unwrap();
//!
//! assert_eq!(circuit.rotation_count(), 2);
//! assert_eq!(circuit.flatten().num_ops(), 3);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod op;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{CircuitError, CircuitResult};
pub use gate::StandardGate;
pub use op::Op;
pub use qubit::QubitId;
