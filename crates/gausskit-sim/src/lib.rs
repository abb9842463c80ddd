//! Gausskit Statevector Simulation
//!
//! Dense amplitude-vector execution of Gausskit circuits, used to verify
//! synthesised state preparations and to back the demo tooling. Nested
//! controlled blocks run directly against a control bitmask, so circuits
//! never need flattening before execution.
//!
//! # Example
//!
//! ```rust
//! use gausskit_ir::{Circuit, QubitId};
//! use gausskit_sim::Statevector;
//!
//! let mut circuit = Circuit::new("split", 1);
//! circuit.h(QubitId(0)).unwrap();
//!
//! let state = Statevector::from_circuit(&circuit).unwrap();
//! assert!((state.probability(0) - 0.5).abs() < 1e-12);
//! assert!((state.probability(1) - 0.5).abs() < 1e-12);
//! ```

pub mod error;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use statevector::{MAX_QUBITS, Statevector};
