//! Gausskit Synthesis
//!
//! Kitaev-Webb synthesis of circuits preparing discretized single-variate
//! Gaussian states, built from three layers:
//!
//! - **Theta**: [`jacobi_theta3`] sums θ₃ at a purely imaginary argument in
//!   MPFR floats, where the series' e^{μ²/σ²} term growth is representable.
//! - **Angle**: [`rotation_angle`] turns a theta quotient into the branch
//!   rotation α = acos √(θ(μ/2, σ/2) / θ(μ, σ)), with an explicit
//!   [`DomainPolicy`] for quotients that round-off pushes outside [0, 1].
//! - **Circuit**: [`GaussianState`] recursively assembles the preparation
//!   circuit, one rotation plus two controlled half-lattice branches per
//!   wire.
//!
//! # Example
//!
//! ```rust
//! use gausskit_synth::GaussianState;
//!
//! // Three-wire discretization of the standard normal.
//! let circuit = GaussianState::new(0.0, 1.0, 3).circuit().unwrap();
//! assert_eq!(circuit.rotation_count(), 7);
//!
//! // Wire 2 carries the least-significant bit of the prepared value.
//! assert_eq!(gausskit_synth::basis_value(0b001, 3), 0b100);
//! ```

pub mod angle;
pub mod error;
pub mod gaussian;
pub mod theta;

pub use angle::{DomainPolicy, rotation_angle, rotation_angle_with};
pub use error::{SynthError, SynthResult};
pub use gaussian::{GaussianState, basis_index, basis_value};
pub use theta::{DEFAULT_PRECISION, jacobi_theta3};
