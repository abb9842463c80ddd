//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// Single-qubit gates with known semantics.
///
/// Gausskit circuits are built from a deliberately small vocabulary: the
/// recursive Gaussian construction only needs `Ry` and `X`, with `H` and `Rz`
/// rounding out the set for superposition seeding and phase work in consumers.
/// Rotation angles are concrete `f64` radians; there is no symbolic-parameter
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Pauli-X gate.
    X,
    /// Hadamard gate.
    H,
    /// Rotation around the Y axis.
    Ry(f64),
    /// Rotation around the Z axis.
    Rz(f64),
}

impl StandardGate {
    /// Lowercase gate mnemonic, as used in the textual listing.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::H => "h",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
        }
    }

    /// The rotation angle in radians, if this gate carries one.
    #[must_use]
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::Ry(theta) | StandardGate::Rz(theta) => Some(*theta),
            StandardGate::X | StandardGate::H => None,
        }
    }

    /// Whether this gate is an angle-carrying rotation.
    #[must_use]
    pub fn is_rotation(&self) -> bool {
        self.angle().is_some()
    }
}
