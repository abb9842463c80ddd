//! Circuit construction and flattening.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CircuitError, CircuitResult};
use crate::gate::StandardGate;
use crate::op::Op;
use crate::qubit::QubitId;

/// An ordered list of operations over a fixed set of wires.
///
/// Built through chainable methods that validate wire indices as they go,
/// so a constructed circuit never references a wire outside its width at
/// any nesting depth.
///
/// # Example
///
/// ```rust
/// use gausskit_ir::{Circuit, QubitId};
///
/// let mut inner = Circuit::new("inner", 1);
/// inner.ry(0.25, QubitId(0)).unwrap();
///
/// let mut circuit = Circuit::new("outer", 2);
/// circuit.x(QubitId(1)).unwrap();
/// circuit.controlled(QubitId(1), vec![QubitId(0)], inner).unwrap();
///
/// assert_eq!(circuit.num_ops(), 2);
/// assert_eq!(circuit.rotation_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    name: String,
    width: u32,
    ops: Vec<Op>,
}

impl Circuit {
    /// Create an empty circuit over `width` wires.
    pub fn new(name: impl Into<String>, width: u32) -> Self {
        Circuit {
            name: name.into(),
            width,
            ops: Vec::new(),
        }
    }

    /// Circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of wires.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of wires (alias used by executor-facing code).
    pub fn num_qubits(&self) -> u32 {
        self.width
    }

    /// Top-level operations, in program order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Number of top-level operations.
    pub fn num_ops(&self) -> usize {
        self.ops.len()
    }

    /// Whether the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    // ------------------------------------------------------------------
    // Builder methods
    // ------------------------------------------------------------------

    /// Append a primitive gate on `qubit`.
    pub fn gate(&mut self, gate: StandardGate, qubit: QubitId) -> CircuitResult<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(Op::Gate { gate, qubit });
        Ok(self)
    }

    /// Append a Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> CircuitResult<&mut Self> {
        self.gate(StandardGate::X, qubit)
    }

    /// Append a Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> CircuitResult<&mut Self> {
        self.gate(StandardGate::H, qubit)
    }

    /// Append a Y-axis rotation by `theta` radians.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> CircuitResult<&mut Self> {
        self.gate(StandardGate::Ry(theta), qubit)
    }

    /// Append a Z-axis rotation by `theta` radians.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> CircuitResult<&mut Self> {
        self.gate(StandardGate::Rz(theta), qubit)
    }

    /// Append a primitive gate applied under a set of control wires.
    pub fn controlled_gate(
        &mut self,
        controls: Vec<QubitId>,
        gate: StandardGate,
        qubit: QubitId,
    ) -> CircuitResult<&mut Self> {
        for &control in &controls {
            self.check_qubit(control)?;
        }
        self.check_qubit(qubit)?;
        check_distinct(controls.iter().copied().chain([qubit]))?;
        self.ops.push(Op::ControlledGate {
            controls,
            gate,
            qubit,
        });
        Ok(self)
    }

    /// Append `circuit` as a controlled block: it executes only where
    /// `control` reads |1⟩, with its local qubit `k` living on
    /// `targets[k]`.
    pub fn controlled(
        &mut self,
        control: QubitId,
        targets: Vec<QubitId>,
        circuit: Circuit,
    ) -> CircuitResult<&mut Self> {
        self.check_qubit(control)?;
        for &target in &targets {
            self.check_qubit(target)?;
        }
        if circuit.width as usize != targets.len() {
            return Err(CircuitError::TargetCountMismatch {
                expected: circuit.width,
                got: u32::try_from(targets.len()).unwrap_or(u32::MAX),
            });
        }
        check_distinct(targets.iter().copied().chain([control]))?;
        self.ops.push(Op::Controlled {
            control,
            targets,
            circuit,
        });
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Census
    // ------------------------------------------------------------------

    /// Number of primitive gates named `name`, nested blocks included.
    pub fn gate_count(&self, name: &str) -> usize {
        self.ops
            .iter()
            .map(|op| match op {
                Op::Gate { gate, .. } | Op::ControlledGate { gate, .. } => {
                    usize::from(gate.name() == name)
                }
                Op::Controlled { circuit, .. } => circuit.gate_count(name),
            })
            .sum()
    }

    /// Number of angle-carrying rotations, nested blocks included.
    pub fn rotation_count(&self) -> usize {
        self.ops
            .iter()
            .map(|op| match op {
                Op::Gate { gate, .. } | Op::ControlledGate { gate, .. } => {
                    usize::from(gate.is_rotation())
                }
                Op::Controlled { circuit, .. } => circuit.rotation_count(),
            })
            .sum()
    }

    /// Total number of primitive gates, nested blocks included.
    pub fn primitive_count(&self) -> usize {
        self.ops.iter().map(Op::primitive_count).sum()
    }

    // ------------------------------------------------------------------
    // Flattening
    // ------------------------------------------------------------------

    /// Rewrite every nested controlled block into flat
    /// [`Op::ControlledGate`] primitives on this circuit's wires.
    ///
    /// Accumulated control sets compose: a gate two blocks deep comes out
    /// controlled on both block controls. Program order and primitive-gate
    /// count are preserved, and flattening an already-flat circuit returns
    /// an equal circuit.
    #[must_use]
    pub fn flatten(&self) -> Circuit {
        let mut flat = Circuit::new(self.name.clone(), self.width);
        let identity: Vec<QubitId> = (0..self.width).map(QubitId).collect();
        self.flatten_into(&mut flat, &[], &identity);
        flat
    }

    fn flatten_into(&self, out: &mut Circuit, controls: &[QubitId], map: &[QubitId]) {
        for op in &self.ops {
            match op {
                Op::Gate { gate, qubit } => {
                    let wire = map[qubit.index()];
                    if controls.is_empty() {
                        out.ops.push(Op::Gate { gate: *gate, qubit: wire });
                    } else {
                        out.ops.push(Op::ControlledGate {
                            controls: controls.to_vec(),
                            gate: *gate,
                            qubit: wire,
                        });
                    }
                }
                Op::ControlledGate {
                    controls: local,
                    gate,
                    qubit,
                } => {
                    let mut all = controls.to_vec();
                    all.extend(local.iter().map(|c| map[c.index()]));
                    out.ops.push(Op::ControlledGate {
                        controls: all,
                        gate: *gate,
                        qubit: map[qubit.index()],
                    });
                }
                Op::Controlled {
                    control,
                    targets,
                    circuit,
                } => {
                    let mut all = controls.to_vec();
                    all.push(map[control.index()]);
                    let sub_map: Vec<QubitId> =
                        targets.iter().map(|t| map[t.index()]).collect();
                    circuit.flatten_into(out, &all, &sub_map);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    fn check_qubit(&self, qubit: QubitId) -> CircuitResult<()> {
        if qubit.0 >= self.width {
            return Err(CircuitError::QubitOutOfRange {
                qubit,
                width: self.width,
            });
        }
        Ok(())
    }
}

fn check_distinct(qubits: impl IntoIterator<Item = QubitId>) -> CircuitResult<()> {
    let mut seen: Vec<QubitId> = Vec::new();
    for qubit in qubits {
        if seen.contains(&qubit) {
            return Err(CircuitError::DuplicateQubit { qubit });
        }
        seen.push(qubit);
    }
    Ok(())
}

fn format_gate(gate: &StandardGate) -> String {
    match gate.angle() {
        Some(theta) => format!("{}({theta})", gate.name()),
        None => gate.name().to_string(),
    }
}

fn wire_list(wires: &[QubitId]) -> String {
    wires
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_ops(f: &mut fmt::Formatter<'_>, ops: &[Op], indent: usize) -> fmt::Result {
    for op in ops {
        write!(f, "{}", "  ".repeat(indent))?;
        match op {
            Op::Gate { gate, qubit } => writeln!(f, "{} {qubit};", format_gate(gate))?,
            Op::ControlledGate {
                controls,
                gate,
                qubit,
            } => writeln!(
                f,
                "ctrl [{}] {} {qubit};",
                wire_list(controls),
                format_gate(gate)
            )?,
            Op::Controlled {
                control,
                targets,
                circuit,
            } => {
                writeln!(f, "ctrl {control} -> [{}] {{", wire_list(targets))?;
                write_ops(f, circuit.ops(), indent + 1)?;
                writeln!(f, "{}}}", "  ".repeat(indent))?;
            }
        }
    }
    Ok(())
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "circuit {} ({} qubits) {{", self.name, self.width)?;
        write_ops(f, &self.ops, 1)?;
        write!(f, "}}")
    }
}
