//! Dense statevector execution.
//!
//! Runs nested circuits directly: every block contributes its control wire
//! to a bitmask and a local-to-global wire map, so controlled sub-circuits
//! execute without being flattened first. Gate kernels update amplitude
//! pairs in place, touching only indices whose control bits are all set.

use gausskit_ir::{Circuit, Op, StandardGate};
use num_complex::Complex64;
use rand::Rng;
use tracing::debug;

use crate::error::{SimError, SimResult};

/// Widest circuit the dense representation will allocate (2²⁶ amplitudes,
/// one gigabyte).
pub const MAX_QUBITS: usize = 26;

/// A dense complex amplitude vector over `2^n` basis states.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Run `circuit` on a fresh |0...0⟩ state.
    pub fn from_circuit(circuit: &Circuit) -> SimResult<Self> {
        let mut state = Self::new(circuit.num_qubits() as usize)?;
        state.run(circuit)?;
        Ok(state)
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The raw amplitudes, indexed with qubit `k` on bit `k`.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Execute every operation of `circuit` in order.
    pub fn run(&mut self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() as usize != self.num_qubits {
            return Err(SimError::WidthMismatch {
                circuit: circuit.num_qubits(),
                state: self.num_qubits,
            });
        }
        debug!(
            circuit = circuit.name(),
            num_qubits = self.num_qubits,
            ops = circuit.num_ops(),
            "executing circuit"
        );
        let identity: Vec<usize> = (0..self.num_qubits).collect();
        self.apply_ops(circuit, 0, &identity);
        Ok(())
    }

    fn apply_ops(&mut self, circuit: &Circuit, ctrl_mask: usize, wires: &[usize]) {
        for op in circuit.ops() {
            match op {
                Op::Gate { gate, qubit } => {
                    self.apply_gate(gate, wires[qubit.index()], ctrl_mask);
                }
                Op::ControlledGate {
                    controls,
                    gate,
                    qubit,
                } => {
                    let mut mask = ctrl_mask;
                    for control in controls {
                        mask |= 1 << wires[control.index()];
                    }
                    self.apply_gate(gate, wires[qubit.index()], mask);
                }
                Op::Controlled {
                    control,
                    targets,
                    circuit: sub,
                } => {
                    let mask = ctrl_mask | (1 << wires[control.index()]);
                    let sub_wires: Vec<usize> =
                        targets.iter().map(|t| wires[t.index()]).collect();
                    self.apply_ops(sub, mask, &sub_wires);
                }
            }
        }
    }

    fn apply_gate(&mut self, gate: &StandardGate, target: usize, ctrl_mask: usize) {
        match *gate {
            StandardGate::X => self.apply_x(target, ctrl_mask),
            StandardGate::H => self.apply_h(target, ctrl_mask),
            StandardGate::Ry(theta) => self.apply_ry(target, theta, ctrl_mask),
            StandardGate::Rz(theta) => self.apply_rz(target, theta, ctrl_mask),
        }
    }

    fn apply_x(&mut self, qubit: usize, ctrl_mask: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 && i & ctrl_mask == ctrl_mask {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_h(&mut self, qubit: usize, ctrl_mask: usize) {
        let mask = 1 << qubit;
        let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 && i & ctrl_mask == ctrl_mask {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = inv_sqrt2 * (a + b);
                self.amplitudes[j] = inv_sqrt2 * (a - b);
            }
        }
    }

    fn apply_ry(&mut self, qubit: usize, theta: f64, ctrl_mask: usize) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 && i & ctrl_mask == ctrl_mask {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a - s * b;
                self.amplitudes[j] = s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64, ctrl_mask: usize) {
        let mask = 1 << qubit;
        let phase0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 && i & ctrl_mask == ctrl_mask {
                let j = i | mask;
                self.amplitudes[i] *= phase0;
                self.amplitudes[j] *= phase1;
            }
        }
    }

    /// Measurement probability of one basis state.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// Measurement probabilities over all basis states.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Sum of all probabilities; 1 within round-off for unitary circuits.
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Sample one measurement outcome in the computational basis.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }
        // Fallback (shouldn't happen with normalized states)
        self.amplitudes.len() - 1
    }
}
