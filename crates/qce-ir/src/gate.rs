//! Gate kinds and their fixed unitary tables.

use ndarray::array;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

use crate::linalg::{Matrix, identity};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// The gates the simulator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    // Single-qubit gates
    /// Hadamard gate.
    Hadamard,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Phase gate S = diag(1, i).
    Phase,

    // Two-qubit gates
    /// Controlled-NOT.
    Cnot,
    /// SWAP; the "control" qubit is the second swapped qubit.
    Swap,
    /// Controlled-Z.
    Cz,
    /// Controlled phase with a fixed phase of i on |11⟩.
    Cphase,

    // Three-qubit gates
    /// Toffoli (CCNOT): two controls, one target.
    Toffoli,
    /// Fredkin (CSWAP): one control, two targets. Not constructible yet.
    Fredkin,
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Hadamard => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::Phase => "s",
            GateKind::Cnot => "cnot",
            GateKind::Swap => "swap",
            GateKind::Cz => "cz",
            GateKind::Cphase => "cphase",
            GateKind::Toffoli => "toffoli",
            GateKind::Fredkin => "fredkin",
        }
    }

    /// Number of control qubits this gate takes.
    #[inline]
    pub fn num_controls(&self) -> usize {
        match self {
            GateKind::Hadamard | GateKind::X | GateKind::Y | GateKind::Z | GateKind::Phase => 0,
            GateKind::Cnot | GateKind::Swap | GateKind::Cz | GateKind::Cphase => 1,
            GateKind::Toffoli => 2,
            GateKind::Fredkin => 1,
        }
    }

    /// Total number of qubits the gate acts on.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        match self {
            GateKind::Fredkin => 3,
            other => other.num_controls() + 1,
        }
    }

    /// Whether this is a single-qubit gate.
    #[inline]
    pub fn is_single_qubit(&self) -> bool {
        self.num_qubits() == 1
    }

    /// Whether the gate's full matrix is diagonal in the computational basis.
    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            GateKind::Z | GateKind::Phase | GateKind::Cz | GateKind::Cphase
        )
    }

    /// The gate's own `2^k × 2^k` unitary, with qubits ordered controls first,
    /// then target (for Fredkin: control, then the two swapped qubits).
    pub fn base_matrix(&self) -> Matrix {
        let h = FRAC_1_SQRT_2;
        match self {
            GateKind::Hadamard => array![
                [Complex64::new(h, 0.0), Complex64::new(h, 0.0)],
                [Complex64::new(h, 0.0), Complex64::new(-h, 0.0)]
            ],
            GateKind::X => array![[ZERO, ONE], [ONE, ZERO]],
            GateKind::Y => array![[ZERO, -I], [I, ZERO]],
            GateKind::Z => array![[ONE, ZERO], [ZERO, -ONE]],
            GateKind::Phase => array![[ONE, ZERO], [ZERO, I]],
            GateKind::Cnot => array![
                [ONE, ZERO, ZERO, ZERO],
                [ZERO, ONE, ZERO, ZERO],
                [ZERO, ZERO, ZERO, ONE],
                [ZERO, ZERO, ONE, ZERO]
            ],
            GateKind::Swap => array![
                [ONE, ZERO, ZERO, ZERO],
                [ZERO, ZERO, ONE, ZERO],
                [ZERO, ONE, ZERO, ZERO],
                [ZERO, ZERO, ZERO, ONE]
            ],
            GateKind::Cz => array![
                [ONE, ZERO, ZERO, ZERO],
                [ZERO, ONE, ZERO, ZERO],
                [ZERO, ZERO, ONE, ZERO],
                [ZERO, ZERO, ZERO, -ONE]
            ],
            GateKind::Cphase => array![
                [ONE, ZERO, ZERO, ZERO],
                [ZERO, ONE, ZERO, ZERO],
                [ZERO, ZERO, ONE, ZERO],
                [ZERO, ZERO, ZERO, I]
            ],
            GateKind::Toffoli => {
                let mut m = identity(8);
                m[[6, 6]] = ZERO;
                m[[7, 7]] = ZERO;
                m[[6, 7]] = ONE;
                m[[7, 6]] = ONE;
                m
            }
            GateKind::Fredkin => {
                let mut m = identity(8);
                m[[5, 5]] = ZERO;
                m[[6, 6]] = ZERO;
                m[[5, 6]] = ONE;
                m[[6, 5]] = ONE;
                m
            }
        }
    }
}
