//! Gate operations: full-register unitary construction.
//!
//! A [`GateOperation`] fixes a gate kind, its target and control qubits and
//! the qubit ordering that maps qubits to bits of a basis index. From these it
//! builds the `2^n × 2^n` matrix acting on the whole register.
//!
//! Single-qubit gates are built as an iterated Kronecker product over the
//! ordering, with the gate's 2×2 matrix at the target's position and the
//! identity elsewhere. Controlled gates are written directly in the `2^n`
//! basis from the bit weights of their qubits, without intermediate tensor
//! products.

use num_complex::Complex64;
use rustc_hash::FxHashSet;

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::linalg::{Matrix, identity, kron};
use crate::ordering::QubitOrdering;
use crate::qubit::{QubitId, QubitState};
use crate::state::StateVector;

/// One gate applied to a register under a fixed qubit ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct GateOperation {
    kind: GateKind,
    target: QubitId,
    controls: Vec<QubitId>,
    ordering: QubitOrdering,
}

impl GateOperation {
    /// Create a gate operation.
    ///
    /// # Errors
    ///
    /// - [`IrError::NotImplemented`] for multi-target gates (Fredkin).
    /// - [`IrError::ControlArity`] when the number of controls does not match
    ///   the gate kind (none for single-qubit gates).
    /// - [`IrError::QubitNotInOrdering`] when the target or a control is not
    ///   part of the ordering.
    /// - [`IrError::DuplicateQubit`] when a qubit is used twice.
    pub fn new(
        kind: GateKind,
        target: QubitId,
        controls: impl IntoIterator<Item = QubitId>,
        ordering: QubitOrdering,
    ) -> IrResult<Self> {
        if kind == GateKind::Fredkin {
            return Err(IrError::NotImplemented(
                "multi-target gate 'fredkin'".into(),
            ));
        }

        let controls: Vec<QubitId> = controls.into_iter().collect();
        let gate_name = kind.name();
        if controls.len() != kind.num_controls() {
            return Err(IrError::ControlArity {
                gate_name,
                expected: kind.num_controls(),
                got: controls.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &qubit in std::iter::once(&target).chain(&controls) {
            if ordering.position(qubit).is_none() {
                return Err(IrError::QubitNotInOrdering { qubit, gate_name });
            }
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit { qubit, gate_name });
            }
        }

        Ok(Self {
            kind,
            target,
            controls,
            ordering,
        })
    }

    /// Create a single-qubit gate operation.
    pub fn single(kind: GateKind, target: QubitId, ordering: QubitOrdering) -> IrResult<Self> {
        Self::new(kind, target, [], ordering)
    }

    /// Create a singly-controlled gate operation.
    pub fn controlled(
        kind: GateKind,
        control: QubitId,
        target: QubitId,
        ordering: QubitOrdering,
    ) -> IrResult<Self> {
        Self::new(kind, target, [control], ordering)
    }

    /// The gate kind.
    #[inline]
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// The target qubit.
    #[inline]
    pub fn target(&self) -> QubitId {
        self.target
    }

    /// The control qubits.
    #[inline]
    pub fn controls(&self) -> &[QubitId] {
        &self.controls
    }

    /// The qubit ordering the matrix is built against.
    #[inline]
    pub fn ordering(&self) -> &QubitOrdering {
        &self.ordering
    }

    /// Build the full-register unitary.
    pub fn construct_matrix(&self) -> Matrix {
        match self.kind {
            GateKind::Hadamard | GateKind::X | GateKind::Y | GateKind::Z | GateKind::Phase => {
                self.tensor_with_identities()
            }
            GateKind::Cnot | GateKind::Toffoli => {
                let target = self.weight(self.target);
                let controls = self.control_mask();
                permutation_matrix(self.ordering.dim(), |i| {
                    if i & controls == controls {
                        i ^ target
                    } else {
                        i
                    }
                })
            }
            GateKind::Swap => {
                let a = self.weight(self.target);
                let b = self.control_mask();
                permutation_matrix(self.ordering.dim(), |i| {
                    if (i & a == 0) == (i & b == 0) {
                        i
                    } else {
                        i ^ a ^ b
                    }
                })
            }
            GateKind::Cz | GateKind::Cphase => {
                let phase = if self.kind == GateKind::Cz {
                    Complex64::new(-1.0, 0.0)
                } else {
                    Complex64::new(0.0, 1.0)
                };
                let both = self.weight(self.target) | self.control_mask();
                diagonal_matrix(self.ordering.dim(), |i| {
                    if i & both == both {
                        phase
                    } else {
                        Complex64::new(1.0, 0.0)
                    }
                })
            }
            // Rejected by `new`.
            GateKind::Fredkin => unreachable!("fredkin operations cannot be constructed"),
        }
    }

    /// Apply the operation to a state vector, returning the new state.
    ///
    /// # Errors
    ///
    /// [`IrError::DimensionMismatch`] when the state does not have
    /// `2^ordering.len()` amplitudes.
    pub fn apply(&self, state: &StateVector) -> IrResult<StateVector> {
        let expected = self.ordering.dim();
        if state.len() != expected {
            return Err(IrError::DimensionMismatch {
                expected,
                got: state.len(),
            });
        }
        let matrix = self.construct_matrix();
        Ok(StateVector::from_vector(matrix.dot(state.amplitudes())))
    }

    /// Combine per-qubit states (indexed by qubit id) into a joint vector laid
    /// out by this operation's ordering, then apply the operation.
    pub fn apply_to_qubits(&self, states: &[QubitState]) -> IrResult<StateVector> {
        if states.len() != self.ordering.len() {
            return Err(IrError::DimensionMismatch {
                expected: self.ordering.len(),
                got: states.len(),
            });
        }
        let joint = StateVector::product(
            self.ordering
                .qubits()
                .iter()
                .map(|qubit| &states[qubit.index()]),
        );
        self.apply(&joint)
    }

    fn tensor_with_identities(&self) -> Matrix {
        let gate = self.kind.base_matrix();
        let id = identity(2);
        self.ordering
            .qubits()
            .iter()
            .fold(identity(1), |acc, &qubit| {
                if qubit == self.target {
                    kron(&acc, &gate)
                } else {
                    kron(&acc, &id)
                }
            })
    }

    // Qubits are validated against the ordering in `new`.
    fn weight(&self, qubit: QubitId) -> usize {
        self.ordering.weight(qubit).unwrap_or(0)
    }

    fn control_mask(&self) -> usize {
        self.controls.iter().fold(0, |mask, &c| mask | self.weight(c))
    }
}

/// Matrix sending basis state `i` to basis state `f(i)`.
fn permutation_matrix(dim: usize, f: impl Fn(usize) -> usize) -> Matrix {
    let mut m = Matrix::zeros((dim, dim));
    for i in 0..dim {
        m[[f(i), i]] = Complex64::new(1.0, 0.0);
    }
    m
}

fn diagonal_matrix(dim: usize, f: impl Fn(usize) -> Complex64) -> Matrix {
    let mut m = Matrix::zeros((dim, dim));
    for i in 0..dim {
        m[[i, i]] = f(i);
    }
    m
}
