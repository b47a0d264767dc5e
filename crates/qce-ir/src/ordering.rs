//! Qubit orderings: the bit-to-qubit mapping of a gate matrix.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// A permutation of every qubit in a register.
///
/// Position `p` in the ordering is bit `n - p - 1` of a basis index, so the
/// first qubit in the ordering is the most significant bit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QubitOrdering(Vec<QubitId>);

impl QubitOrdering {
    /// Create an ordering, checking that it is a permutation of `0..len`.
    pub fn new(qubits: impl IntoIterator<Item = QubitId>) -> IrResult<Self> {
        let qubits: Vec<QubitId> = qubits.into_iter().collect();
        let n = qubits.len();

        let mut seen = FxHashSet::default();
        for &qubit in &qubits {
            if qubit.index() >= n {
                return Err(IrError::InvalidOrdering(format!(
                    "{qubit} is outside 0..{n}"
                )));
            }
            if !seen.insert(qubit) {
                return Err(IrError::InvalidOrdering(format!(
                    "{qubit} appears more than once"
                )));
            }
        }

        Ok(Self(qubits))
    }

    /// The ordering `q0, q1, …, q(n-1)`.
    pub fn identity(num_qubits: u32) -> Self {
        Self((0..num_qubits).map(QubitId).collect())
    }

    /// Number of qubits in the ordering.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the ordering is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Dimension of the state space spanned by this ordering (`2^len`).
    #[inline]
    pub fn dim(&self) -> usize {
        1 << self.0.len()
    }

    /// Position of `qubit` within the ordering.
    pub fn position(&self, qubit: QubitId) -> Option<usize> {
        self.0.iter().position(|&q| q == qubit)
    }

    /// Basis-index weight of `qubit`: `2^(n - position - 1)`.
    pub fn weight(&self, qubit: QubitId) -> Option<usize> {
        self.position(qubit).map(|pos| 1 << (self.0.len() - pos - 1))
    }

    /// The qubits in order.
    pub fn qubits(&self) -> &[QubitId] {
        &self.0
    }
}
