//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Coarse classification shared by every QCE error.
///
/// Every error is fatal to the call that raised it. The graph and any
/// previously produced solutions stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed construction input: wrong arity, out-of-range index,
    /// bad qubit ordering.
    InvalidArgument,
    /// A gate variant or graph feature that is intentionally stubbed out.
    NotImplemented,
    /// An amplitude pair or vector fails the normalisation check.
    StateInvalid,
}

/// Errors that can occur while building or applying gate operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index is not part of the register.
    #[error("Qubit {qubit} out of range for a register of {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the register.
        num_qubits: usize,
    },

    /// Node position is past the end of the graph.
    #[error("Node index {index} out of range (graph has {len} nodes)")]
    NodeOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of nodes in the graph.
        len: usize,
    },

    /// Gate received the wrong number of control qubits.
    #[error("Gate '{gate_name}' requires {expected} control qubits, got {got}")]
    ControlArity {
        /// Name of the gate.
        gate_name: &'static str,
        /// Expected number of controls.
        expected: usize,
        /// Actual number of controls provided.
        got: usize,
    },

    /// Target or control qubit does not appear in the gate's qubit ordering.
    #[error("Qubit {qubit} is not in the qubit ordering (gate: {gate_name})")]
    QubitNotInOrdering {
        /// The missing qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate_name: &'static str,
    },

    /// The same qubit is used twice by one gate.
    #[error("Duplicate qubit {qubit} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate_name: &'static str,
    },

    /// Qubit ordering is not a permutation of the register's qubits.
    #[error("Invalid qubit ordering: {0}")]
    InvalidOrdering(String),

    /// State vector and matrix dimensions disagree.
    #[error("Dimension mismatch: expected {expected} amplitudes, got {got}")]
    DimensionMismatch {
        /// Expected vector length.
        expected: usize,
        /// Actual vector length.
        got: usize,
    },

    /// Qubit amplitudes do not satisfy |a|² + |b|² = 1.
    #[error("Qubit state is not normalised: |a|^2 + |b|^2 = {norm}")]
    NotNormalized {
        /// The squared norm that was found.
        norm: f64,
    },

    /// Feature or gate variant that is not available yet.
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl IrError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IrError::QubitOutOfRange { .. }
            | IrError::NodeOutOfRange { .. }
            | IrError::ControlArity { .. }
            | IrError::QubitNotInOrdering { .. }
            | IrError::DuplicateQubit { .. }
            | IrError::InvalidOrdering(_)
            | IrError::DimensionMismatch { .. } => ErrorKind::InvalidArgument,
            IrError::NotNormalized { .. } => ErrorKind::StateInvalid,
            IrError::NotImplemented(_) => ErrorKind::NotImplemented,
        }
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
