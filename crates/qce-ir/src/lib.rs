//! QCE gate operations and operation graph
//!
//! This crate provides the data structures a dense state-vector simulator
//! works on: single-qubit states, gate kinds, full-register gate matrices and
//! the ordered operation graph that records a circuit.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a qubit, [`QubitState`] is a normalised
//!   single-qubit state
//! - **Gates**: [`GateKind`] for the built-in gates and their constant tables
//! - **Orderings**: [`QubitOrdering`] maps qubits to bits of a basis index,
//!   first qubit most significant
//! - **Operations**: [`GateOperation`] builds the `2^n × 2^n` unitary of one gate
//! - **States**: [`StateVector`] holds `2^n` complex amplitudes
//! - **Graph**: [`OperationGraph`] records gates in order and compiles into a
//!   [`GraphSnapshot`]
//!
//! # Example: Applying a CNOT
//!
//! ```rust
//! use qce_ir::{GateKind, GateOperation, QubitId, QubitOrdering, StateVector};
//!
//! let ordering = QubitOrdering::identity(2);
//! let cnot = GateOperation::controlled(GateKind::Cnot, QubitId(0), QubitId(1), ordering)?;
//!
//! // |10⟩ → |11⟩
//! let out = cnot.apply(&StateVector::basis(2, 2)?)?;
//! assert_eq!(out, StateVector::basis(2, 3)?);
//! # Ok::<(), qce_ir::IrError>(())
//! ```
//!
//! # Matrix Layout
//!
//! Position `p` of an ordering of `n` qubits is bit `n - p - 1` of a basis
//! index. Single-qubit gates are built as a Kronecker product over the
//! ordering; controlled gates are written directly from the bit weights of
//! their qubits.

pub mod error;
pub mod gate;
pub mod graph;
pub mod groups;
pub mod linalg;
pub mod operation;
pub mod ordering;
pub mod qubit;
pub mod state;

pub use error::{ErrorKind, IrError, IrResult};
pub use gate::GateKind;
pub use graph::{GraphSnapshot, Node, OpHandle, OperationGraph};
pub use groups::QubitGroups;
pub use linalg::{Matrix, Vector};
pub use operation::GateOperation;
pub use ordering::QubitOrdering;
pub use qubit::{NORM_TOLERANCE, QubitId, QubitState};
pub use state::StateVector;
