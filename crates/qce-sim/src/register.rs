//! High-level register API for building and simulating circuits.

use qce_ir::{
    GateKind, GateOperation, GraphSnapshot, IrResult, OperationGraph, QubitId, QubitState,
};

use crate::error::SimResult;
use crate::simulator::{DenseSimulator, Simulator};
use crate::solution::Solution;

/// A qubit register with a circuit recorded against it.
///
/// Every gate method appends one node to the underlying [`OperationGraph`]
/// using the identity qubit ordering.
///
/// # Example
///
/// ```rust
/// use qce_ir::QubitId;
/// use qce_sim::QubitRegister;
///
/// let mut reg = QubitRegister::new(2);
/// reg.h(QubitId(0))?.cnot(QubitId(0), QubitId(1))?;
///
/// let solution = reg.simulate()?;
/// assert!((solution.probabilities()[0] - 0.5).abs() < 1e-10);
/// assert!((solution.probabilities()[3] - 0.5).abs() < 1e-10);
/// # Ok::<(), qce_sim::SimError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QubitRegister {
    graph: OperationGraph,
}

impl QubitRegister {
    /// Create a register of `num_qubits` qubits, all in |0⟩.
    pub fn new(num_qubits: usize) -> Self {
        Self::with_state(num_qubits, QubitState::zero())
    }

    /// Create a register whose qubits all start in `state`.
    pub fn with_state(num_qubits: usize, state: QubitState) -> Self {
        Self {
            graph: OperationGraph::with_qubits(num_qubits, state),
        }
    }

    /// Create a register with one qubit per initial state.
    pub fn from_states(states: impl IntoIterator<Item = QubitState>) -> Self {
        Self {
            graph: OperationGraph::new(states),
        }
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.graph.num_qubits()
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.graph.apply_gate(GateKind::Hadamard, qubit, [])?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.graph.apply_gate(GateKind::X, qubit, [])?;
        Ok(self)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.graph.apply_gate(GateKind::Y, qubit, [])?;
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.graph.apply_gate(GateKind::Z, qubit, [])?;
        Ok(self)
    }

    /// Apply phase gate S.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.graph.apply_gate(GateKind::Phase, qubit, [])?;
        Ok(self)
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cnot(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.graph.apply_gate(GateKind::Cnot, target, [control])?;
        Ok(self)
    }

    /// Apply SWAP gate. `control` is the second swapped qubit.
    pub fn swap(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.graph.apply_gate(GateKind::Swap, target, [control])?;
        Ok(self)
    }

    /// Apply controlled-Z gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.graph.apply_gate(GateKind::Cz, target, [control])?;
        Ok(self)
    }

    /// Apply controlled phase gate (phase i on |11⟩).
    pub fn cphase(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.graph.apply_gate(GateKind::Cphase, target, [control])?;
        Ok(self)
    }

    /// Apply Toffoli gate.
    pub fn toffoli(
        &mut self,
        control1: QubitId,
        control2: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.graph
            .apply_gate(GateKind::Toffoli, target, [control1, control2])?;
        Ok(self)
    }

    /// Append a prebuilt operation, which may use any ordering of the
    /// register's qubits.
    pub fn push(&mut self, operation: GateOperation) -> IrResult<&mut Self> {
        self.graph.add(operation)?;
        Ok(self)
    }

    // =========================================================================
    // Graph access
    // =========================================================================

    /// Remove the gate at position `index`.
    pub fn remove(&mut self, index: usize) -> IrResult<GateOperation> {
        self.graph.remove(index)
    }

    /// Replace the initial state of `qubit`.
    pub fn change_state(&mut self, qubit: QubitId, state: QubitState) -> IrResult<&mut Self> {
        self.graph.change_state(qubit, state)?;
        Ok(self)
    }

    /// Initial state of `qubit`.
    pub fn qubit(&self, qubit: QubitId) -> Option<QubitState> {
        self.graph.initial_state(qubit)
    }

    /// The recorded circuit.
    pub fn graph(&self) -> &OperationGraph {
        &self.graph
    }

    /// Mutable access to the recorded circuit.
    pub fn graph_mut(&mut self) -> &mut OperationGraph {
        &mut self.graph
    }

    /// Freeze the circuit into a snapshot.
    pub fn compile(&self) -> GraphSnapshot {
        self.graph.compile_state()
    }

    /// Simulate with a default [`DenseSimulator`].
    pub fn simulate(&self) -> SimResult<Solution> {
        self.simulate_with(&DenseSimulator::new())
    }

    /// Simulate with the given simulator.
    pub fn simulate_with(&self, simulator: &dyn Simulator) -> SimResult<Solution> {
        simulator.run(&self.compile())
    }
}
