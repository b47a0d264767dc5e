//! The operation graph: ordered gate nodes plus initial qubit states.

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::groups::QubitGroups;
use crate::operation::GateOperation;
use crate::ordering::QubitOrdering;
use crate::qubit::{QubitId, QubitState};
use crate::state::StateVector;

/// Handle of an operation in the graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpHandle(pub usize);

/// A position in the circuit, pointing at one gate operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    handle: OpHandle,
}

impl Node {
    /// The operation this node refers to.
    #[inline]
    pub fn handle(&self) -> OpHandle {
        self.handle
    }
}

/// Circuit structure and initial conditions of a register.
///
/// Operations are stored once in an append-only arena and the ordered node
/// list refers to them by handle. Node order is circuit temporal order.
/// [`remove`](Self::remove) only unlinks the node: the operation stays in the
/// arena for the lifetime of the graph, so a graph that is edited repeatedly
/// keeps growing.
///
/// # Example
///
/// ```rust
/// use qce_ir::{GateKind, OperationGraph, QubitId, QubitState};
///
/// let mut graph = OperationGraph::with_qubits(2, QubitState::zero());
/// graph.apply_gate(GateKind::Hadamard, QubitId(0), []).unwrap();
/// graph.apply_gate(GateKind::Cnot, QubitId(1), [QubitId(0)]).unwrap();
///
/// assert_eq!(graph.len(), 2);
/// assert!(graph.same_group(QubitId(0), QubitId(1)).unwrap());
///
/// let snapshot = graph.compile_state();
/// assert_eq!(snapshot.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct OperationGraph {
    /// Every operation ever added, indexed by `OpHandle`.
    arena: Vec<GateOperation>,
    /// Live nodes in circuit order.
    nodes: Vec<Node>,
    /// Initial state of each qubit, by qubit index.
    initial_states: Vec<QubitState>,
    /// Qubits that have interacted.
    groups: QubitGroups,
}

impl OperationGraph {
    /// Create a graph with one qubit per initial state.
    pub fn new(initial_states: impl IntoIterator<Item = QubitState>) -> Self {
        let initial_states: Vec<QubitState> = initial_states.into_iter().collect();
        let groups = QubitGroups::new(initial_states.len());
        Self {
            arena: Vec::new(),
            nodes: Vec::new(),
            initial_states,
            groups,
        }
    }

    /// Create a graph of `num_qubits` qubits that all start in `state`.
    pub fn with_qubits(num_qubits: usize, state: QubitState) -> Self {
        Self::new(std::iter::repeat_n(state, num_qubits))
    }

    /// Number of qubits in the register.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.initial_states.len()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The identity ordering over this graph's qubits.
    pub fn ordering(&self) -> QubitOrdering {
        QubitOrdering::identity(self.num_qubits() as u32)
    }

    /// Append an operation, returning the new node's position.
    ///
    /// The operation's ordering must cover exactly the graph's qubits.
    /// Controlled operations merge the groups of their target and controls.
    pub fn add(&mut self, operation: GateOperation) -> IrResult<usize> {
        let width = operation.ordering().len();
        if width != self.num_qubits() {
            return Err(IrError::InvalidOrdering(format!(
                "operation spans {width} qubits, graph has {}",
                self.num_qubits()
            )));
        }

        for &control in operation.controls() {
            self.groups.union(operation.target(), control)?;
        }

        let handle = OpHandle(self.arena.len());
        self.arena.push(operation);
        self.nodes.push(Node { handle });
        Ok(self.nodes.len() - 1)
    }

    /// Build a gate over the identity ordering and append it.
    pub fn apply_gate(
        &mut self,
        kind: GateKind,
        target: QubitId,
        controls: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<usize> {
        let controls: Vec<QubitId> = controls.into_iter().collect();
        for &qubit in std::iter::once(&target).chain(&controls) {
            self.check_qubit(qubit)?;
        }
        let operation = GateOperation::new(kind, target, controls, self.ordering())?;
        self.add(operation)
    }

    /// Remove the node at `index`, returning its operation.
    ///
    /// Later nodes shift down by one. Group merges made by the removed
    /// operation are kept.
    pub fn remove(&mut self, index: usize) -> IrResult<GateOperation> {
        if index >= self.nodes.len() {
            return Err(IrError::NodeOutOfRange {
                index,
                len: self.nodes.len(),
            });
        }
        let node = self.nodes.remove(index);
        Ok(self.arena[node.handle.0].clone())
    }

    /// The node at `index`.
    pub fn node(&self, index: usize) -> Option<Node> {
        self.nodes.get(index).copied()
    }

    /// The operation a node refers to.
    pub fn operation(&self, handle: OpHandle) -> Option<&GateOperation> {
        self.arena.get(handle.0)
    }

    /// Live operations in circuit order.
    pub fn operations(&self) -> impl Iterator<Item = &GateOperation> + '_ {
        self.nodes.iter().map(|node| &self.arena[node.handle.0])
    }

    /// Replace the initial state of `qubit`.
    pub fn change_state(&mut self, qubit: QubitId, state: QubitState) -> IrResult<()> {
        self.check_qubit(qubit)?;
        self.initial_states[qubit.index()] = state;
        Ok(())
    }

    /// Initial state of `qubit`.
    pub fn initial_state(&self, qubit: QubitId) -> Option<QubitState> {
        self.initial_states.get(qubit.index()).copied()
    }

    /// Initial states of every qubit, by index.
    pub fn initial_states(&self) -> &[QubitState] {
        &self.initial_states
    }

    /// Representative of `qubit`'s group.
    pub fn find(&mut self, qubit: QubitId) -> IrResult<QubitId> {
        self.groups.find(qubit)
    }

    /// Merge the groups of two qubits.
    pub fn union(&mut self, a: QubitId, b: QubitId) -> IrResult<bool> {
        self.groups.union(a, b)
    }

    /// Whether two qubits share a group.
    pub fn same_group(&self, a: QubitId, b: QubitId) -> IrResult<bool> {
        self.groups.same_group(a, b)
    }

    /// Current qubit groups.
    pub fn groups(&self) -> Vec<Vec<QubitId>> {
        self.groups.groups()
    }

    /// Freeze the graph into an independent snapshot.
    pub fn compile_state(&self) -> GraphSnapshot {
        GraphSnapshot {
            operations: self.operations().cloned().collect(),
            initial_states: self.initial_states.clone(),
        }
    }

    fn check_qubit(&self, qubit: QubitId) -> IrResult<()> {
        if qubit.index() >= self.num_qubits() {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits(),
            });
        }
        Ok(())
    }
}

/// Immutable snapshot of an [`OperationGraph`].
///
/// Owns copies of the operations and initial states, so later changes to
/// the graph are not observed.
#[doc(alias = "OperationGraphHolder")]
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSnapshot {
    operations: Vec<GateOperation>,
    initial_states: Vec<QubitState>,
}

impl GraphSnapshot {
    /// Operations in circuit order.
    pub fn operations(&self) -> &[GateOperation] {
        &self.operations
    }

    /// Initial states by qubit index.
    pub fn initial_states(&self) -> &[QubitState] {
        &self.initial_states
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.initial_states.len()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether there are no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Tensor product of the initial states in qubit-index order.
    pub fn initial_vector(&self) -> StateVector {
        StateVector::product(&self.initial_states)
    }
}
