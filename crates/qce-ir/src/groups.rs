//! Qubit grouping via union-find.
//!
//! Records which qubits have interacted through a controlled gate. The
//! grouping is advisory: gate matrices always span the full register.

use petgraph::unionfind::UnionFind;
use rustc_hash::FxHashMap;

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// Disjoint sets over the qubits of a register.
///
/// Backed by petgraph's [`UnionFind`], which unions by rank and compresses
/// paths on `find_mut`, so lookups are amortised near-constant and never
/// recurse.
#[derive(Debug, Clone)]
pub struct QubitGroups {
    sets: UnionFind<u32>,
    num_qubits: usize,
}

impl QubitGroups {
    /// Every qubit in its own group.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            sets: UnionFind::new(num_qubits),
            num_qubits,
        }
    }

    /// Number of qubits tracked.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn check(&self, qubit: QubitId) -> IrResult<u32> {
        if qubit.index() >= self.num_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(qubit.0)
    }

    /// Representative of the group containing `qubit`, compressing the path.
    pub fn find(&mut self, qubit: QubitId) -> IrResult<QubitId> {
        let q = self.check(qubit)?;
        Ok(QubitId(self.sets.find_mut(q)))
    }

    /// Merge the groups of `a` and `b`. Returns `false` if they already
    /// shared a group.
    pub fn union(&mut self, a: QubitId, b: QubitId) -> IrResult<bool> {
        let a = self.check(a)?;
        let b = self.check(b)?;
        Ok(self.sets.union(a, b))
    }

    /// Whether `a` and `b` are in the same group.
    pub fn same_group(&self, a: QubitId, b: QubitId) -> IrResult<bool> {
        let a = self.check(a)?;
        let b = self.check(b)?;
        Ok(self.sets.equiv(a, b))
    }

    /// All groups, each sorted by qubit index, ordered by their smallest
    /// member.
    pub fn groups(&self) -> Vec<Vec<QubitId>> {
        let labels = self.sets.clone().into_labeling();

        let mut by_root: FxHashMap<u32, Vec<QubitId>> = FxHashMap::default();
        let mut roots = Vec::new();
        for (index, root) in labels.into_iter().enumerate() {
            let members = by_root.entry(root).or_insert_with(|| {
                roots.push(root);
                Vec::new()
            });
            members.push(QubitId(index as u32));
        }

        roots
            .into_iter()
            .filter_map(|root| by_root.remove(&root))
            .collect()
    }
}
