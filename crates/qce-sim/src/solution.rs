//! Simulation results.

use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use qce_ir::{StateVector, Vector};

use crate::error::SimResult;
use crate::sampler::Sampler;

/// Measurement histogram keyed by bitstring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Occurrences of `bitstring`.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of shots recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no outcome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The most frequent outcome, ties broken by bitstring.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(k, &v)| (k.as_str(), v))
    }

    /// Outcomes sorted by bitstring.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// The final state of a simulation run.
///
/// Probabilities are computed once; the solution can be sampled any number
/// of times without re-simulating.
#[derive(Debug, Clone)]
pub struct Solution {
    state: StateVector,
    sampler: Sampler,
}

impl Solution {
    /// Wrap a final state, validating its distribution.
    pub fn new(state: StateVector, tolerance: f64, precision: f64) -> SimResult<Self> {
        let sampler = Sampler::new(state.probabilities(), tolerance, precision)?;
        Ok(Self { state, sampler })
    }

    /// The final state vector.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// The raw amplitudes.
    pub fn amplitudes(&self) -> &Vector {
        self.state.amplitudes()
    }

    /// Measurement probabilities per basis index.
    pub fn probabilities(&self) -> &[f64] {
        self.sampler.probabilities()
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits() as usize
    }

    /// Draw one basis index.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.sampler.sample(rng)
    }

    /// Sample `shots` outcomes into a histogram of bitstrings.
    pub fn sample_counts<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> Counts {
        let mut counts = Counts::new();
        for _ in 0..shots {
            counts.insert(self.bitstring(self.sample(rng)), 1);
        }
        counts
    }

    /// Format a basis index as a bitstring, qubit 0 leftmost.
    pub fn bitstring(&self, outcome: usize) -> String {
        format!("{:0width$b}", outcome, width = self.num_qubits())
    }

    /// Consume the solution, returning the final state vector.
    pub fn into_state(self) -> StateVector {
        self.state
    }
}
