//! Sequential dense state-vector simulation.

use std::time::Instant;
use tracing::{debug, instrument, trace};

use qce_ir::GraphSnapshot;

use crate::config::SimulatorConfig;
use crate::error::{SimError, SimResult};
use crate::solution::Solution;

/// Turns a compiled graph into a final state.
pub trait Simulator {
    /// Name of the simulator.
    fn name(&self) -> &str;

    /// Evaluate `snapshot` into a [`Solution`].
    fn run(&self, snapshot: &GraphSnapshot) -> SimResult<Solution>;
}

/// Full state-vector simulator.
///
/// Starts from the tensor product of the initial qubit states and multiplies
/// the running vector by each gate's full-register matrix, in circuit order.
/// Memory grows as `2^n` for the vector and `4^n` for each matrix, so the
/// register width is capped by [`SimulatorConfig::max_qubits`].
#[derive(Debug, Clone, Default)]
pub struct DenseSimulator {
    config: SimulatorConfig,
}

impl DenseSimulator {
    /// Create a simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator from a configuration, validating it.
    pub fn with_config(config: SimulatorConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }
}

impl Simulator for DenseSimulator {
    fn name(&self) -> &str {
        "dense"
    }

    #[instrument(skip(self, snapshot))]
    fn run(&self, snapshot: &GraphSnapshot) -> SimResult<Solution> {
        let start = Instant::now();
        let num_qubits = snapshot.num_qubits();

        if num_qubits > self.config.max_qubits {
            return Err(SimError::TooManyQubits {
                num_qubits,
                max_qubits: self.config.max_qubits,
            });
        }
        if self.config.grouped_matrices {
            return Err(SimError::NotImplemented(
                "group-local gate matrices".to_string(),
            ));
        }

        debug!(
            "Starting simulation: {} qubits, {} operations",
            num_qubits,
            snapshot.len()
        );

        let mut state = snapshot.initial_vector();
        for (index, op) in snapshot.operations().iter().enumerate() {
            trace!(index, gate = op.kind().name(), target = %op.target(), "Applying gate");
            state = op.apply(&state)?;
        }

        debug!("Simulation completed in {:?}", start.elapsed());

        // Fails with ProbabilityNotNormalized if the gates drifted the norm.
        Solution::new(state, self.config.tolerance, self.config.precision)
    }
}
