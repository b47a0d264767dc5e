//! `qce-sim`: dense state-vector simulation of QCE circuits.
//!
//! Evaluates a compiled [`qce_ir::GraphSnapshot`] by building the tensor
//! product of the initial qubit states and multiplying it by each gate's
//! full-register unitary in circuit order. The resulting [`Solution`] can be
//! sampled repeatedly with an injected random source.
//!
//! # Quick start
//!
//! ```rust
//! use qce_ir::QubitId;
//! use qce_sim::{QubitRegister, SimulatorConfig};
//!
//! let mut reg = QubitRegister::new(2);
//! reg.h(QubitId(0))?.cnot(QubitId(0), QubitId(1))?;
//! let solution = reg.simulate()?;
//!
//! let config = SimulatorConfig { seed: Some(7), ..SimulatorConfig::default() };
//! let mut rng = config.rng();
//! let counts = solution.sample_counts(100, &mut rng);
//! assert_eq!(counts.get("00") + counts.get("11"), 100);
//! # Ok::<(), qce_sim::SimError>(())
//! ```

pub mod config;
pub mod error;
pub mod register;
pub mod sampler;
pub mod simulator;
pub mod solution;

pub use config::{ConfigError, SimulatorConfig};
pub use error::{SimError, SimResult};
pub use register::QubitRegister;
pub use sampler::Sampler;
pub use simulator::{DenseSimulator, Simulator};
pub use solution::{Counts, Solution};
