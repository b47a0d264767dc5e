//! Error types for the sim crate.

use qce_ir::{ErrorKind, IrError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors produced while simulating or sampling a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Gate construction or application failed.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] IrError),

    /// Register is wider than the configured limit.
    #[error("Register has {num_qubits} qubits but the simulator supports at most {max_qubits}")]
    TooManyQubits {
        /// Width of the register.
        num_qubits: usize,
        /// Configured maximum.
        max_qubits: usize,
    },

    /// Probabilities do not sum to one.
    #[error("Probabilities sum to {total}, expected 1 within {tolerance}")]
    ProbabilityNotNormalized {
        /// The sum that was found.
        total: f64,
        /// Allowed deviation from one.
        tolerance: f64,
    },

    /// Simulator feature that is not available yet.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Invalid simulator configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SimError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::Ir(e) => e.kind(),
            SimError::TooManyQubits { .. } | SimError::Config(_) => ErrorKind::InvalidArgument,
            SimError::ProbabilityNotNormalized { .. } => ErrorKind::StateInvalid,
            SimError::NotImplemented(_) => ErrorKind::NotImplemented,
        }
    }
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
