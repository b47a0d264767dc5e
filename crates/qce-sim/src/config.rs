//! Simulator configuration.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML, or JSON when the extension is `.json`)
//! 2. Environment variables (with `QCE_` prefix)
//!
//! Environment variables take precedence over file values, which take
//! precedence over defaults.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use qce_ir::NORM_TOLERANCE;

/// Settings for [`DenseSimulator`](crate::DenseSimulator) and the sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Allowed deviation of the total probability from one.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Width of one sampler bucket in probability space.
    #[serde(default = "default_precision")]
    pub precision: f64,

    /// Widest register the simulator accepts.
    #[serde(default = "default_max_qubits")]
    pub max_qubits: usize,

    /// Build gate matrices per qubit group instead of over the full register.
    #[serde(default)]
    pub grouped_matrices: bool,

    /// Seed for [`SimulatorConfig::rng`]. Unseeded generators use OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_tolerance() -> f64 {
    NORM_TOLERANCE
}

fn default_precision() -> f64 {
    1e-5
}

fn default_max_qubits() -> usize {
    10
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            precision: default_precision(),
            max_qubits: default_max_qubits(),
            grouped_matrices: false,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from a YAML or JSON file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config: Self = if is_json {
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            serde_yaml_ng::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `QCE_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Load from an optional file, apply environment overrides, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply `QCE_*` environment overrides.
    pub fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name.
    /// Values that fail to parse are ignored.
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(val) = lookup("QCE_TOLERANCE").and_then(|v| v.parse().ok()) {
            self.tolerance = val;
        }
        if let Some(val) = lookup("QCE_PRECISION").and_then(|v| v.parse().ok()) {
            self.precision = val;
        }
        if let Some(val) = lookup("QCE_MAX_QUBITS").and_then(|v| v.parse().ok()) {
            self.max_qubits = val;
        }
        if let Some(val) = lookup("QCE_GROUPED_MATRICES").and_then(|v| v.parse().ok()) {
            self.grouped_matrices = val;
        }
        if let Some(val) = lookup("QCE_SEED").and_then(|v| v.parse().ok()) {
            self.seed = Some(val);
        }
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tolerance.is_nan() || self.tolerance <= 0.0 || self.tolerance >= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be in (0, 1), got {}",
                self.tolerance
            )));
        }
        if self.precision.is_nan() || self.precision <= 0.0 || self.precision >= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "precision must be in (0, 1), got {}",
                self.precision
            )));
        }
        if self.max_qubits == 0 {
            return Err(ConfigError::Invalid(
                "max_qubits must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Random source for sampling: seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Errors raised while loading or validating a [`SimulatorConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rustc_hash::FxHashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: FxHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SimulatorConfig::default();
        assert_eq!(config.tolerance, 1e-5);
        assert_eq!(config.precision, 1e-5);
        assert_eq!(config.max_qubits, 10);
        assert!(!config.grouped_matrices);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = SimulatorConfig::default().merge_vars(vars(&[
            ("QCE_MAX_QUBITS", "14"),
            ("QCE_SEED", "42"),
            ("QCE_GROUPED_MATRICES", "true"),
            ("QCE_PRECISION", "0.001"),
        ]));
        assert_eq!(config.max_qubits, 14);
        assert_eq!(config.seed, Some(42));
        assert!(config.grouped_matrices);
        assert_eq!(config.precision, 0.001);
        assert_eq!(config.tolerance, 1e-5);
    }

    #[test]
    fn test_unparsable_env_is_ignored() {
        let config = SimulatorConfig::default()
            .merge_vars(vars(&[("QCE_MAX_QUBITS", "many"), ("QCE_TOLERANCE", "")]));
        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn test_validation() {
        let mut config = SimulatorConfig::default();
        config.precision = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SimulatorConfig::default();
        config.tolerance = 1.5;
        assert!(config.validate().is_err());

        let mut config = SimulatorConfig::default();
        config.tolerance = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = SimulatorConfig::default();
        config.max_qubits = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: SimulatorConfig = serde_yaml_ng::from_str("max_qubits: 6\nseed: 7\n").unwrap();
        assert_eq!(config.max_qubits, 6);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.precision, 1e-5);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = SimulatorConfig {
            seed: Some(3),
            ..SimulatorConfig::default()
        };
        let a: Vec<u32> = (0..8).map(|_| config.rng().r#gen()).collect();
        let mut rng = config.rng();
        let first: u32 = rng.r#gen();
        assert!(a.iter().all(|&x| x == first));
    }
}
