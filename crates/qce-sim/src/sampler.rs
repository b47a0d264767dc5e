//! Discretised inverse-CDF sampling of measurement outcomes.
//!
//! Probability space `[0, 1)` is split into `round(1 / precision)` equal
//! buckets. A draw picks a bucket uniformly at random and returns the basis
//! index whose cumulative probability range (in bucket units) contains it.

use rand::Rng;
use tracing::{instrument, warn};

use crate::error::{SimError, SimResult};

/// A validated probability distribution over basis indices.
#[derive(Debug, Clone)]
pub struct Sampler {
    probabilities: Vec<f64>,
    /// Running sum of probabilities, scaled to bucket units.
    cumulative: Vec<f64>,
    buckets: u64,
}

impl Sampler {
    /// Build a sampler, checking that `probabilities` sum to one within
    /// `tolerance`.
    pub fn new(probabilities: Vec<f64>, tolerance: f64, precision: f64) -> SimResult<Self> {
        let total: f64 = probabilities.iter().sum();
        let deviation = (total - 1.0).abs();
        if deviation.is_nan() || deviation > tolerance {
            return Err(SimError::ProbabilityNotNormalized { total, tolerance });
        }

        let buckets = (1.0 / precision).round().max(1.0) as u64;
        let scale = buckets as f64;
        let cumulative = probabilities
            .iter()
            .scan(0.0, |acc, p| {
                *acc += p * scale;
                Some(*acc)
            })
            .collect();

        Ok(Self {
            probabilities,
            cumulative,
            buckets,
        })
    }

    /// The distribution being sampled.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Number of discrete buckets a draw is taken from.
    pub fn buckets(&self) -> u64 {
        self.buckets
    }

    /// Draw one basis index.
    #[instrument(level = "trace", skip(self, rng))]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let draw = rng.gen_range(0..self.buckets) as f64;
        self.outcome_at(draw)
    }

    /// Basis index whose cumulative range contains `draw` (in bucket units).
    fn outcome_at(&self, draw: f64) -> usize {
        // First index whose cumulative range ends past the draw. Indices with
        // zero probability have an empty range and are never chosen.
        let index = self.cumulative.partition_point(|&c| c <= draw);
        if index < self.cumulative.len() {
            return index;
        }

        let fallback = self.last_nonzero();
        warn!(
            draw,
            fallback, "Sample fell past the cumulative distribution; using last non-zero outcome"
        );
        fallback
    }

    /// Draw `shots` basis indices.
    pub fn sample_many<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> Vec<usize> {
        (0..shots).map(|_| self.sample(rng)).collect()
    }

    fn last_nonzero(&self) -> usize {
        self.probabilities
            .iter()
            .rposition(|&p| p > 0.0)
            .unwrap_or(0)
    }
}
