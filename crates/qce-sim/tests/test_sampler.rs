//! Tests for discretised sampling.

use num_complex::Complex64;
use qce_ir::{ErrorKind, QubitId, StateVector};
use qce_sim::{QubitRegister, Sampler, SimError, Solution};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn solution_from_probabilities(probs: &[f64]) -> Solution {
    let amps = probs.iter().map(|p| Complex64::new(p.sqrt(), 0.0)).collect();
    Solution::new(StateVector::from_amplitudes(amps).unwrap(), 1e-5, 1e-5).unwrap()
}

#[test]
fn draws_only_supported_indices() {
    let solution =
        solution_from_probabilities(&[0.0, 1.0 / 8.0, 3.0 / 8.0, 0.0, 0.0, 0.0, 5.0 / 16.0, 3.0 / 16.0]);
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..100 {
        let outcome = solution.sample(&mut rng);
        assert!([1, 2, 6, 7].contains(&outcome), "drew {outcome}");
    }
}

#[test]
fn certain_outcome_always_drawn() {
    let solution = solution_from_probabilities(&[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..100 {
        assert_eq!(solution.sample(&mut rng), 1);
    }
}

#[test]
fn seeded_runs_are_deterministic() {
    let solution = solution_from_probabilities(&[0.25, 0.25, 0.25, 0.25]);
    let draw = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..32).map(|_| solution.sample(&mut rng)).collect::<Vec<_>>()
    };
    assert_eq!(draw(99), draw(99));
}

#[test]
fn bell_counts_are_correlated() {
    let mut reg = QubitRegister::new(2);
    reg.h(QubitId(0)).unwrap().cnot(QubitId(0), QubitId(1)).unwrap();
    let solution = reg.simulate().unwrap();

    let mut rng = StdRng::seed_from_u64(4);
    let counts = solution.sample_counts(2_000, &mut rng);
    assert_eq!(counts.total(), 2_000);
    assert_eq!(counts.get("01"), 0);
    assert_eq!(counts.get("10"), 0);
    let zeros = counts.get("00") as f64 / 2_000.0;
    assert!((zeros - 0.5).abs() < 0.05, "P(00) = {zeros}");
}

#[test]
fn counts_bitstrings_put_qubit_zero_first() {
    let mut reg = QubitRegister::new(3);
    reg.x(QubitId(0)).unwrap();
    let solution = reg.simulate().unwrap();

    let mut rng = StdRng::seed_from_u64(1);
    let counts = solution.sample_counts(10, &mut rng);
    assert_eq!(counts.get("100"), 10);
}

#[test]
fn unnormalised_distribution_is_rejected() {
    let err = Sampler::new(vec![0.5, 0.49], 1e-5, 1e-5).unwrap_err();
    assert!(matches!(err, SimError::ProbabilityNotNormalized { .. }));
    assert_eq!(err.kind(), ErrorKind::StateInvalid);
}

#[test]
fn coarse_precision_still_respects_support() {
    let sampler = Sampler::new(vec![0.0, 0.5, 0.0, 0.5], 1e-5, 0.1).unwrap();
    assert_eq!(sampler.buckets(), 10);
    let mut rng = StdRng::seed_from_u64(8);
    for outcome in sampler.sample_many(500, &mut rng) {
        assert!(outcome == 1 || outcome == 3);
    }
}
