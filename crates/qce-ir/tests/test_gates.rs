//! Tests for full-register gate matrix construction.

use num_complex::Complex64;
use qce_ir::{ErrorKind, GateKind, GateOperation, IrError, QubitId, QubitOrdering, StateVector};

const SINGLE: [GateKind; 5] = [
    GateKind::Hadamard,
    GateKind::X,
    GateKind::Y,
    GateKind::Z,
    GateKind::Phase,
];

fn ordering(qubits: &[u32]) -> QubitOrdering {
    QubitOrdering::new(qubits.iter().copied().map(QubitId)).unwrap()
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn close(a: Complex64, b: Complex64) -> bool {
    (a - b).norm() < 1e-12
}

/// The orderings of three qubits exercised by the controlled-gate tests.
fn orderings3() -> Vec<QubitOrdering> {
    vec![
        ordering(&[0, 1, 2]),
        ordering(&[2, 0, 1]),
        ordering(&[1, 2, 0]),
        ordering(&[2, 1, 0]),
    ]
}

// ---------------------------------------------------------------------------
// Single-qubit gates
// ---------------------------------------------------------------------------

#[test]
fn single_qubit_gate_acts_only_on_target_bit() {
    for n in 1..=4_u32 {
        let ord = QubitOrdering::identity(n);
        for t in 0..n {
            let target = QubitId(t);
            let tw = ord.weight(target).unwrap();
            for kind in SINGLE {
                let gate = kind.base_matrix();
                let m = GateOperation::single(kind, target, ord.clone())
                    .unwrap()
                    .construct_matrix();
                let dim = ord.dim();
                assert_eq!(m.dim(), (dim, dim));

                for i in 0..dim {
                    for j in 0..dim {
                        let expected = if i & !tw == j & !tw {
                            let row = usize::from(j & tw != 0);
                            let col = usize::from(i & tw != 0);
                            gate[[row, col]]
                        } else {
                            c(0.0, 0.0)
                        };
                        assert!(
                            close(m[[j, i]], expected),
                            "{} on {target} of {n}: entry ({j}, {i})",
                            kind.name()
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn single_qubit_gate_follows_permuted_ordering() {
    // q0 sits in the lowest bit of ordering (q1, q2, q0)
    let op = GateOperation::single(GateKind::X, QubitId(0), ordering(&[1, 2, 0])).unwrap();
    for i in 0..8 {
        let out = op.apply(&StateVector::basis(3, i).unwrap()).unwrap();
        assert_eq!(out, StateVector::basis(3, i ^ 1).unwrap());
    }
}

#[test]
fn hadamard_on_every_qubit() {
    let ord = QubitOrdering::identity(3);
    let mut state = StateVector::basis(3, 0).unwrap();
    for q in 0..3 {
        let op = GateOperation::single(GateKind::Hadamard, QubitId(q), ord.clone()).unwrap();
        state = op.apply(&state).unwrap();
    }
    let expected = 1.0 / (2.0 * 2.0_f64.sqrt());
    for amp in state.amplitudes() {
        assert!((amp.re - expected).abs() < 1e-4);
        assert!(amp.im.abs() < 1e-12);
    }
}

#[test]
fn single_qubit_gate_rejects_controls() {
    let err = GateOperation::new(
        GateKind::Z,
        QubitId(0),
        [QubitId(1)],
        QubitOrdering::identity(2),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

// ---------------------------------------------------------------------------
// Two-qubit gates
// ---------------------------------------------------------------------------

#[test]
fn cnot_flips_target_when_control_set() {
    for ord in orderings3() {
        for (control, target) in [(0, 1), (2, 0), (1, 2)] {
            let (control, target) = (QubitId(control), QubitId(target));
            let cw = ord.weight(control).unwrap();
            let tw = ord.weight(target).unwrap();
            let op = GateOperation::controlled(GateKind::Cnot, control, target, ord.clone()).unwrap();
            let m = op.construct_matrix();

            for i in 0..8 {
                let j = if i & cw != 0 { i ^ tw } else { i };
                assert_eq!(m[[j, i]], c(1.0, 0.0), "{ord:?}: column {i}");
                for k in (0..8).filter(|&k| k != j) {
                    assert_eq!(m[[k, i]], c(0.0, 0.0));
                }
            }
        }
    }
}

#[test]
fn cnot_examples() {
    // control q0, target q1 in (q0, q1, q2): |100⟩ → |110⟩
    let op = GateOperation::controlled(
        GateKind::Cnot,
        QubitId(0),
        QubitId(1),
        QubitOrdering::identity(3),
    )
    .unwrap();
    let out = op.apply(&StateVector::basis(3, 4).unwrap()).unwrap();
    assert_eq!(out.amplitude(6), Some(c(1.0, 0.0)));

    // control q0, target q2 in (q2, q0, q1): amplitudes at 6, 7 move to 2, 3
    let op = GateOperation::controlled(GateKind::Cnot, QubitId(0), QubitId(2), ordering(&[2, 0, 1]))
        .unwrap();
    let a = std::f64::consts::FRAC_1_SQRT_2;
    let mut amps = vec![c(0.0, 0.0); 8];
    amps[6] = c(a, 0.0);
    amps[7] = c(a, 0.0);
    let out = op.apply(&StateVector::from_amplitudes(amps).unwrap()).unwrap();
    let probs = out.probabilities();
    assert!((probs[2] - 0.5).abs() < 1e-12);
    assert!((probs[3] - 0.5).abs() < 1e-12);
    assert_eq!(probs[6], 0.0);
    assert_eq!(probs[7], 0.0);
}

#[test]
fn swap_exchanges_bits() {
    for ord in orderings3() {
        let (a, b) = (QubitId(0), QubitId(2));
        let aw = ord.weight(a).unwrap();
        let bw = ord.weight(b).unwrap();
        let m = GateOperation::controlled(GateKind::Swap, b, a, ord.clone())
            .unwrap()
            .construct_matrix();

        for i in 0..8 {
            let bits_equal = (i & aw == 0) == (i & bw == 0);
            let j = if bits_equal { i } else { i ^ aw ^ bw };
            assert_eq!(m[[j, i]], c(1.0, 0.0), "{ord:?}: column {i}");
        }
    }
}

#[test]
fn swap_is_symmetric_in_its_qubits() {
    let ord = ordering(&[1, 0, 2]);
    let ab = GateOperation::controlled(GateKind::Swap, QubitId(0), QubitId(1), ord.clone()).unwrap();
    let ba = GateOperation::controlled(GateKind::Swap, QubitId(1), QubitId(0), ord).unwrap();
    assert_eq!(ab.construct_matrix(), ba.construct_matrix());
}

#[test]
fn cz_and_cphase_are_diagonal_phases() {
    for ord in orderings3() {
        let (control, target) = (QubitId(1), QubitId(2));
        let both = ord.weight(control).unwrap() | ord.weight(target).unwrap();

        for (kind, phase) in [(GateKind::Cz, c(-1.0, 0.0)), (GateKind::Cphase, c(0.0, 1.0))] {
            let m = GateOperation::controlled(kind, control, target, ord.clone())
                .unwrap()
                .construct_matrix();
            for i in 0..8 {
                for j in 0..8 {
                    let expected = match (i == j, i & both == both) {
                        (false, _) => c(0.0, 0.0),
                        (true, true) => phase,
                        (true, false) => c(1.0, 0.0),
                    };
                    assert_eq!(m[[j, i]], expected, "{} ({j}, {i})", kind.name());
                }
            }
        }
    }
}

#[test]
fn controlled_gates_require_one_control() {
    for kind in [GateKind::Cnot, GateKind::Swap, GateKind::Cz, GateKind::Cphase] {
        let none = GateOperation::new(kind, QubitId(0), [], QubitOrdering::identity(3));
        assert!(matches!(none, Err(IrError::ControlArity { expected: 1, got: 0, .. })));

        let two = GateOperation::new(
            kind,
            QubitId(0),
            [QubitId(1), QubitId(2)],
            QubitOrdering::identity(3),
        );
        assert!(matches!(two, Err(IrError::ControlArity { expected: 1, got: 2, .. })));
    }
}

// ---------------------------------------------------------------------------
// Three-qubit gates
// ---------------------------------------------------------------------------

#[test]
fn toffoli_flips_target_when_both_controls_set() {
    for ord in orderings3() {
        let controls = [QubitId(2), QubitId(0)];
        let target = QubitId(1);
        let mask = controls.iter().map(|&q| ord.weight(q).unwrap()).sum::<usize>();
        let tw = ord.weight(target).unwrap();
        let op = GateOperation::new(GateKind::Toffoli, target, controls, ord.clone()).unwrap();

        for i in 0..8 {
            let out = op.apply(&StateVector::basis(3, i).unwrap()).unwrap();
            let j = if i & mask == mask { i ^ tw } else { i };
            assert_eq!(out, StateVector::basis(3, j).unwrap());
        }
    }
}

#[test]
fn toffoli_requires_two_controls() {
    let err = GateOperation::controlled(
        GateKind::Toffoli,
        QubitId(0),
        QubitId(1),
        QubitOrdering::identity(3),
    )
    .unwrap_err();
    assert!(matches!(err, IrError::ControlArity { expected: 2, got: 1, .. }));
}

#[test]
fn fredkin_is_not_implemented() {
    let err = GateOperation::new(
        GateKind::Fredkin,
        QubitId(1),
        [QubitId(0)],
        QubitOrdering::identity(3),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotImplemented);
}
