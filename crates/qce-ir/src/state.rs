//! Joint amplitude vectors of a qubit register.

use num_complex::Complex64;

use crate::error::{IrError, IrResult};
use crate::linalg::{Vector, kron_vec};
use crate::qubit::QubitState;

/// The joint state of `n` qubits as `2^n` complex amplitudes.
///
/// A state vector is never mutated in place: applying a gate produces a new
/// vector.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: Vector,
}

impl StateVector {
    /// Wrap raw amplitudes. The length must be a power of two.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> IrResult<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(IrError::DimensionMismatch {
                expected: len.next_power_of_two(),
                got: len,
            });
        }
        Ok(Self {
            amplitudes: Vector::from(amplitudes),
        })
    }

    pub(crate) fn from_vector(amplitudes: Vector) -> Self {
        Self { amplitudes }
    }

    /// The computational basis state `|index⟩` of an `n`-qubit register.
    pub fn basis(num_qubits: u32, index: usize) -> IrResult<Self> {
        let dim = 1usize << num_qubits;
        if index >= dim {
            return Err(IrError::DimensionMismatch {
                expected: dim,
                got: index + 1,
            });
        }
        let mut amplitudes = Vector::zeros(dim);
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(Self { amplitudes })
    }

    /// Tensor product of single-qubit states, first state as most
    /// significant bit. The empty product is the one-amplitude state `[1]`.
    pub fn product<'a>(states: impl IntoIterator<Item = &'a QubitState>) -> Self {
        let amplitudes = states
            .into_iter()
            .fold(Vector::from(vec![Complex64::new(1.0, 0.0)]), |acc, state| {
                kron_vec(&acc, &state.ket())
            });
        Self { amplitudes }
    }

    /// Number of amplitudes.
    #[inline]
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// A state vector always holds at least one amplitude.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Number of qubits (`log2(len)`).
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.amplitudes.len().trailing_zeros()
    }

    /// The amplitudes.
    #[inline]
    pub fn amplitudes(&self) -> &Vector {
        &self.amplitudes
    }

    /// Amplitude of basis state `index`.
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    /// `|amplitude|²` for every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Sum of all probabilities.
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Check that the total probability is one within `tolerance`.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total_probability() - 1.0).abs() <= tolerance
    }

    /// Consume the state, returning the amplitude vector.
    pub fn into_inner(self) -> Vector {
        self.amplitudes
    }
}
