//! Qubit identifiers and single-qubit states.

use ndarray::{Array1, Array2, array};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use crate::error::{IrError, IrResult};

/// Tolerance used for every normalisation check.
pub const NORM_TOLERANCE: f64 = 1e-5;

/// Unique identifier for a qubit within a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The qubit's position in index order.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// The state of a single, unentangled qubit: `zero·|0⟩ + one·|1⟩`.
///
/// A `QubitState` is always normalised; [`QubitState::new`] rejects amplitude
/// pairs whose squared magnitudes do not sum to one, and deserialisation goes
/// through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawQubitState")]
pub struct QubitState {
    zero: Complex64,
    one: Complex64,
}

/// Unvalidated amplitude pair as it appears on the wire.
#[derive(Deserialize)]
struct RawQubitState {
    zero: Complex64,
    one: Complex64,
}

impl TryFrom<RawQubitState> for QubitState {
    type Error = IrError;

    fn try_from(raw: RawQubitState) -> IrResult<Self> {
        QubitState::new(raw.zero, raw.one)
    }
}

impl QubitState {
    /// Create a state from its two amplitudes.
    pub fn new(zero: Complex64, one: Complex64) -> IrResult<Self> {
        let norm = zero.norm_sqr() + one.norm_sqr();
        if (norm - 1.0).abs() > NORM_TOLERANCE {
            return Err(IrError::NotNormalized { norm });
        }
        Ok(Self { zero, one })
    }

    /// |0⟩
    pub fn zero() -> Self {
        Self {
            zero: Complex64::new(1.0, 0.0),
            one: Complex64::new(0.0, 0.0),
        }
    }

    /// |1⟩
    pub fn one() -> Self {
        Self {
            zero: Complex64::new(0.0, 0.0),
            one: Complex64::new(1.0, 0.0),
        }
    }

    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub fn plus() -> Self {
        Self {
            zero: Complex64::new(FRAC_1_SQRT_2, 0.0),
            one: Complex64::new(FRAC_1_SQRT_2, 0.0),
        }
    }

    /// |−⟩ = (|0⟩ − |1⟩)/√2
    pub fn minus() -> Self {
        Self {
            zero: Complex64::new(FRAC_1_SQRT_2, 0.0),
            one: Complex64::new(-FRAC_1_SQRT_2, 0.0),
        }
    }

    /// |+i⟩ = (|0⟩ + i|1⟩)/√2
    pub fn plus_i() -> Self {
        Self {
            zero: Complex64::new(FRAC_1_SQRT_2, 0.0),
            one: Complex64::new(0.0, FRAC_1_SQRT_2),
        }
    }

    /// |−i⟩ = (|0⟩ − i|1⟩)/√2
    pub fn minus_i() -> Self {
        Self {
            zero: Complex64::new(FRAC_1_SQRT_2, 0.0),
            one: Complex64::new(0.0, -FRAC_1_SQRT_2),
        }
    }

    /// Amplitude of |0⟩.
    #[inline]
    pub fn zero_amplitude(&self) -> Complex64 {
        self.zero
    }

    /// Amplitude of |1⟩.
    #[inline]
    pub fn one_amplitude(&self) -> Complex64 {
        self.one
    }

    /// Column vector |ψ⟩.
    pub fn ket(&self) -> Array1<Complex64> {
        array![self.zero, self.one]
    }

    /// Row vector ⟨ψ| (conjugated amplitudes).
    pub fn bra(&self) -> Array1<Complex64> {
        array![self.zero.conj(), self.one.conj()]
    }

    /// Density matrix |ψ⟩⟨ψ|.
    pub fn density_matrix(&self) -> Array2<Complex64> {
        let ket = self.ket();
        let bra = self.bra();
        Array2::from_shape_fn((2, 2), |(i, j)| ket[i] * bra[j])
    }

    /// Check normalisation against a tolerance.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.zero.norm_sqr() + self.one.norm_sqr() - 1.0).abs() <= tolerance
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}
