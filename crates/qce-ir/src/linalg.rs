//! Dense complex linear-algebra helpers.
//!
//! Matrices are `ndarray::Array2<Complex64>` in row-major order, vectors are
//! `ndarray::Array1<Complex64>`.

use ndarray::{Array1, Array2, s};
use num_complex::Complex64;

/// Dense complex matrix.
pub type Matrix = Array2<Complex64>;

/// Dense complex vector.
pub type Vector = Array1<Complex64>;

/// The `dim × dim` identity matrix.
pub fn identity(dim: usize) -> Matrix {
    Matrix::eye(dim)
}

/// Kronecker product `a ⊗ b`.
///
/// Each entry `a[i, j]` scales a full copy of `b`, placed at block
/// `(i·rows(b), j·cols(b))` of the result.
pub fn kron(a: &Matrix, b: &Matrix) -> Matrix {
    let (a_rows, a_cols) = a.dim();
    let (b_rows, b_cols) = b.dim();
    let mut result = Matrix::zeros((a_rows * b_rows, a_cols * b_cols));

    for ((i, j), &coeff) in a.indexed_iter() {
        if coeff == Complex64::new(0.0, 0.0) {
            continue;
        }
        result
            .slice_mut(s![
                i * b_rows..(i + 1) * b_rows,
                j * b_cols..(j + 1) * b_cols
            ])
            .assign(&b.mapv(|x| coeff * x));
    }

    result
}

/// Kronecker product of two column vectors.
pub fn kron_vec(a: &Vector, b: &Vector) -> Vector {
    let mut result = Vector::zeros(a.len() * b.len());
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            result[i * b.len() + j] = x * y;
        }
    }
    result
}

/// Conjugate transpose.
pub fn adjoint(m: &Matrix) -> Matrix {
    m.t().mapv(|x| x.conj())
}

/// Element-wise comparison within `tolerance`.
pub fn approx_eq(a: &Matrix, b: &Matrix, tolerance: f64) -> bool {
    a.dim() == b.dim() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() <= tolerance)
}

/// Check `U·U† = I` within `tolerance`.
pub fn is_unitary(m: &Matrix, tolerance: f64) -> bool {
    let (rows, cols) = m.dim();
    rows == cols && approx_eq(&m.dot(&adjoint(m)), &identity(rows), tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_kron_identities() {
        let result = kron(&identity(2), &identity(2));
        assert!(approx_eq(&result, &identity(4), 1e-12));

        let mut not_identity = identity(4);
        not_identity[[3, 3]] = c(0.0, 1.0);
        assert!(!approx_eq(&result, &not_identity, 1e-12));
    }

    #[test]
    fn test_kron_block_layout() {
        let a = array![[c(1.0, 0.0), c(2.0, 0.0)], [c(0.0, 0.0), c(0.0, 1.0)]];
        let b = array![[c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]];
        let result = kron(&a, &b);

        assert_eq!(result.dim(), (4, 4));
        // Top-right block is 2·b
        assert_eq!(result[[0, 3]], c(2.0, 0.0));
        assert_eq!(result[[1, 2]], c(2.0, 0.0));
        // Bottom-right block is i·b
        assert_eq!(result[[2, 3]], c(0.0, 1.0));
        assert_eq!(result[[3, 2]], c(0.0, 1.0));
        // Bottom-left block is zero
        assert_eq!(result[[3, 0]], c(0.0, 0.0));
    }

    #[test]
    fn test_kron_scalar_is_neutral() {
        let one = array![[c(1.0, 0.0)]];
        let h = array![[c(1.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(-1.0, 0.0)]];
        assert!(approx_eq(&kron(&one, &h), &h, 1e-12));
        assert!(approx_eq(&kron(&h, &one), &h, 1e-12));
    }

    #[test]
    fn test_kron_vec() {
        let a = array![c(1.0, 0.0), c(0.0, 0.0)];
        let b = array![c(0.0, 0.0), c(1.0, 0.0)];
        let result = kron_vec(&a, &b);
        assert_eq!(result, array![c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]);
    }

    #[test]
    fn test_is_unitary() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let h = array![[c(s, 0.0), c(s, 0.0)], [c(s, 0.0), c(-s, 0.0)]];
        assert!(is_unitary(&h, 1e-12));

        let not_unitary = array![[c(1.0, 0.0), c(1.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)]];
        assert!(!is_unitary(&not_unitary, 1e-12));
    }
}
