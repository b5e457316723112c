//! Fraction-free Gaussian elimination.
//!
//! Elimination over a ring cannot divide rows by their pivots, so the
//! pass below cross-multiplies instead: to clear an entry it scales the
//! whole row by the pivot first, and records every such scaling in a
//! running divisor. The diagonal product divided by that divisor is the
//! determinant, and the division is exact whenever the entry ring has
//! exact division, which keeps polynomial determinants free of
//! intermediate fractions.

use spectra_poly::SparsePoly;
use spectra_rings::EuclideanRing;

use crate::dense_matrix::{DenseMatrix, LinalgError};

impl<R: EuclideanRing> DenseMatrix<R> {
    /// Computes the determinant by fraction-free elimination.
    ///
    /// The empty matrix has determinant one.
    ///
    /// # Errors
    ///
    /// Fails with [`LinalgError::BadSize`] if the matrix is not square.
    pub fn det(&self) -> Result<R, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::BadSize("determinant of a non-square matrix"));
        }
        let n = self.num_rows();
        if n == 0 {
            return Ok(R::one());
        }

        let mut m = self.clone();
        let mut divisor = R::one();

        for i in 0..n {
            let Some(pivot_row) = (i..n).find(|&r| !m[(r, i)].is_zero()) else {
                // no pivot: the zero stays on the diagonal and zeroes
                // the final product
                continue;
            };
            if pivot_row != i {
                m.swap_rows(i, pivot_row);
                divisor = -divisor;
            }

            let pivot = m[(i, i)].clone();
            for row in 0..n {
                if row == i || m[(row, i)].is_zero() {
                    continue;
                }
                let entry = m[(row, i)].clone();
                m.scale_row(row, &pivot);
                divisor = divisor * pivot.clone();
                m.add_scaled_row(row, i, &-entry);
            }
        }

        let mut product = R::one();
        for i in 0..n {
            product = product * m[(i, i)].clone();
        }
        Ok(product.div(&divisor)?)
    }
}

/// Computes the characteristic polynomial det(A - x*I) of a real
/// square matrix.
///
/// The result feeds directly into the root finder, whose real roots
/// are the real eigenvalues of `a`.
///
/// # Errors
///
/// Fails with [`LinalgError::BadSize`] if `a` is not square.
pub fn char_poly(a: &DenseMatrix<f64>) -> Result<SparsePoly, LinalgError> {
    if !a.is_square() {
        return Err(LinalgError::BadSize(
            "characteristic polynomial of a non-square matrix",
        ));
    }
    let n = a.num_rows();

    let mut lifted = DenseMatrix::<SparsePoly>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            lifted[(i, j)] = SparsePoly::constant(a[(i, j)]);
        }
    }

    let shifted = lifted.sub(&DenseMatrix::scaled_identity(n, &SparsePoly::x()))?;
    shifted.det()
}
