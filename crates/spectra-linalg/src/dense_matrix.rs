//! Dense matrix implementation for small matrices.
//!
//! Dense storage is the right call at the sizes characteristic
//! polynomial work produces (tens of rows), where cache locality beats
//! any sparse format.

use std::ops::{Index, IndexMut};

use num_traits::One;
use rayon::prelude::*;
use thiserror::Error;

use spectra_rings::{Ring, RingError};

/// Errors raised by matrix construction and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand shapes are incompatible with the requested operation.
    #[error("incompatible matrix dimensions: {0}")]
    BadSize(&'static str),
    /// An entry-level ring operation failed.
    #[error(transparent)]
    Ring(#[from] RingError),
}

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Errors
    ///
    /// Fails with [`LinalgError::BadSize`] for empty input or rows of
    /// unequal lengths.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self, LinalgError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(LinalgError::BadSize("matrix needs at least one entry"));
        }
        if rows.iter().any(|row| row.len() != num_cols) {
            return Err(LinalgError::BadSize("rows have unequal lengths"));
        }
        let data: Vec<R> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self
    where
        R: One,
    {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = <R as One>::one();
        }
        m
    }

    /// Creates a scalar matrix with `scalar` along the diagonal.
    #[must_use]
    pub fn scaled_identity(n: usize, scalar: &R) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = scalar.clone();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Entrywise sum.
    ///
    /// # Errors
    ///
    /// Fails with [`LinalgError::BadSize`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.num_rows != other.num_rows || self.num_cols != other.num_cols {
            return Err(LinalgError::BadSize("sum of differently shaped matrices"));
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Entrywise difference.
    ///
    /// # Errors
    ///
    /// Fails with [`LinalgError::BadSize`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.num_rows != other.num_rows || self.num_cols != other.num_cols {
            return Err(LinalgError::BadSize(
                "difference of differently shaped matrices",
            ));
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Errors
    ///
    /// Fails with [`LinalgError::BadSize`] if `x` does not match the
    /// column count.
    pub fn mv(&self, x: &[R]) -> Result<Vec<R>, LinalgError> {
        if x.len() != self.num_cols {
            return Err(LinalgError::BadSize("vector length differs from columns"));
        }
        Ok((0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x.iter())
                    .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect())
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Errors
    ///
    /// Fails with [`LinalgError::BadSize`] if the inner dimensions
    /// differ.
    pub fn mm(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.num_cols != other.num_rows {
            return Err(LinalgError::BadSize("inner dimensions differ in product"));
        }
        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = R::zero();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                }
                result[(i, j)] = sum;
            }
        }
        Ok(result)
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|v| v.clone() * scalar.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }
}

impl<R: Ring + Send + Sync> DenseMatrix<R> {
    /// Matrix-matrix multiply (parallel): C = A * B.
    ///
    /// # Errors
    ///
    /// Fails with [`LinalgError::BadSize`] if the inner dimensions
    /// differ.
    pub fn mm_parallel(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.num_cols != other.num_rows {
            return Err(LinalgError::BadSize("inner dimensions differ in product"));
        }
        let data: Vec<R> = (0..self.num_rows)
            .into_par_iter()
            .flat_map(|i| {
                (0..other.num_cols)
                    .map(|j| {
                        let mut sum = R::zero();
                        for k in 0..self.num_cols {
                            sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                        }
                        sum
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        })
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
