//! # Spectra
//!
//! Real root isolation and exact linear algebra for spectral analysis.
//!
//! Spectra finds the real roots of univariate polynomials with `f64`
//! coefficients and computes determinants over arbitrary commutative
//! rings, which together give real eigenvalues of real matrices via
//! the characteristic polynomial.
//!
//! ## Features
//!
//! - **Sparse Polynomials**: coefficient/exponent term lists with
//!   exact Euclidean division
//! - **Root Isolation**: derivative-sequence bracketing with Newton,
//!   secant, and combined refinement
//! - **Fraction-Free Elimination**: determinants that never leave the
//!   entry ring, so polynomial matrices stay exact
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spectra::prelude::*;
//!
//! let a = DenseMatrix::from_rows(vec![vec![4.0, -1.0], vec![2.0, 1.0]])?;
//! let p = char_poly(&a)?;
//! let eigenvalues = real_roots(&p)?;
//! assert_eq!(eigenvalues.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use spectra_linalg as linalg;
pub use spectra_poly as poly;
pub use spectra_rings as rings;
pub use spectra_roots as roots;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use spectra_linalg::{char_poly, DenseMatrix, LinalgError};
    pub use spectra_poly::SparsePoly;
    pub use spectra_rings::{CommutativeRing, EuclideanRing, Ring, RingError};
    pub use spectra_roots::{real_roots, real_roots_with, RefineMethod, RootError, RootFinder};
}
