//! # spectra-linalg
//!
//! Dense linear algebra over commutative rings.
//!
//! This crate provides:
//! - Dense row-major matrices generic over a ring of entries
//! - Parallel matrix products via rayon
//! - Fraction-free elimination for determinants over any ring with
//!   exact division, including polynomial rings
//! - Characteristic polynomials of real matrices
//!
//! Because elimination never leaves the entry ring, determinants of
//! integer-valued or polynomial-valued matrices come out exact rather
//! than as accumulated quotients.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod elimination;

pub use dense_matrix::{DenseMatrix, LinalgError};
pub use elimination::char_poly;
