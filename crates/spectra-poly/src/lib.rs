//! # spectra-poly
//!
//! Sparse univariate polynomial arithmetic for the spectra CAS.
//!
//! This crate provides [`SparsePoly`], a polynomial with `f64`
//! coefficients stored as an ordered list of non-zero terms. It is the
//! ring value type consumed by the root-isolation engine and the element
//! type for characteristic-polynomial matrices.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod sparse;

#[cfg(test)]
mod proptests;

pub use sparse::SparsePoly;
