//! # spectra-rings
//!
//! Algebraic structures for the spectra CAS.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `CommutativeRing`, `EuclideanRing`
//! - The real numbers (`f64`) as a concrete ring instance
//! - `RingError`, the error type shared by fallible ring operations
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── EuclideanRing
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod reals;
pub mod traits;

pub use traits::{CommutativeRing, EuclideanRing, Ring, RingError};
