//! # spectra-roots
//!
//! Real root isolation and refinement for the spectra CAS.
//!
//! This crate provides:
//! - Three interchangeable bracketed refinement methods: Newton, secant
//!   and a bracket-narrowing combination of the two
//! - A derivative-sequence isolation engine that brackets every real
//!   root of a polynomial between "stability points" (roots of lower
//!   derivative orders)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spectra_poly::SparsePoly;
//! use spectra_roots::real_roots;
//!
//! // x^2 - 1
//! let p = SparsePoly::new([(-1.0, 0), (1.0, 2)]);
//! assert_eq!(real_roots(&p).unwrap(), vec![-1.0, 1.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod isolate;
pub mod refine;

pub use refine::{RefineMethod, RootError};

use spectra_poly::SparsePoly;

/// Default absolute-difference convergence threshold.
pub const EPSILON: f64 = 1e-10;

/// Default bound on refinement iterations.
pub const MAX_ITERATIONS: usize = 200;

/// Root-finding configuration: convergence tolerance and iteration cap.
///
/// The tolerance is fixed at construction and shared by every refinement
/// method and the isolation engine's seeding offsets.
#[derive(Clone, Copy, Debug)]
pub struct RootFinder {
    epsilon: f64,
    max_iterations: usize,
}

impl RootFinder {
    /// Creates a finder with the given convergence tolerance.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            max_iterations: MAX_ITERATIONS,
        }
    }

    /// Overrides the refinement iteration bound.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns the configured tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub(crate) fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

impl Default for RootFinder {
    fn default() -> Self {
        Self::new(EPSILON)
    }
}

/// Finds all real roots of `p` with the default Newton refinement.
///
/// # Errors
///
/// Propagates any [`RootError`] surfacing out of refinement.
pub fn real_roots(p: &SparsePoly) -> Result<Vec<f64>, RootError> {
    RootFinder::default().roots(p, RefineMethod::Newton)
}

/// Finds all real roots of `p` with the given refinement method.
///
/// # Errors
///
/// Propagates any [`RootError`] surfacing out of refinement.
pub fn real_roots_with(p: &SparsePoly, method: RefineMethod) -> Result<Vec<f64>, RootError> {
    RootFinder::default().roots(p, method)
}
