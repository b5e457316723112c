//! Bracketed root refinement methods.
//!
//! All three methods operate on an interval known to contain exactly one
//! simple root. An endpoint where the function is exactly zero is
//! returned immediately, before any iteration.

use spectra_poly::SparsePoly;
use thiserror::Error;

use crate::RootFinder;

/// Errors from root refinement and isolation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RootError {
    /// The endpoints do not bracket a sign change, or a narrow-seed
    /// requirement was violated.
    #[error("endpoints do not satisfy the bracketing precondition")]
    BadInterval,
    /// A bracket-extension precondition was violated.
    #[error("cannot extend the bracket past this point")]
    BadPoint,
    /// The iteration limit was reached before convergence.
    #[error("refinement did not converge")]
    DidNotConverge,
}

/// Selects the point-refinement algorithm used on an isolating interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefineMethod {
    /// Newton iteration from the convex-side endpoint.
    #[default]
    Newton,
    /// Secant iteration from a pair of nearby seed points.
    Secant,
    /// Bracket-narrowing hybrid of a Newton and a secant step.
    Combined,
}

impl RootFinder {
    /// Newton refinement on the bracketing interval `[x_l, x_r]`.
    ///
    /// The starting endpoint is chosen by the midpoint convexity test
    /// `f'(m) * f''(m) > 0`: a positive product starts from the right
    /// endpoint, keeping the iterates on the side where the function is
    /// convex toward the root so they approach it monotonically.
    ///
    /// # Errors
    ///
    /// [`RootError::BadInterval`] if the endpoint values share a sign;
    /// [`RootError::DidNotConverge`] past the iteration bound.
    pub fn newton(
        &self,
        f: &SparsePoly,
        f_diff: &SparsePoly,
        f_diff_2: &SparsePoly,
        x_l: f64,
        x_r: f64,
    ) -> Result<f64, RootError> {
        if f.eval(x_l) == 0.0 {
            return Ok(x_l);
        }
        if f.eval(x_r) == 0.0 {
            return Ok(x_r);
        }
        if f.eval(x_l) * f.eval(x_r) > 0.0 {
            return Err(RootError::BadInterval);
        }

        let x_med = (x_l + x_r) / 2.0;
        let mut x_0 = if f_diff.eval(x_med) * f_diff_2.eval(x_med) > 0.0 {
            x_r
        } else {
            x_l
        };
        let mut x_1 = x_0 - f.eval(x_0) / f_diff.eval(x_0);
        for _ in 0..self.max_iterations() {
            if !x_1.is_finite() {
                return Err(RootError::DidNotConverge);
            }
            if (x_0 - x_1).abs() <= self.epsilon() {
                return Ok(x_1);
            }
            x_0 = x_1;
            x_1 = x_1 - f.eval(x_1) / f_diff.eval(x_1);
        }
        Err(RootError::DidNotConverge)
    }

    /// Secant refinement from two seed points already close to the root.
    ///
    /// A seed pair that brackets a sign change must be within `2ε` of
    /// each other; wide brackets belong to the other methods.
    ///
    /// # Errors
    ///
    /// [`RootError::BadInterval`] for a wide sign-changing seed pair;
    /// [`RootError::DidNotConverge`] past the iteration bound or when an
    /// iterate degenerates (equal function values, non-finite point).
    pub fn secant(&self, f: &SparsePoly, x_1: f64, x_2: f64) -> Result<f64, RootError> {
        let (f_1, f_2) = (f.eval(x_1), f.eval(x_2));
        if f_1 == 0.0 {
            return Ok(x_1);
        }
        if f_2 == 0.0 {
            return Ok(x_2);
        }
        if f_1 * f_2 < 0.0 && (x_2 - x_1).abs() > 2.0 * self.epsilon() {
            return Err(RootError::BadInterval);
        }

        let (mut x_1, mut x_2) = (x_1, x_2);
        for _ in 0..self.max_iterations() {
            if !x_2.is_finite() {
                return Err(RootError::DidNotConverge);
            }
            if (x_2 - x_1).abs() <= self.epsilon() {
                return Ok(x_2);
            }
            let (f_a, f_b) = (f.eval(x_1), f.eval(x_2));
            let denom = f_b - f_a;
            if denom == 0.0 {
                return Err(RootError::DidNotConverge);
            }
            let next = x_1 - f_a * (x_2 - x_1) / denom;
            x_1 = x_2;
            x_2 = next;
        }
        Err(RootError::DidNotConverge)
    }

    /// Bracket-narrowing hybrid on the interval `[x_l, x_r]`.
    ///
    /// One working point advances by a full Newton step from its own
    /// position, the other by a secant step between the two current
    /// points; the points close in on the root from both sides. The
    /// Newton-side assignment follows the same convexity test as
    /// [`RootFinder::newton`].
    ///
    /// # Errors
    ///
    /// [`RootError::BadInterval`] if the endpoint values share a sign;
    /// [`RootError::DidNotConverge`] past the iteration bound or on a
    /// degenerate iterate.
    pub fn combined(
        &self,
        f: &SparsePoly,
        f_diff: &SparsePoly,
        f_diff_2: &SparsePoly,
        x_l: f64,
        x_r: f64,
    ) -> Result<f64, RootError> {
        if f.eval(x_l) == 0.0 {
            return Ok(x_l);
        }
        if f.eval(x_r) == 0.0 {
            return Ok(x_r);
        }
        if f.eval(x_l) * f.eval(x_r) > 0.0 {
            return Err(RootError::BadInterval);
        }

        let x_med = (x_l + x_r) / 2.0;
        let (mut x_a, mut x_b) = if f_diff.eval(x_med) * f_diff_2.eval(x_med) > 0.0 {
            (x_r, x_l)
        } else {
            (x_l, x_r)
        };
        for _ in 0..self.max_iterations() {
            if !(x_a.is_finite() && x_b.is_finite()) {
                return Err(RootError::DidNotConverge);
            }
            if (x_a - x_b).abs() <= self.epsilon() {
                return Ok((x_a + x_b) / 2.0);
            }
            let (f_a, f_b) = (f.eval(x_a), f.eval(x_b));
            let denom = f_a - f_b;
            let slope = f_diff.eval(x_a);
            if denom == 0.0 || slope == 0.0 {
                return Err(RootError::DidNotConverge);
            }
            let next_b = x_b - f_b * (x_a - x_b) / denom;
            let next_a = x_a - f_a / slope;
            x_a = next_a;
            x_b = next_b;
        }
        Err(RootError::DidNotConverge)
    }
}
