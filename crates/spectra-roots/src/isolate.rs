//! Derivative-sequence root isolation.
//!
//! The engine walks derivative orders from linear up to the original
//! polynomial. Roots of the two previous orders bound the monotonic
//! regions of the current one, so each sign change between consecutive
//! "stability points" isolates exactly one simple root, which a
//! refinement method then converges on.

use spectra_poly::SparsePoly;

use crate::refine::{RefineMethod, RootError};
use crate::RootFinder;

/// Direction of a bracket extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Extends the stability set outward from the boundary point `x`.
///
/// Steps away from `x` by a doubling distance until the sign of `f`
/// differs from `f(x)`; past that point no further roots of `f` exist in
/// that direction.
///
/// # Errors
///
/// [`RootError::BadPoint`] when `f` already vanishes at `x`, or the
/// derivative sign at the first trial point shows there is no root past
/// `x`. The caller treats this as "no extension possible".
fn border_point(f: &SparsePoly, x: f64, side: Side) -> Result<f64, RootError> {
    let s = side.sign();
    let mut step = 2.0 * s;
    let value = f.eval(x);
    if f.differenced(1).eval(x + step) * value * s > 0.0 || value == 0.0 {
        return Err(RootError::BadPoint);
    }
    while value * f.eval(x + step) > 0.0 {
        step *= 2.0;
    }
    Ok(x + step)
}

/// Inserts `x` into the sorted set `points`, ignoring exact duplicates.
fn insert_point(points: &mut Vec<f64>, x: f64) {
    // fold -0.0 into 0.0, which total_cmp would otherwise keep distinct
    let x = if x == 0.0 { 0.0 } else { x };
    if let Err(pos) = points.binary_search_by(|p| p.total_cmp(&x)) {
        points.insert(pos, x);
    }
}

/// Closed-form root of a linear polynomial: 0 for a bare monomial,
/// −a/b for a + b·x.
fn linear_root(p: &SparsePoly) -> f64 {
    let terms = p.terms();
    if terms.len() == 1 {
        0.0
    } else {
        -terms[0].0 / terms[terms.len() - 1].0
    }
}

impl RootFinder {
    /// Computes the set of real roots of `p`.
    ///
    /// Constant polynomials (and the zero polynomial) report no roots;
    /// linear polynomials are solved in closed form; everything else
    /// goes through the isolation engine. Roots come back sorted and
    /// deduplicated, without multiplicities.
    ///
    /// # Errors
    ///
    /// Propagates any [`RootError`] surfacing out of refinement on an
    /// isolating interval the engine established.
    pub fn roots(&self, p: &SparsePoly, method: RefineMethod) -> Result<Vec<f64>, RootError> {
        match p.degree() {
            -1 | 0 => Ok(Vec::new()),
            1 => Ok(vec![linear_root(p)]),
            _ => self.isolate(p, method),
        }
    }

    #[allow(clippy::cast_sign_loss)]
    fn isolate(&self, p: &SparsePoly, method: RefineMethod) -> Result<Vec<f64>, RootError> {
        let degree = p.degree() as usize;

        // derivs[i] has degree i; derivs[degree] is p itself
        let mut derivs = Vec::with_capacity(degree + 1);
        let mut current = p.clone();
        for _ in 0..=degree {
            derivs.push(current.clone());
            current.difference(1);
        }
        derivs.reverse();

        let mut zeros: Vec<Vec<f64>> = vec![Vec::new(); degree + 1];
        zeros[1] = vec![linear_root(&derivs[1])];

        for i in 2..=degree {
            let f = &derivs[i];

            let mut stability = Vec::new();
            for &z in zeros[i - 1].iter().chain(zeros[i - 2].iter()) {
                insert_point(&mut stability, z);
            }
            if stability.is_empty() {
                stability.push(0.0);
            }
            if let Ok(border) = border_point(f, stability[0], Side::Left) {
                insert_point(&mut stability, border);
            }
            if let Ok(border) = border_point(f, stability[stability.len() - 1], Side::Right) {
                insert_point(&mut stability, border);
            }

            let mut found = Vec::new();
            let mut k = 0;
            while k + 1 < stability.len() {
                let (left, right) = (stability[k], stability[k + 1]);
                let (f_l, f_r) = (f.eval(left), f.eval(right));
                if f_l * f_r < 0.0 {
                    let root =
                        self.refine(f, &derivs[i - 1], &derivs[i - 2], left, right, method)?;
                    insert_point(&mut found, root);
                }
                if f_l == 0.0 {
                    insert_point(&mut found, left);
                }
                if f_r == 0.0 {
                    insert_point(&mut found, right);
                    // an exact right root must not come back as the next
                    // pair's left endpoint
                    k += 1;
                }
                k += 1;
            }
            zeros[i] = found;
        }
        Ok(zeros[degree].clone())
    }

    /// Dispatches one isolating interval to the selected method.
    fn refine(
        &self,
        f: &SparsePoly,
        f_diff: &SparsePoly,
        f_diff_2: &SparsePoly,
        left: f64,
        right: f64,
        method: RefineMethod,
    ) -> Result<f64, RootError> {
        match method {
            RefineMethod::Newton => self.newton(f, f_diff, f_diff_2, left, right),
            RefineMethod::Combined => self.combined(f, f_diff, f_diff_2, left, right),
            RefineMethod::Secant => {
                let step = 1.75 * self.epsilon();
                // the nudge must move the function value by more than
                // evaluation noise, or the secant denominator is pure
                // rounding error; at an extremum endpoint it cannot
                let usable = |x: f64| {
                    f_diff.eval(x).abs() * step > f.eval(x).abs() * f64::EPSILON * 100.0
                };
                // prefer the flatter endpoint, nudged into the interval
                let (near, far, near_dir) = if f_diff.eval(left).abs() < f_diff.eval(right).abs()
                {
                    (left, right, 1.0)
                } else {
                    (right, left, -1.0)
                };
                let (seed, dir) = if usable(near) {
                    (near, near_dir)
                } else {
                    (far, -near_dir)
                };
                self.secant(f, seed, seed + step * dir)
            }
        }
    }
}
