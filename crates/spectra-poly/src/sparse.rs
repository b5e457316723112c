//! Sparse univariate polynomials over the reals.
//!
//! Terms are `(coefficient, exponent)` pairs in strictly ascending
//! exponent order; zero coefficients are never stored. The zero
//! polynomial is the empty term list and has degree −1.

use smallvec::SmallVec;
use spectra_rings::traits::{CommutativeRing, EuclideanRing, Ring, RingError};

/// Term storage. Polynomials in this domain rarely exceed a handful of
/// non-zero terms, so small ones live inline.
type Terms = SmallVec<[(f64, u32); 4]>;

/// A sparse univariate polynomial with `f64` coefficients.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SparsePoly {
    terms: Terms,
}

impl SparsePoly {
    /// Creates a polynomial from arbitrary terms.
    ///
    /// Terms are sorted, equal exponents merged, and zero coefficients
    /// dropped, re-establishing the representation invariant.
    #[must_use]
    pub fn new(terms: impl IntoIterator<Item = (f64, u32)>) -> Self {
        let mut raw: Terms = terms.into_iter().collect();
        raw.sort_by_key(|&(_, e)| e);

        let mut merged = Terms::new();
        for (c, e) in raw {
            match merged.last_mut() {
                Some(last) if last.1 == e => last.0 += c,
                _ => merged.push((c, e)),
            }
            if merged.last().is_some_and(|&(c, _)| c == 0.0) {
                merged.pop();
            }
        }
        Self { terms: merged }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: Terms::new(),
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1.0)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: f64, n: u32) -> Self {
        let mut terms = Terms::new();
        if c != 0.0 {
            terms.push((c, n));
        }
        Self { terms }
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(1.0, 1)
    }

    /// Returns the degree, or −1 for the zero polynomial.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn degree(&self) -> i32 {
        self.terms.last().map_or(-1, |&(_, e)| e as i32)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the non-zero terms in ascending exponent order.
    #[must_use]
    pub fn terms(&self) -> &[(f64, u32)] {
        &self.terms
    }

    /// Returns the leading coefficient, or 0 for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> f64 {
        self.terms.last().map_or(0.0, |&(c, _)| c)
    }

    /// Evaluates the polynomial at `x` as the sum of `c * x^e`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn eval(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .map(|&(c, e)| c * x.powi(e as i32))
            .sum()
    }

    /// Replaces the polynomial with its n-th formal derivative.
    ///
    /// Each pass drops the constant term and maps every remaining term
    /// to `(c * e, e − 1)`.
    pub fn difference(&mut self, n: usize) {
        for _ in 0..n {
            if let Some(&(_, 0)) = self.terms.first() {
                self.terms.remove(0);
            }
            for term in &mut self.terms {
                term.0 *= f64::from(term.1);
                term.1 -= 1;
            }
        }
    }

    /// Returns the n-th formal derivative without mutating the receiver.
    #[must_use]
    pub fn differenced(&self, n: usize) -> Self {
        let mut result = self.clone();
        result.difference(n);
        result
    }

    /// Merges the ordered term lists of two polynomials.
    fn alg_sum(&self, other: &Self, subtract: bool) -> Self {
        let sign = if subtract { -1.0 } else { 1.0 };
        let mut terms = Terms::new();
        let (mut i, mut j) = (0, 0);
        while i < self.terms.len() && j < other.terms.len() {
            let (ca, ea) = self.terms[i];
            let (cb, eb) = other.terms[j];
            if ea < eb {
                terms.push((ca, ea));
                i += 1;
            } else if eb < ea {
                terms.push((sign * cb, eb));
                j += 1;
            } else {
                let c = ca + sign * cb;
                if c != 0.0 {
                    terms.push((c, ea));
                }
                i += 1;
                j += 1;
            }
        }
        terms.extend_from_slice(&self.terms[i..]);
        terms.extend(other.terms[j..].iter().map(|&(c, e)| (sign * c, e)));
        Self { terms }
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.alg_sum(other, false)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.alg_sum(other, true)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|&(c, e)| (-c, e)).collect(),
        }
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for &(ca, ea) in &self.terms {
            for &(cb, eb) in &other.terms {
                terms.push((ca * cb, ea + eb));
            }
        }
        Self::new(terms)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        if c == 0.0 {
            return Self::zero();
        }
        Self {
            terms: self.terms.iter().map(|&(a, e)| (a * c, e)).collect(),
        }
    }

    /// Euclidean division: repeatedly divides by the leading term of the
    /// divisor until the remainder's degree drops below the divisor's.
    ///
    /// # Errors
    ///
    /// Fails with [`RingError::DivisionByZero`] for a zero divisor.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), RingError> {
        let Some(&(dc, de)) = divisor.terms.last() else {
            return Err(RingError::DivisionByZero);
        };

        let mut rem = self.clone();
        let mut quo_terms = Terms::new();
        while rem.degree() >= divisor.degree() {
            let Some(&(rc, re)) = rem.terms.last() else {
                break;
            };
            let (qc, qe) = (rc / dc, re - de);
            quo_terms.push((qc, qe));
            rem = rem.sub(&divisor.mul(&Self::monomial(qc, qe)));
            // the leading terms cancel by construction; drop any
            // floating-point residue so the degree strictly decreases
            if let Some(&(_, e)) = rem.terms.last() {
                if e == re {
                    rem.terms.pop();
                }
            }
        }
        quo_terms.reverse();
        Ok((Self { terms: quo_terms }, rem))
    }

    /// Views a constant polynomial as its scalar value.
    ///
    /// The zero polynomial is the constant 0.
    ///
    /// # Errors
    ///
    /// Fails with [`RingError::TypeCast`] if the degree is positive.
    pub fn as_scalar(&self) -> Result<f64, RingError> {
        match self.terms.as_slice() {
            [] => Ok(0.0),
            [(c, 0)] => Ok(*c),
            _ => Err(RingError::TypeCast),
        }
    }
}

impl Ring for SparsePoly {
    fn zero() -> Self {
        SparsePoly::zero()
    }

    fn one() -> Self {
        SparsePoly::one()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    fn is_one(&self) -> bool {
        matches!(self.terms.as_slice(), [(c, 0)] if *c == 1.0)
    }

    #[allow(clippy::cast_precision_loss)]
    fn mul_by_scalar(&self, n: i64) -> Self {
        self.scale(n as f64)
    }
}

impl CommutativeRing for SparsePoly {}

impl EuclideanRing for SparsePoly {
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), RingError> {
        SparsePoly::div_rem(self, other)
    }
}

impl num_traits::Zero for SparsePoly {
    fn zero() -> Self {
        SparsePoly::zero()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl num_traits::One for SparsePoly {
    fn one() -> Self {
        SparsePoly::one()
    }
}

impl std::ops::Add for SparsePoly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        SparsePoly::add(&self, &rhs)
    }
}

impl std::ops::Sub for SparsePoly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        SparsePoly::sub(&self, &rhs)
    }
}

impl std::ops::Mul for SparsePoly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        SparsePoly::mul(&self, &rhs)
    }
}

impl std::ops::Neg for SparsePoly {
    type Output = Self;

    fn neg(self) -> Self {
        SparsePoly::neg(&self)
    }
}

impl From<f64> for SparsePoly {
    fn from(c: f64) -> Self {
        Self::constant(c)
    }
}

impl std::fmt::Display for SparsePoly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (k, &(c, e)) in self.terms.iter().rev().enumerate() {
            if k == 0 {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {} ", if c < 0.0 { '-' } else { '+' })?;
            }
            let a = c.abs();
            match e {
                0 => write!(f, "{a}")?,
                1 => write!(f, "{a}*x")?,
                _ => write!(f, "{a}*x^{e}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes() {
        // duplicate exponents merge, zero sums vanish
        let p = SparsePoly::new([(2.0, 1), (3.0, 0), (-2.0, 1), (1.0, 2)]);
        assert_eq!(p.terms(), &[(3.0, 0), (1.0, 2)]);

        let q = SparsePoly::new([(0.0, 5)]);
        assert!(q.is_zero());
        assert_eq!(q.degree(), -1);
    }

    #[test]
    fn test_degree_sentinel() {
        assert_eq!(SparsePoly::zero().degree(), -1);
        assert_eq!(SparsePoly::constant(4.0).degree(), 0);
        assert_eq!(SparsePoly::monomial(1.0, 7).degree(), 7);
    }

    #[test]
    fn test_add_sub() {
        let p = SparsePoly::new([(1.0, 0), (2.0, 1)]);
        let q = SparsePoly::new([(3.0, 0), (-2.0, 1), (4.0, 3)]);

        let sum = p.add(&q);
        assert_eq!(sum.terms(), &[(4.0, 0), (4.0, 3)]);

        let diff = sum.sub(&q);
        assert_eq!(diff, p);
    }

    #[test]
    fn test_mul() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        let p = SparsePoly::new([(1.0, 0), (2.0, 1)]);
        let q = SparsePoly::new([(3.0, 0), (4.0, 1)]);
        let prod = p.mul(&q);
        assert_eq!(prod.terms(), &[(3.0, 0), (10.0, 1), (8.0, 2)]);
    }

    #[test]
    fn test_eval() {
        // p(x) = 1 + 2x + 3x^2, p(2) = 17
        let p = SparsePoly::new([(1.0, 0), (2.0, 1), (3.0, 2)]);
        assert_eq!(p.eval(2.0), 17.0);
        assert_eq!(SparsePoly::zero().eval(5.0), 0.0);
    }

    #[test]
    fn test_difference() {
        // d/dx (1 + x + x^3) = 1 + 3x^2
        let p = SparsePoly::new([(1.0, 0), (1.0, 1), (1.0, 3)]);
        let d = p.differenced(1);
        assert_eq!(d.terms(), &[(1.0, 0), (3.0, 2)]);

        // second derivative: 6x
        let d2 = p.differenced(2);
        assert_eq!(d2.terms(), &[(6.0, 1)]);

        // differentiating past the degree yields zero
        assert!(p.differenced(4).is_zero());
    }

    #[test]
    fn test_div_rem_reconstruction() {
        // (x^3 - 2x + 5) / (x - 1): q = x^2 + x - 1, r = 4
        let p = SparsePoly::new([(5.0, 0), (-2.0, 1), (1.0, 3)]);
        let d = SparsePoly::new([(-1.0, 0), (1.0, 1)]);
        let (q, r) = p.div_rem(&d).unwrap();

        assert_eq!(q.terms(), &[(-1.0, 0), (1.0, 1), (1.0, 2)]);
        assert_eq!(r.terms(), &[(4.0, 0)]);
        assert_eq!(q.mul(&d).add(&r), p);
        assert!(r.degree() < d.degree());
    }

    #[test]
    fn test_div_by_zero() {
        let p = SparsePoly::x();
        assert_eq!(
            p.div_rem(&SparsePoly::zero()),
            Err(RingError::DivisionByZero)
        );
    }

    #[test]
    fn test_as_scalar() {
        assert_eq!(SparsePoly::constant(2.5).as_scalar(), Ok(2.5));
        assert_eq!(SparsePoly::zero().as_scalar(), Ok(0.0));
        assert_eq!(SparsePoly::x().as_scalar(), Err(RingError::TypeCast));
    }

    #[test]
    fn test_ring_pow() {
        // (x + 1)^3 = x^3 + 3x^2 + 3x + 1
        let p = SparsePoly::new([(1.0, 0), (1.0, 1)]);
        let cube = Ring::pow(&p, 3);
        assert_eq!(cube.terms(), &[(1.0, 0), (3.0, 1), (3.0, 2), (1.0, 3)]);
    }

    #[test]
    fn test_display() {
        let p = SparsePoly::new([(1.0, 0), (-2.0, 1), (3.0, 2)]);
        assert_eq!(p.to_string(), "3*x^2 - 2*x + 1");
        assert_eq!(SparsePoly::zero().to_string(), "0");
        assert_eq!(SparsePoly::constant(-1.5).to_string(), "-1.5");
    }
}
