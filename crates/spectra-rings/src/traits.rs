//! Algebraic structure traits.
//!
//! This module defines the core algebraic traits that matrices and
//! polynomials are built on top of.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use thiserror::Error;

/// Errors raised by ring element operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RingError {
    /// Division by the additive identity.
    #[error("division by zero")]
    DivisionByZero,
    /// A non-constant value was viewed as a plain scalar.
    #[error("value is not a constant scalar")]
    TypeCast,
}

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self + self + ... (n times).
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        let mut result = self.clone();
        let abs_n = n.unsigned_abs();

        for _ in 1..abs_n {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A commutative ring where multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// A commutative ring supporting division with remainder.
///
/// For any a, b with b ≠ 0, `div_rem` yields q, r such that a = b*q + r.
pub trait EuclideanRing: CommutativeRing {
    /// Computes the quotient and remainder of division.
    ///
    /// # Errors
    ///
    /// Fails with [`RingError::DivisionByZero`] if `other` is zero.
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), RingError>;

    /// Computes the quotient of division.
    ///
    /// # Errors
    ///
    /// Fails with [`RingError::DivisionByZero`] if `other` is zero.
    fn div(&self, other: &Self) -> Result<Self, RingError> {
        Ok(self.div_rem(other)?.0)
    }

    /// Computes the remainder of division.
    ///
    /// # Errors
    ///
    /// Fails with [`RingError::DivisionByZero`] if `other` is zero.
    fn rem(&self, other: &Self) -> Result<Self, RingError> {
        Ok(self.div_rem(other)?.1)
    }
}
