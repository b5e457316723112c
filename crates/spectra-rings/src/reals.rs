//! The real numbers as a ring of `f64` values.
//!
//! Comparison to zero is exact: only the additive identity itself counts
//! as zero, matching the behavior expected by fraction-free elimination.

use crate::traits::{CommutativeRing, EuclideanRing, Ring, RingError};

impl Ring for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn is_one(&self) -> bool {
        *self == 1.0
    }

    #[allow(clippy::cast_precision_loss)]
    fn mul_by_scalar(&self, n: i64) -> Self {
        self * n as f64
    }

    #[allow(clippy::cast_possible_wrap)]
    fn pow(&self, n: u32) -> Self {
        self.powi(n as i32)
    }
}

impl CommutativeRing for f64 {}

impl EuclideanRing for f64 {
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), RingError> {
        if *other == 0.0 {
            return Err(RingError::DivisionByZero);
        }
        Ok((self / other, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert!(<f64 as Ring>::zero().is_zero());
        assert!(<f64 as Ring>::one().is_one());
        assert!(!(0.5f64).is_zero());
    }

    #[test]
    fn test_pow() {
        assert_eq!(Ring::pow(&2.0, 10), 1024.0);
        assert_eq!(Ring::pow(&3.0, 0), 1.0);
    }

    #[test]
    fn test_mul_by_scalar() {
        assert_eq!(2.5f64.mul_by_scalar(4), 10.0);
        assert_eq!(2.5f64.mul_by_scalar(-2), -5.0);
        assert_eq!(2.5f64.mul_by_scalar(0), 0.0);
    }

    #[test]
    fn test_div_rem() {
        let (q, r) = 7.0f64.div_rem(&2.0).unwrap();
        assert_eq!(q, 3.5);
        assert_eq!(r, 0.0);
        assert_eq!(1.0f64.div_rem(&0.0), Err(RingError::DivisionByZero));
    }
}
