//! Algebraic structure traits.
//!
//! These traits describe the capability set a scalar type must satisfy
//! for matrix entries. The laws are caller contracts: violating them
//! silently produces wrong numeric results with no detectable error.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

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

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }

    /// The absolute value used for partial pivot selection.
    ///
    /// Floating-point fields return `Some(|x|)` so elimination can pick
    /// the maximum-magnitude pivot for numerical stability. Exact fields
    /// return `None` (the default): magnitude comparison is meaningless
    /// over e.g. Z/p, and first-nonzero pivoting applies instead.
    fn magnitude(&self) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::Q;

    #[test]
    fn test_default_pow() {
        let a = Q::from_integer(3);
        assert_eq!(a.pow(0), Q::one());
        assert_eq!(a.pow(4), Q::from_integer(81));
    }

    #[test]
    fn test_default_mul_by_scalar() {
        let a = Q::new(1, 2);
        assert_eq!(a.mul_by_scalar(4), Q::from_integer(2));
        assert_eq!(a.mul_by_scalar(-4), Q::from_integer(-2));
        assert_eq!(a.mul_by_scalar(0), Q::zero());
    }

    #[test]
    fn test_field_div() {
        let a = Q::from_integer(3);
        let b = Q::from_integer(4);
        assert_eq!(a.field_div(&b), Q::new(3, 4));
    }
}
