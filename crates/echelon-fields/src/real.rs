//! The field of real numbers, approximated by `f64`.
//!
//! Floating-point arithmetic accumulates rounding error; this is an
//! accuracy contract, not an error condition. Callers compare results
//! with [`R64::approx_eq`] rather than exact equality.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::traits::{Field, Ring};

/// An `f64` scalar usable as a matrix entry.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct R64(f64);

impl R64 {
    /// Wraps an `f64`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64`.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Compares two values within an absolute tolerance.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

impl Ring for R64 {
    fn zero() -> Self {
        Self(0.0)
    }

    fn one() -> Self {
        Self(1.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    fn is_one(&self) -> bool {
        self.0 == 1.0
    }
}

impl Field for R64 {
    fn inv(&self) -> Option<Self> {
        if Ring::is_zero(self) {
            None
        } else {
            Some(Self(1.0 / self.0))
        }
    }

    fn magnitude(&self) -> Option<f64> {
        Some(self.0.abs())
    }
}

impl Add for R64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for R64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for R64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for R64 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for R64 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Zero for R64 {
    fn zero() -> Self {
        Ring::zero()
    }

    fn is_zero(&self) -> bool {
        Ring::is_zero(self)
    }
}

impl One for R64 {
    fn one() -> Self {
        Ring::one()
    }
}

impl From<f64> for R64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for R64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
