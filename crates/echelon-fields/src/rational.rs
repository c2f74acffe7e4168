//! The field of rational numbers Q.
//!
//! Entries are kept normalized (positive denominator, gcd one), so
//! derived equality and hashing behave as expected. Components are
//! `i128`, which comfortably covers the elimination workloads this kit
//! is built for; arbitrary precision is out of scope here.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::traits::{Field, Ring};

/// An exact rational number with `i128` components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Q {
    num: i128,
    den: i128,
}

const fn gcd_i128(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.abs()
}

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self::from_ratio(i128::from(num), i128::from(den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self {
            num: i128::from(n),
            den: 1,
        }
    }

    /// Creates a normalized rational from raw `i128` components.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn from_ratio(num: i128, den: i128) -> Self {
        assert!(den != 0, "rational denominator must be non-zero");
        if num == 0 {
            return Self { num: 0, den: 1 };
        }
        let g = gcd_i128(num, den);
        let sign = if den < 0 { -1 } else { 1 };
        Self {
            num: sign * num / g,
            den: sign * den / g,
        }
    }

    /// Returns the (normalized) numerator.
    #[must_use]
    pub const fn numer(&self) -> i128 {
        self.num
    }

    /// Returns the (normalized, positive) denominator.
    #[must_use]
    pub const fn denom(&self) -> i128 {
        self.den
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self { num: 0, den: 1 }
    }

    fn one() -> Self {
        Self { num: 1, den: 1 }
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }

    fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.num == 0 {
            None
        } else {
            Some(Self::from_ratio(self.den, self.num))
        }
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_ratio(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_ratio(self.num * rhs.den - rhs.num * self.den, self.den * rhs.den)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_ratio(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Div for Q {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::from_ratio(self.num * rhs.den, self.den * rhs.num)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Zero for Q {
    fn zero() -> Self {
        Ring::zero()
    }

    fn is_zero(&self) -> bool {
        Ring::is_zero(self)
    }
}

impl One for Q {
    fn one() -> Self {
        Ring::one()
    }

    fn is_one(&self) -> bool {
        Ring::is_one(self)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
