//! Decimal scale factors.
//!
//! Every prefix is a power of ten and every exponent is rational, so any
//! scale reachable through parsing and arithmetic is `10^d` for a rational
//! `d`. Storing `d` keeps scale arithmetic exact: multiplying scales adds
//! decades and raising a scale to `p` multiplies them by `p`.

use std::fmt;
use std::ops::{Div, Mul};

use num_traits::Zero;
use unitas_numbers::Rational;

use crate::prefix::Prefix;

/// A scale factor `10^decades`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Scale(Rational);

impl Scale {
    /// The unit scale, `10^0`.
    #[must_use]
    pub fn one() -> Self {
        Self(Rational::zero())
    }

    /// Creates the scale `10^decades`.
    #[must_use]
    pub fn from_decades(decades: Rational) -> Self {
        Self(decades)
    }

    /// The scale contributed by `prefix` raised to `exponent`.
    #[must_use]
    pub fn of_prefix(prefix: Option<Prefix>, exponent: &Rational) -> Self {
        match prefix {
            Some(prefix) => Self(prefix.decades_rational() * exponent),
            None => Self::one(),
        }
    }

    /// The decade exponent `d` of `10^d`.
    #[must_use]
    pub fn decades(&self) -> &Rational {
        &self.0
    }

    /// Returns true for the unit scale.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_zero()
    }

    /// Product of two scales.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self(&self.0 + &other.0)
    }

    /// Quotient of two scales.
    #[must_use]
    pub fn divide(&self, other: &Self) -> Self {
        Self(&self.0 - &other.0)
    }

    /// This scale raised to a rational power.
    #[must_use]
    pub fn pow(&self, power: &Rational) -> Self {
        Self(&self.0 * power)
    }

    /// The reciprocal scale.
    #[must_use]
    pub fn recip(&self) -> Self {
        Self(-&self.0)
    }

    /// The scale as a real number.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self.0.to_i64().and_then(|d| i32::try_from(d).ok()) {
            Some(d) => 10f64.powi(d),
            None => 10f64.powf(self.0.to_f64()),
        }
    }
}

impl Mul for &Scale {
    type Output = Scale;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Div for &Scale {
    type Output = Scale;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl fmt::Debug for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scale(10^{})", self.0)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "1e{}", self.0)
        } else {
            write!(f, "10^({})", self.0)
        }
    }
}

impl From<Prefix> for Scale {
    fn from(prefix: Prefix) -> Self {
        Self(prefix.decades_rational())
    }
}
