//! The ordered field trait.
//!
//! A quantity's magnitude may be a machine float, an exact rational or any
//! other numeric type; the unit engine reaches it only through this trait.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};
use unitas_numbers::Rational;

/// An ordered field with integer and rational powers.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Every non-zero element has a multiplicative inverse (`one() / x`)
/// - `a <= b` implies `a + c <= b + c`
///
/// Ordering is partial so that IEEE floats qualify; NaN simply compares
/// unordered.
pub trait OrderedField:
    Clone
    + Debug
    + Display
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Embeds an integer.
    fn from_i64(n: i64) -> Self;

    /// Computes self^n for any integer n.
    ///
    /// Returns `None` for a negative power of zero.
    fn powi(&self, n: i64) -> Option<Self> {
        if n < 0 && self.is_zero() {
            return None;
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n.unsigned_abs();

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        if n < 0 {
            Some(Self::one() / result)
        } else {
            Some(result)
        }
    }

    /// Computes self^p for a rational exponent.
    ///
    /// Returns `None` when the power is undefined for this type, e.g. an even
    /// root of a negative value, or a root with no exact representation.
    fn powr(&self, p: &Rational) -> Option<Self>;

    /// Returns true if this value is below zero.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Returns the absolute value.
    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Largest integer not greater than self.
    fn floor(&self) -> Self;

    /// Smallest integer not less than self.
    fn ceil(&self) -> Self;

    /// Nearest integer, rounding half away from zero.
    fn round(&self) -> Self;

    /// Integer part, rounding towards zero.
    fn trunc(&self) -> Self;

    /// Lossy conversion to `f64`.
    fn to_f64(&self) -> f64;

    /// Computes `10^decades`, the factor of a decimal prefix scale.
    fn ten_pow(decades: &Rational) -> Option<Self> {
        let ten = Self::from_i64(10);
        match decades.to_i64() {
            Some(n) => ten.powi(n),
            None => ten.powr(decades),
        }
    }

    /// Multiplies by `10^decades`.
    ///
    /// Negative integral decades divide by the positive power instead of
    /// multiplying by a reciprocal, which keeps `500 * 10^-3` exact in
    /// binary floating point.
    fn rescale(&self, decades: &Rational) -> Option<Self> {
        if decades.is_zero() {
            return Some(self.clone());
        }
        if decades.is_integer() && decades.is_negative() {
            let divisor = Self::ten_pow(&-decades)?;
            return Some(self.clone() / divisor);
        }
        Some(self.clone() * Self::ten_pow(decades)?)
    }
}
