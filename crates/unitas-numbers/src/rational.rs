//! Arbitrary precision rational numbers.
//!
//! Dimension exponents and prefix decades are rationals, and rationals
//! double as an exact magnitude type.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::Integer;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

/// Error returned when a string is not a valid rational literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRationalError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseRationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid rational literal '{}'", self.input)
    }
}

impl std::error::Error for ParseRationalError {}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        Self::from_parts(numerator, denominator)
    }

    /// Creates a new rational, returning `None` for a zero denominator.
    #[must_use]
    pub fn checked_new(numerator: Integer, denominator: Integer) -> Option<Self> {
        if denominator.is_zero() {
            None
        } else {
            Some(Self::from_parts(numerator, denominator))
        }
    }

    fn from_parts(numerator: Integer, denominator: Integer) -> Self {
        let negative = denominator.is_negative();
        let value = RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        );
        if negative {
            Self(-value)
        } else {
            Self(value)
        }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Closest rational to `value` whose denominator does not exceed
    /// `max_denominator`, found by continued fraction expansion.
    ///
    /// Returns `None` for non-finite input or when the convergents overflow.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn approximate_f64(value: f64, max_denominator: i64) -> Option<Self> {
        if !value.is_finite() || max_denominator < 1 {
            return None;
        }
        let (mut h_prev, mut h) = (0i64, 1i64);
        let (mut k_prev, mut k) = (1i64, 0i64);
        let mut x = value;

        loop {
            let a = x.floor();
            if a.abs() >= 9.0e18 {
                return None;
            }
            let a = a as i64;
            let h_next = a.checked_mul(h)?.checked_add(h_prev)?;
            let k_next = a.checked_mul(k)?.checked_add(k_prev)?;
            if k_next > max_denominator {
                break;
            }
            (h_prev, h) = (h, h_next);
            (k_prev, k) = (k, k_next);

            let fraction = x - x.floor();
            if fraction < 1e-12 {
                break;
            }
            x = 1.0 / fraction;
        }

        (k != 0).then(|| Self::from_i64(h, k))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(dashu::integer::IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator())
        } else {
            None
        }
    }

    /// Converts to an `i64` if this is an integer that fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.to_integer().and_then(|n| n.to_i64())
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        let numerator = self.numerator();
        let denominator = self.denominator();
        match (numerator.to_i64(), denominator.to_i64()) {
            (Some(n), Some(d)) => n as f64 / d as f64,
            _ => numerator.to_f64() / denominator.to_f64(),
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Computes self^exp for any integer exponent.
    ///
    /// Returns `None` when a negative power of zero is requested.
    #[must_use]
    pub fn powi(&self, exp: i64) -> Option<Self> {
        let magnitude = u32::try_from(exp.unsigned_abs()).ok()?;
        let positive = self.pow(magnitude);
        if exp >= 0 {
            Some(positive)
        } else if positive.is_zero() {
            None
        } else {
            Some(positive.recip())
        }
    }

    /// Exact rational power, defined when the result is itself rational.
    ///
    /// `(4/9)^(1/2)` is `2/3`, while `2^(1/2)` has no rational value and
    /// yields `None`. Even roots of negative values also yield `None`.
    #[must_use]
    pub fn pow_exact(&self, exp: &Rational) -> Option<Self> {
        let exp_numerator = exp.numerator().to_i64()?;
        let root = u32::try_from(exp.denominator().to_i64()?).ok()?;
        let raised = self.powi(exp_numerator)?;
        if root == 1 {
            return Some(raised);
        }
        let numerator = raised.numerator().nth_root_exact(root)?;
        let denominator = raised.denominator().nth_root_exact(root)?;
        Some(Self::new(numerator, denominator))
    }

    /// Largest integer not greater than self.
    #[must_use]
    pub fn floor(&self) -> Self {
        Self::from_integer(self.numerator().div_floor(&self.denominator()))
    }

    /// Smallest integer not less than self.
    #[must_use]
    pub fn ceil(&self) -> Self {
        -(-self).floor()
    }

    /// Integer part, rounding towards zero.
    #[must_use]
    pub fn trunc(&self) -> Self {
        if self.is_negative() {
            self.ceil()
        } else {
            self.floor()
        }
    }

    /// Nearest integer, rounding half away from zero.
    #[must_use]
    pub fn round(&self) -> Self {
        let half = Self::from_i64(1, 2);
        if self.is_negative() {
            -(self.abs() + half).floor()
        } else {
            (self.clone() + half).floor()
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `"3"`, `"-3/4"` or a decimal such as `"0.25"` exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseRationalError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let value = if let Some((num, den)) = digits.split_once('/') {
            let num = parse_digits(num).ok_or_else(error)?;
            let den = parse_digits(den).ok_or_else(error)?;
            Self::checked_new(num, den).ok_or_else(error)?
        } else if let Some((whole, frac)) = digits.split_once('.') {
            if whole.is_empty() && frac.is_empty() {
                return Err(error());
            }
            let whole = if whole.is_empty() {
                Integer::zero()
            } else {
                parse_digits(whole).ok_or_else(error)?
            };
            let scale = Integer::new(10).pow(u32::try_from(frac.len()).map_err(|_| error())?);
            let frac = if frac.is_empty() {
                Integer::zero()
            } else {
                parse_digits(frac).ok_or_else(error)?
            };
            Self::new(whole * scale.clone() + frac, scale)
        } else {
            Self::from_integer(parse_digits(digits).ok_or_else(error)?)
        };

        Ok(if negative { -value } else { value })
    }
}

fn parse_digits(s: &str) -> Option<Integer> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Integer::from_str_radix(s, 10).ok()
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        Rational(&self.0 / &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::new(i64::from(n)))
    }
}
