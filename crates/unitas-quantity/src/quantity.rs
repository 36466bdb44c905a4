//! Physical quantities.
//!
//! A `Quantity` pairs a magnitude with a `Unit`. Arithmetic checks
//! dimensions at run time: adding metres to kilograms is an error, while
//! multiplying them is fine.
//!
//! The `std::ops` operators return `Result`, so chained expressions read
//! `((a + b)? * c)?`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Zero;
use unitas_field::OrderedField;
use unitas_numbers::Rational;
use unitas_units::{ParseError, Unit};

use crate::arithmetic;
use crate::error::QuantityError;

/// Largest denominator used when turning an `f64` exponent into a rational.
pub const MAX_EXPONENT_DENOMINATOR: i64 = 1_000_000;

/// A magnitude paired with a unit.
#[derive(Clone, Debug)]
pub struct Quantity<T> {
    magnitude: T,
    unit: Unit,
}

impl<T: OrderedField> Quantity<T> {
    /// Creates a quantity from a magnitude and a unit expression.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if `unit` is not a valid unit expression.
    pub fn new(magnitude: T, unit: &str) -> Result<Self, ParseError> {
        Ok(Self::with_unit(magnitude, Unit::parse(unit)?))
    }

    /// Creates a quantity from an already parsed unit.
    #[must_use]
    pub fn with_unit(magnitude: T, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// A pure number.
    #[must_use]
    pub fn dimensionless(magnitude: T) -> Self {
        Self::with_unit(magnitude, Unit::dimensionless())
    }

    /// The magnitude, in this quantity's own unit.
    #[must_use]
    pub fn magnitude(&self) -> &T {
        &self.magnitude
    }

    /// The unit.
    #[must_use]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Splits into magnitude and unit.
    #[must_use]
    pub fn into_parts(self) -> (T, Unit) {
        (self.magnitude, self.unit)
    }

    /// Returns true if the magnitude is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Returns true if the unit has no dimension.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    /// Returns true if both quantities measure the same dimension.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// The magnitude as an `f64`, in this quantity's own unit.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.magnitude.to_f64()
    }

    fn map(&self, f: impl FnOnce(&T) -> T) -> Self {
        Self::with_unit(f(&self.magnitude), self.unit.clone())
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.map(T::abs)
    }

    /// Rounds the magnitude down.
    #[must_use]
    pub fn floor(&self) -> Self {
        self.map(T::floor)
    }

    /// Rounds the magnitude up.
    #[must_use]
    pub fn ceil(&self) -> Self {
        self.map(T::ceil)
    }

    /// Rounds the magnitude to the nearest integer, half away from zero.
    #[must_use]
    pub fn round(&self) -> Self {
        self.map(T::round)
    }

    /// Rounds the magnitude towards zero.
    #[must_use]
    pub fn trunc(&self) -> Self {
        self.map(T::trunc)
    }

    /// Multiplies the magnitude by a pure number.
    #[must_use]
    pub fn scale_by(&self, factor: T) -> Self {
        self.map(|m| m.clone() * factor)
    }

    /// This quantity's magnitude expressed in `target`.
    fn magnitude_in(&self, target: &Unit) -> Result<T, QuantityError> {
        let factor = self
            .unit
            .conversion_factor(target)
            .ok_or_else(|| QuantityError::mismatch(&self.unit, target))?;
        rescale(&self.magnitude, factor.decades())
    }

    /// The magnitude of `other` in the unit of `self`, reporting a mismatch
    /// in operand order.
    fn other_in_own_unit(&self, other: &Self) -> Result<T, QuantityError> {
        if !self.is_compatible(other) {
            return Err(QuantityError::mismatch(&self.unit, &other.unit));
        }
        other.magnitude_in(&self.unit)
    }

    /// Sum, in the unit of `self`.
    ///
    /// # Errors
    ///
    /// `UnitMismatch` if the units measure different dimensions.
    pub fn try_add(&self, other: &Self) -> Result<Self, QuantityError> {
        let rhs = self.other_in_own_unit(other)?;
        Ok(self.map(|m| m.clone() + rhs))
    }

    /// Difference, in the unit of `self`.
    ///
    /// # Errors
    ///
    /// `UnitMismatch` if the units measure different dimensions.
    pub fn try_sub(&self, other: &Self) -> Result<Self, QuantityError> {
        let rhs = self.other_in_own_unit(other)?;
        Ok(self.map(|m| m.clone() - rhs))
    }

    /// Product. Any dimensions may be multiplied.
    ///
    /// # Errors
    ///
    /// `Domain` if a folded prefix scale is not representable in `T`.
    pub fn try_mul(&self, other: &Self) -> Result<Self, QuantityError> {
        let merged = arithmetic::multiply(&self.unit, &other.unit);
        let product = self.magnitude.clone() * other.magnitude.clone();
        Ok(Self::with_unit(rescale(&product, &merged.folded)?, merged.unit))
    }

    /// Quotient. Any dimensions may be divided.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `other` has a zero magnitude.
    pub fn try_div(&self, other: &Self) -> Result<Self, QuantityError> {
        if other.magnitude.is_zero() {
            return Err(QuantityError::DivisionByZero);
        }
        let merged = arithmetic::divide(&self.unit, &other.unit);
        let quotient = self.magnitude.clone() / other.magnitude.clone();
        Ok(Self::with_unit(rescale(&quotient, &merged.folded)?, merged.unit))
    }

    /// `floor(self / other)`, in the unit of the quotient.
    ///
    /// # Errors
    ///
    /// As for [`Quantity::try_div`].
    pub fn floor_div(&self, other: &Self) -> Result<Self, QuantityError> {
        Ok(self.try_div(other)?.floor())
    }

    /// Raises to a rational power. Prefixes in the unit are kept.
    ///
    /// # Errors
    ///
    /// `Domain` for a fractional power of a negative magnitude or a power
    /// `T` cannot represent; `DivisionByZero` for a negative power of zero.
    pub fn pow(&self, power: &Rational) -> Result<Self, QuantityError> {
        if self.magnitude.is_negative() && !power.is_integer() {
            return Err(QuantityError::Domain(format!(
                "fractional power {power} of negative magnitude {}",
                self.magnitude
            )));
        }
        if self.magnitude.is_zero() && power.is_negative() {
            return Err(QuantityError::DivisionByZero);
        }

        let magnitude = match power.to_i64() {
            Some(n) => self.magnitude.powi(n),
            None => self.magnitude.powr(power),
        }
        .ok_or_else(|| {
            QuantityError::Domain(format!("{}^({power}) is not representable", self.magnitude))
        })?;

        Ok(Self::with_unit(magnitude, self.unit.pow(power)))
    }

    /// Raises to an integer power.
    ///
    /// # Errors
    ///
    /// As for [`Quantity::pow`].
    pub fn powi(&self, n: i64) -> Result<Self, QuantityError> {
        self.pow(&Rational::from(n))
    }

    /// Raises to a real power, approximated by the nearest rational with a
    /// denominator of at most [`MAX_EXPONENT_DENOMINATOR`].
    ///
    /// # Errors
    ///
    /// `Domain` if `power` is not finite or too large to approximate,
    /// otherwise as for [`Quantity::pow`].
    pub fn powf(&self, power: f64) -> Result<Self, QuantityError> {
        if !power.is_finite() {
            return Err(QuantityError::Domain(format!("exponent {power} is not finite")));
        }
        let exact = Rational::approximate_f64(power, MAX_EXPONENT_DENOMINATOR).ok_or_else(|| {
            QuantityError::Domain(format!("exponent {power} cannot be approximated by a rational"))
        })?;
        self.pow(&exact)
    }

    /// Square root.
    ///
    /// # Errors
    ///
    /// As for [`Quantity::pow`].
    pub fn sqrt(&self) -> Result<Self, QuantityError> {
        self.pow(&Rational::from_i64(1, 2))
    }

    /// Converts to a compatible unit given as an expression.
    ///
    /// # Errors
    ///
    /// `Parse` for a malformed unit, `UnitMismatch` for an incompatible one.
    pub fn convert_to(&self, unit: &str) -> Result<Self, QuantityError> {
        self.convert_to_unit(&Unit::parse(unit)?)
    }

    /// Converts to a compatible unit.
    ///
    /// # Errors
    ///
    /// `UnitMismatch` if `target` measures a different dimension.
    pub fn convert_to_unit(&self, target: &Unit) -> Result<Self, QuantityError> {
        Ok(Self::with_unit(self.magnitude_in(target)?, target.clone()))
    }

    /// Converts to unprefixed base units, e.g. `km/ms` to `m/s`.
    ///
    /// # Errors
    ///
    /// `Domain` if the scale is not representable in `T`.
    pub fn to_base_units(&self) -> Result<Self, QuantityError> {
        self.convert_to_unit(&self.unit.to_base_units())
    }

    /// The magnitude this quantity would have in `unit`.
    ///
    /// # Errors
    ///
    /// As for [`Quantity::convert_to`].
    pub fn value_in(&self, unit: &str) -> Result<T, QuantityError> {
        self.magnitude_in(&Unit::parse(unit)?)
    }

    /// Orders two compatible quantities.
    ///
    /// # Errors
    ///
    /// `UnitMismatch` if the units measure different dimensions, `Domain`
    /// if the magnitudes are unordered (NaN).
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, QuantityError> {
        let rhs = self.other_in_own_unit(other)?;
        self.magnitude
            .partial_cmp(&rhs)
            .ok_or_else(|| QuantityError::Domain("magnitudes are unordered".to_string()))
    }
}

fn rescale<T: OrderedField>(magnitude: &T, decades: &Rational) -> Result<T, QuantityError> {
    magnitude
        .rescale(decades)
        .ok_or_else(|| QuantityError::Domain(format!("scale 10^({decades}) is not representable")))
}

impl<T: OrderedField> Add for Quantity<T> {
    type Output = Result<Quantity<T>, QuantityError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl<T: OrderedField> Add for &Quantity<T> {
    type Output = Result<Quantity<T>, QuantityError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<T: OrderedField> Sub for Quantity<T> {
    type Output = Result<Quantity<T>, QuantityError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl<T: OrderedField> Sub for &Quantity<T> {
    type Output = Result<Quantity<T>, QuantityError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<T: OrderedField> Mul for Quantity<T> {
    type Output = Result<Quantity<T>, QuantityError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(&rhs)
    }
}

impl<T: OrderedField> Mul for &Quantity<T> {
    type Output = Result<Quantity<T>, QuantityError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(rhs)
    }
}

impl<T: OrderedField> Div for Quantity<T> {
    type Output = Result<Quantity<T>, QuantityError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(&rhs)
    }
}

impl<T: OrderedField> Div for &Quantity<T> {
    type Output = Result<Quantity<T>, QuantityError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(rhs)
    }
}

impl<T: OrderedField> Neg for Quantity<T> {
    type Output = Quantity<T>;

    fn neg(self) -> Self::Output {
        Quantity::with_unit(-self.magnitude, self.unit)
    }
}

impl<T: OrderedField> Neg for &Quantity<T> {
    type Output = Quantity<T>;

    fn neg(self) -> Self::Output {
        self.map(|m| -m.clone())
    }
}

impl<T: OrderedField> PartialEq for Quantity<T> {
    /// Incompatible quantities are never equal.
    fn eq(&self, other: &Self) -> bool {
        self.is_compatible(other)
            && other
                .magnitude_in(&self.unit)
                .is_ok_and(|rhs| self.magnitude == rhs)
    }
}

impl<T: OrderedField> PartialOrd for Quantity<T> {
    /// `None` for incompatible quantities.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.is_compatible(other) {
            return None;
        }
        let rhs = other.magnitude_in(&self.unit).ok()?;
        self.magnitude.partial_cmp(&rhs)
    }
}

impl<T: OrderedField> fmt::Display for Quantity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_dimensionless() {
            return write!(f, "{}", self.magnitude);
        }
        if f.alternate() {
            write!(f, "{} {:#}", self.magnitude, self.unit)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit)
        }
    }
}
