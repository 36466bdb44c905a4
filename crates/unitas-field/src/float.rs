//! Machine floating point magnitudes.
//!
//! Floats accept every real power; results that leave the reals (NaN) are
//! reported as undefined.

use unitas_numbers::Rational;

use crate::traits::OrderedField;

impl OrderedField for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_i64(n: i64) -> Self {
        n as f64
    }

    fn powi(&self, n: i64) -> Option<Self> {
        let n = i32::try_from(n).ok()?;
        let result = f64::powi(*self, n);
        (!result.is_nan()).then_some(result)
    }

    fn powr(&self, p: &Rational) -> Option<Self> {
        if let Some(n) = p.to_i64() {
            return OrderedField::powi(self, n);
        }
        let result = f64::powf(*self, p.to_f64());
        (!result.is_nan()).then_some(result)
    }

    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn floor(&self) -> Self {
        f64::floor(*self)
    }

    fn ceil(&self) -> Self {
        f64::ceil(*self)
    }

    fn round(&self) -> Self {
        f64::round(*self)
    }

    fn trunc(&self) -> Self {
        f64::trunc(*self)
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl OrderedField for f32 {
    #[allow(clippy::cast_precision_loss)]
    fn from_i64(n: i64) -> Self {
        n as f32
    }

    fn powi(&self, n: i64) -> Option<Self> {
        let n = i32::try_from(n).ok()?;
        let result = f32::powi(*self, n);
        (!result.is_nan()).then_some(result)
    }

    fn powr(&self, p: &Rational) -> Option<Self> {
        if let Some(n) = p.to_i64() {
            return OrderedField::powi(self, n);
        }
        #[allow(clippy::cast_possible_truncation)]
        let exponent = p.to_f64() as f32;
        let result = f32::powf(*self, exponent);
        (!result.is_nan()).then_some(result)
    }

    fn abs(&self) -> Self {
        f32::abs(*self)
    }

    fn floor(&self) -> Self {
        f32::floor(*self)
    }

    fn ceil(&self) -> Self {
        f32::ceil(*self)
    }

    fn round(&self) -> Self {
        f32::round(*self)
    }

    fn trunc(&self) -> Self {
        f32::trunc(*self)
    }

    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_power() {
        let four = 4.0_f64;
        assert_eq!(four.powr(&Rational::from_i64(1, 2)), Some(2.0));
        assert_eq!((-4.0_f64).powr(&Rational::from_i64(1, 2)), None);
        assert_eq!((-2.0_f64).powr(&Rational::from(3)), Some(-8.0));
    }

    #[test]
    fn test_rounding_matches_std() {
        assert_eq!(OrderedField::round(&-2.5_f64), -3.0);
        assert_eq!(OrderedField::trunc(&-2.5_f32), -2.0);
        assert_eq!(OrderedField::floor(&-2.5_f64), -3.0);
    }

    #[test]
    fn test_zero_negative_power() {
        assert_eq!(OrderedField::powi(&0.0_f64, -1), Some(f64::INFINITY));
        assert_eq!(OrderedField::powi(&2.0_f64, i64::MAX), None);
    }
}
