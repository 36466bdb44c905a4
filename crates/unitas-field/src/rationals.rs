//! Exact rational magnitudes.
//!
//! Rational powers stay exact: `(9/4)^(1/2)` is `3/2`. A power with no
//! rational value, such as `2^(1/2)`, is reported as undefined rather than
//! rounded.

use unitas_numbers::Rational;

use crate::traits::OrderedField;

impl OrderedField for Rational {
    fn from_i64(n: i64) -> Self {
        Rational::from(n)
    }

    fn powi(&self, n: i64) -> Option<Self> {
        Rational::powi(self, n)
    }

    fn powr(&self, p: &Rational) -> Option<Self> {
        self.pow_exact(p)
    }

    fn is_negative(&self) -> bool {
        Rational::is_negative(self)
    }

    fn abs(&self) -> Self {
        Rational::abs(self)
    }

    fn floor(&self) -> Self {
        Rational::floor(self)
    }

    fn ceil(&self) -> Self {
        Rational::ceil(self)
    }

    fn round(&self) -> Self {
        Rational::round(self)
    }

    fn trunc(&self) -> Self {
        Rational::trunc(self)
    }

    fn to_f64(&self) -> f64 {
        Rational::to_f64(self)
    }
}
