//! Dimension vectors.
//!
//! A dimension vector is the canonical fingerprint of a unit: one rational
//! exponent per base unit plus an aggregate decimal scale. It is
//! independent of how the unit was written, so `m^3/s`, `m^3*s^-1` and
//! `s^-1 m m m` all share one vector.

use std::fmt;

use num_traits::Zero;
use unitas_numbers::Rational;

use crate::base::BaseUnit;
use crate::scale::Scale;

/// Exponents over the seven base units plus a scale factor.
///
/// Two vectors are *compatible* when their exponents agree; the scale only
/// matters for converting magnitudes between them. `==` compares both.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct DimensionVector {
    exponents: [Rational; BaseUnit::COUNT],
    scale: Scale,
}

impl DimensionVector {
    /// The dimensionless vector with unit scale.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Creates a vector from explicit exponents and scale.
    #[must_use]
    pub fn new(exponents: [Rational; BaseUnit::COUNT], scale: Scale) -> Self {
        Self { exponents, scale }
    }

    /// The vector of a single base unit raised to `exponent`.
    #[must_use]
    pub fn from_base(base: BaseUnit, exponent: Rational) -> Self {
        let mut vector = Self::identity();
        vector.exponents[base.index()] = exponent;
        vector
    }

    /// Returns a copy of this vector with a different scale.
    #[must_use]
    pub fn with_scale(&self, scale: Scale) -> Self {
        Self {
            exponents: self.exponents.clone(),
            scale,
        }
    }

    /// The exponent of `base`.
    #[must_use]
    pub fn exponent(&self, base: BaseUnit) -> &Rational {
        &self.exponents[base.index()]
    }

    /// All exponents, in `BaseUnit::ALL` order.
    #[must_use]
    pub fn exponents(&self) -> &[Rational; BaseUnit::COUNT] {
        &self.exponents
    }

    /// The aggregate scale factor.
    #[must_use]
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Base units with a non-zero exponent.
    pub fn non_zero(&self) -> impl Iterator<Item = (BaseUnit, &Rational)> {
        BaseUnit::ALL
            .into_iter()
            .zip(self.exponents.iter())
            .filter(|(_, e)| !e.is_zero())
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(Zero::is_zero)
    }

    /// Exponents add and scales multiply.
    #[must_use]
    pub fn combine_multiply(&self, other: &Self) -> Self {
        Self {
            exponents: std::array::from_fn(|i| &self.exponents[i] + &other.exponents[i]),
            scale: self.scale.multiply(&other.scale),
        }
    }

    /// Exponents subtract and scales divide.
    #[must_use]
    pub fn combine_divide(&self, other: &Self) -> Self {
        Self {
            exponents: std::array::from_fn(|i| &self.exponents[i] - &other.exponents[i]),
            scale: self.scale.divide(&other.scale),
        }
    }

    /// Every exponent is multiplied by `power` and the scale is raised to it.
    ///
    /// Fractional powers are legal: `combine_power(m^2, 1/2)` is `m`, and
    /// `combine_power(m, 1/2)` is `m^(1/2)`.
    #[must_use]
    pub fn combine_power(&self, power: &Rational) -> Self {
        Self {
            exponents: std::array::from_fn(|i| &self.exponents[i] * power),
            scale: self.scale.pow(power),
        }
    }

    /// Returns true if both vectors have identical exponents.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.exponents == other.exponents
    }

    /// The factor that converts a magnitude in `self` into one in `target`.
    ///
    /// This is `self.scale / target.scale`; `None` if the vectors are not
    /// compatible.
    #[must_use]
    pub fn conversion_factor(&self, target: &Self) -> Option<Scale> {
        self.is_compatible(target)
            .then(|| self.scale.divide(&target.scale))
    }
}

impl fmt::Debug for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self.non_zero().peekable();
        f.write_str("DimensionVector(")?;
        if terms.peek().is_none() {
            f.write_str("1")?;
        }
        let mut first = true;
        for (base, exponent) in terms {
            if !first {
                f.write_str("*")?;
            }
            first = false;
            write!(f, "{base}^{exponent}")?;
        }
        write!(f, ", {:?})", self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::Prefix;

    fn velocity() -> DimensionVector {
        DimensionVector::from_base(BaseUnit::Metre, Rational::from(1))
            .combine_divide(&DimensionVector::from_base(BaseUnit::Second, Rational::from(1)))
    }

    #[test]
    fn test_identity() {
        let v = velocity();
        assert_eq!(v.combine_multiply(&DimensionVector::identity()), v);
        assert!(DimensionVector::identity().is_dimensionless());
        assert!(DimensionVector::identity().scale().is_one());
    }

    #[test]
    fn test_multiply_divide_cancel() {
        let v = velocity();
        let cancelled = v.combine_divide(&v);
        assert_eq!(cancelled, DimensionVector::identity());
    }

    #[test]
    fn test_power_fractional() {
        let area = DimensionVector::from_base(BaseUnit::Metre, Rational::from(2));
        let side = area.combine_power(&Rational::from_i64(1, 2));
        assert_eq!(side, DimensionVector::from_base(BaseUnit::Metre, Rational::from(1)));

        let root = side.combine_power(&Rational::from_i64(1, 2));
        assert_eq!(root.exponent(BaseUnit::Metre), &Rational::from_i64(1, 2));
    }

    #[test]
    fn test_compatibility_ignores_scale() {
        let metre = DimensionVector::from_base(BaseUnit::Metre, Rational::from(1));
        let kilometre = metre.with_scale(Scale::from(Prefix::Kilo));
        assert!(metre.is_compatible(&kilometre));
        assert_ne!(metre, kilometre);
        assert_eq!(
            kilometre.conversion_factor(&metre),
            Some(Scale::from(Prefix::Kilo))
        );
        assert_eq!(metre.conversion_factor(&velocity()), None);
    }

    #[test]
    fn test_non_zero_order() {
        let v = velocity();
        let bases: Vec<_> = v.non_zero().map(|(b, _)| b).collect();
        assert_eq!(bases, vec![BaseUnit::Metre, BaseUnit::Second]);
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", velocity()),
            "DimensionVector(m^1*s^-1, Scale(10^0))"
        );
    }
}
