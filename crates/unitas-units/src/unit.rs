//! Units: a dimension vector paired with its display factors.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_traits::{One, Zero};
use smallvec::SmallVec;
use unitas_numbers::Rational;

use crate::base::BaseUnit;
use crate::dimension::DimensionVector;
use crate::error::ParseError;
use crate::format::{render_factors, UnitFormat};
use crate::parser::parse_factors;
use crate::prefix::Prefix;
use crate::scale::Scale;

/// One display factor: an optionally prefixed base unit raised to a power.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Factor {
    /// Decimal prefix, if any.
    pub prefix: Option<Prefix>,
    /// The base unit.
    pub base: BaseUnit,
    /// The exponent; never zero inside a `Unit`.
    pub exponent: Rational,
}

impl Factor {
    /// Creates a factor.
    #[must_use]
    pub fn new(prefix: Option<Prefix>, base: BaseUnit, exponent: Rational) -> Self {
        Self {
            prefix,
            base,
            exponent,
        }
    }

    /// The prefixed symbol without its exponent, e.g. `km`.
    #[must_use]
    pub fn symbol(&self) -> String {
        let prefix = self.prefix.map_or("", Prefix::symbol);
        format!("{prefix}{}", self.base.symbol())
    }

    /// The spelled-out name without its exponent, e.g. `kilometre`.
    #[must_use]
    pub fn name(&self) -> String {
        let prefix = self.prefix.map_or("", Prefix::name);
        format!("{prefix}{}", self.base.name())
    }

    /// The scale `prefix^exponent` contributed by this factor.
    #[must_use]
    pub fn scale(&self) -> Scale {
        Scale::of_prefix(self.prefix, &self.exponent)
    }

    /// The dimension vector of this factor alone.
    #[must_use]
    pub fn dimension(&self) -> DimensionVector {
        DimensionVector::from_base(self.base, self.exponent.clone()).with_scale(self.scale())
    }

    fn same_symbol(&self, other: &Self) -> bool {
        self.prefix == other.prefix && self.base == other.base
    }
}

/// Merges factors sharing a prefix and base by summing their exponents.
///
/// First-appearance order is kept and factors whose exponent sums to zero
/// are dropped.
#[must_use]
pub fn fold_factors<I>(factors: I) -> SmallVec<[Factor; 4]>
where
    I: IntoIterator<Item = Factor>,
{
    let mut folded: SmallVec<[Factor; 4]> = SmallVec::new();
    for factor in factors {
        match folded.iter_mut().find(|f| f.same_symbol(&factor)) {
            Some(existing) => existing.exponent = &existing.exponent + &factor.exponent,
            None => folded.push(factor),
        }
    }
    folded.retain(|f| !f.exponent.is_zero());
    folded
}

/// A unit of measure.
///
/// Equality and hashing use the dimension vector only, so `m^3/s` equals
/// `s^-1*m^3` while `km` does not equal `m`.
#[derive(Clone)]
pub struct Unit {
    factors: SmallVec<[Factor; 4]>,
    dimension: DimensionVector,
}

impl Unit {
    /// Parses a unit expression such as `kg*m^-1*s^-2`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for unknown symbols or malformed syntax.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_factors(input).map(Self::from_factors)
    }

    /// The dimensionless unit `1`.
    #[must_use]
    pub fn dimensionless() -> Self {
        Self {
            factors: SmallVec::new(),
            dimension: DimensionVector::identity(),
        }
    }

    /// A single base unit, optionally prefixed.
    #[must_use]
    pub fn base(prefix: Option<Prefix>, base: BaseUnit) -> Self {
        Self::from_factors([Factor::new(prefix, base, Rational::one())])
    }

    /// Builds a unit from display factors, folding repeats.
    #[must_use]
    pub fn from_factors<I>(factors: I) -> Self
    where
        I: IntoIterator<Item = Factor>,
    {
        let factors = fold_factors(factors);
        let dimension = factors
            .iter()
            .fold(DimensionVector::identity(), |acc, f| {
                acc.combine_multiply(&f.dimension())
            });
        Self { factors, dimension }
    }

    /// The display factors in order.
    #[must_use]
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// The canonical dimension vector.
    #[must_use]
    pub fn dimension(&self) -> &DimensionVector {
        &self.dimension
    }

    /// The aggregate prefix scale.
    #[must_use]
    pub fn scale(&self) -> &Scale {
        self.dimension.scale()
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// Returns true if both units measure the same dimension.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.dimension.is_compatible(&other.dimension)
    }

    /// The factor converting a magnitude in `self` into one in `target`.
    #[must_use]
    pub fn conversion_factor(&self, target: &Self) -> Option<Scale> {
        self.dimension.conversion_factor(&target.dimension)
    }

    /// Raises every factor to `power`, keeping prefixes.
    #[must_use]
    pub fn pow(&self, power: &Rational) -> Self {
        Self::from_factors(self.factors.iter().map(|f| Factor {
            exponent: &f.exponent * power,
            ..f.clone()
        }))
    }

    /// The reciprocal unit.
    #[must_use]
    pub fn recip(&self) -> Self {
        self.pow(&-Rational::one())
    }

    /// The same dimension over unprefixed base units, in base-unit order.
    #[must_use]
    pub fn to_base_units(&self) -> Self {
        Self::from_factors(
            self.dimension
                .non_zero()
                .map(|(base, exponent)| Factor::new(None, base, exponent.clone())),
        )
    }

    /// Renders in the default fraction form, e.g. `kg/(m*s^2)`.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(UnitFormat::default())
    }

    /// Renders in the given format.
    #[must_use]
    pub fn render_with(&self, format: UnitFormat) -> String {
        render_factors(&self.factors, format)
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::dimensionless()
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimension.hash(state);
    }
}

impl FromStr for Unit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<BaseUnit> for Unit {
    fn from(base: BaseUnit) -> Self {
        Self::base(None, base)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // {:#} selects the exponent form
        let format = if f.alternate() {
            UnitFormat::Exponent
        } else {
            UnitFormat::Fraction
        };
        f.pad(&self.render_with(format))
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit({}, {:?})", self.render(), self.dimension)
    }
}
