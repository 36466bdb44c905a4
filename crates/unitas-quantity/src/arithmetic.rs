//! The unit side of multiplication and division.
//!
//! Display factors of both operands are merged per base unit:
//!
//! - a base carrying one prefix across both operands keeps it, so
//!   `kg/m^3 * m^3/s` is `kg/s`
//! - a base carrying conflicting prefixes falls back to the unprefixed
//!   unit, and the prefix scale moves into the magnitude, so
//!   `km * m` is `1000 m^2`
//! - a base whose exponents cancel disappears, and any prefix scale it
//!   still carried moves into the magnitude
//!
//! The product of the result unit's scale and the folded scale always
//! equals the combined scale of the operands.

use num_traits::Zero;
use smallvec::SmallVec;
use unitas_numbers::Rational;
use unitas_units::{BaseUnit, Factor, Prefix, Unit};

/// A merged unit plus the decades to fold into the magnitude.
#[derive(Clone, Debug)]
pub struct Merged {
    /// The result unit.
    pub unit: Unit,
    /// Decade exponent the result magnitude must be multiplied by.
    pub folded: Rational,
}

/// Contributions to one base unit, in order of appearance.
struct BaseGroup {
    base: BaseUnit,
    terms: SmallVec<[(Option<Prefix>, Rational); 2]>,
}

impl BaseGroup {
    fn exponent(&self) -> Rational {
        self.terms
            .iter()
            .fold(Rational::zero(), |acc, (_, e)| acc + e)
    }

    fn first_prefix(&self) -> Option<Prefix> {
        self.terms.first().and_then(|(p, _)| *p)
    }

    fn has_conflicting_prefixes(&self) -> bool {
        let first = self.first_prefix();
        self.terms.iter().any(|(p, _)| *p != first)
    }

    /// Decades carried by the prefixes of this group.
    fn decades(&self) -> Rational {
        self.terms.iter().fold(Rational::zero(), |acc, (p, e)| match p {
            Some(prefix) => acc + prefix.decades_rational() * e,
            None => acc,
        })
    }
}

/// The unit of `left * right`.
#[must_use]
pub fn multiply(left: &Unit, right: &Unit) -> Merged {
    merge(left.factors().iter().chain(right.factors()).cloned())
}

/// The unit of `left / right`.
#[must_use]
pub fn divide(left: &Unit, right: &Unit) -> Merged {
    let inverted = right.factors().iter().map(|f| Factor {
        exponent: -&f.exponent,
        ..f.clone()
    });
    merge(left.factors().iter().cloned().chain(inverted))
}

fn merge(factors: impl Iterator<Item = Factor>) -> Merged {
    let mut groups: SmallVec<[BaseGroup; 4]> = SmallVec::new();
    for factor in factors {
        let term = (factor.prefix, factor.exponent);
        match groups.iter_mut().find(|g| g.base == factor.base) {
            Some(group) => group.terms.push(term),
            None => groups.push(BaseGroup {
                base: factor.base,
                terms: SmallVec::from_iter([term]),
            }),
        }
    }

    let mut folded = Rational::zero();
    let mut result = Vec::with_capacity(groups.len());
    for group in &groups {
        let exponent = group.exponent();
        if exponent.is_zero() || group.has_conflicting_prefixes() {
            folded = folded + group.decades();
            if !exponent.is_zero() {
                result.push(Factor::new(None, group.base, exponent));
            }
        } else {
            result.push(Factor::new(group.first_prefix(), group.base, exponent));
        }
    }

    if !folded.is_zero() {
        tracing::trace!(%folded, "folding prefix scale into magnitude");
    }

    Merged {
        unit: Unit::from_factors(result),
        folded,
    }
}
