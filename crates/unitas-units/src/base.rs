//! The seven SI base units.
//!
//! Mass is anchored on the gram rather than the kilogram so that every
//! mass unit, `kg` included, is a prefixed form of one symbol.

use std::fmt;

use crate::error::UnknownSymbolError;

/// One of the seven SI base dimensions, identified by its unit symbol.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum BaseUnit {
    /// Length, metre (`m`).
    Metre,
    /// Time, second (`s`).
    Second,
    /// Mass, gram (`g`).
    Gram,
    /// Electric current, ampere (`A`).
    Ampere,
    /// Thermodynamic temperature, kelvin (`K`).
    Kelvin,
    /// Amount of substance, mole (`mol`).
    Mole,
    /// Luminous intensity, candela (`cd`).
    Candela,
}

impl BaseUnit {
    /// Number of base units.
    pub const COUNT: usize = 7;

    /// All base units, in dimension-vector order.
    pub const ALL: [BaseUnit; Self::COUNT] = [
        BaseUnit::Metre,
        BaseUnit::Second,
        BaseUnit::Gram,
        BaseUnit::Ampere,
        BaseUnit::Kelvin,
        BaseUnit::Mole,
        BaseUnit::Candela,
    ];

    /// The unit symbol as written in expressions.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseUnit::Metre => "m",
            BaseUnit::Second => "s",
            BaseUnit::Gram => "g",
            BaseUnit::Ampere => "A",
            BaseUnit::Kelvin => "K",
            BaseUnit::Mole => "mol",
            BaseUnit::Candela => "cd",
        }
    }

    /// The unit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BaseUnit::Metre => "metre",
            BaseUnit::Second => "second",
            BaseUnit::Gram => "gram",
            BaseUnit::Ampere => "ampere",
            BaseUnit::Kelvin => "kelvin",
            BaseUnit::Mole => "mole",
            BaseUnit::Candela => "candela",
        }
    }

    /// The physical dimension this unit measures.
    #[must_use]
    pub const fn dimension(self) -> &'static str {
        match self {
            BaseUnit::Metre => "length",
            BaseUnit::Second => "time",
            BaseUnit::Gram => "mass",
            BaseUnit::Ampere => "current",
            BaseUnit::Kelvin => "temperature",
            BaseUnit::Mole => "amount",
            BaseUnit::Candela => "luminous intensity",
        }
    }

    /// Position of this unit in a dimension vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Looks up a base unit by its exact symbol.
///
/// # Errors
///
/// Returns `UnknownSymbolError` if `symbol` is not one of the seven base
/// unit symbols.
pub fn resolve_base(symbol: &str) -> Result<BaseUnit, UnknownSymbolError> {
    BaseUnit::ALL
        .into_iter()
        .find(|base| base.symbol() == symbol)
        .ok_or_else(|| UnknownSymbolError::new(symbol))
}
