//! The SI decimal prefix table.
//!
//! Prefixes run from yotta (10^24) down to yocto (10^-24). Each one is a
//! whole number of decades, which lets scales be tracked as exact decade
//! exponents rather than floats.

use std::fmt;

use unitas_numbers::Rational;

use crate::base::{resolve_base, BaseUnit};
use crate::error::UnknownSymbolError;

/// An SI decimal prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Prefix {
    /// 10^24
    Yotta,
    /// 10^21
    Zetta,
    /// 10^18
    Exa,
    /// 10^15
    Peta,
    /// 10^12
    Tera,
    /// 10^9
    Giga,
    /// 10^6
    Mega,
    /// 10^3
    Kilo,
    /// 10^2
    Hecto,
    /// 10^1
    Deca,
    /// 10^-1
    Deci,
    /// 10^-2
    Centi,
    /// 10^-3
    Milli,
    /// 10^-6
    Micro,
    /// 10^-9
    Nano,
    /// 10^-12
    Pico,
    /// 10^-15
    Femto,
    /// 10^-18
    Atto,
    /// 10^-21
    Zepto,
    /// 10^-24
    Yocto,
}

/// Accepted spellings, longest first so `da` wins over `d`.
const SPELLINGS: [(&str, Prefix); 22] = [
    ("da", Prefix::Deca),
    ("Y", Prefix::Yotta),
    ("Z", Prefix::Zetta),
    ("E", Prefix::Exa),
    ("P", Prefix::Peta),
    ("T", Prefix::Tera),
    ("G", Prefix::Giga),
    ("M", Prefix::Mega),
    ("k", Prefix::Kilo),
    ("h", Prefix::Hecto),
    ("d", Prefix::Deci),
    ("c", Prefix::Centi),
    ("m", Prefix::Milli),
    ("µ", Prefix::Micro),
    ("μ", Prefix::Micro),
    ("u", Prefix::Micro),
    ("n", Prefix::Nano),
    ("p", Prefix::Pico),
    ("f", Prefix::Femto),
    ("a", Prefix::Atto),
    ("z", Prefix::Zepto),
    ("y", Prefix::Yocto),
];

impl Prefix {
    /// All prefixes from largest to smallest.
    pub const ALL: [Prefix; 20] = [
        Prefix::Yotta,
        Prefix::Zetta,
        Prefix::Exa,
        Prefix::Peta,
        Prefix::Tera,
        Prefix::Giga,
        Prefix::Mega,
        Prefix::Kilo,
        Prefix::Hecto,
        Prefix::Deca,
        Prefix::Deci,
        Prefix::Centi,
        Prefix::Milli,
        Prefix::Micro,
        Prefix::Nano,
        Prefix::Pico,
        Prefix::Femto,
        Prefix::Atto,
        Prefix::Zepto,
        Prefix::Yocto,
    ];

    /// The canonical symbol used when rendering.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Prefix::Yotta => "Y",
            Prefix::Zetta => "Z",
            Prefix::Exa => "E",
            Prefix::Peta => "P",
            Prefix::Tera => "T",
            Prefix::Giga => "G",
            Prefix::Mega => "M",
            Prefix::Kilo => "k",
            Prefix::Hecto => "h",
            Prefix::Deca => "da",
            Prefix::Deci => "d",
            Prefix::Centi => "c",
            Prefix::Milli => "m",
            Prefix::Micro => "µ",
            Prefix::Nano => "n",
            Prefix::Pico => "p",
            Prefix::Femto => "f",
            Prefix::Atto => "a",
            Prefix::Zepto => "z",
            Prefix::Yocto => "y",
        }
    }

    /// The prefix name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Prefix::Yotta => "yotta",
            Prefix::Zetta => "zetta",
            Prefix::Exa => "exa",
            Prefix::Peta => "peta",
            Prefix::Tera => "tera",
            Prefix::Giga => "giga",
            Prefix::Mega => "mega",
            Prefix::Kilo => "kilo",
            Prefix::Hecto => "hecto",
            Prefix::Deca => "deca",
            Prefix::Deci => "deci",
            Prefix::Centi => "centi",
            Prefix::Milli => "milli",
            Prefix::Micro => "micro",
            Prefix::Nano => "nano",
            Prefix::Pico => "pico",
            Prefix::Femto => "femto",
            Prefix::Atto => "atto",
            Prefix::Zepto => "zepto",
            Prefix::Yocto => "yocto",
        }
    }

    /// The power of ten this prefix stands for.
    #[must_use]
    pub const fn decades(self) -> i8 {
        match self {
            Prefix::Yotta => 24,
            Prefix::Zetta => 21,
            Prefix::Exa => 18,
            Prefix::Peta => 15,
            Prefix::Tera => 12,
            Prefix::Giga => 9,
            Prefix::Mega => 6,
            Prefix::Kilo => 3,
            Prefix::Hecto => 2,
            Prefix::Deca => 1,
            Prefix::Deci => -1,
            Prefix::Centi => -2,
            Prefix::Milli => -3,
            Prefix::Micro => -6,
            Prefix::Nano => -9,
            Prefix::Pico => -12,
            Prefix::Femto => -15,
            Prefix::Atto => -18,
            Prefix::Zepto => -21,
            Prefix::Yocto => -24,
        }
    }

    /// The scale factor as a float, e.g. `1e3` for kilo.
    #[must_use]
    pub fn factor(self) -> f64 {
        10f64.powi(i32::from(self.decades()))
    }

    /// The decade exponent as a rational, for scale arithmetic.
    #[must_use]
    pub fn decades_rational(self) -> Rational {
        Rational::from(i64::from(self.decades()))
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Looks up a prefix by symbol.
///
/// Micro accepts `µ` (micro sign), `μ` (Greek mu) and ASCII `u`.
///
/// # Errors
///
/// Returns `UnknownSymbolError` if `symbol` is not a prefix.
pub fn resolve_prefix(symbol: &str) -> Result<Prefix, UnknownSymbolError> {
    SPELLINGS
        .iter()
        .find(|(spelling, _)| *spelling == symbol)
        .map(|&(_, prefix)| prefix)
        .ok_or_else(|| UnknownSymbolError::new(symbol))
}

/// Splits an identifier such as `kg` or `mmol` into prefix and base unit.
///
/// An identifier that is itself a base symbol is never split, so `m` is
/// the metre and `cd` the candela. Otherwise the longest prefix whose
/// remainder is a base symbol wins: `dam` is decametre, not deci-atto-metre.
///
/// # Errors
///
/// Returns `UnknownSymbolError` if no split yields a base unit.
pub fn split_symbol(identifier: &str) -> Result<(Option<Prefix>, BaseUnit), UnknownSymbolError> {
    if let Ok(base) = resolve_base(identifier) {
        return Ok((None, base));
    }

    SPELLINGS
        .iter()
        .find_map(|&(spelling, prefix)| {
            let rest = identifier.strip_prefix(spelling)?;
            resolve_base(rest).ok().map(|base| (Some(prefix), base))
        })
        .ok_or_else(|| UnknownSymbolError::new(identifier))
}
