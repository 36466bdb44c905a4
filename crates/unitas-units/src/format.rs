//! Rendering display factors as text.

use num_traits::One;
use unitas_numbers::Rational;

use crate::unit::Factor;

/// How a unit is written out.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum UnitFormat {
    /// Positive powers over negative ones: `kg/(m*s^2)`, `1/s`.
    #[default]
    Fraction,
    /// A flat product with signed exponents: `kg*m^-1*s^-2`.
    Exponent,
}

/// Renders `factors` in `format`. No factors renders as `1`.
#[must_use]
pub fn render_factors(factors: &[Factor], format: UnitFormat) -> String {
    match format {
        UnitFormat::Exponent => product(factors.iter().map(|f| (f, f.exponent.clone()))),
        UnitFormat::Fraction => {
            let numerator = product(
                factors
                    .iter()
                    .filter(|f| !f.exponent.is_negative())
                    .map(|f| (f, f.exponent.clone())),
            );
            let denominator: Vec<_> = factors
                .iter()
                .filter(|f| f.exponent.is_negative())
                .map(|f| (f, -&f.exponent))
                .collect();

            match denominator.len() {
                0 => numerator,
                1 => format!("{numerator}/{}", product(denominator)),
                _ => format!("{numerator}/({})", product(denominator)),
            }
        }
    }
}

fn product<'a>(terms: impl IntoIterator<Item = (&'a Factor, Rational)>) -> String {
    let mut out = String::new();
    for (factor, exponent) in terms {
        if !out.is_empty() {
            out.push('*');
        }
        out.push_str(&factor.symbol());
        push_exponent(&mut out, &exponent);
    }
    if out.is_empty() {
        out.push('1');
    }
    out
}

/// Appends `^e`, or nothing for `e == 1`. Non-integers are parenthesized.
fn push_exponent(out: &mut String, exponent: &Rational) {
    if exponent.is_one() {
        return;
    }
    if exponent.is_integer() {
        out.push_str(&format!("^{exponent}"));
    } else {
        out.push_str(&format!("^({exponent})"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Unit;

    fn render(s: &str, format: UnitFormat) -> String {
        Unit::parse(s).unwrap().render_with(format)
    }

    #[test]
    fn test_fraction_form() {
        assert_eq!(render("m^3*s^-1", UnitFormat::Fraction), "m^3/s");
        assert_eq!(render("kg*m^-1*s^-2", UnitFormat::Fraction), "kg/(m*s^2)");
        assert_eq!(render("s^-1", UnitFormat::Fraction), "1/s");
        assert_eq!(render("kg*s", UnitFormat::Fraction), "kg*s");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(render("m^3/s", UnitFormat::Exponent), "m^3*s^-1");
        assert_eq!(render("kg/(m*s^2)", UnitFormat::Exponent), "kg*m^-1*s^-2");
    }

    #[test]
    fn test_rational_exponents() {
        assert_eq!(render("m^0.5", UnitFormat::Fraction), "m^(1/2)");
        assert_eq!(render("s^(-3/2)", UnitFormat::Exponent), "s^(-3/2)");
        assert_eq!(render("s^(-3/2)", UnitFormat::Fraction), "1/s^(3/2)");
    }

    #[test]
    fn test_prefix_symbols() {
        assert_eq!(render("us", UnitFormat::Fraction), "µs");
        assert_eq!(render("dam^2", UnitFormat::Fraction), "dam^2");
    }

    #[test]
    fn test_dimensionless() {
        assert_eq!(render("", UnitFormat::Fraction), "1");
        assert_eq!(render("", UnitFormat::Exponent), "1");
    }
}
