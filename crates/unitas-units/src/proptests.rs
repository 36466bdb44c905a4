//! Property-based tests for unit parsing and dimension algebra.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{BaseUnit, DimensionVector, Factor, Prefix, Rational, Unit, UnitFormat};

    fn base() -> impl Strategy<Value = BaseUnit> {
        prop::sample::select(BaseUnit::ALL.to_vec())
    }

    fn prefix() -> impl Strategy<Value = Option<Prefix>> {
        prop::option::of(prop::sample::select(Prefix::ALL.to_vec()))
    }

    // Non-zero exponents, integral or halves
    fn exponent() -> impl Strategy<Value = Rational> {
        prop_oneof![
            (-4i64..=-1).prop_map(Rational::from),
            (1i64..=4).prop_map(Rational::from),
            prop_oneof![-3i64..=-1, 1i64..=3].prop_map(|n| Rational::from_i64(n, 2)),
        ]
    }

    fn factor() -> impl Strategy<Value = Factor> {
        (prefix(), base(), exponent()).prop_map(|(p, b, e)| Factor::new(p, b, e))
    }

    fn unit() -> impl Strategy<Value = Unit> {
        prop::collection::vec(factor(), 0..5).prop_map(Unit::from_factors)
    }

    proptest! {
        #[test]
        fn render_parse_roundtrip(u in unit()) {
            for format in [UnitFormat::Fraction, UnitFormat::Exponent] {
                let reparsed = Unit::parse(&u.render_with(format)).unwrap();
                prop_assert_eq!(reparsed.dimension(), u.dimension());
            }
        }

        #[test]
        fn every_prefixed_base_parses(p in prefix(), b in base(), e in exponent()) {
            let u = Unit::from_factors([Factor::new(p, b, e.clone())]);
            let reparsed = Unit::parse(&u.render()).unwrap();
            prop_assert_eq!(reparsed.factors(), u.factors());
            prop_assert_eq!(reparsed.dimension().exponent(b), &e);
        }

        #[test]
        fn multiply_identity(u in unit()) {
            let d = u.dimension();
            prop_assert_eq!(&d.combine_multiply(&DimensionVector::identity()), d);
        }

        #[test]
        fn multiply_commutative(a in unit(), b in unit()) {
            let (a, b) = (a.dimension(), b.dimension());
            prop_assert_eq!(a.combine_multiply(b), b.combine_multiply(a));
        }

        #[test]
        fn multiply_associative(a in unit(), b in unit(), c in unit()) {
            let (a, b, c) = (a.dimension(), b.dimension(), c.dimension());
            prop_assert_eq!(
                a.combine_multiply(b).combine_multiply(c),
                a.combine_multiply(&b.combine_multiply(c))
            );
        }

        #[test]
        fn divide_undoes_multiply(a in unit(), b in unit()) {
            let (a, b) = (a.dimension(), b.dimension());
            prop_assert_eq!(&a.combine_multiply(b).combine_divide(b), a);
        }

        #[test]
        fn power_distributes(u in unit(), p in exponent(), q in exponent()) {
            let d = u.dimension();
            prop_assert_eq!(
                d.combine_power(&p).combine_power(&q),
                d.combine_power(&(&p * &q))
            );
        }

        #[test]
        fn fraction_and_exponent_forms_agree(u in unit()) {
            let fraction = Unit::parse(&u.render_with(UnitFormat::Fraction)).unwrap();
            let exponent = Unit::parse(&u.render_with(UnitFormat::Exponent)).unwrap();
            prop_assert_eq!(fraction, exponent);
        }

        #[test]
        fn base_units_share_dimension(u in unit()) {
            let base = u.to_base_units();
            prop_assert!(base.is_compatible(&u));
            prop_assert!(base.scale().is_one());
        }
    }

    #[test]
    fn fraction_and_exponent_notation() {
        let fraction = Unit::parse("m^3/s").unwrap();
        let exponent = Unit::parse("m^3*s^-1").unwrap();
        assert_eq!(fraction, exponent);
        assert_eq!(fraction.dimension().exponent(BaseUnit::Second), &Rational::from(-1));
        assert_ne!(fraction.render_with(UnitFormat::Exponent), fraction.render());
    }
}
