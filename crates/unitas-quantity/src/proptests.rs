//! Property-based tests for quantity arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use unitas_numbers::Rational;
    use unitas_units::{BaseUnit, Factor, Prefix, Unit};

    use crate::Quantity;

    fn prefix() -> impl Strategy<Value = Option<Prefix>> {
        prop::option::of(prop::sample::select(vec![
            Prefix::Mega,
            Prefix::Kilo,
            Prefix::Centi,
            Prefix::Milli,
            Prefix::Micro,
        ]))
    }

    fn factor() -> impl Strategy<Value = Factor> {
        (
            prefix(),
            prop::sample::select(BaseUnit::ALL.to_vec()),
            prop_oneof![-3i64..=-1, 1i64..=3],
        )
            .prop_map(|(p, b, e)| Factor::new(p, b, Rational::from(e)))
    }

    fn unit() -> impl Strategy<Value = Unit> {
        prop::collection::vec(factor(), 0..4).prop_map(Unit::from_factors)
    }

    /// The same unit with every prefix replaced.
    fn reprefixed(unit: &Unit, prefix: Option<Prefix>) -> Unit {
        Unit::from_factors(unit.factors().iter().map(|f| Factor {
            prefix,
            ..f.clone()
        }))
    }

    fn magnitude() -> impl Strategy<Value = i64> {
        -10_000i64..10_000
    }

    fn rational(n: i64) -> Rational {
        Rational::from_i64(n, 7)
    }

    proptest! {
        #[test]
        fn add_then_sub_roundtrips(u in unit(), p in prefix(), x in magnitude(), y in magnitude()) {
            let a = Quantity::with_unit(rational(x), u.clone());
            let b = Quantity::with_unit(rational(y), reprefixed(&u, p));
            let back = ((&a + &b).unwrap() - b).unwrap();
            prop_assert_eq!(back.magnitude(), a.magnitude());
            prop_assert_eq!(back.unit(), a.unit());
        }

        #[test]
        fn float_add_then_sub_is_close(u in unit(), x in -1e3f64..1e3, y in -1e3f64..1e3) {
            let a = Quantity::with_unit(x, u.clone());
            let b = Quantity::with_unit(y, u);
            let back = ((&a + &b).unwrap() - b).unwrap();
            prop_assert!((back.magnitude() - x).abs() < 1e-9);
        }

        #[test]
        fn mul_preserves_total_scale(a in unit(), b in unit(), x in magnitude(), y in magnitude()) {
            let qa = Quantity::with_unit(rational(x), a.clone());
            let qb = Quantity::with_unit(rational(y), b.clone());
            let product = (&qa * &qb).unwrap().to_base_units().unwrap();

            let expected = (qa.to_base_units().unwrap() * qb.to_base_units().unwrap()).unwrap();
            prop_assert_eq!(product.magnitude(), expected.magnitude());
            prop_assert!(product.is_compatible(&expected));
        }

        #[test]
        fn mul_commutes(a in unit(), b in unit(), x in magnitude(), y in magnitude()) {
            let qa = Quantity::with_unit(rational(x), a);
            let qb = Quantity::with_unit(rational(y), b);
            prop_assert_eq!((&qa * &qb).unwrap(), (&qb * &qa).unwrap());
        }

        #[test]
        fn div_undoes_mul(a in unit(), b in unit(), x in magnitude(), y in 1i64..10_000) {
            let qa = Quantity::with_unit(rational(x), a);
            let qb = Quantity::with_unit(rational(y), b);
            let back = ((&qa * &qb).unwrap() / qb).unwrap();
            prop_assert_eq!(back, qa);
        }

        #[test]
        fn integer_power_matches_repeated_mul(u in unit(), x in magnitude()) {
            let q = Quantity::with_unit(rational(x), u);
            let cubed = q.powi(3).unwrap();
            let repeated = ((&q * &q).unwrap() * q.clone()).unwrap();
            prop_assert_eq!(cubed, repeated);
        }

        #[test]
        fn conversion_roundtrips(u in unit(), p in prefix(), x in magnitude()) {
            let q = Quantity::with_unit(rational(x), u.clone());
            let there = q.convert_to_unit(&reprefixed(&u, p)).unwrap();
            let back = there.convert_to_unit(&u).unwrap();
            prop_assert_eq!(back.magnitude(), q.magnitude());
        }
    }
}
