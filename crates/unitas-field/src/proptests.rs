//! Property-based tests for the field implementations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use unitas_numbers::Rational;

    use crate::OrderedField;

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-500i64..500i64, 1i64..50i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn decades() -> impl Strategy<Value = Rational> {
        (-24i64..=24i64).prop_map(Rational::from)
    }

    proptest! {
        #[test]
        fn rescale_roundtrip_is_exact_for_rationals(x in small_rational(), d in decades()) {
            let there = x.rescale(&d).unwrap();
            let back = there.rescale(&-d).unwrap();
            prop_assert_eq!(back, x);
        }

        #[test]
        fn rescale_roundtrip_is_close_for_floats(x in -1.0e6f64..1.0e6, d in decades()) {
            let there = x.rescale(&d).unwrap();
            let back = there.rescale(&-d).unwrap();
            prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0));
        }

        #[test]
        fn integer_powers_agree(x in small_rational(), n in 0i64..6) {
            let exact = OrderedField::powi(&x, n).unwrap();
            let float = OrderedField::powi(&x.to_f64(), n).unwrap();
            prop_assert!((exact.to_f64() - float).abs() <= 1e-6 * float.abs().max(1.0));
        }

        #[test]
        fn floor_never_exceeds_value(x in small_rational()) {
            prop_assert!(OrderedField::floor(&x) <= x);
            prop_assert!(OrderedField::floor(&x.to_f64()) <= x.to_f64());
        }
    }
}
