//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_mul_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let product = a.clone() * a.recip();
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_additive_inverse(a in rational()) {
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        // Roots undo powers

        #[test]
        fn square_root_of_square(n in small_int(), d in non_zero_int()) {
            let a = Rational::from_i64(n, d).abs();
            let half = Rational::from_i64(1, 2);
            prop_assert_eq!(a.pow(2).pow_exact(&half), Some(a));
        }

        #[test]
        fn cube_root_keeps_sign(n in small_int()) {
            let a = Integer::new(n);
            prop_assert_eq!(a.pow(3).nth_root_exact(3), Some(a));
        }

        #[test]
        fn nth_root_floor_brackets_value(n in 0i64..1_000_000, k in 2u32..6) {
            let a = Integer::new(n);
            let root = a.nth_root_floor(k).unwrap();
            let next = root.clone() + Integer::new(1);
            prop_assert!(root.pow(k) <= a);
            prop_assert!(next.pow(k) > a);
        }

        // Rounding

        #[test]
        fn floor_ceil_bracket(a in rational()) {
            let floor = a.floor();
            let ceil = a.ceil();
            prop_assert!(floor.is_integer() && ceil.is_integer());
            prop_assert!(floor <= a && a <= ceil);
            prop_assert!(ceil - floor <= Rational::one());
        }

        #[test]
        fn decimal_literal_roundtrip(whole in 0i64..10_000, frac in 0i64..1000) {
            let literal = format!("{whole}.{frac:03}");
            let parsed: Rational = literal.parse().unwrap();
            prop_assert_eq!(parsed, Rational::from_i64(whole * 1000 + frac, 1000));
        }

        #[test]
        fn display_parse_roundtrip(a in rational()) {
            let parsed: Rational = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed, a);
        }
    }
}
