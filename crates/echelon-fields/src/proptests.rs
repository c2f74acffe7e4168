//! Property-based tests for the field axioms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::traits::{Field, Ring};
    use crate::{FiniteField, Q};

    type F7 = FiniteField<7>;

    // Strategy for generating small rationals
    fn small_q() -> impl Strategy<Value = Q> {
        (-50i64..50, 1i64..20).prop_map(|(n, d)| Q::new(n, d))
    }

    fn f7() -> impl Strategy<Value = F7> {
        (0u64..7).prop_map(F7::new)
    }

    proptest! {
        // Rational field axioms

        #[test]
        fn q_add_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn q_mul_associative(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn q_additive_inverse(a in small_q()) {
            prop_assert_eq!(a + (-a), Q::zero());
        }

        #[test]
        fn q_multiplicative_inverse(a in small_q()) {
            if !a.is_zero() {
                prop_assert_eq!(a * a.inv().unwrap(), Q::one());
            } else {
                prop_assert_eq!(a.inv(), None);
            }
        }

        // Finite field axioms

        #[test]
        fn f7_add_commutative(a in f7(), b in f7()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn f7_distributive(a in f7(), b in f7(), c in f7()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn f7_additive_inverse(a in f7()) {
            prop_assert_eq!(a + (-a), F7::zero());
        }

        #[test]
        fn f7_multiplicative_inverse(a in f7()) {
            if !a.is_zero() {
                prop_assert_eq!(a * a.inv().unwrap(), F7::one());
            } else {
                prop_assert_eq!(a.inv(), None);
            }
        }

        #[test]
        fn f7_sub_is_add_neg(a in f7(), b in f7()) {
            prop_assert_eq!(a - b, a + (-b));
        }
    }
}
