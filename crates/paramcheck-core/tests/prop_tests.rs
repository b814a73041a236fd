//! Property-based tests for the bounded-integer validator
//!
//! These tests verify construction, acceptance and rejection across the
//! whole i64 domain rather than hand-picked samples.

use paramcheck_core::{Error, IntegerRangeValidator, Validator, Value, Verdict};
use proptest::prelude::*;

/// Ordered bounds, biased towards small ranges so in-range hits are common
fn bounds_strategy() -> impl Strategy<Value = (i64, i64)> {
    prop_oneof![
        (any::<i64>(), any::<i64>()).prop_map(|(a, b)| (a.min(b), a.max(b))),
        (-1000i64..1000, 0i64..50).prop_map(|(lo, width)| (lo, lo + width)),
    ]
}

/// Candidate values of every kind other than integer
fn non_integer_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::Text),
        proptest::collection::vec(any::<i64>().prop_map(Value::Integer), 0..4)
            .prop_map(Value::List),
    ]
}

proptest! {
    #[test]
    fn ordered_bounds_construct((lo, hi) in bounds_strategy()) {
        let validator = IntegerRangeValidator::new(lo, hi).unwrap();
        prop_assert_eq!(validator.min(), lo);
        prop_assert_eq!(validator.max(), hi);
    }

    #[test]
    fn inverted_bounds_fail(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let (lo, hi) = (a.max(b), a.min(b));
        let result = IntegerRangeValidator::new(lo, hi);
        prop_assert!(
            matches!(result, Err(Error::InvalidBounds { .. })),
            "expected InvalidBounds, got {:?}",
            result
        );
    }

    #[test]
    fn accepts_iff_in_range((lo, hi) in bounds_strategy(), v in any::<i64>()) {
        let validator = IntegerRangeValidator::new(lo, hi).unwrap();
        prop_assert_eq!(validator.validate(&Value::Integer(v)), lo <= v && v <= hi);
    }

    #[test]
    fn accepts_values_drawn_from_range((lo, width) in (-1000i64..1000, 0i64..50), offset in 0i64..50) {
        let hi = lo + width;
        let validator = IntegerRangeValidator::new(lo, hi).unwrap();
        let v = lo + offset.min(width);
        prop_assert!(validator.validate(&Value::Integer(v)));
    }

    #[test]
    fn rejects_non_integers((lo, hi) in bounds_strategy(), value in non_integer_strategy()) {
        let validator = IntegerRangeValidator::new(lo, hi).unwrap();
        let verdict = validator.check(&value);
        prop_assert!(
            matches!(verdict, Verdict::RejectedWrongType { .. }),
            "expected wrong type, got {:?}",
            verdict
        );
    }

    #[test]
    fn verdicts_are_repeatable((lo, hi) in bounds_strategy(), v in any::<i64>()) {
        let validator = IntegerRangeValidator::new(lo, hi).unwrap();
        let value = Value::Integer(v);
        let first = validator.check(&value);
        for _ in 0..3 {
            prop_assert_eq!(&validator.check(&value), &first);
        }
    }
}
