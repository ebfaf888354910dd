use proptest::prelude::*;
use strata_validator::prelude::*;

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_filter("NaN breaks equality", |x| !x.is_nan()).prop_map(Value::Float),
    ]
}

// ============================================================================
// ROUND TRIP: split(join(parts, sep), sep) == parts
// ============================================================================

proptest! {
    #[test]
    fn join_then_split_round_trips(
        parts in prop::collection::vec("[a-z0-9 ]{0,8}", 1..8),
        sep in "[,;|:]{1,2}",
    ) {
        let joined = parts.join(&sep);
        let out = convert_to_sequence(&Value::from(joined), Some(&sep));
        prop_assert_eq!(out, Value::strings(parts));
    }

    #[test]
    fn non_strings_pass_through_sequence(value in arb_scalar()) {
        prop_assert_eq!(convert_to_sequence(&value, Some(";")), value);
    }

    #[test]
    fn sequence_is_idempotent_on_lists(parts in prop::collection::vec(".{0,6}", 0..6)) {
        let list = Value::strings(parts);
        prop_assert_eq!(convert_to_sequence(&list, None), list);
    }
}

// ============================================================================
// PIPELINE: typed values pass, untyped values default
// ============================================================================

proptest! {
    #[test]
    fn typed_strings_pass(s in ".*") {
        let c = Coercion::expect(ValueKind::String).default(Value::Null);
        prop_assert_eq!(coerce_and_validate(Value::from(s.clone()), &c), Value::from(s));
    }

    #[test]
    fn lists_never_pass_as_strings(parts in prop::collection::vec(".{0,4}", 0..4)) {
        let c = Coercion::expect(ValueKind::String).default("d");
        prop_assert_eq!(coerce_and_validate(Value::strings(parts), &c), Value::from("d"));
    }

    #[test]
    fn rejecting_validator_always_defaults(value in arb_scalar()) {
        let c = Coercion::expect(value.kind())
            .validator(predicate(|_| false))
            .default("d");
        prop_assert_eq!(coerce_and_validate(value, &c), Value::from("d"));
    }

    #[test]
    fn finite_epochs_in_range_convert(secs in 0i64..4_000_000_000) {
        let out = convert_to_timestamp(&Value::Int(secs), None);
        prop_assert_eq!(out.kind(), ValueKind::DateTime);
    }
}
