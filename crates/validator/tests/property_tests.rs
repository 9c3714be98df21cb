//! Property-based tests for perch-validator.

use perch_validator::prelude::*;
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-50i32..50).prop_map(Value::from),
        // NaN never equals itself, which would defeat result comparisons.
        any::<f64>()
            .prop_filter("not NaN", |n| !n.is_nan())
            .prop_map(Value::Number),
        "[a-c]{0,2}".prop_map(Value::from),
        Just(Value::function(|_| Value::Null)),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-e]", inner), 0..5).prop_map(Value::object),
        ]
    })
}

fn widget() -> ObjectValidator {
    object! {
        "a" => number(),
        "b" => number().positive().optional(),
        "c" => array(string()).optional(),
        "d" => object! { "a" => boolean().optional(), "b" => literal("x").optional() }.optional(),
    }
}

// ============================================================================
// REUSABILITY: results do not depend on call order
// ============================================================================

proptest! {
    #[test]
    fn object_parse_is_order_independent(x1 in arb_value(), x2 in arb_value()) {
        let shared = widget();
        let forward = (shared.parse(&x1), shared.parse(&x2));
        let backward_second = shared.parse(&x2);
        let backward_first = shared.parse(&x1);

        prop_assert_eq!(&forward.0, &backward_first);
        prop_assert_eq!(&forward.1, &backward_second);
        prop_assert_eq!(&forward.0, &widget().parse(&x1));
    }

    #[test]
    fn number_parse_is_order_independent(x1 in arb_value(), x2 in arb_value()) {
        let v = number().positive();
        let first = v.parse(&x1);
        let _ = v.parse(&x2);
        prop_assert_eq!(first.is_ok(), v.parse(&x1).is_ok());
    }
}

// ============================================================================
// OPTIONAL: same result when present, absence always accepted
// ============================================================================

fn assert_optional_agrees<S>(v: &S, x: &Value) -> Result<(), TestCaseError>
where
    S: Schema,
    S::Output: PartialEq + std::fmt::Debug,
    S::Optional: Schema<Output = Option<S::Output>>,
{
    let optional = v.optional();
    match v.parse(x) {
        Ok(value) => prop_assert_eq!(optional.parse(x), Ok(Some(value))),
        Err(error) => prop_assert_eq!(optional.parse(x), Err(error)),
    }
    prop_assert_eq!(optional.parse_absent(), Ok(None));
    Ok(())
}

proptest! {
    #[test]
    fn optional_agrees_with_required(x in arb_value()) {
        assert_optional_agrees(&literal("a"), &x)?;
        assert_optional_agrees(&literal(Literal::Null), &x)?;
        assert_optional_agrees(&number(), &x)?;
        assert_optional_agrees(&number().positive(), &x)?;
        assert_optional_agrees(&function(), &x)?;
        assert_optional_agrees(&string(), &x)?;
        assert_optional_agrees(&boolean(), &x)?;
        assert_optional_agrees(&array(number()), &x)?;
        assert_optional_agrees(&widget(), &x)?;
    }
}

// ============================================================================
// AGGREGATION: parse_all accepts what parse accepts, and starts the same way
// ============================================================================

proptest! {
    #[test]
    fn parse_all_agrees_with_parse(x in arb_value()) {
        let schema = widget();
        match (schema.parse(&x), schema.parse_all(&x)) {
            (Ok(one), Ok(all)) => prop_assert_eq!(one, all),
            (Err(one), Err(all)) => prop_assert_eq!(Some(&one), all.first()),
            (one, all) => prop_assert!(false, "parse: {:?}, parse_all: {:?}", one, all),
        }
    }

    #[test]
    fn array_parse_all_agrees_with_parse(x in arb_value()) {
        let schema = array(number().positive());
        prop_assert_eq!(schema.parse(&x).is_ok(), schema.parse_all(&x).is_ok());
    }
}

// ============================================================================
// PRIMITIVES
// ============================================================================

proptest! {
    #[test]
    fn positive_matches_comparison(n in any::<f64>()) {
        prop_assert_eq!(number().positive().parse(&Value::Number(n)).is_ok(), n > 0.0);
    }

    #[test]
    fn number_literal_is_strict_equality(a in -20i32..20, b in -20i32..20) {
        prop_assert_eq!(literal(a).parse(&Value::from(b)).is_ok(), a == b);
    }

    #[test]
    fn number_returns_input(n in any::<f64>().prop_filter("not NaN", |n| !n.is_nan())) {
        prop_assert_eq!(number().parse(&Value::Number(n)), Ok(n));
    }

    #[test]
    fn unknown_keys_always_fail(key in "[f-z][a-z]{0,6}", n in -5i32..5) {
        let input = Value::object([("a", Value::from(n)), (key.as_str(), Value::Null)]);
        let err = widget().parse(&input).unwrap_err();
        prop_assert_eq!(err.code(), "unexpected_key");
    }
}
