use proptest::prelude::*;
use ruling::{field, Facts, Outcome, RuleSetBuilder, Value};

/// Generate a random `Value`.
fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<f64>()
            .prop_filter("must be finite", |f| f.is_finite())
            .prop_map(Value::Float),
        any::<bool>().prop_map(Value::Bool),
        "[a-z]{1,8}".prop_map(Value::String),
    ]
}

/// Generate a field name from a small alphabet to increase collisions.
fn arb_field_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("x".to_owned()),
        Just("y".to_owned()),
        Just("z".to_owned()),
    ]
}

proptest! {
    /// Evaluation never panics for any single-rule ruleset + facts,
    /// including mismatched value types.
    #[test]
    fn eval_never_panics(
        field_name in arb_field_name(),
        expected in arb_value(),
        fact_name in arb_field_name(),
        fact_value in arb_value(),
    ) {
        let ruleset = RuleSetBuilder::new()
            .rule("r", |r| r.when(field(&field_name).eq(expected)).decide("HIT", ""))
            .build();

        let facts = Facts::new().set(&fact_name, fact_value);
        let _ = ruleset.evaluate(&facts);
        let _ = ruleset.evaluate_detailed(&facts);
    }

    /// A rule with no conditions matches any fact set.
    #[test]
    fn empty_conditions_always_match(
        fact_value in arb_value(),
    ) {
        let ruleset = RuleSetBuilder::new()
            .rule("always", |r| r.decide("HIT", ""))
            .build();

        let facts = Facts::new().set("x", fact_value);
        let outcome = ruleset.evaluate(&facts);
        prop_assert_eq!(outcome.selected_rule(), Some("always"));
    }

    /// A condition on a field absent from the facts never matches,
    /// regardless of operator or expected value.
    #[test]
    fn missing_field_never_matches(
        expected in arb_value(),
        op_index in 0_usize..5,
    ) {
        let f = field("absent");
        let cond = match op_index {
            0 => f.eq(expected),
            1 => f.gt(expected),
            2 => f.gte(expected),
            3 => f.lt(expected),
            _ => f.lte(expected),
        };
        let ruleset = RuleSetBuilder::new()
            .rule("r", |r| r.when(cond).decide("HIT", ""))
            .build();

        let facts = Facts::new().set("present", 1_i64);
        prop_assert_eq!(ruleset.evaluate(&facts), Outcome::unmatched());
    }

    /// Comparing a numeric fact to a string (or bool) operand is a
    /// non-match, never a panic or a spurious match.
    #[test]
    fn incomparable_types_never_match(
        number in any::<i64>(),
        text in "[a-z]{1,8}",
    ) {
        let ruleset = RuleSetBuilder::new()
            .rule("r", |r| r.when(field("x").eq(text)).decide("HIT", ""))
            .build();

        let facts = Facts::new().set("x", number);
        prop_assert_eq!(ruleset.evaluate(&facts), Outcome::unmatched());
    }

    /// Two identical unconditional rules at the same priority: the first
    /// always wins the tie.
    #[test]
    fn tie_break_prefers_first(priority in -100_i64..=100) {
        let ruleset = RuleSetBuilder::new()
            .rule("first", |r| r.priority(priority).decide("A", ""))
            .rule("second", |r| r.priority(priority).decide("B", ""))
            .build();

        let outcome = ruleset.evaluate(&Facts::new());
        prop_assert_eq!(outcome.selected_rule(), Some("first"));
        prop_assert_eq!(outcome.decision(), "A");
    }
}
