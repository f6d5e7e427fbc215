//! Property-based tests for rule composition.

use apigw_validator::prelude::{
    Validate, ValidateExt, alternatives, and, boolean, number, object, string,
};
use proptest::prelude::*;
use serde_json::{Value, json};

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        ".{0,12}".prop_map(Value::String),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

// ============================================================================
// DETERMINISM: the same input always yields the same errors
// ============================================================================

proptest! {
    #[test]
    fn object_rule_is_deterministic(doc in json_value()) {
        let rule = object()
            .key("path", string().required())
            .key("cors", boolean())
            .oxor(["a", "b"]);
        prop_assert_eq!(rule.validate_root(&doc), rule.validate_root(&doc));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(doc in json_value()) {
        let combined = and(string(), string().valid(["get", "post"]));
        let left = string().validate_root(&doc).is_ok();
        let right = string().valid(["get", "post"]).validate_root(&doc).is_ok();
        prop_assert_eq!(combined.validate_root(&doc).is_ok(), left && right);
    }

    #[test]
    fn alternatives_pass_iff_any_branch_passes(doc in json_value()) {
        let rule = alternatives([string().boxed(), boolean().boxed(), number().boxed()]);
        let expected = doc.is_string() && !doc.as_str().is_some_and(str::is_empty)
            || doc.is_boolean()
            || doc.is_number();
        prop_assert_eq!(rule.validate_root(&doc).is_ok(), expected);
    }

    #[test]
    fn overrides_never_change_error_count(doc in json_value()) {
        let plain = object().key("path", string().required()).key("cors", boolean());
        let reworded = object()
            .key("path", string().required())
            .key("cors", boolean())
            .override_messages([("any.required", "x"), ("boolean.base", "y")]);

        let count = |r: Result<(), apigw_validator::foundation::ValidationErrors>| {
            r.err().map_or(0, |e| e.len())
        };
        prop_assert_eq!(count(plain.validate_root(&doc)), count(reworded.validate_root(&doc)));
    }
}
