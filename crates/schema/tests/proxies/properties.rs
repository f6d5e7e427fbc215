//! Property-based tests over generated proxy definitions.

use apigw_schema::{ProxyKind, ProxyValidator};
use proptest::prelude::*;
use serde_json::{Value, json};

fn method() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["get", "POST", "Put", "patch", "delete", "trace", ""])
        .prop_map(str::to_owned)
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<u16>().prop_map(|n| json!(n)),
        "[a-zA-Z/{}]{0,8}".prop_map(Value::String),
        "[A-Za-z]{1,8}".prop_map(|id| json!({"Ref": id})),
    ]
}

fn definition() -> impl Strategy<Value = Value> {
    (
        method(),
        prop::collection::btree_map(
            prop::sample::select(vec![
                "path",
                "streamName",
                "queueName",
                "topicName",
                "tableName",
                "hashKey",
                "action",
                "cors",
                "authorizerId",
            ]),
            scalar(),
            0..6,
        ),
    )
        .prop_map(|(method, fields)| {
            let mut map: serde_json::Map<String, Value> = fields
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value))
                .collect();
            map.insert("method".into(), Value::String(method));
            Value::Object(map)
        })
}

fn entry() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(vec!["kinesis", "s3", "sns", "sqs", "dynamodb", "http"]),
        definition(),
    )
        .prop_map(|(kind, definition)| json!({kind: definition}))
}

proptest! {
    #[test]
    fn validation_is_idempotent(proxies in prop::collection::vec(entry(), 0..4)) {
        let validator = ProxyValidator::new();
        let list = Value::Array(proxies);
        prop_assert_eq!(validator.validate(&list), validator.validate(&list));
    }

    #[test]
    fn at_most_one_error_per_entry(proxies in prop::collection::vec(entry(), 0..4)) {
        let count = proxies.len();
        let errors = ProxyValidator::new()
            .validate(&Value::Array(proxies))
            .err()
            .map_or(0, |e| e.len());
        prop_assert!(errors <= count);
    }

    #[test]
    fn list_verdict_matches_entry_verdicts(proxies in prop::collection::vec(entry(), 0..4)) {
        let validator = ProxyValidator::new();
        let every_entry_ok = proxies.iter().all(|entry| validator.validate_entry(entry).is_ok());
        prop_assert_eq!(validator.validate(&Value::Array(proxies)).is_ok(), every_entry_ok);
    }

    #[test]
    fn unrecognized_kinds_always_fail(definition in definition()) {
        let entry = json!({"http": definition});
        prop_assert!(ProxyValidator::new().validate_entry(&entry).is_err());
        prop_assert!("http".parse::<ProxyKind>().is_err());
    }
}
