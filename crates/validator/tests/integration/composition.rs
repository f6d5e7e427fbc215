//! Rules composed the way a configuration schema uses them.

use apigw_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn string_or_ref() -> Alternatives {
    alternatives([
        string().boxed(),
        object().key("Ref", string().required()).boxed(),
    ])
}

fn proxy() -> impl Validate {
    object()
        .key("path", string().required())
        .key("method", string().valid(["get", "post", "put"]).insensitive().required())
        .key("streamName", string_or_ref().required())
        .key("authorizationType", string().valid(["NONE", "AWS_IAM", "CUSTOM"]))
        .key("authorizerId", string_or_ref())
        .key(
            "cors",
            alternatives([
                boolean().boxed(),
                object()
                    .key("origin", string())
                    .key("origins", array().items(string()))
                    .oxor(["origin", "origins"])
                    .boxed(),
            ]),
        )
        .and(oxor(["authorizerId", "authorizationType"]).override_message(
            "object.oxor",
            "set either authorizerId or authorizationType",
        ))
}

#[test]
fn valid_document_passes() {
    let doc = json!({
        "path": "/kinesis",
        "method": "POST",
        "streamName": {"Ref": "MyStream"},
        "cors": {"origins": ["https://example.com"]},
    });
    assert!(proxy().validate_root(&doc).is_ok());
}

#[test]
fn violations_are_collected_with_paths() {
    let doc = json!({
        "method": "trace",
        "streamName": 12,
        "extra": true,
    });
    let errors = proxy().validate_root(&doc).unwrap_err();

    let located: Vec<(&str, &str)> = errors.iter().map(|e| (e.path(), e.code.as_ref())).collect();
    assert_eq!(
        located,
        vec![
            ("path", "any.required"),
            ("method", "any.only"),
            ("streamName", "alternatives.match"),
            ("extra", "object.unknown"),
        ]
    );
}

#[test]
fn nested_override_does_not_leak_into_sibling_rules() {
    let doc = json!({
        "path": "/kinesis",
        "method": "post",
        "streamName": "s",
        "authorizerId": "abc",
        "authorizationType": "CUSTOM",
        "cors": {"origin": "*", "origins": ["*"]},
    });
    let errors = proxy().validate_root(&doc).unwrap_err();

    assert_eq!(
        errors.messages(),
        vec![
            "\"cors\" contains a conflict between optional exclusive peers [origin, origins]",
            "set either authorizerId or authorizationType",
        ]
    );
}

#[test]
fn conditional_requirement_reads_siblings() {
    let rule = object()
        .key("method", string().required())
        .key("action", string())
        .key(
            "hashKey",
            When::new("action", is::present(), any())
                .otherwise(
                    When::new("method", is::one_of_insensitive(["post"]), string().required())
                        .override_message("any.required", "hashKey is needed for post"),
                ),
        );

    let errors = rule.validate_root(&json!({"method": "POST"})).unwrap_err();
    assert_eq!(errors.messages(), vec!["hashKey is needed for post"]);

    assert!(rule.validate_root(&json!({"method": "POST", "action": "PutItem"})).is_ok());
    assert!(rule.validate_root(&json!({"method": "get"})).is_ok());
}

#[test]
fn array_includes_message_can_inspect_the_element() {
    let kinds = array()
        .includes([
            object().key("kinesis", any().required()).boxed(),
            object().key("sqs", any().required()).boxed(),
        ])
        .override_message(
            "array.includes",
            Message::dynamic(|error| {
                let key = error
                    .value
                    .as_ref()
                    .and_then(Value::as_object)
                    .and_then(|map| map.keys().next().cloned())
                    .unwrap_or_default();
                format!("unsupported proxy \"{key}\"")
            }),
        );

    assert!(kinds.validate_root(&json!([{"kinesis": {}}, {"sqs": {}}])).is_ok());

    let errors = kinds.validate_root(&json!([{"kinesis": {}}, {"sns": {}}])).unwrap_err();
    assert_eq!(errors.messages(), vec!["unsupported proxy \"sns\""]);
    assert_eq!(errors.errors()[0].path(), "[1]");
}

#[test]
fn errors_serialize_without_internal_fields() {
    let errors = string().required().validate(None, &Context::root()).unwrap_err();
    let value = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        value,
        json!([{"type": "any.required", "path": "", "message": "\"value\" is required"}])
    );
}
