//! How each list entry is classified and reported.

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{messages_for, validate};

#[test]
fn unknown_kind() {
    assert_eq!(
        messages_for(json!({"lambda": {"path": "/l", "method": "get"}})),
        vec!["Invalid APIG proxy \"lambda\". This plugin supported Proxies are: kinesis, s3, sns, sqs, dynamodb."]
    );
}

#[test]
fn entry_without_keys() {
    assert_eq!(
        messages_for(json!({})),
        vec!["Invalid APIG proxy entry: no proxy type defined. This plugin supported Proxies are: kinesis, s3, sns, sqs, dynamodb."]
    );
}

#[test]
fn entry_with_two_kinds() {
    let entry = json!({
        "kinesis": {"path": "/k", "method": "post", "streamName": "s"},
        "sqs": {"path": "/q", "method": "post", "queueName": "q"},
    });
    assert_eq!(
        messages_for(entry),
        vec!["Ambiguous APIG proxy entry with keys [kinesis, sqs]. Define exactly one of: kinesis, s3, sns, sqs, dynamodb."]
    );
}

#[test]
fn entry_that_is_not_an_object() {
    assert_eq!(
        messages_for(json!("kinesis")),
        vec!["Invalid APIG proxy entry: expected an object with one of kinesis, s3, sns, sqs, dynamodb."]
    );
}

#[test]
fn list_that_is_not_an_array() {
    let errors = validate(&json!({"kinesis": {}})).unwrap_err();
    assert_eq!(errors.codes(), vec!["array.base"]);
    assert_eq!(errors.errors()[0].path(), "");
}

#[test]
fn one_error_per_failing_entry_in_order() {
    let proxies = json!([
        {"kinesis": {
            "path": "/k", "method": "post", "streamName": "s", "partitionKey": "p",
            "request": {"template": {"application/json": "{}"}},
        }},
        {"sns": {"path": "/n", "method": "post"}},
        {"s3": {"path": "/s", "method": "get", "action": "GetObject", "bucket": "b", "key": "k"}},
        {"unknown": {}},
    ]);
    let errors = validate(&proxies).unwrap_err();

    let located: Vec<(&str, &str)> = errors
        .iter()
        .map(|e| (e.path(), e.message.as_ref()))
        .collect();
    assert_eq!(
        located,
        vec![
            ("[1]", "\"topicName\" is required. \"request\" is required"),
            (
                "[3]",
                "Invalid APIG proxy \"unknown\". This plugin supported Proxies are: kinesis, s3, sns, sqs, dynamodb."
            ),
        ]
    );
}

#[test]
fn all_field_messages_of_an_entry_are_joined() {
    assert_eq!(
        messages_for(json!({"s3": {"path": "/s3", "method": "trace", "action": "ListObjects"}})),
        vec![
            "\"method\" must be one of [get, post, put, patch, options, head, delete, any]. \
             \"action\" must be one of [GetObject, PutObject, DeleteObject]. \
             \"bucket\" is required. \
             \"key\" is required"
        ]
    );
}

#[test]
fn unknown_fields_are_rejected() {
    assert_eq!(
        messages_for(json!({"sqs": {"path": "/q", "method": "post", "queueName": "q", "streamName": "s"}})),
        vec!["\"streamName\" is not allowed"]
    );
}
