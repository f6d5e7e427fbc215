//! Per-kind rules.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::messages_for;

#[rstest]
#[case::kinesis(json!({"kinesis": {
    "path": "/kinesis",
    "method": "post",
    "streamName": {"Ref": "MyStream"},
    "partitionKey": {"bodyParam": "data.id"},
    "request": {"template": {"application/json": "{\"Data\": \"$input.body\"}"}},
    "cors": true,
}}))]
#[case::s3(json!({"s3": {
    "path": "/s3/{key}",
    "method": "get",
    "action": "GetObject",
    "bucket": {"Ref": "MyBucket"},
    "key": {"pathParam": "key"},
    "authorizationType": "AWS_IAM",
}}))]
#[case::sns(json!({"sns": {
    "path": "/sns",
    "method": "post",
    "topicName": {"Fn::GetAtt": ["MyTopic", "TopicName"]},
    "request": {"template": {"application/json": "Message=$input.body"}},
}}))]
#[case::sqs(json!({"sqs": {
    "path": "/sqs",
    "method": "post",
    "queueName": {"Fn::GetAtt": ["MyQueue", "QueueName"]},
    "requestParameters": {"integration.request.querystring.MessageAttribute.1.Name": "'cartId'"},
    "authorizerId": {"Ref": "Authorizer"},
    "authorizationType": "CUSTOM",
}}))]
#[case::dynamodb(json!({"dynamodb": {
    "path": "/dynamodb/{id}",
    "method": "put",
    "tableName": "MyTable",
    "action": "PutItem",
    "hashKey": {"pathParam": "id", "attributeType": "S"},
    "rangeKey": {"queryStringParam": "sort", "attributeType": "N"},
    "condition": "attribute_not_exists(id)",
}}))]
fn complete_definitions_are_valid(#[case] entry: Value) {
    assert_eq!(messages_for(entry), Vec::<String>::new());
}

/// A complete kinesis definition with `extra` merged over it.
fn kinesis(extra: Value) -> Value {
    let mut definition = json!({
        "path": "/k",
        "method": "post",
        "streamName": "s",
        "partitionKey": "p",
        "request": {"template": {"application/json": "{}"}},
    });
    if let (Some(map), Value::Object(extra)) = (definition.as_object_mut(), extra) {
        map.extend(extra);
    }
    json!({"kinesis": definition})
}

fn sns(extra: Value) -> Value {
    let mut definition = json!({
        "path": "/n",
        "method": "post",
        "topicName": "t",
        "request": {"template": {"application/json": "Message=$input.body"}},
    });
    if let (Some(map), Value::Object(extra)) = (definition.as_object_mut(), extra) {
        map.extend(extra);
    }
    json!({"sns": definition})
}

fn without(mut entry: Value, kind: &str, key: &str) -> Value {
    if let Some(map) = entry[kind].as_object_mut() {
        map.remove(key);
    }
    entry
}

#[rstest]
#[case::kinesis_partition_key(kinesis(json!({})), "kinesis", "partitionKey")]
#[case::kinesis_request(kinesis(json!({})), "kinesis", "request")]
#[case::sns_request(sns(json!({})), "sns", "request")]
fn kind_fields_are_required(#[case] entry: Value, #[case] kind: &str, #[case] key: &str) {
    assert_eq!(messages_for(entry.clone()), Vec::<String>::new());
    assert_eq!(
        messages_for(without(entry, kind, key)),
        vec![format!("\"{key}\" is required")]
    );
}

// ============================================================================
// COMMON FIELDS
// ============================================================================

#[test]
fn cors_origin_conflict() {
    let entry = kinesis(json!({"cors": {"origin": "*", "origins": ["*"]}}));
    assert_eq!(
        messages_for(entry),
        vec!["\"cors\" can have \"origin\" or \"origins\" but not both"]
    );
}

#[test]
fn cors_without_origin_is_valid() {
    let entry = kinesis(json!({"cors": {"headers": ["Content-Type"], "maxAge": 60}}));
    assert!(messages_for(entry).is_empty());
}

#[rstest]
#[case(json!({"authorizerId": "abc", "authorizationType": "AWS_IAM"}))]
#[case(json!({"authorizationScopes": ["admin"], "authorizationType": "CUSTOM"}))]
#[case(json!({"authorizerId": "abc", "authorizationScopes": ["admin"], "authorizationType": "CUSTOM"}))]
#[case(json!({"authorizerId": "abc", "authorizationScopes": ["admin"], "authorizationType": "COGNITO_USER_POOLS"}))]
fn invalid_authorization(#[case] auth: Value) {
    assert!(!messages_for(kinesis(auth)).is_empty());
}

#[test]
fn authorizer_and_scopes_conflict_message() {
    let entry = sns(json!({
        "authorizerId": "abc", "authorizationScopes": ["admin"], "authorizationType": "CUSTOM",
    }));
    assert_eq!(
        messages_for(entry),
        vec!["cannot set both \"authorizerId\" and \"authorizationScopes\""]
    );
}

// ============================================================================
// SQS / SNS
// ============================================================================

#[test]
fn sqs_queue_name_is_required() {
    assert_eq!(
        messages_for(json!({"sqs": {"path": "/q", "method": "post"}})),
        vec!["\"queueName\" is required"]
    );
}

#[test]
fn sqs_request_parameters_are_optional() {
    let entry = json!({"sqs": {"path": "/q", "method": "post", "queueName": "q"}});
    assert!(messages_for(entry).is_empty());
}

#[test]
fn sqs_queue_name_with_wrong_attribute() {
    let entry = json!({"sqs": {
        "path": "/q", "method": "post",
        "queueName": {"Fn::GetAtt": ["MyQueue", "Arn"]},
    }});
    assert_eq!(
        messages_for(entry),
        vec!["\"queueName\" must be in the format \"{ 'Fn::GetAtt': ['<ResourceId>', 'QueueName'] }\""]
    );
}

#[test]
fn sns_topic_name_with_ref() {
    let entry = sns(json!({"topicName": {"Ref": "MyTopic"}}));
    assert_eq!(
        messages_for(entry),
        vec!["\"topicName\" must be in the format \"{ 'Fn::GetAtt': ['<ResourceId>', 'TopicName'] }\""]
    );
}

// ============================================================================
// KINESIS / S3
// ============================================================================

#[test]
fn kinesis_partition_key_conflict() {
    let entry = kinesis(json!({"partitionKey": {"pathParam": "id", "bodyParam": "id"}}));
    assert_eq!(
        messages_for(entry),
        vec!["key must contain \"pathParam\" or \"queryStringParam\" or \"bodyParam\" and only one"]
    );
}

#[test]
fn kinesis_request_needs_template() {
    let entry = kinesis(json!({"request": {}}));
    assert_eq!(messages_for(entry), vec!["\"template\" is required"]);
}

#[test]
fn s3_key_conflict() {
    let entry = json!({"s3": {
        "path": "/s3", "method": "get", "action": "GetObject", "bucket": "b",
        "key": {"pathParam": "k", "queryStringParam": "k"},
    }});
    assert_eq!(
        messages_for(entry),
        vec!["key must contain \"pathParam\" or \"queryStringParam\" but not both"]
    );
}

// ============================================================================
// DYNAMODB
// ============================================================================

fn dynamodb(extra: Value) -> Value {
    let mut definition = json!({"path": "/d", "tableName": "MyTable"});
    if let (Some(map), Value::Object(extra)) = (definition.as_object_mut(), extra) {
        map.extend(extra);
    }
    json!({"dynamodb": definition})
}

#[test]
fn dynamodb_post_without_hash_key() {
    assert_eq!(
        messages_for(dynamodb(json!({"method": "post"}))),
        vec![
            "\"hashKey\" is required when you define post to \"method\" and not define \"action\" property. \
             The hashKey value is generated from the API Gateway request id, so set only the attribute name"
        ]
    );
}

#[test]
fn dynamodb_post_with_attribute_name() {
    assert!(messages_for(dynamodb(json!({"method": "post", "hashKey": "id"}))).is_empty());
}

#[test]
fn dynamodb_post_with_key_scheme_hash_key() {
    let entry = dynamodb(json!({"method": "POST", "hashKey": {"pathParam": "id", "attributeType": "S"}}));
    assert_eq!(
        messages_for(entry),
        vec![
            "\"hashKey\" must be a string when you define post to \"method\" and not define \"action\" property. \
             The hashKey value is generated from the API Gateway request id, so set only the attribute name"
        ]
    );
}

#[test]
fn dynamodb_post_range_key_must_be_a_string() {
    let entry = dynamodb(json!({"method": "post", "hashKey": "id", "rangeKey": {"pathParam": "sort", "attributeType": "S"}}));
    assert_eq!(
        messages_for(entry),
        vec!["\"rangeKey\" must be a string when you define post to \"method\" and not define \"action\" property"]
    );
}

#[test]
fn dynamodb_options_without_action() {
    let entry = dynamodb(json!({
        "method": "options",
        "hashKey": {"pathParam": "id", "attributeType": "S"},
        "rangeKey": "sort",
    }));
    assert_eq!(
        messages_for(entry),
        vec!["\"action\" is required when you define options, head, any to \"method\" property"]
    );
}

#[test]
fn dynamodb_options_with_action() {
    let entry = dynamodb(json!({
        "method": "options",
        "action": "GetItem",
        "hashKey": {"pathParam": "id", "attributeType": "S"},
        "rangeKey": {"queryStringParam": "sort", "attributeType": "N"},
    }));
    assert!(messages_for(entry).is_empty());
}

#[test]
fn dynamodb_range_key_required_with_action() {
    let entry = dynamodb(json!({
        "method": "post",
        "action": "PutItem",
        "hashKey": {"pathParam": "id", "attributeType": "S"},
    }));
    assert_eq!(messages_for(entry), vec!["\"rangeKey\" is required"]);
}

#[rstest]
#[case("get")]
#[case("delete")]
fn dynamodb_default_key_scheme_for_other_methods(#[case] method: &str) {
    let missing = dynamodb(json!({"method": method}));
    assert_eq!(
        messages_for(missing),
        vec!["\"hashKey\" is required. \"rangeKey\" is required"]
    );

    let scheme = dynamodb(json!({
        "method": method,
        "hashKey": {"queryStringParam": "id", "attributeType": "S"},
        "rangeKey": "sort",
    }));
    assert!(messages_for(scheme).is_empty());
}

#[test]
fn dynamodb_unknown_action() {
    let entry = dynamodb(json!({"method": "get", "action": "Scan", "hashKey": "id", "rangeKey": "sort"}));
    assert_eq!(
        messages_for(entry),
        vec!["\"action\" must be one of [PutItem, GetItem, DeleteItem, UpdateItem]"]
    );
}
