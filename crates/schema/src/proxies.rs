//! One rule per proxy kind.
//!
//! A kind schema matches an object with the single key naming the kind,
//! whose value is the common fields merged with the kind's own.

use apigw_validator::prelude::*;

use crate::common::{authorization_peers, common_fields};
use crate::dynamodb;
use crate::kind::ProxyKind;
use crate::refs::{
    partition_key, request, request_parameters, s3_key, string_or_get_att, string_or_ref,
};

pub const S3_ACTIONS: [&str; 3] = ["GetObject", "PutObject", "DeleteObject"];

/// The proxy definition of `kind` (the value under the kind key).
pub fn definition(kind: ProxyKind) -> Rule {
    let fields = match kind {
        ProxyKind::Kinesis => object()
            .key("streamName", string_or_ref().required())
            .key("partitionKey", partition_key().required())
            .key("request", request().required()),
        ProxyKind::S3 => object()
            .key("action", string().valid(S3_ACTIONS).required())
            .key("bucket", string_or_ref().required())
            .key("key", s3_key().required()),
        ProxyKind::Sns => object()
            .key("topicName", string_or_get_att("topicName", "TopicName").required())
            .key("request", request().required()),
        ProxyKind::Sqs => object()
            .key("queueName", string_or_get_att("queueName", "QueueName").required())
            .key("requestParameters", request_parameters()),
        ProxyKind::Dynamodb => object()
            .key("tableName", string_or_ref().required())
            .key("action", dynamodb::action())
            .key("hashKey", dynamodb::hash_key())
            .key("rangeKey", dynamodb::range_key())
            .key("condition", string()),
    };

    common_fields().merge(fields).and(authorization_peers()).boxed()
}

/// `{ <kind>: <definition> }`
pub fn schema(kind: ProxyKind) -> Rule {
    object().key(kind.as_str(), definition(kind).required()).boxed()
}
