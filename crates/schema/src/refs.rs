//! Values that may be literals or CloudFormation references, and the
//! request-parameter key shapes.

use apigw_validator::prelude::*;

pub const S3_KEY_CONFLICT: &str =
    "key must contain \"pathParam\" or \"queryStringParam\" but not both";

pub const PARTITION_KEY_CONFLICT: &str =
    "key must contain \"pathParam\" or \"queryStringParam\" or \"bodyParam\" and only one";

pub const KEY_SCHEME_CONFLICT: &str =
    "key must contain \"pathParam\" or \"queryStringParam\" and only one";

/// A literal name or `{ Ref: <logical id> }`.
pub fn string_or_ref() -> Alternatives {
    alternatives([
        string().boxed(),
        object().key("Ref", string().required()).boxed(),
    ])
}

/// A literal name or `{ "Fn::GetAtt": [<resource id>, <attribute_name>] }`.
///
/// Any failure becomes a single error explaining the expected format.
pub fn string_or_get_att(
    property_name: &'static str,
    attribute_name: &'static str,
) -> WithMessage<Alternatives> {
    let get_att = object().key(
        "Fn::GetAtt",
        array()
            .length(2)
            .ordered([
                string().required().boxed(),
                string().valid([attribute_name]).required().boxed(),
            ])
            .required(),
    );

    alternatives([string().boxed(), get_att.boxed()]).with_message(format!(
        "\"{property_name}\" must be in the format \"{{ 'Fn::GetAtt': ['<ResourceId>', '{attribute_name}'] }}\""
    ))
}

/// S3 object key: a literal, or taken from exactly one request parameter.
pub fn s3_key() -> Alternatives {
    alternatives([
        string().boxed(),
        object()
            .key("pathParam", string())
            .key("queryStringParam", string())
            .xor(["pathParam", "queryStringParam"])
            .override_message("object.xor", S3_KEY_CONFLICT)
            .boxed(),
    ])
}

/// Kinesis partition key: a literal, or taken from exactly one request parameter.
pub fn partition_key() -> Alternatives {
    alternatives([
        string().boxed(),
        object()
            .key("pathParam", string())
            .key("queryStringParam", string())
            .key("bodyParam", string())
            .xor(["pathParam", "queryStringParam", "bodyParam"])
            .override_message("object.xor", PARTITION_KEY_CONFLICT)
            .boxed(),
    ])
}

/// DynamoDB key: the attribute name, or a request parameter plus its type.
pub fn dynamodb_key_scheme() -> Alternatives {
    alternatives([
        string().boxed(),
        object()
            .key("pathParam", string())
            .key("queryStringParam", string())
            .key("attributeType", string().required())
            .xor(["pathParam", "queryStringParam"])
            .override_message("object.xor", KEY_SCHEME_CONFLICT)
            .boxed(),
    ])
}

/// Mapping-template overrides: `{ template: { <content type>: <template> } }`.
pub fn request() -> ObjectRule {
    object().key("template", object().required())
}

/// `integration.request.*` mappings, each a non-empty string.
pub fn request_parameters() -> ObjectRule {
    object().pattern(string().required())
}
