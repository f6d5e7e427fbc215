//! DynamoDB fields whose rules depend on `method` and `action`.
//!
//! With an explicit `action`, keys use the request-parameter scheme. Without
//! one, a `post` generates the hash key value from the API Gateway request id,
//! so `hashKey` (and `rangeKey`) name the attribute only and `rangeKey` may be
//! left out. The verbs that do not map to a default action (`options`,
//! `head`, `any`) need an explicit one.

use apigw_validator::prelude::*;

use crate::refs::dynamodb_key_scheme;

pub const ACTIONS: [&str; 4] = ["PutItem", "GetItem", "DeleteItem", "UpdateItem"];

pub const ACTION_REQUIRED: &str =
    "\"action\" is required when you define options, head, any to \"method\" property";

pub const HASH_KEY_NOT_STRING: &str = "\"hashKey\" must be a string when you define post to \"method\" and not define \"action\" property. The hashKey value is generated from the API Gateway request id, so set only the attribute name";

pub const HASH_KEY_REQUIRED: &str = "\"hashKey\" is required when you define post to \"method\" and not define \"action\" property. The hashKey value is generated from the API Gateway request id, so set only the attribute name";

pub const RANGE_KEY_NOT_STRING: &str = "\"rangeKey\" must be a string when you define post to \"method\" and not define \"action\" property";

pub fn action() -> When {
    When::new(
        "method",
        is::one_of_insensitive(["options", "head", "any"]),
        string()
            .valid(ACTIONS)
            .required()
            .override_message("any.required", ACTION_REQUIRED),
    )
    .otherwise(string().valid(ACTIONS))
}

/// Selects the key rule: key scheme with an action, attribute name for a bare
/// `post`, key scheme otherwise.
fn key_rule(on_post: impl Validate + 'static, scheme: impl Validate + 'static) -> When {
    let scheme = scheme.boxed();
    When::new("action", is::one_of(ACTIONS), scheme.clone()).otherwise(
        When::new("method", is::one_of_insensitive(["post"]), on_post).otherwise(scheme),
    )
}

pub fn hash_key() -> When {
    key_rule(
        string().required().override_messages([
            ("string.base", HASH_KEY_NOT_STRING),
            ("any.required", HASH_KEY_REQUIRED),
        ]),
        dynamodb_key_scheme().required(),
    )
}

pub fn range_key() -> When {
    key_rule(
        string().override_message("string.base", RANGE_KEY_NOT_STRING),
        dynamodb_key_scheme().required(),
    )
}
