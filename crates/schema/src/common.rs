//! Fields shared by every proxy definition.
//!
//! `path`, `method`, `cors` and the authorization triple. The authorization
//! exclusivity check lives in [`authorization_peers`] rather than on the
//! object itself so its message override cannot reach the `cors` peer error.

use apigw_validator::prelude::*;

/// HTTP verbs accepted by `method` (and by `cors.methods`), compared without case.
pub const METHODS: [&str; 8] = [
    "get", "post", "put", "patch", "options", "head", "delete", "any",
];

/// Values accepted by `authorizationType` when nothing forces one.
pub const AUTHORIZATION_TYPES: [&str; 4] = ["NONE", "AWS_IAM", "CUSTOM", "COGNITO_USER_POOLS"];

pub const CORS_ORIGIN_CONFLICT: &str = "\"cors\" can have \"origin\" or \"origins\" but not both";

pub const AUTHORIZATION_CONFLICT: &str =
    "cannot set both \"authorizerId\" and \"authorizationScopes\"";

pub fn method() -> StringRule {
    string().valid(METHODS).insensitive()
}

/// `true`, `false`, or a detailed CORS object.
pub fn cors() -> Alternatives {
    let detailed = object()
        .key("headers", array().items(string()))
        .key("origin", string())
        .key("origins", array().items(string()))
        .key("methods", array().items(method()))
        .key("maxAge", number().min(1.0))
        .key("cacheControl", string())
        .key("allowCredentials", boolean())
        .oxor(["origin", "origins"])
        .override_message("object.oxor", CORS_ORIGIN_CONFLICT);

    alternatives([boolean().boxed(), detailed.boxed()])
}

/// `authorizationType`, constrained by whichever of `authorizerId` and
/// `authorizationScopes` is set.
pub fn authorization_type() -> When {
    When::new(
        "authorizerId",
        is::present(),
        string().valid(["CUSTOM"]).required(),
    )
    .otherwise(
        When::new(
            "authorizationScopes",
            is::present(),
            string().valid(["COGNITO_USER_POOLS"]).required(),
        )
        .otherwise(string().valid(AUTHORIZATION_TYPES)),
    )
}

/// At most one of `authorizerId` and `authorizationScopes`.
pub fn authorization_peers() -> OverrideMessage<PeerRule> {
    oxor(["authorizerId", "authorizationScopes"])
        .override_message("object.oxor", AUTHORIZATION_CONFLICT)
}

/// The keys every proxy definition declares.
pub fn common_fields() -> ObjectRule {
    object()
        .key("path", string().required())
        .key("method", method().required())
        .key("cors", cors())
        .key("authorizationType", authorization_type())
        .key("authorizerId", any())
        .key("authorizationScopes", array())
}
