//! Built-in rules
//!
//! One rule per JSON type plus [`any`]. Each accepts an absent value; wrap
//! with [`required`](crate::combinators::required) to demand presence.
//!
//! # Examples
//!
//! ```
//! use apigw_validator::prelude::*;
//! use serde_json::json;
//!
//! let cors = object()
//!     .key("origin", string())
//!     .key("origins", array().items(string()))
//!     .key("maxAge", number().min(1.0))
//!     .key("allowCredentials", boolean())
//!     .oxor(["origin", "origins"]);
//!
//! assert!(cors.validate_root(&json!({"origins": ["*"], "maxAge": 86400})).is_ok());
//! assert!(cors.validate_root(&json!({"maxAge": 0})).is_err());
//! ```

pub mod any;
pub mod array;
pub mod boolean;
pub mod number;
pub mod object;
pub mod string;

pub use any::{Any, any};
pub use array::{ArrayRule, array};
pub use boolean::{BooleanRule, boolean};
pub use number::{NumberRule, number};
pub use object::{ObjectRule, PeerMode, PeerRule, object, oxor, xor};
pub use string::{StringRule, string};

use serde_json::Value;

use crate::foundation::{Context, ValidationErrors};
use crate::json::kind_of;

/// `"<label>" must be <expected>`, raised when a value has the wrong JSON type.
pub(crate) fn type_mismatch(
    cx: &Context<'_>,
    value: &Value,
    code: &'static str,
    expected: &'static str,
) -> ValidationErrors {
    cx.error(code, format!("\"{}\" must be {expected}", cx.label()))
        .with_param("expected", expected)
        .with_param("actual", kind_of(value))
        .with_value(value.clone())
        .into()
}
