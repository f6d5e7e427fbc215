//! Helpers for describing `serde_json::Value`s in error messages.

use serde_json::Value;

/// Name of the JSON type of `value`, as used in `actual` error params.
///
/// # Examples
///
/// ```
/// use apigw_validator::json::kind_of;
/// use serde_json::json;
///
/// assert_eq!(kind_of(&json!("x")), "string");
/// assert_eq!(kind_of(&json!([1])), "array");
/// assert_eq!(kind_of(&json!(null)), "null");
/// ```
#[must_use]
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders a list the way messages quote allowed values: `[a, b, c]`.
#[must_use]
pub fn bracketed<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
