//! Boolean rule

use serde_json::Value;

use crate::foundation::{Context, Validate, ValidationErrors};
use crate::validators::type_mismatch;

/// Validates that a present value is a JSON boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanRule;

impl Validate for BooleanRule {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        match input {
            None | Some(Value::Bool(_)) => Ok(()),
            Some(other) => Err(type_mismatch(cx, other, "boolean.base", "a boolean")),
        }
    }
}

pub fn boolean() -> BooleanRule {
    BooleanRule
}
