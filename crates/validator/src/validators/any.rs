//! Accept-anything rule

use serde_json::Value;

use crate::foundation::{Context, Validate, ValidationErrors};

/// Accepts every value. Combine with [`required`](crate::combinators::required)
/// for "must be set, any shape".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Any;

impl Validate for Any {
    fn validate(&self, _input: Option<&Value>, _cx: &Context<'_>) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

pub fn any() -> Any {
    Any
}
