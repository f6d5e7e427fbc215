//! String rule
//!
//! [`StringRule`] checks the JSON type, rejects empty strings and can
//! restrict the value to an allowed list, optionally ignoring ASCII case.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Context, Validate, ValidationErrors};
use crate::json::bracketed;
use crate::validators::type_mismatch;

/// Validates that a present value is a string.
///
/// # Examples
///
/// ```
/// use apigw_validator::foundation::{Validate, ValidateExt};
/// use apigw_validator::validators::string;
/// use serde_json::json;
///
/// let method = string().valid(["get", "post"]).insensitive();
/// assert!(method.validate_root(&json!("POST")).is_ok());
///
/// let errors = method.validate_root(&json!("trace")).unwrap_err();
/// assert_eq!(errors.messages(), vec!["\"value\" must be one of [get, post]"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringRule {
    valids: Option<Vec<Cow<'static, str>>>,
    insensitive: bool,
    allow_empty: bool,
}

impl StringRule {
    /// Restricts the value to `values`.
    #[must_use = "builder methods must be chained or built"]
    pub fn valid<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.valids = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Compares allowed values ignoring ASCII case.
    #[must_use = "builder methods must be chained or built"]
    pub fn insensitive(mut self) -> Self {
        self.insensitive = true;
        self
    }

    /// Accepts `""`.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    fn matches(&self, candidate: &str, allowed: &str) -> bool {
        if self.insensitive {
            candidate.eq_ignore_ascii_case(allowed)
        } else {
            candidate == allowed
        }
    }
}

impl Validate for StringRule {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        let Some(value) = input else {
            return Ok(());
        };
        let Some(text) = value.as_str() else {
            return Err(type_mismatch(cx, value, "string.base", "a string"));
        };

        if let Some(valids) = &self.valids {
            if valids.iter().any(|allowed| self.matches(text, allowed)) {
                return Ok(());
            }
            let list = bracketed(valids);
            return Err(cx
                .error("any.only", format!("\"{}\" must be one of {list}", cx.label()))
                .with_param("valids", list)
                .with_value(value.clone())
                .into());
        }

        if text.is_empty() && !self.allow_empty {
            return Err(cx
                .error(
                    "string.empty",
                    format!("\"{}\" is not allowed to be empty", cx.label()),
                )
                .with_value(value.clone())
                .into());
        }

        Ok(())
    }
}

pub fn string() -> StringRule {
    StringRule::default()
}
