//! REQUIRED combinator - presence check

use serde_json::Value;

use crate::foundation::{Context, Validate, ValidationErrors};

/// Fails with `any.required` when the value is absent, otherwise delegates.
///
/// `null` counts as present; the inner rule decides whether it is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Required<V> {
    pub(crate) inner: V,
}

impl<V> Required<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: Validate> Validate for Required<V> {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        match input {
            None => Err(cx
                .error("any.required", format!("\"{}\" is required", cx.label()))
                .into()),
            Some(_) => self.inner.validate(input, cx),
        }
    }
}

pub fn required<V: Validate>(validator: V) -> Required<V> {
    Required::new(validator)
}
