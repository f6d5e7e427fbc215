//! Array rule
//!
//! [`ArrayRule`] checks the JSON type and then its elements, in one of three
//! ways (combinable):
//!
//! - [`items`](ArrayRule::items): one rule every element must pass; its
//!   errors are reported as-is.
//! - [`includes`](ArrayRule::includes): each element must match one of several
//!   rules; an element matching none yields a single `array.includes` error
//!   carrying the element.
//! - [`ordered`](ArrayRule::ordered): one rule per position.

use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Context, Rule, Validate, ValidationErrors};
use crate::validators::type_mismatch;

/// Validates that a present value is an array and checks its elements.
#[derive(Clone, Default)]
pub struct ArrayRule {
    items: Option<Rule>,
    includes: Vec<Rule>,
    ordered: Vec<Rule>,
    length: Option<usize>,
}

impl ArrayRule {
    /// Every element must pass `rule`.
    #[must_use = "builder methods must be chained or built"]
    pub fn items(mut self, rule: impl Validate + 'static) -> Self {
        self.items = Some(Arc::new(rule));
        self
    }

    /// Every element must pass at least one of `rules`.
    #[must_use = "builder methods must be chained or built"]
    pub fn includes(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.includes = rules.into_iter().collect();
        self
    }

    /// Element `i` must pass `rules[i]`.
    #[must_use = "builder methods must be chained or built"]
    pub fn ordered(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.ordered = rules.into_iter().collect();
        self
    }

    /// The array must have exactly `length` elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    fn check_element(&self, index: usize, element: &Value, cx: &Context<'_>) -> ValidationErrors {
        let cx = cx.enter_index(index);
        let mut errors = ValidationErrors::new();

        if let Some(rule) = self.ordered.get(index) {
            errors.absorb(rule.validate(Some(element), &cx));
        }

        if let Some(rule) = &self.items {
            errors.absorb(rule.validate(Some(element), &cx));
        }

        if !self.includes.is_empty() {
            let matched = self
                .includes
                .iter()
                .any(|rule| rule.validate(Some(element), &cx).is_ok());
            if !matched {
                errors.add(
                    cx.error(
                        "array.includes",
                        format!("\"{}\" does not match any of the allowed types", cx.label()),
                    )
                    .with_param("pos", index.to_string())
                    .with_value(element.clone()),
                );
            }
        }

        errors
    }
}

impl std::fmt::Debug for ArrayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayRule")
            .field("items", &self.items.is_some())
            .field("includes", &self.includes.len())
            .field("ordered", &self.ordered.len())
            .field("length", &self.length)
            .finish()
    }
}

impl Validate for ArrayRule {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        let Some(value) = input else {
            return Ok(());
        };
        let Some(elements) = value.as_array() else {
            return Err(type_mismatch(cx, value, "array.base", "an array"));
        };

        let mut errors = ValidationErrors::new();

        if let Some(length) = self.length {
            if elements.len() != length {
                errors.add(
                    cx.error(
                        "array.length",
                        format!("\"{}\" must contain {length} items", cx.label()),
                    )
                    .with_param("limit", length.to_string())
                    .with_value(value.clone()),
                );
            }
        }

        for (index, element) in elements.iter().enumerate() {
            errors.extend(self.check_element(index, element, cx));
        }

        errors.into_result()
    }
}

pub fn array() -> ArrayRule {
    ArrayRule::default()
}
