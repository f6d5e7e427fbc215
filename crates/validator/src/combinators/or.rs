//! OR combinator - alternatives tried in order
//!
//! [`Alternatives`] succeeds as soon as one rule accepts the value. When none
//! does, it reports the most specific explanation it can: if exactly one
//! alternative accepted the value's *type* and failed on its content, that
//! alternative's errors are surfaced directly; otherwise a single
//! `alternatives.match` error is raised.
//!
//! # Examples
//!
//! ```
//! use apigw_validator::combinators::alternatives;
//! use apigw_validator::foundation::{Validate, ValidateExt};
//! use apigw_validator::validators::{object, string};
//! use serde_json::json;
//!
//! let string_or_ref = alternatives([
//!     string().boxed(),
//!     object().key("Ref", string().required()).boxed(),
//! ]);
//!
//! assert!(string_or_ref.validate_root(&json!("my-bucket")).is_ok());
//! assert!(string_or_ref.validate_root(&json!({"Ref": "Bucket"})).is_ok());
//!
//! // The value is an object, so only the object branch explains the failure.
//! let errors = string_or_ref.validate_root(&json!({"Ref": 1})).unwrap_err();
//! assert_eq!(errors.codes(), vec!["string.base"]);
//! assert_eq!(errors.errors()[0].path(), "Ref");
//!
//! // Neither branch accepts numbers.
//! let errors = string_or_ref.validate_root(&json!(42)).unwrap_err();
//! assert_eq!(errors.codes(), vec!["alternatives.match"]);
//! ```

use serde_json::Value;

use crate::foundation::{Context, Rule, Validate, ValidationErrors};

/// Tries rules in order until one passes.
#[derive(Clone)]
pub struct Alternatives {
    rules: Vec<Rule>,
}

impl Alternatives {
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Appends another alternative.
    #[must_use = "builder methods must be chained or built"]
    pub fn or(mut self, rule: impl Validate + 'static) -> Self {
        self.rules.push(std::sync::Arc::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for Alternatives {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alternatives")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl Validate for Alternatives {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        let Some(value) = input else {
            return Ok(());
        };

        let mut failures = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            match rule.validate(input, cx) {
                Ok(()) => return Ok(()),
                Err(errors) => failures.push(errors),
            }
        }

        let here = cx.path().to_string();
        let mut candidates = failures
            .iter()
            .filter(|errors| !errors.iter().all(|e| e.is_type_mismatch_at(&here)));

        if let (Some(only), None) = (candidates.next(), candidates.next()) {
            return Err(only.clone());
        }

        let nested = failures.into_iter().flatten().collect();
        Err(cx
            .error(
                "alternatives.match",
                format!("\"{}\" does not match any of the allowed types", cx.label()),
            )
            .with_value(value.clone())
            .with_nested(nested)
            .into())
    }
}

/// Creates an [`Alternatives`] combinator.
pub fn alternatives(rules: impl IntoIterator<Item = Rule>) -> Alternatives {
    Alternatives::new(rules)
}

/// Creates an [`Alternatives`] combinator from two rules.
pub fn or<L, R>(left: L, right: R) -> Alternatives
where
    L: Validate + 'static,
    R: Validate + 'static,
{
    Alternatives::new([]).or(left).or(right)
}
