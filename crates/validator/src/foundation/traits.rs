//! Core traits for the validation system
//!
//! This module defines the trait every rule implements and the extension
//! trait that gives rules their fluent combinator API.

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::Value;

use crate::combinators::{
    And, Message, OverrideMessage, OverrideMessages, Required, WithMessage,
};
use crate::foundation::{Context, ValidationErrors};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all rules implement.
///
/// `input` is `None` when the key being validated is absent from its parent
/// object. Rules accept absence unless wrapped in [`Required`]. A rule reports
/// every violation it finds rather than stopping at the first.
///
/// # Examples
///
/// ```
/// use apigw_validator::foundation::{Context, Validate, ValidationErrors};
/// use serde_json::{Value, json};
///
/// struct NonNegative;
///
/// impl Validate for NonNegative {
///     fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
///         match input.and_then(Value::as_f64) {
///             Some(n) if n < 0.0 => Err(cx.error("number.positive", "must not be negative").into()),
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(NonNegative.validate(Some(&json!(-1)), &Context::root()).is_err());
/// assert!(NonNegative.validate(None, &Context::root()).is_ok());
/// ```
pub trait Validate: Send + Sync {
    /// Validates the (possibly absent) input value.
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors>;

    /// Validates a document root.
    fn validate_root(&self, input: &Value) -> Result<(), ValidationErrors> {
        self.validate(Some(input), &Context::root())
    }
}

/// A type-erased, shareable rule.
pub type Rule = Arc<dyn Validate>;

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        (**self).validate(input, cx)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        (**self).validate(input, cx)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use apigw_validator::prelude::*;
/// use serde_json::json;
///
/// let rule = string()
///     .valid(["GetObject", "PutObject"])
///     .required()
///     .override_message("any.required", "an S3 action is mandatory");
///
/// let errors = rule.validate(None, &Context::root()).unwrap_err();
/// assert_eq!(errors.messages(), vec!["an S3 action is mandatory"]);
/// assert!(rule.validate_root(&json!("PutObject")).is_ok());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Rejects an absent value with `any.required`.
    fn required(self) -> Required<Self> {
        Required::new(self)
    }

    /// Runs both rules and reports the violations of each.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
    {
        And::new(self, other)
    }

    /// Folds every violation into one error carrying `message`.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Rewrites the message of every error whose code is `code`.
    fn override_message(
        self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Message>,
    ) -> OverrideMessage<Self> {
        OverrideMessage::new(self, code, message)
    }

    /// Rewrites messages by code using a code → message table.
    fn override_messages<I, C, M>(self, messages: I) -> OverrideMessages<Self>
    where
        I: IntoIterator<Item = (C, M)>,
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        OverrideMessages::new(self, messages)
    }

    /// Erases the rule's type.
    fn boxed(self) -> Rule
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
