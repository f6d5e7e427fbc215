//! MESSAGE combinators - custom error messages
//!
//! Rules raise errors with generic wording. These combinators re-word them:
//!
//! - [`WithMessage`] folds every violation of a rule into one error with a
//!   fixed message.
//! - [`OverrideMessage`] rewrites the message of each error with a given
//!   code, using a fixed string or a function of the error.
//! - [`OverrideMessages`] rewrites messages through a code → message table.
//!
//! The last two never add or remove errors. They are also available as plain
//! passes over an error list: [`override_message`] and [`override_messages`].

use std::borrow::Cow;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::foundation::{Context, Validate, ValidationError, ValidationErrors};

// ============================================================================
// MESSAGE
// ============================================================================

/// Replacement text for an error.
#[derive(Clone)]
pub enum Message {
    /// The same text for every matching error.
    Static(Cow<'static, str>),
    /// Text computed from the failing error (its value, params, path).
    Dynamic(Arc<dyn Fn(&ValidationError) -> String + Send + Sync>),
}

impl Message {
    /// Creates a message computed from the failing error.
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&ValidationError) -> String + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(f))
    }

    /// Renders the message for `error`.
    pub fn render(&self, error: &ValidationError) -> Cow<'static, str> {
        match self {
            Self::Static(text) => text.clone(),
            Self::Dynamic(f) => Cow::Owned(f(error)),
        }
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(<function>)"),
        }
    }
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Self::Static(Cow::Borrowed(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Static(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for Message {
    fn from(text: Cow<'static, str>) -> Self {
        Self::Static(text)
    }
}

// ============================================================================
// ERROR-LIST PASSES
// ============================================================================

/// Rewrites the message of every error whose code is `code`.
///
/// # Examples
///
/// ```
/// use apigw_validator::combinators::{Message, override_message};
/// use apigw_validator::foundation::{ValidationError, ValidationErrors};
///
/// let mut errors: ValidationErrors = [
///     ValidationError::new("object.oxor", "conflict"),
///     ValidationError::new("string.base", "\"origin\" must be a string"),
/// ]
/// .into_iter()
/// .collect();
///
/// override_message(&mut errors, "object.oxor", &Message::from("pick one"));
/// assert_eq!(errors.messages(), vec!["pick one", "\"origin\" must be a string"]);
/// ```
pub fn override_message(errors: &mut ValidationErrors, code: &str, message: &Message) {
    for error in errors.iter_mut().filter(|e| e.code == code) {
        let text = message.render(error);
        error.set_message(text);
    }
}

/// Rewrites messages by code; codes missing from `messages` are untouched.
pub fn override_messages(
    errors: &mut ValidationErrors,
    messages: &IndexMap<Cow<'static, str>, Cow<'static, str>>,
) {
    for error in errors.iter_mut() {
        if let Some(text) = messages.get(&*error.code) {
            error.set_message(text.clone());
        }
    }
}

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces every violation of a rule with one error carrying `message`.
///
/// The folded error keeps the code of the first violation, sits at the
/// rule's own path, and nests the original errors.
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V: Validate> Validate for WithMessage<V> {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        self.inner.validate(input, cx).map_err(|original| {
            let code = original
                .errors()
                .first()
                .map_or(Cow::Borrowed("any.invalid"), |e| e.code.clone());

            let mut error = cx
                .error(code, self.message.clone())
                .with_nested(original.into_vec());
            if let Some(value) = input {
                error = error.with_value(value.clone());
            }
            error.into()
        })
    }
}

/// Creates a [`WithMessage`] combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

// ============================================================================
// SINGLE-TYPE OVERRIDE
// ============================================================================

/// Rewrites the message of errors with one code.
#[derive(Debug, Clone)]
pub struct OverrideMessage<V> {
    inner: V,
    code: Cow<'static, str>,
    message: Message,
}

impl<V> OverrideMessage<V> {
    pub fn new(inner: V, code: impl Into<Cow<'static, str>>, message: impl Into<Message>) -> Self {
        Self {
            inner,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl<V: Validate> Validate for OverrideMessage<V> {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        self.inner.validate(input, cx).map_err(|mut errors| {
            override_message(&mut errors, &self.code, &self.message);
            errors
        })
    }
}

// ============================================================================
// MULTI-TYPE OVERRIDE
// ============================================================================

/// Rewrites messages through a code → message table.
#[derive(Debug, Clone)]
pub struct OverrideMessages<V> {
    inner: V,
    messages: IndexMap<Cow<'static, str>, Cow<'static, str>>,
}

impl<V> OverrideMessages<V> {
    pub fn new<I, C, M>(inner: V, messages: I) -> Self
    where
        I: IntoIterator<Item = (C, M)>,
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self {
            inner,
            messages: messages
                .into_iter()
                .map(|(code, message)| (code.into(), message.into()))
                .collect(),
        }
    }

    pub fn messages(&self) -> &IndexMap<Cow<'static, str>, Cow<'static, str>> {
        &self.messages
    }
}

impl<V: Validate> Validate for OverrideMessages<V> {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        self.inner.validate(input, cx).map_err(|mut errors| {
            override_messages(&mut errors, &self.messages);
            errors
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
