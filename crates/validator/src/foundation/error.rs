//! Error types for validation failures
//!
//! A [`ValidationError`] names the rule that failed (`code`), where it failed
//! (`field`, a rendered [`Path`](super::Path)) and what to tell the user
//! (`message`). Rules never stop at the first violation, so a validation pass
//! produces a [`ValidationErrors`] list in evaluation order.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! don't allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single rule violation.
///
/// Serializes as `{ "type": ..., "path": ..., "message": ... }`; params,
/// nested errors and the failing value stay in-process.
///
/// # Examples
///
/// ```
/// use apigw_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("any.required", "\"path\" is required")
///     .with_field("[0].kinesis.path")
///     .with_param("label", "path");
///
/// assert_eq!(error.param("label"), Some("path"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Dotted rule identifier, e.g. `any.required`, `object.xor`.
    #[serde(rename = "type")]
    pub code: Cow<'static, str>,

    /// Rendered location of the failing value, e.g. `[0].sqs.queueName`.
    #[serde(rename = "path", skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// User-facing text. Overridable per rule.
    pub message: Cow<'static, str>,

    /// Ordered template parameters (`label`, `valids`, `peers`, ...).
    #[serde(skip)]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Errors folded into this one by a combinator.
    #[serde(skip)]
    pub nested: Vec<ValidationError>,

    /// The value that failed, when there was one.
    #[serde(skip)]
    pub value: Option<Value>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            field: None,
            message: message.into(),
            params: Vec::new(),
            nested: Vec::new(),
            value: None,
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Attaches the failing value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Adds nested validation errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Replaces the message, keeping code and location.
    pub fn set_message(&mut self, message: impl Into<Cow<'static, str>>) {
        self.message = message.into();
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the rendered path, or `""` for errors raised at the root.
    #[must_use]
    pub fn path(&self) -> &str {
        self.field.as_deref().unwrap_or_default()
    }

    /// Returns `true` if this is a plain type mismatch (`string.base`,
    /// `object.base`, ...) raised at `path`.
    #[must_use]
    pub fn is_type_mismatch_at(&self, path: &str) -> bool {
        self.code.ends_with(".base") && self.path() == path
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) if !field.is_empty() => write!(f, "[{}] {}: {}", field, self.code, self.message),
            _ => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends every error of `other`, preserving order.
    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Folds the errors of a rule result into this collection.
    pub fn absorb(&mut self, result: Result<(), ValidationErrors>) {
        if let Err(errors) = result {
            self.extend(errors);
        }
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Iterates mutably; used by message overrides.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ValidationError> {
        self.errors.iter_mut()
    }

    /// Returns the messages in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_ref()).collect()
    }

    /// Returns the codes in order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.code.as_ref()).collect()
    }

    /// Consumes the collection, returning the underlying list.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
