//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Location**: [`Context`], [`Path`]
//!
//! # Architecture
//!
//! ## 1. Absence is an input
//!
//! A rule sees `None` when the key it guards is missing. Presence is a rule
//! like any other ([`Required`](crate::combinators::Required)), which lets a
//! conditional rule decide whether a field is mandatory.
//!
//! ## 2. Collect, don't stop
//!
//! Rules return every violation they find. An object rule checks all of its
//! keys and peer constraints before returning.
//!
//! ## 3. Detect, then phrase
//!
//! Rules raise errors with generic messages (`"path" is required`). The
//! message combinators re-word them afterwards, keyed by error code.

pub mod context;
pub mod error;
pub mod path;
pub mod traits;

pub use context::Context;
pub use error::{ValidationError, ValidationErrors};
pub use path::{Path, Segment};
pub use traits::{Rule, Validate, ValidateExt};

/// A validation result carrying every violation found.
pub type ValidationResult = Result<(), ValidationErrors>;

/// Runs every rule against the same input and collects all violations.
///
/// # Examples
///
/// ```
/// use apigw_validator::foundation::{Context, Rule, ValidateExt, validate_with_all};
/// use apigw_validator::validators::{boolean, string};
/// use serde_json::json;
///
/// let rules: Vec<Rule> = vec![string().boxed(), boolean().boxed()];
/// let errors = validate_with_all(Some(&json!(3)), &Context::root(), &rules).unwrap_err();
/// assert_eq!(errors.codes(), vec!["string.base", "boolean.base"]);
/// ```
pub fn validate_with_all<V>(
    input: Option<&serde_json::Value>,
    cx: &Context<'_>,
    rules: &[V],
) -> ValidationResult
where
    V: Validate,
{
    let mut errors = ValidationErrors::new();
    for rule in rules {
        errors.absorb(rule.validate(input, cx));
    }
    errors.into_result()
}
