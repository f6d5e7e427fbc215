//! AND combinator - conjunction that reports both sides
//!
//! Unlike a short-circuiting `&&`, [`And`] always runs both rules so a single
//! pass surfaces every violation.
//!
//! # Examples
//!
//! ```
//! use apigw_validator::combinators::And;
//! use apigw_validator::foundation::{Validate, ValidateExt};
//! use apigw_validator::validators::{object, oxor, string};
//! use serde_json::json;
//!
//! let rule = And::new(
//!     object().key("name", string().required()),
//!     oxor(["a", "b"]),
//! );
//!
//! let errors = rule.validate_root(&json!({"a": 1, "b": 2})).unwrap_err();
//! assert_eq!(errors.codes(), vec!["any.required", "object.unknown", "object.unknown", "object.oxor"]);
//! ```

use serde_json::Value;

use crate::foundation::{Context, Validate, ValidationErrors};

/// Combines two rules; the result holds the left violations, then the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.absorb(self.left.validate(input, cx));
        errors.absorb(self.right.validate(input, cx));
        errors.into_result()
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}
