//! WHEN combinator - data-dependent rule selection
//!
//! [`When`] looks at a sibling of the value under validation and picks the
//! rule to apply: `then` if the sibling satisfies the condition, `otherwise`
//! if not. Because the chosen rule also sees absence, a `When` can make a
//! field mandatory only in some configurations.
//!
//! # Examples
//!
//! ```
//! use apigw_validator::combinators::{When, is};
//! use apigw_validator::foundation::{Context, Validate, ValidateExt};
//! use apigw_validator::validators::string;
//! use serde_json::json;
//!
//! // `authorizationType` must be CUSTOM whenever `authorizerId` is set.
//! let rule = When::new("authorizerId", is::present(), string().valid(["CUSTOM"]).required())
//!     .otherwise(string().valid(["NONE", "AWS_IAM", "CUSTOM"]));
//!
//! let proxy = json!({"authorizerId": "abc", "authorizationType": "NONE"});
//! let map = proxy.as_object().unwrap();
//! let cx = Context::root().enter_key("authorizationType", map);
//! assert!(rule.validate(map.get("authorizationType"), &cx).is_err());
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Context, Rule, Validate, ValidationErrors};
use crate::validators::any;

/// Predicate over a sibling value (`None` when the sibling is absent).
pub type Condition = Arc<dyn Fn(Option<&Value>) -> bool + Send + Sync>;

/// Applies `then` or `otherwise` depending on a sibling value.
#[derive(Clone)]
pub struct When {
    sibling: Cow<'static, str>,
    condition: Condition,
    then: Rule,
    otherwise: Rule,
}

impl When {
    /// Creates a new `When`; without [`otherwise`](Self::otherwise) a failed
    /// condition accepts anything.
    pub fn new<C, V>(sibling: impl Into<Cow<'static, str>>, condition: C, then: V) -> Self
    where
        C: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
        V: Validate + 'static,
    {
        Self {
            sibling: sibling.into(),
            condition: Arc::new(condition),
            then: Arc::new(then),
            otherwise: Arc::new(any()),
        }
    }

    /// Sets the rule used when the condition does not hold.
    #[must_use = "builder methods must be chained or built"]
    pub fn otherwise(mut self, rule: impl Validate + 'static) -> Self {
        self.otherwise = Arc::new(rule);
        self
    }

    /// Returns the sibling key the condition inspects.
    pub fn sibling(&self) -> &str {
        &self.sibling
    }

    fn select(&self, cx: &Context<'_>) -> &Rule {
        if (self.condition)(cx.sibling(&self.sibling)) {
            &self.then
        } else {
            &self.otherwise
        }
    }
}

impl std::fmt::Debug for When {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("When")
            .field("sibling", &self.sibling)
            .field("condition", &"<function>")
            .finish_non_exhaustive()
    }
}

impl Validate for When {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        self.select(cx).validate(input, cx)
    }
}

/// Creates a [`When`] combinator.
pub fn when<C, V>(sibling: impl Into<Cow<'static, str>>, condition: C, then: V) -> When
where
    C: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    V: Validate + 'static,
{
    When::new(sibling, condition, then)
}

/// Ready-made conditions for [`When`].
pub mod is {
    use serde_json::Value;

    /// The sibling is set (any value, including `null`).
    pub fn present() -> impl Fn(Option<&Value>) -> bool + Send + Sync + 'static {
        |value| value.is_some()
    }

    /// The sibling is a string equal to one of `values`.
    pub fn one_of<I, S>(values: I) -> impl Fn(Option<&Value>) -> bool + Send + Sync + 'static
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        move |value| {
            value
                .and_then(Value::as_str)
                .is_some_and(|s| values.iter().any(|v| v == s))
        }
    }

    /// Like [`one_of`], ignoring ASCII case.
    pub fn one_of_insensitive<I, S>(
        values: I,
    ) -> impl Fn(Option<&Value>) -> bool + Send + Sync + 'static
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        move |value| {
            value
                .and_then(Value::as_str)
                .is_some_and(|s| values.iter().any(|v| v.eq_ignore_ascii_case(s)))
        }
    }
}
