//! Validation context: where a rule is running and what surrounds it.
//!
//! Conditional rules select what to apply from sibling values, so every
//! rule receives the enclosing object alongside its own input.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::error::ValidationError;
use super::path::Path;

/// Position of the value under validation.
#[derive(Debug, Clone, Default)]
pub struct Context<'a> {
    path: Path,
    parent: Option<&'a Map<String, Value>>,
}

impl<'a> Context<'a> {
    /// Context for the document root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Context for member `key` of `parent`.
    #[must_use]
    pub fn enter_key<'b>(&self, key: &str, parent: &'b Map<String, Value>) -> Context<'b> {
        Context {
            path: self.path.join_key(key),
            parent: Some(parent),
        }
    }

    /// Context for element `index` of an array. Elements have no siblings.
    #[must_use]
    pub fn enter_index(&self, index: usize) -> Context<'a> {
        Context {
            path: self.path.join_index(index),
            parent: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The object holding the current value, if any.
    pub fn parent(&self) -> Option<&'a Map<String, Value>> {
        self.parent
    }

    /// Looks up a sibling of the current value.
    pub fn sibling(&self, key: &str) -> Option<&'a Value> {
        self.parent.and_then(|parent| parent.get(key))
    }

    pub fn label(&self) -> String {
        self.path.label()
    }

    /// Builds an error located at the current path.
    pub fn error(
        &self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> ValidationError {
        ValidationError::new(code, message)
            .with_field(self.path.to_string())
            .with_param("label", self.label())
    }
}
