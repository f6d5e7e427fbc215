//! Prelude module for convenient imports.
//!
//! `use apigw_validator::prelude::*;` brings in the traits, error types,
//! rules and combinators needed to declare and run a schema.

// ============================================================================
// FOUNDATION: Core traits, errors, location
// ============================================================================

pub use crate::foundation::{
    Context, Path, Rule, Validate, ValidateExt, ValidationError, ValidationErrors,
    ValidationResult, validate_with_all,
};

// ============================================================================
// VALIDATORS: Built-in rules
// ============================================================================

pub use crate::validators::{
    ArrayRule, BooleanRule, NumberRule, ObjectRule, PeerRule, StringRule, any, array, boolean,
    number, object, oxor, string, xor,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    Alternatives, And, Message, OverrideMessage, OverrideMessages, Required, When, WithMessage,
    alternatives, and, is, or, override_message, override_messages, required, when,
    with_message,
};
