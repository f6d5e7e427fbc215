//! Combinators for composing rules
//!
//! - [`Required`]: presence check
//! - [`And`]: both rules, all violations
//! - [`Alternatives`]: first rule that accepts the value wins
//! - [`When`]: rule chosen from a sibling value
//! - [`WithMessage`], [`OverrideMessage`], [`OverrideMessages`]: re-wording

pub mod and;
pub mod message;
pub mod or;
pub mod required;
pub mod when;

pub use and::{And, and};
pub use message::{
    Message, OverrideMessage, OverrideMessages, WithMessage, override_message, override_messages,
    with_message,
};
pub use or::{Alternatives, alternatives, or};
pub use required::{Required, required};
pub use when::{Condition, When, is, when};
