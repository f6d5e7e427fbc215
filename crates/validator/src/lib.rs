//! # apigw-validator
//!
//! Composable validation rules over `serde_json::Value` documents, with error
//! messages that can be overridden per rule and per error code.
//!
//! ## Quick Start
//!
//! ```
//! use apigw_validator::prelude::*;
//! use serde_json::json;
//!
//! let proxy = object()
//!     .key("path", string().required())
//!     .key("method", string().valid(["get", "post"]).insensitive().required());
//!
//! assert!(proxy.validate_root(&json!({"path": "/users", "method": "POST"})).is_ok());
//!
//! let errors = proxy.validate_root(&json!({"method": "trace"})).unwrap_err();
//! assert_eq!(
//!     errors.messages(),
//!     vec!["\"path\" is required", "\"method\" must be one of [get, post]"]
//! );
//! ```
//!
//! ## Building blocks
//!
//! - **Rules**: [`string`](validators::string), [`boolean`](validators::boolean),
//!   [`number`](validators::number), [`array`](validators::array),
//!   [`object`](validators::object), [`any`](validators::any)
//! - **Peers**: [`xor`](validators::xor), [`oxor`](validators::oxor)
//! - **Combinators**: [`Required`](combinators::Required), [`And`](combinators::And),
//!   [`Alternatives`](combinators::Alternatives), [`When`](combinators::When)
//! - **Messages**: [`WithMessage`](combinators::WithMessage),
//!   [`OverrideMessage`](combinators::OverrideMessage),
//!   [`OverrideMessages`](combinators::OverrideMessages)

// ValidationError is returned by value from every rule; boxing it would add an
// allocation to each failure path.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod json;
pub mod prelude;
pub mod validators;
