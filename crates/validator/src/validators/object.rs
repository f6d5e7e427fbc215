//! Object rule and peer constraints
//!
//! [`ObjectRule`] checks declared keys in declaration order, then keys it
//! does not declare, then peer constraints. Without any declared key or
//! pattern every member is allowed; once keys are declared, undeclared
//! members are rejected with `object.unknown`.
//!
//! Peer constraints ([`xor`], [`oxor`]) are rules of their own so they can be
//! attached to an object rule or composed next to one with
//! [`and`](crate::foundation::ValidateExt::and).
//!
//! # Examples
//!
//! ```
//! use apigw_validator::foundation::{Validate, ValidateExt};
//! use apigw_validator::validators::{object, string};
//! use serde_json::json;
//!
//! let key = object()
//!     .key("pathParam", string())
//!     .key("queryStringParam", string())
//!     .xor(["pathParam", "queryStringParam"]);
//!
//! assert!(key.validate_root(&json!({"pathParam": "id"})).is_ok());
//!
//! let errors = key.validate_root(&json!({})).unwrap_err();
//! assert_eq!(errors.codes(), vec!["object.missing"]);
//!
//! let errors = key
//!     .validate_root(&json!({"pathParam": "id", "queryStringParam": "id"}))
//!     .unwrap_err();
//! assert_eq!(errors.codes(), vec!["object.xor"]);
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::foundation::{Context, Rule, Validate, ValidationErrors, validate_with_all};
use crate::json::bracketed;
use crate::validators::type_mismatch;

// ============================================================================
// PEER CONSTRAINTS
// ============================================================================

/// How many of a set of peer keys may be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerMode {
    /// Exactly one.
    Xor,
    /// At most one.
    Oxor,
}

/// A constraint over which of several keys of an object are present.
///
/// Non-object values pass: the type belongs to whichever rule owns the
/// object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerRule {
    mode: PeerMode,
    peers: Vec<Cow<'static, str>>,
}

impl PeerRule {
    pub fn new<I, S>(mode: PeerMode, peers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            mode,
            peers: peers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn mode(&self) -> PeerMode {
        self.mode
    }

    pub fn peers(&self) -> &[Cow<'static, str>] {
        &self.peers
    }

    fn present<'m>(&'m self, map: &Map<String, Value>) -> Vec<&'m str> {
        self.peers
            .iter()
            .map(AsRef::as_ref)
            .filter(|peer| map.contains_key(*peer))
            .collect()
    }
}

impl Validate for PeerRule {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        let Some(map) = input.and_then(Value::as_object) else {
            return Ok(());
        };

        let present = self.present(map);
        let peers = bracketed(&self.peers);
        let label = cx.label();

        let error = match (self.mode, present.len()) {
            (PeerMode::Xor, 0) => cx
                .error(
                    "object.missing",
                    format!("\"{label}\" must contain at least one of {peers}"),
                )
                .with_param("peers", peers),
            (PeerMode::Xor | PeerMode::Oxor, n) if n > 1 => {
                let code = match self.mode {
                    PeerMode::Xor => "object.xor",
                    PeerMode::Oxor => "object.oxor",
                };
                let kind = match self.mode {
                    PeerMode::Xor => "exclusive peers",
                    PeerMode::Oxor => "optional exclusive peers",
                };
                cx.error(
                    code,
                    format!("\"{label}\" contains a conflict between {kind} {peers}"),
                )
                .with_param("peers", peers)
                .with_param("present", bracketed(&present))
            }
            _ => return Ok(()),
        };

        Err(error.with_value(Value::Object(map.clone())).into())
    }
}

/// Exactly one of `peers` must be present.
pub fn xor<I, S>(peers: I) -> PeerRule
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    PeerRule::new(PeerMode::Xor, peers)
}

/// At most one of `peers` may be present.
pub fn oxor<I, S>(peers: I) -> PeerRule
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    PeerRule::new(PeerMode::Oxor, peers)
}

// ============================================================================
// OBJECT RULE
// ============================================================================

/// Validates that a present value is an object and checks its members.
#[derive(Clone, Default)]
pub struct ObjectRule {
    keys: Option<Vec<(Cow<'static, str>, Rule)>>,
    pattern: Option<Rule>,
    peers: Vec<PeerRule>,
}

impl ObjectRule {
    /// Declares member `name`, validated by `rule`.
    #[must_use = "builder methods must be chained or built"]
    pub fn key(mut self, name: impl Into<Cow<'static, str>>, rule: impl Validate + 'static) -> Self {
        self.keys
            .get_or_insert_with(Vec::new)
            .push((name.into(), Arc::new(rule)));
        self
    }

    /// Declares that no members are allowed beyond those added with [`key`](Self::key).
    #[must_use = "builder methods must be chained or built"]
    pub fn closed(mut self) -> Self {
        self.keys.get_or_insert_with(Vec::new);
        self
    }

    /// Validates every undeclared member with `rule`.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, rule: impl Validate + 'static) -> Self {
        self.pattern = Some(Arc::new(rule));
        self
    }

    /// Exactly one of `peers` must be present.
    #[must_use = "builder methods must be chained or built"]
    pub fn xor<I, S>(mut self, peers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.peers.push(xor(peers));
        self
    }

    /// At most one of `peers` may be present.
    #[must_use = "builder methods must be chained or built"]
    pub fn oxor<I, S>(mut self, peers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.peers.push(oxor(peers));
        self
    }

    /// Appends the declared keys, pattern and peers of `other`.
    ///
    /// Keys declared by both keep `self`'s position and take `other`'s rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn merge(mut self, other: ObjectRule) -> Self {
        if let Some(extra) = other.keys {
            let keys = self.keys.get_or_insert_with(Vec::new);
            for (name, rule) in extra {
                let existing = keys.iter().position(|(declared, _)| *declared == name);
                match existing {
                    Some(index) => keys[index].1 = rule,
                    None => keys.push((name, rule)),
                }
            }
        }
        if other.pattern.is_some() {
            self.pattern = other.pattern;
        }
        self.peers.extend(other.peers);
        self
    }

    /// Names of the declared keys, in order.
    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .flatten()
            .map(|(name, _)| name.as_ref())
    }

    fn is_declared(&self, name: &str) -> bool {
        self.key_names().any(|declared| declared == name)
    }
}

impl std::fmt::Debug for ObjectRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectRule")
            .field("keys", &self.key_names().collect::<Vec<_>>())
            .field("pattern", &self.pattern.is_some())
            .field("peers", &self.peers)
            .finish()
    }
}

impl Validate for ObjectRule {
    fn validate(&self, input: Option<&Value>, cx: &Context<'_>) -> Result<(), ValidationErrors> {
        let Some(value) = input else {
            return Ok(());
        };
        let Some(map) = value.as_object() else {
            return Err(type_mismatch(cx, value, "object.base", "of type object"));
        };

        let mut errors = ValidationErrors::new();

        for (name, rule) in self.keys.iter().flatten() {
            errors.absorb(rule.validate(map.get(&**name), &cx.enter_key(name, map)));
        }

        for (name, member) in map {
            if self.is_declared(name) {
                continue;
            }
            let member_cx = cx.enter_key(name, map);
            match (&self.pattern, &self.keys) {
                (Some(rule), _) => errors.absorb(rule.validate(Some(member), &member_cx)),
                (None, Some(_)) => errors.add(
                    member_cx
                        .error("object.unknown", format!("\"{name}\" is not allowed"))
                        .with_value(member.clone()),
                ),
                (None, None) => {}
            }
        }

        errors.absorb(validate_with_all(input, cx, &self.peers));
        errors.into_result()
    }
}

/// An object rule with no declared keys (any member allowed until keys are added).
pub fn object() -> ObjectRule {
    ObjectRule::default()
}

// ============================================================================
// TESTS
// ============================================================================
