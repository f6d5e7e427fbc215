//! Validation of a full proxy list.
//!
//! Each entry must match one of the kind schemas. When an entry matches
//! none, the single `array.includes` error raised for it is reworded by
//! looking at what the entry was trying to be: the errors of the kind it
//! names, or why no kind could be determined.

use std::sync::Arc;

use apigw_validator::prelude::*;
use indexmap::IndexMap;
use serde_json::Value;

use crate::kind::ProxyKind;
use crate::proxies;

/// What a list entry looks like before any field is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryShape<'a> {
    /// A single recognized kind key.
    Kind(ProxyKind),
    /// A single key naming no supported kind.
    Unknown(&'a str),
    /// An object with no keys.
    Empty,
    /// An object with several keys.
    Ambiguous(Vec<&'a str>),
    /// Not an object at all.
    NotAnObject,
}

impl<'a> EntryShape<'a> {
    pub fn of(entry: &'a Value) -> Self {
        let Some(map) = entry.as_object() else {
            return Self::NotAnObject;
        };
        let mut keys = map.keys().map(String::as_str);
        match (keys.next(), keys.next()) {
            (None, _) => Self::Empty,
            (Some(key), None) => key.parse().map_or(Self::Unknown(key), Self::Kind),
            (Some(_), Some(_)) => Self::Ambiguous(map.keys().map(String::as_str).collect()),
        }
    }

    /// Message for entries whose kind cannot be determined.
    pub fn describe(&self) -> Option<String> {
        let supported = ProxyKind::supported();
        match self {
            Self::Kind(_) => None,
            Self::Unknown(key) => Some(format!(
                "Invalid APIG proxy \"{key}\". This plugin supported Proxies are: {supported}."
            )),
            Self::Empty => Some(format!(
                "Invalid APIG proxy entry: no proxy type defined. This plugin supported Proxies are: {supported}."
            )),
            Self::Ambiguous(keys) => Some(format!(
                "Ambiguous APIG proxy entry with keys [{}]. Define exactly one of: {supported}.",
                keys.join(", ")
            )),
            Self::NotAnObject => Some(format!(
                "Invalid APIG proxy entry: expected an object with one of {supported}."
            )),
        }
    }
}

/// Validates the list of API Gateway service proxies.
///
/// # Examples
///
/// ```
/// use apigw_schema::ProxyValidator;
/// use serde_json::json;
///
/// let validator = ProxyValidator::new();
///
/// let proxies = json!([
///     {"kinesis": {
///         "path": "/kinesis",
///         "method": "post",
///         "streamName": "MyStream",
///         "partitionKey": "static",
///         "request": {"template": {"application/json": "$input.body"}},
///     }},
///     {"sqs": {"path": "/sqs", "method": "post", "queueName": {"Fn::GetAtt": ["MyQueue", "QueueName"]}}},
/// ]);
/// assert!(validator.validate(&proxies).is_ok());
///
/// let errors = validator.validate(&json!([{"lambda": {}}])).unwrap_err();
/// assert_eq!(
///     errors.messages(),
///     vec!["Invalid APIG proxy \"lambda\". This plugin supported Proxies are: kinesis, s3, sns, sqs, dynamodb."]
/// );
/// ```
#[derive(Clone)]
pub struct ProxyValidator {
    kinds: Arc<IndexMap<ProxyKind, Rule>>,
    list: Rule,
}

impl ProxyValidator {
    pub fn new() -> Self {
        let kinds: Arc<IndexMap<ProxyKind, Rule>> = Arc::new(
            ProxyKind::ALL
                .into_iter()
                .map(|kind| (kind, proxies::schema(kind)))
                .collect(),
        );

        let explain = {
            let kinds = Arc::clone(&kinds);
            Message::dynamic(move |error| {
                error
                    .value
                    .as_ref()
                    .and_then(|entry| explain_entry(&kinds, entry))
                    .unwrap_or_else(|| error.message.to_string())
            })
        };

        let list = array()
            .includes(kinds.values().cloned())
            .override_message("array.includes", explain)
            .boxed();

        Self { kinds, list }
    }

    /// Validates a proxy list; each failing entry yields one error at `[i]`.
    pub fn validate(&self, proxies: &Value) -> Result<(), ValidationErrors> {
        let entries = proxies.as_array().map_or(0, Vec::len);
        tracing::debug!(entries, "validating proxy list");

        let result = self.list.validate_root(proxies);

        match &result {
            Ok(()) => tracing::debug!(entries, "proxy list is valid"),
            Err(errors) => tracing::debug!(entries, errors = errors.len(), "proxy list is invalid"),
        }
        result
    }

    /// Validates a single entry against the kind it names, reporting every
    /// field-level error with its path (`kinesis.streamName`, ...).
    ///
    /// Entries whose kind cannot be determined yield one error at the root
    /// carrying the same message [`validate`](Self::validate) would.
    pub fn validate_entry(&self, entry: &Value) -> Result<ProxyKind, ValidationErrors> {
        match EntryShape::of(entry) {
            EntryShape::Kind(kind) => self.schema(kind).validate_root(entry).map(|()| kind),
            shape => Err(ValidationError::new("array.includes", shape.describe().unwrap_or_default())
                .with_field("")
                .with_value(entry.clone())
                .into()),
        }
    }

    /// The rule for `{ <kind>: ... }` entries.
    pub fn schema(&self, kind: ProxyKind) -> &Rule {
        &self.kinds[&kind]
    }
}

impl Default for ProxyValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProxyValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyValidator")
            .field("kinds", &self.kinds.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

fn explain_entry(kinds: &IndexMap<ProxyKind, Rule>, entry: &Value) -> Option<String> {
    let kind = match EntryShape::of(entry) {
        EntryShape::Kind(kind) => kind,
        shape => return shape.describe(),
    };

    tracing::trace!(%kind, "re-validating entry against its named kind");
    kinds
        .get(&kind)?
        .validate_root(entry)
        .err()
        .map(|errors| errors.messages().join(". "))
}
