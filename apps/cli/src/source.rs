//! Loading the proxy list out of a serverless config file.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Why a proxy list could not be obtained from a file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid YAML: {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} has no `{key}` entry", path.display())]
    MissingKey { path: PathBuf, key: String },
}

/// Parses `path` as JSON when it has a `.json` extension, as YAML otherwise.
pub fn load_document(path: &Path) -> Result<Value, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_owned(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&text).map_err(|source| SourceError::Json {
            path: path.to_owned(),
            source,
        })
    } else {
        serde_yaml::from_str(&text).map_err(|source| SourceError::Yaml {
            path: path.to_owned(),
            source,
        })
    }
}

/// Follows a dotted key (`custom.apiGatewayServiceProxies`) through nested objects.
pub fn lookup<'a>(document: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted
        .split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(document, |value, segment| value.get(segment))
}

/// Loads `path` and returns the value found at `key`.
pub fn load_proxies(path: &Path, key: &str) -> Result<Value, SourceError> {
    let document = load_document(path)?;
    tracing::debug!(path = %path.display(), key, "loaded document");

    lookup(&document, key)
        .cloned()
        .ok_or_else(|| SourceError::MissingKey {
            path: path.to_owned(),
            key: key.to_owned(),
        })
}
