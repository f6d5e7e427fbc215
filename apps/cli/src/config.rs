//! Layered settings: defaults → `apigw-proxy.toml` (or `--config`) →
//! `APIGW_PROXY_*` environment variables → command-line flags.

use std::path::Path;

use anyhow::{Context as _, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// File read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "apigw-proxy.toml";

/// Prefix of the environment variables overriding file settings.
pub const ENV_PREFIX: &str = "APIGW_PROXY_";

/// Where serverless configs keep the proxy list.
pub const DEFAULT_PROXIES_KEY: &str = "custom.apiGatewayServiceProxies";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<path>: <message>` line per error.
    #[default]
    Text,
    /// The error list as JSON.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub format: OutputFormat,
    /// Dotted location of the proxy list inside the loaded document.
    pub proxies_key: String,
    /// Log filter used when neither `RUST_LOG` nor `-v` is given.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            proxies_key: DEFAULT_PROXIES_KEY.to_owned(),
            log_level: "warn".to_owned(),
        }
    }
}

impl Settings {
    /// Loads settings from the default file (if present) or an explicit one
    /// (which must exist), then the environment.
    pub fn load(config: Option<&Path>) -> anyhow::Result<Self> {
        let file = match config {
            Some(path) if !path.is_file() => {
                bail!("config file {} does not exist", path.display())
            }
            Some(path) => path,
            None => Path::new(DEFAULT_CONFIG_FILE),
        };

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .with_context(|| format!("invalid settings (from {} and {ENV_PREFIX}*)", file.display()))
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, format: Option<OutputFormat>, proxies_key: Option<&str>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(key) = proxies_key {
            key.clone_into(&mut self.proxies_key);
        }
        self
    }
}
