//! `apigw-proxy check`: validate the proxy list of one file.

use std::io::Write;
use std::path::PathBuf;

use apigw_schema::ProxyValidator;
use apigw_validator::combinators::{Message, override_message};
use apigw_validator::foundation::ValidationErrors;
use clap::Args;

use crate::config::{OutputFormat, Settings};
use crate::source::{SourceError, load_proxies};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// serverless.yml (or .json) file to check.
    pub file: PathBuf,

    /// Output format (overrides the configured one).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Dotted location of the proxy list in the file.
    #[arg(long)]
    pub proxies_key: Option<String>,
}

/// Result of checking a file that could be loaded.
#[derive(Debug)]
pub enum Outcome {
    Valid { proxies: usize },
    Invalid(ValidationErrors),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Valid { .. } => 0,
            Self::Invalid(_) => 1,
        }
    }
}

pub fn check(args: &CheckArgs, settings: &Settings) -> Result<Outcome, SourceError> {
    let proxies = load_proxies(&args.file, &settings.proxies_key)?;
    let count = proxies.as_array().map_or(0, Vec::len);

    Ok(match ProxyValidator::new().validate(&proxies) {
        Ok(()) => Outcome::Valid { proxies: count },
        Err(mut errors) => {
            name_the_list(&mut errors, &settings.proxies_key);
            Outcome::Invalid(errors)
        }
    })
}

/// The list sits at the validation root, so its type error would otherwise
/// read `"value" must be an array`.
fn name_the_list(errors: &mut ValidationErrors, proxies_key: &str) {
    let text = format!("\"{proxies_key}\" must be an array");
    let message = Message::dynamic(move |error| {
        if error.path().is_empty() {
            text.clone()
        } else {
            error.message.to_string()
        }
    });
    override_message(errors, "array.base", &message);
}

/// Writes the outcome; error locations are prefixed with the proxies key.
pub fn report(
    out: &mut impl Write,
    outcome: &Outcome,
    settings: &Settings,
) -> anyhow::Result<()> {
    match (settings.format, outcome) {
        (OutputFormat::Text, Outcome::Valid { proxies }) => {
            writeln!(out, "{} is valid ({proxies} proxies)", settings.proxies_key)?;
        }
        (OutputFormat::Text, Outcome::Invalid(errors)) => {
            for error in errors {
                writeln!(out, "{}{}: {}", settings.proxies_key, error.path(), error.message)?;
            }
        }
        (OutputFormat::Json, Outcome::Valid { .. }) => {
            writeln!(out, "[]")?;
        }
        (OutputFormat::Json, Outcome::Invalid(errors)) => {
            serde_json::to_writer_pretty(&mut *out, errors)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
