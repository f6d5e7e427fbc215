//! # apigw-proxy CLI entry point
//!
//! Loads settings, initialises logging and dispatches to the subcommand.
//! Exit codes: 0 valid, 1 invalid, 2 when the input or settings cannot be loaded.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use apigw_cli::check::{CheckArgs, check, report};
use apigw_cli::config::Settings;

/// Checks API Gateway service-proxy definitions (kinesis, s3, sns, sqs,
/// dynamodb) in a serverless configuration.
#[derive(Parser, Debug)]
#[command(name = "apigw-proxy", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML settings file (default: ./apigw-proxy.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the proxy list of a serverless.yml or JSON file.
    Check(CheckArgs),
}

const EXIT_LOAD_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(EXIT_LOAD_ERROR);
        }
    };

    init_tracing(cli.verbose, &settings.log_level);
    tracing::debug!(?settings, "apigw-proxy starting");

    match cli.command {
        Commands::Check(args) => run_check(&args, settings),
    }
}

/// `RUST_LOG` wins, then `-v` repetitions, then the configured level.
fn init_tracing(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_check(args: &CheckArgs, settings: Settings) -> ExitCode {
    let settings = settings.with_overrides(args.format, args.proxies_key.as_deref());

    let outcome = match check(args, &settings) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_LOAD_ERROR);
        }
    };

    if let Err(e) = report(&mut std::io::stdout().lock(), &outcome, &settings) {
        eprintln!("error: {e:#}");
        return ExitCode::from(EXIT_LOAD_ERROR);
    }
    ExitCode::from(outcome.exit_code())
}
