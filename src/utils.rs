//! Utils

use clap::{Args, Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, util::TryInitError};

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingArgs {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Arguments for the deal example
#[derive(Debug, Parser)]
#[command(name = "deal", about = "Cheapest way to buy a cart across vendors", long_about = None)]
pub struct DealArgs {
    /// Fixture set to load from `./fixtures/deals`
    #[arg(short, long, default_value = "electronics")]
    pub fixture: String,

    /// Request file (YAML or JSON) to load instead of a fixture set
    #[arg(short, long)]
    pub request: Option<String>,

    /// Currency used to display amounts, overriding the fixture's own
    #[arg(short, long)]
    pub currency: Option<String>,

    /// Only compute the multi-vendor deal, skipping single-vendor comparisons
    #[arg(long)]
    pub best_only: bool,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Install a global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` directives take precedence over the configured level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(args: &LoggingArgs) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_err| EnvFilter::new(args.log_level.as_str()));

    match args.log_format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init(),
    }
}
