//! Structured logging setup.
//!
//! Configured from environment variables:
//!
//! - `OPGROUP_LOG_LEVEL` - `trace`/`debug`/`info`/`warn`/`error` or any
//!   `EnvFilter` directive list (default: `warn`)
//! - `OPGROUP_LOG_FORMAT` - `pretty` (default) or `json`
//! - `OPGROUP_LOG_INCLUDE_LOCATION` - `true` to add file:line to each event
//!
//! Events are written to stderr so stdout can carry the JSON output of the CLI.

use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: JSON for pipelines, pretty-print for terminals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty, // Default to pretty
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directives, e.g. `info` or `opgroup=debug`
    pub log_level: String,
    pub format: LogFormat,
    /// Include file:line location
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("OPGROUP_LOG_LEVEL").unwrap_or(defaults.log_level),
            format: lookup("OPGROUP_LOG_FORMAT")
                .map(|s| LogFormat::parse(&s))
                .unwrap_or(defaults.format),
            include_location: lookup("OPGROUP_LOG_INCLUDE_LOCATION")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.include_location),
        }
    }

    /// Raise the level to at least `debug` (used by `--verbose`).
    #[must_use]
    pub fn verbose(mut self) -> Self {
        if matches!(self.log_level.as_str(), "warn" | "error" | "info") {
            self.log_level = "debug".to_string();
        }
        self
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the filter directives are invalid or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter: {}", config.log_level))?;

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
