//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout carries only results. The filter comes from
//! `--log-level` when given, then `RUST_LOG`, then defaults to `info`.

use anyhow::Context;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Default filter directive
pub const DEFAULT_FILTER: &str = "info";

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Build the filter for an optional explicit directive
pub fn filter(directive: Option<&str>) -> anyhow::Result<EnvFilter> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{directive}'")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init(directive: Option<&str>, format: LogFormat) -> anyhow::Result<()> {
    let filter = filter(directive)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!(e).context("failed to install tracing subscriber"))
}
