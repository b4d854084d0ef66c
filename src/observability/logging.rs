//! # Logging
//!
//! `tracing-subscriber` setup for the binaries.
//!
//! `RUST_LOG` takes precedence; otherwise the filter comes from
//! [`OperatorConfig::log_level`](crate::config::OperatorConfig).

use crate::config::OperatorConfig;
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Output format of the fmt subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Parse `json` or `text` (case-insensitive). Anything else is text.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Install the global tracing subscriber
///
/// Logs go to stderr so binaries can keep stdout for their output.
pub fn init_logging(config: &OperatorConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(crate::constants::DEFAULT_LOG_LEVEL));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match LogFormat::parse(&config.log_format) {
        LogFormat::Json => builder
            .json()
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {e}")),
        LogFormat::Text => builder
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
    }
}
