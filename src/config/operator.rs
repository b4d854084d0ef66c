//! # Operator Configuration
//!
//! Settings the reconciler hands to the translator, plus logging and metrics
//! switches for the binaries.

use crate::constants::{
    DEFAULT_FAILOVER_GRACE_PERIOD_MINUTES, DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL,
};

/// Operator-level configuration
///
/// All settings have defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorConfig {
    /// Subscription used to build ARM resource IDs
    pub subscription_id: String,
    /// Grace period (minutes) used when a failover group leaves it at zero
    pub default_failover_grace_period_minutes: i32,
    /// Default tracing filter (overridden by `RUST_LOG`)
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: String,
    /// Register Prometheus metrics
    pub enable_metrics: bool,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            subscription_id: String::new(),
            default_failover_grace_period_minutes: DEFAULT_FAILOVER_GRACE_PERIOD_MINUTES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            enable_metrics: true,
        }
    }
}

impl OperatorConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            subscription_id: lookup("AZURE_SUBSCRIPTION_ID").unwrap_or(defaults.subscription_id),
            default_failover_grace_period_minutes: lookup(
                "AZURE_SQL_DEFAULT_GRACE_PERIOD_MINUTES",
            )
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.default_failover_grace_period_minutes),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT").unwrap_or(defaults.log_format),
            enable_metrics: lookup("ENABLE_METRICS")
                .map_or(defaults.enable_metrics, |v| parse_bool(&v)),
        }
    }
}

/// `true`, `1`, `yes` and `on` (any case) are true; everything else is false
fn parse_bool(value: &str) -> bool {
    let v_lower = value.trim().to_lowercase();
    v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
}
