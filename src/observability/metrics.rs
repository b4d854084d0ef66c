//! # Metrics
//!
//! Prometheus metrics for the property translator.
//!
//! ## Metrics Exposed
//!
//! - `azuresql_translation_defaults_total{kind}` - Number of times an
//!   unrecognized value was replaced by its default (`kind` is `edition` or
//!   `failover_policy`)

use crate::config::OperatorConfig;
use anyhow::Result;
use prometheus::{Encoder, IntCounterVec, Registry, TextEncoder};
use std::sync::LazyLock;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static TRANSLATION_DEFAULTS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "azuresql_translation_defaults_total",
            "Total number of unrecognized values replaced by a default during translation",
        ),
        &["kind"],
    )
    .expect("Failed to create TRANSLATION_DEFAULTS_TOTAL metric - this should never happen")
});

/// Register all metrics with the crate registry
///
/// # Errors
///
/// Returns an error if the metrics are already registered.
pub fn register_metrics() -> Result<()> {
    REGISTRY.register(Box::new(TRANSLATION_DEFAULTS_TOTAL.clone()))?;
    Ok(())
}

/// Register metrics if `config.enable_metrics` is set
///
/// Returns whether the metrics were registered.
///
/// # Errors
///
/// Returns an error if the metrics are already registered.
pub fn init_metrics(config: &OperatorConfig) -> Result<bool> {
    if !config.enable_metrics {
        return Ok(false);
    }
    register_metrics()?;
    Ok(true)
}

pub fn increment_translation_defaults(kind: &str) {
    TRANSLATION_DEFAULTS_TOTAL.with_label_values(&[kind]).inc();
}

/// Current value of the defaults counter for `kind`
pub fn translation_defaults(kind: &str) -> u64 {
    TRANSLATION_DEFAULTS_TOTAL.with_label_values(&[kind]).get()
}

/// Render the registry in the Prometheus text exposition format
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn gather_text() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_counter_increments() {
        let before = translation_defaults("test_kind");
        increment_translation_defaults("test_kind");
        assert_eq!(translation_defaults("test_kind"), before + 1);
    }

    #[test]
    fn test_disabled_metrics_are_not_registered() {
        let config = OperatorConfig {
            enable_metrics: false,
            ..OperatorConfig::default()
        };
        assert!(!init_metrics(&config).unwrap());
    }

    #[test]
    fn test_registered_metrics_are_exported() {
        assert!(init_metrics(&OperatorConfig::default()).expect("first registration succeeds"));
        increment_translation_defaults("export_kind");
        let text = gather_text().unwrap();
        assert!(text.contains("azuresql_translation_defaults_total{kind=\"export_kind\"}"));
        assert!(register_metrics().is_err());
    }
}
