//! # Observability
//!
//! - `logging`: tracing subscriber setup
//! - `metrics`: Prometheus counters

pub mod logging;
pub mod metrics;

// Re-export for convenience
pub use logging::{init_logging, LogFormat};
pub use metrics::{init_metrics, register_metrics};

use crate::config::OperatorConfig;
use anyhow::Result;
use tracing::info;

/// Install logging, then register metrics if enabled
///
/// # Errors
///
/// Returns an error if either has already been initialized.
pub fn init_observability(config: &OperatorConfig) -> Result<()> {
    init_logging(config)?;
    let metrics_enabled = init_metrics(config)?;
    info!(metrics_enabled, "Observability initialized");
    Ok(())
}
