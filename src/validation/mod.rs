//! # Validation
//!
//! Strict checks for Azure SQL resources.
//!
//! The translator never calls into this module: it defaults unknown values
//! instead of failing. A reconciler that prefers to reject bad input runs
//! these checks before translating.

mod names;
mod resources;

use thiserror::Error;

pub use names::{validate_database_name, validate_resource_group, validate_server_name};
pub use resources::{
    validate_database_properties, validate_database_spec, validate_failover_group_properties,
    validate_failover_group_spec, validate_server_spec,
};

/// Reasons a resource fails strict validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required but is empty")]
    EmptyField(&'static str),

    #[error("unrecognized database edition '{0}'")]
    UnrecognizedEdition(String),

    #[error("unrecognized failover policy '{0}' (expected Automatic or Manual)")]
    UnrecognizedFailoverPolicy(String),

    #[error("{field} '{name}' must be a valid Azure SQL server name (1-63 characters, lowercase letters/numbers/hyphens, cannot start or end with hyphen)")]
    InvalidServerName { field: &'static str, name: String },

    #[error("database name '{name}' is invalid: {reason}")]
    InvalidDatabaseName { name: String, reason: &'static str },

    #[error("{field} '{name}' must be a valid resource group name (1-90 characters, alphanumerics/underscores/hyphens/periods/parentheses, cannot end with period)")]
    InvalidResourceGroup { field: &'static str, name: String },

    #[error("failover grace period must not be negative, got {0}")]
    NegativeGracePeriod(i32),

    #[error("failover grace period of {minutes} minutes is below the {minimum} minute minimum for automatic failover")]
    GracePeriodTooShort { minutes: i32, minimum: i32 },

    #[error("failover group must contain at least one database")]
    EmptyDatabaseList,

    #[error("database '{0}' is listed more than once")]
    DuplicateDatabase(String),

    #[error("secondary server '{0}' is the primary server")]
    SecondaryIsPrimary(String),
}
