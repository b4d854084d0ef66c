//! # Constants
//!
//! Shared constants used throughout the crate.
//!
//! These values represent reasonable defaults and can be overridden via
//! configuration or environment variables where applicable.

use crate::provider::azure::sql::{DatabaseEdition, ReadWriteEndpointFailoverPolicy};

/// API group of the Azure SQL custom resources
pub const CRD_GROUP: &str = "azure.microsoft.com";

/// API version of the Azure SQL custom resources
pub const CRD_VERSION: &str = "v1alpha1";

/// ARM resource provider namespace for Azure SQL
pub const SQL_PROVIDER_NAMESPACE: &str = "Microsoft.Sql";

/// Edition substituted for any edition the translator does not recognize
pub const DEFAULT_DB_EDITION: DatabaseEdition = DatabaseEdition::Free;

/// Failover policy substituted for any policy the translator does not recognize
pub const DEFAULT_FAILOVER_POLICY: ReadWriteEndpointFailoverPolicy =
    ReadWriteEndpointFailoverPolicy::Automatic;

/// Default read/write grace period (minutes) when a resource leaves it at zero
pub const DEFAULT_FAILOVER_GRACE_PERIOD_MINUTES: i32 = 60;

/// Smallest grace period Azure accepts for an automatic failover policy (minutes)
pub const MIN_AUTOMATIC_FAILOVER_GRACE_PERIOD_MINUTES: i32 = 60;

/// Maximum length of an Azure SQL logical server name
pub const MAX_SERVER_NAME_LENGTH: usize = 63;

/// Maximum length of an Azure SQL database name
pub const MAX_DATABASE_NAME_LENGTH: usize = 128;

/// Default tracing filter when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log format
pub const DEFAULT_LOG_FORMAT: &str = "text";
