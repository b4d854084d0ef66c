//! # Prelude
//!
//! Re-exports commonly used types for convenience.
//!
//! ```rust
//! use azuresql_properties::prelude::*;
//! ```

pub use crate::config::OperatorConfig;
pub use crate::crd::{
    AzureSqlDatabase, AzureSqlFailoverGroup, AzureSqlServer, AzureSqlStatus, DbEdition,
    FailoverPolicy,
};
pub use crate::provider::azure::{
    DatabaseEdition, DatabaseProperties, FailoverGroupProperties, ReadWriteEndpointFailoverPolicy,
    ServerProperties, SqlResourceId, SqlServerLocator,
};
pub use crate::translate::{
    sql_database_properties_to_database, sql_failover_group_properties_to_failover_group,
    sql_server_properties_to_server, translate_db_edition, translate_db_edition_ordinal,
    translate_failover_policy, SqlDatabaseProperties, SqlFailoverGroupProperties,
    SqlServerProperties,
};
pub use crate::validation::ValidationError;
