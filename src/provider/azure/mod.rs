//! # Azure Providers
//!
//! Azure Resource Manager shapes for Azure SQL.
//!
//! - `sql`: server, database and failover group property bodies
//! - `resource_id`: ARM IDs for SQL servers and databases

pub mod resource_id;
pub mod sql;

// Re-export for convenience
pub use resource_id::{ResourceIdError, SqlResourceId, SqlServerLocator};
pub use sql::{
    DatabaseEdition, DatabaseProperties, FailoverGroupProperties, ReadWriteEndpointFailoverPolicy,
    ServerProperties,
};
