//! # Custom Resource Definitions
//!
//! Kubernetes custom resources describing Azure SQL servers, databases and
//! failover groups (`azure.microsoft.com/v1alpha1`).
//!
//! ## Module Structure
//!
//! - `server.rs` - `AzureSqlServer`
//! - `database.rs` - `AzureSqlDatabase`
//! - `failover_group.rs` - `AzureSqlFailoverGroup`
//! - `edition.rs` - Database edition (name or legacy ordinal on the wire)
//! - `failover_policy.rs` - Read/write endpoint failover policy
//! - `status.rs` - Status shared by all three resources

mod database;
mod edition;
mod failover_group;
mod failover_policy;
mod server;
mod status;

// Re-export all public types
pub use database::{AzureSqlDatabase, AzureSqlDatabaseSpec};
pub use edition::DbEdition;
pub use failover_group::{AzureSqlFailoverGroup, AzureSqlFailoverGroupSpec};
pub use failover_policy::FailoverPolicy;
pub use server::{AzureSqlServer, AzureSqlServerSpec};
pub use status::{AzureSqlStatus, Condition};
