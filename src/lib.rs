//! # Azure SQL Properties
//!
//! Translates the Azure SQL custom resources (`AzureSqlServer`,
//! `AzureSqlDatabase`, `AzureSqlFailoverGroup`) into the property bodies the
//! Azure SQL management API expects.
//!
//! ## Overview
//!
//! 1. **Custom resources** - `crd` defines the Kubernetes resources and the
//!    `DbEdition` / `FailoverPolicy` enums as they appear in manifests
//! 2. **Local properties** - `translate` holds the containers a reconciler
//!    fills from a resource
//! 3. **Translation** - `translate` maps them onto `provider::azure::sql`
//!    shapes; unknown editions become Free, unknown policies Automatic
//! 4. **Validation** - `validation` offers strict checks for callers that
//!    prefer rejecting bad input over defaulting it
//!
//! ```rust
//! use azuresql_properties::crd::DbEdition;
//! use azuresql_properties::provider::azure::DatabaseEdition;
//! use azuresql_properties::translate::{sql_database_properties_to_database, SqlDatabaseProperties};
//!
//! let props = SqlDatabaseProperties {
//!     database_name: "orders".to_string(),
//!     edition: DbEdition::GeneralPurpose,
//! };
//! let body = sql_database_properties_to_database(&props);
//! assert_eq!(body.edition, Some(DatabaseEdition::GeneralPurpose));
//! ```

pub mod config;
pub mod constants;
pub mod crd;
pub mod observability;
pub mod prelude;
pub mod provider;
pub mod translate;
pub mod validation;
