//! # Local Property Containers
//!
//! Values a reconciler assembles from a custom resource (and, for servers,
//! from the credentials secret) before handing them to the translator.

use crate::crd::{DbEdition, FailoverPolicy};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Values needed for adding or updating a SQL server
///
/// Login and password are normally both set or both absent. Nothing here
/// enforces that.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SqlServerProperties {
    /// Administrator username. Cannot be changed once the server exists.
    pub administrator_login: Option<String>,
    /// Administrator password (required for server creation)
    pub administrator_login_password: Option<String>,
}

impl SqlServerProperties {
    pub fn new(
        administrator_login: impl Into<String>,
        administrator_login_password: impl Into<String>,
    ) -> Self {
        Self {
            administrator_login: Some(administrator_login.into()),
            administrator_login_password: Some(administrator_login_password.into()),
        }
    }
}

impl fmt::Debug for SqlServerProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlServerProperties")
            .field("administrator_login", &self.administrator_login)
            .field(
                "administrator_login_password",
                &self.administrator_login_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Values needed for adding or updating a SQL database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlDatabaseProperties {
    pub database_name: String,
    pub edition: DbEdition,
}

/// Values needed for adding or updating a SQL failover group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFailoverGroupProperties {
    pub failover_policy: FailoverPolicy,
    /// Read/write grace period in minutes
    pub failover_grace_period: i32,
    /// Secondary server to fail over to (should be in a different region)
    pub secondary_server: String,
    pub secondary_server_resource_group: String,
    /// Member databases; order is kept as given
    pub database_list: Vec<String>,
}
