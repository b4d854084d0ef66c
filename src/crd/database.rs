//! # AzureSqlDatabase
//!
//! Custom resource for a database on an Azure SQL server.

use crate::crd::DbEdition;
use crate::translate::SqlDatabaseProperties;
use kube::ResourceExt;
use serde::{Deserialize, Serialize};

/// AzureSqlDatabase Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: azure.microsoft.com/v1alpha1
/// kind: AzureSqlDatabase
/// metadata:
///   name: orders
///   namespace: default
/// spec:
///   location: eastus
///   resourceGroup: sql-rg
///   server: sqlsrv-east
///   edition: GeneralPurpose   # or the legacy ordinal: 5
/// ```
#[derive(kube::CustomResource, Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[kube(
    kind = "AzureSqlDatabase",
    group = "azure.microsoft.com",
    version = "v1alpha1",
    namespaced,
    status = "crate::crd::AzureSqlStatus",
    shortname = "sqldb",
    printcolumn = r#"{"name":"Server", "type":"string", "jsonPath":".spec.server"}, {"name":"Provisioned", "type":"boolean", "jsonPath":".status.provisioned"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct AzureSqlDatabaseSpec {
    /// Azure region of the database (must match the server)
    pub location: String,
    /// Resource group holding the server
    pub resource_group: String,
    /// Name of the Azure SQL server
    pub server: String,
    /// Requested edition
    pub edition: DbEdition,
    /// Database name in Azure. Defaults to the resource name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
}

impl AzureSqlDatabase {
    /// Name of the database in Azure
    pub fn database_name(&self) -> String {
        self.spec
            .db_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.name_any())
    }

    /// Local properties for the translator
    pub fn database_properties(&self) -> SqlDatabaseProperties {
        SqlDatabaseProperties {
            database_name: self.database_name(),
            edition: self.spec.edition.clone(),
        }
    }
}
