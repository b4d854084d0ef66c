//! # AzureSqlServer
//!
//! Custom resource for an Azure SQL logical server.

use serde::{Deserialize, Serialize};

/// AzureSqlServer Custom Resource Definition
///
/// Administrator credentials are not part of the spec. The reconciler reads
/// them from a Kubernetes secret (or the Key Vault named by `keyVaultToUse`)
/// and builds [`SqlServerProperties`](crate::translate::SqlServerProperties)
/// itself.
///
/// # Example
///
/// ```yaml
/// apiVersion: azure.microsoft.com/v1alpha1
/// kind: AzureSqlServer
/// metadata:
///   name: sqlsrv-east
///   namespace: default
/// spec:
///   location: eastus
///   resourceGroup: sql-rg
/// ```
#[derive(kube::CustomResource, Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[kube(
    kind = "AzureSqlServer",
    group = "azure.microsoft.com",
    version = "v1alpha1",
    namespaced,
    status = "crate::crd::AzureSqlStatus",
    shortname = "sqlserver",
    printcolumn = r#"{"name":"Provisioned", "type":"boolean", "jsonPath":".status.provisioned"}, {"name":"Message", "type":"string", "jsonPath":".status.message"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct AzureSqlServerSpec {
    /// Azure region of the server
    pub location: String,
    /// Resource group holding the server
    pub resource_group: String,
    /// Key Vault to store the generated administrator credentials in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_vault_to_use: Option<String>,
}
