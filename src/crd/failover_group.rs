//! # AzureSqlFailoverGroup
//!
//! Custom resource for a failover group between two Azure SQL servers.

use crate::crd::FailoverPolicy;
use crate::provider::azure::SqlServerLocator;
use crate::translate::SqlFailoverGroupProperties;
use serde::{Deserialize, Serialize};

/// AzureSqlFailoverGroup Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: azure.microsoft.com/v1alpha1
/// kind: AzureSqlFailoverGroup
/// metadata:
///   name: orders-fog
///   namespace: default
/// spec:
///   location: eastus
///   resourceGroup: sql-rg
///   server: sqlsrv-east
///   failoverPolicy: Automatic
///   failoverGracePeriod: 60
///   secondaryServer: sqlsrv-west
///   secondaryServerResourceGroup: sql-rg-west
///   databaseList:
///     - orders
///     - inventory
/// ```
#[derive(kube::CustomResource, Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[kube(
    kind = "AzureSqlFailoverGroup",
    group = "azure.microsoft.com",
    version = "v1alpha1",
    namespaced,
    status = "crate::crd::AzureSqlStatus",
    shortname = "sqlfog",
    printcolumn = r#"{"name":"Primary", "type":"string", "jsonPath":".spec.server"}, {"name":"Secondary", "type":"string", "jsonPath":".spec.secondaryServer"}, {"name":"Provisioned", "type":"boolean", "jsonPath":".status.provisioned"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct AzureSqlFailoverGroupSpec {
    /// Azure region of the primary server
    pub location: String,
    /// Resource group of the primary server
    pub resource_group: String,
    /// Primary server name
    pub server: String,
    /// Read/write endpoint failover policy
    pub failover_policy: FailoverPolicy,
    /// Read/write grace period in minutes
    #[serde(default)]
    pub failover_grace_period: i32,
    /// Secondary server to fail over to (should be in a different region)
    pub secondary_server: String,
    /// Resource group of the secondary server
    pub secondary_server_resource_group: String,
    /// Databases to add to the failover group, in order
    #[serde(default)]
    pub database_list: Vec<String>,
}

impl AzureSqlFailoverGroup {
    /// Local properties for the translator
    ///
    /// A zero grace period is replaced with `default_grace_period_minutes`.
    pub fn failover_group_properties(
        &self,
        default_grace_period_minutes: i32,
    ) -> SqlFailoverGroupProperties {
        let grace_period = if self.spec.failover_grace_period == 0 {
            default_grace_period_minutes
        } else {
            self.spec.failover_grace_period
        };
        SqlFailoverGroupProperties {
            failover_policy: self.spec.failover_policy.clone(),
            failover_grace_period: grace_period,
            secondary_server: self.spec.secondary_server.clone(),
            secondary_server_resource_group: self.spec.secondary_server_resource_group.clone(),
            database_list: self.spec.database_list.clone(),
        }
    }

    /// Locator of the primary server in the given subscription
    pub fn primary_locator(&self, subscription_id: &str) -> SqlServerLocator {
        SqlServerLocator::new(
            subscription_id,
            self.spec.resource_group.clone(),
            self.spec.server.clone(),
        )
    }
}
