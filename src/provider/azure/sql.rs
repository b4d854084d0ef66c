//! # Azure SQL Management Shapes
//!
//! Property bodies of the Azure SQL management API (`2015-05-01-preview`).
//!
//! These mirror the JSON the ARM endpoints accept for servers, databases and
//! failover groups. They are plain serde types so the translator never depends
//! on a particular SDK: a client crate (or a mock in tests) only has to put
//! these bodies on the wire.
//!
//! Reference: <https://learn.microsoft.com/en-us/rest/api/sql/>

use serde::{Deserialize, Serialize};
use std::fmt;

/// Properties of an Azure SQL logical server
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProperties {
    /// Administrator username for the server. Cannot be changed once created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrator_login: Option<String>,
    /// Administrator login password (required for server creation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrator_login_password: Option<String>,
    /// Server version, e.g. `12.0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Read-only: state of the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Read-only: fully qualified domain name of the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_domain_name: Option<String>,
}

impl fmt::Debug for ServerProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerProperties")
            .field("administrator_login", &self.administrator_login)
            .field(
                "administrator_login_password",
                &self.administrator_login_password.as_ref().map(|_| "<redacted>"),
            )
            .field("version", &self.version)
            .field("state", &self.state)
            .field("fully_qualified_domain_name", &self.fully_qualified_domain_name)
            .finish()
    }
}

/// Database edition as named by the management API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseEdition {
    Basic,
    Business,
    BusinessCritical,
    DataWarehouse,
    Free,
    GeneralPurpose,
    Hyperscale,
    Premium,
    #[serde(rename = "PremiumRS")]
    PremiumRs,
    Standard,
    Stretch,
    System,
    System2,
    Web,
}

impl DatabaseEdition {
    /// Wire name of the edition
    pub fn as_str(self) -> &'static str {
        match self {
            DatabaseEdition::Basic => "Basic",
            DatabaseEdition::Business => "Business",
            DatabaseEdition::BusinessCritical => "BusinessCritical",
            DatabaseEdition::DataWarehouse => "DataWarehouse",
            DatabaseEdition::Free => "Free",
            DatabaseEdition::GeneralPurpose => "GeneralPurpose",
            DatabaseEdition::Hyperscale => "Hyperscale",
            DatabaseEdition::Premium => "Premium",
            DatabaseEdition::PremiumRs => "PremiumRS",
            DatabaseEdition::Standard => "Standard",
            DatabaseEdition::Stretch => "Stretch",
            DatabaseEdition::System => "System",
            DatabaseEdition::System2 => "System2",
            DatabaseEdition::Web => "Web",
        }
    }
}

impl fmt::Display for DatabaseEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties of an Azure SQL database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseProperties {
    /// Edition of the database
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<DatabaseEdition>,
    /// Collation of the database
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collation: Option<String>,
    /// Maximum size of the database in bytes, as a decimal string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size_bytes: Option<String>,
    /// Name of the requested service objective, e.g. `S0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_service_objective_name: Option<String>,
}

/// Failover policy of a failover group's read/write endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadWriteEndpointFailoverPolicy {
    Automatic,
    Manual,
}

impl ReadWriteEndpointFailoverPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ReadWriteEndpointFailoverPolicy::Automatic => "Automatic",
            ReadWriteEndpointFailoverPolicy::Manual => "Manual",
        }
    }
}

impl fmt::Display for ReadWriteEndpointFailoverPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failover policy of a failover group's read-only endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadOnlyEndpointFailoverPolicy {
    Disabled,
    Enabled,
}

/// Read/write endpoint of a failover group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailoverGroupReadWriteEndpoint {
    pub failover_policy: ReadWriteEndpointFailoverPolicy,
    /// Only accepted when the policy is `Automatic`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failover_with_data_loss_grace_period_minutes: Option<i32>,
}

/// Read-only endpoint of a failover group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailoverGroupReadOnlyEndpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failover_policy: Option<ReadOnlyEndpointFailoverPolicy>,
}

/// Server participating in a failover group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerInfo {
    /// ARM resource ID of the partner server
    pub id: String,
    /// Read-only: location of the partner server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Read-only: `Primary` or `Secondary`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_role: Option<String>,
}

/// Properties of a failover group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailoverGroupProperties {
    pub read_write_endpoint: FailoverGroupReadWriteEndpoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only_endpoint: Option<FailoverGroupReadOnlyEndpoint>,
    #[serde(default)]
    pub partner_servers: Vec<PartnerInfo>,
    /// ARM resource IDs of the member databases
    #[serde(default)]
    pub databases: Vec<String>,
}
