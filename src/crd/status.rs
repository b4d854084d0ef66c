//! # Azure SQL Status
//!
//! Status shared by the Azure SQL custom resources.

use serde::{Deserialize, Serialize};

/// Status of an Azure SQL server, database or failover group
///
/// Written by the reconciler; this crate only defines the shape.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AzureSqlStatus {
    /// A create or update request is in flight
    #[serde(default)]
    pub provisioning: bool,
    /// The resource exists in Azure and matches the spec
    #[serde(default)]
    pub provisioned: bool,
    /// The last provisioning attempt failed permanently
    #[serde(default)]
    pub failed_provisioning: bool,
    /// Human-readable description of current state
    #[serde(default)]
    pub message: Option<String>,
    /// ARM resource ID once provisioned
    #[serde(default)]
    pub resource_id: Option<String>,
    /// Observed generation
    #[serde(default)]
    pub observed_generation: Option<i64>,
    /// Conditions represent the latest available observations
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// Kubernetes-style condition
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition (e.g., "Ready")
    pub r#type: String,
    /// Status of condition ("True", "False", "Unknown")
    pub status: String,
    /// Last transition time
    #[serde(default)]
    pub last_transition_time: Option<String>,
    /// Reason for condition
    #[serde(default)]
    pub reason: Option<String>,
    /// Message describing condition
    #[serde(default)]
    pub message: Option<String>,
}
