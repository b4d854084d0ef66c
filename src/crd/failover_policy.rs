//! # Failover Policy
//!
//! Read/write endpoint failover policy requested by an `AzureSqlFailoverGroup`.

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Failover policy as written in the custom resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FailoverPolicy {
    Automatic,
    Manual,
    /// Any other value, as it appeared on the wire
    Unrecognized(String),
}

impl FailoverPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            FailoverPolicy::Automatic => "Automatic",
            FailoverPolicy::Manual => "Manual",
            FailoverPolicy::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, FailoverPolicy::Unrecognized(_))
    }
}

impl fmt::Display for FailoverPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FailoverPolicy {
    fn from(value: String) -> Self {
        // Exact match only: "manual" is not Manual
        match value.as_str() {
            "Automatic" => FailoverPolicy::Automatic,
            "Manual" => FailoverPolicy::Manual,
            _ => FailoverPolicy::Unrecognized(value),
        }
    }
}

impl From<&str> for FailoverPolicy {
    fn from(value: &str) -> Self {
        FailoverPolicy::from(value.to_string())
    }
}

impl From<FailoverPolicy> for String {
    fn from(policy: FailoverPolicy) -> Self {
        match policy {
            FailoverPolicy::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl JsonSchema for FailoverPolicy {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("FailoverPolicy")
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        schemars::json_schema!({
            "type": "string",
            "enum": ["Automatic", "Manual"],
            "description": "Failover policy of the read/write endpoint"
        })
    }
}
