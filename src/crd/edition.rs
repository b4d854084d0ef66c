//! # Database Edition
//!
//! Edition requested by an `AzureSqlDatabase` resource.
//!
//! Older manifests encode the edition as an integer ordinal, newer ones use the
//! edition name. Both are accepted on the wire and decoded here, once, so the
//! rest of the crate only sees named variants. Values that match neither are
//! kept verbatim in [`DbEdition::Unrecognized`] rather than rejected.

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Database edition as written in the custom resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "EditionRepr", into = "EditionRepr")]
pub enum DbEdition {
    Basic,
    Business,
    BusinessCritical,
    DataWarehouse,
    Free,
    GeneralPurpose,
    Hyperscale,
    Premium,
    PremiumRs,
    Standard,
    Stretch,
    System,
    System2,
    Web,
    /// Any value outside the known set, as it appeared on the wire
    Unrecognized(String),
}

/// Wire form: legacy ordinal, edition name, or anything else YAML can hold
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum EditionRepr {
    Ordinal(i64),
    Name(String),
    Other(serde_json::Value),
}

impl DbEdition {
    /// Known editions, indexed by their legacy ordinal
    pub const ALL: [DbEdition; 14] = [
        DbEdition::Basic,
        DbEdition::Business,
        DbEdition::BusinessCritical,
        DbEdition::DataWarehouse,
        DbEdition::Free,
        DbEdition::GeneralPurpose,
        DbEdition::Hyperscale,
        DbEdition::Premium,
        DbEdition::PremiumRs,
        DbEdition::Standard,
        DbEdition::Stretch,
        DbEdition::System,
        DbEdition::System2,
        DbEdition::Web,
    ];

    /// Decode a legacy ordinal. `None` for anything outside 0..=13.
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::ALL.get(index))
            .cloned()
    }

    /// Decode an edition name (exact match). `None` if unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|edition| edition.name() == name)
            .cloned()
    }

    /// Decode a wire value, keeping unknown values as `Unrecognized`
    pub fn from_ordinal_lossless(ordinal: i64) -> Self {
        Self::from_ordinal(ordinal).unwrap_or_else(|| DbEdition::Unrecognized(ordinal.to_string()))
    }

    /// Legacy ordinal of a known edition
    pub fn ordinal(&self) -> Option<i64> {
        Self::ALL
            .iter()
            .position(|edition| edition == self)
            .and_then(|index| i64::try_from(index).ok())
    }

    /// Name of the edition, or the raw value if unrecognized
    pub fn name(&self) -> &str {
        match self {
            DbEdition::Basic => "Basic",
            DbEdition::Business => "Business",
            DbEdition::BusinessCritical => "BusinessCritical",
            DbEdition::DataWarehouse => "DataWarehouse",
            DbEdition::Free => "Free",
            DbEdition::GeneralPurpose => "GeneralPurpose",
            DbEdition::Hyperscale => "Hyperscale",
            DbEdition::Premium => "Premium",
            DbEdition::PremiumRs => "PremiumRS",
            DbEdition::Standard => "Standard",
            DbEdition::Stretch => "Stretch",
            DbEdition::System => "System",
            DbEdition::System2 => "System2",
            DbEdition::Web => "Web",
            DbEdition::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, DbEdition::Unrecognized(_))
    }
}

impl fmt::Display for DbEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<EditionRepr> for DbEdition {
    fn from(repr: EditionRepr) -> Self {
        match repr {
            EditionRepr::Ordinal(ordinal) => DbEdition::from_ordinal_lossless(ordinal),
            EditionRepr::Name(name) => {
                // Quoted ordinals show up when manifests are templated
                if let Ok(ordinal) = name.trim().parse::<i64>() {
                    return DbEdition::from_ordinal_lossless(ordinal);
                }
                DbEdition::from_name(&name).unwrap_or(DbEdition::Unrecognized(name))
            }
            // u64 beyond i64, floats, bools, null
            EditionRepr::Other(value) => DbEdition::Unrecognized(value.to_string()),
        }
    }
}

impl From<DbEdition> for EditionRepr {
    fn from(edition: DbEdition) -> Self {
        match edition {
            DbEdition::Unrecognized(raw) => match raw.parse::<i64>() {
                Ok(ordinal) => EditionRepr::Ordinal(ordinal),
                Err(_) => EditionRepr::Name(raw),
            },
            known => EditionRepr::Name(known.name().to_string()),
        }
    }
}

impl JsonSchema for DbEdition {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("DbEdition")
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        schemars::json_schema!({
            "x-kubernetes-int-or-string": true,
            "description": "Edition of the database. Either the edition name (Basic, Business, BusinessCritical, DataWarehouse, Free, GeneralPurpose, Hyperscale, Premium, PremiumRS, Standard, Stretch, System, System2, Web) or its legacy ordinal 0-13 in that order. Unknown values are provisioned as Free."
        })
    }
}
