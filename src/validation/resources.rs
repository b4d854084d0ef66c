//! # Resource Validation
//!
//! Whole-resource checks for specs and translator inputs.

use super::names::{validate_database_name, validate_resource_group, validate_server_name};
use super::ValidationError;
use crate::constants::MIN_AUTOMATIC_FAILOVER_GRACE_PERIOD_MINUTES;
use crate::crd::{AzureSqlDatabaseSpec, AzureSqlFailoverGroupSpec, AzureSqlServerSpec, FailoverPolicy};
use crate::provider::azure::SqlServerLocator;
use crate::translate::{SqlDatabaseProperties, SqlFailoverGroupProperties};
use std::collections::HashSet;

pub fn validate_server_spec(name: &str, spec: &AzureSqlServerSpec) -> Result<(), ValidationError> {
    validate_server_name("metadata.name", name)?;
    require("spec.location", &spec.location)?;
    validate_resource_group("spec.resourceGroup", &spec.resource_group)?;
    Ok(())
}

pub fn validate_database_spec(spec: &AzureSqlDatabaseSpec) -> Result<(), ValidationError> {
    require("spec.location", &spec.location)?;
    validate_resource_group("spec.resourceGroup", &spec.resource_group)?;
    validate_server_name("spec.server", &spec.server)?;
    if let Some(db_name) = &spec.db_name {
        validate_database_name(db_name)?;
    }
    if !spec.edition.is_recognized() {
        return Err(ValidationError::UnrecognizedEdition(spec.edition.to_string()));
    }
    Ok(())
}

pub fn validate_database_properties(
    properties: &SqlDatabaseProperties,
) -> Result<(), ValidationError> {
    validate_database_name(&properties.database_name)?;
    if !properties.edition.is_recognized() {
        return Err(ValidationError::UnrecognizedEdition(
            properties.edition.to_string(),
        ));
    }
    Ok(())
}

pub fn validate_failover_group_spec(spec: &AzureSqlFailoverGroupSpec) -> Result<(), ValidationError> {
    require("spec.location", &spec.location)?;
    validate_resource_group("spec.resourceGroup", &spec.resource_group)?;
    validate_server_name("spec.server", &spec.server)?;
    Ok(())
}

/// Check failover group properties against the primary server they belong to
///
/// A zero grace period is accepted here because the reconciler substitutes
/// the configured default before translating.
pub fn validate_failover_group_properties(
    properties: &SqlFailoverGroupProperties,
    primary: &SqlServerLocator,
) -> Result<(), ValidationError> {
    match &properties.failover_policy {
        FailoverPolicy::Unrecognized(raw) => {
            return Err(ValidationError::UnrecognizedFailoverPolicy(raw.clone()));
        }
        FailoverPolicy::Automatic => {
            let minutes = properties.failover_grace_period;
            if minutes < 0 {
                return Err(ValidationError::NegativeGracePeriod(minutes));
            }
            if minutes != 0 && minutes < MIN_AUTOMATIC_FAILOVER_GRACE_PERIOD_MINUTES {
                return Err(ValidationError::GracePeriodTooShort {
                    minutes,
                    minimum: MIN_AUTOMATIC_FAILOVER_GRACE_PERIOD_MINUTES,
                });
            }
        }
        FailoverPolicy::Manual => {
            if properties.failover_grace_period < 0 {
                return Err(ValidationError::NegativeGracePeriod(
                    properties.failover_grace_period,
                ));
            }
        }
    }

    validate_server_name("spec.secondaryServer", &properties.secondary_server)?;
    validate_resource_group(
        "spec.secondaryServerResourceGroup",
        &properties.secondary_server_resource_group,
    )?;
    if properties.secondary_server == primary.server
        && properties
            .secondary_server_resource_group
            .eq_ignore_ascii_case(&primary.resource_group)
    {
        return Err(ValidationError::SecondaryIsPrimary(
            properties.secondary_server.clone(),
        ));
    }

    if properties.database_list.is_empty() {
        return Err(ValidationError::EmptyDatabaseList);
    }
    let mut seen = HashSet::new();
    for database in &properties.database_list {
        validate_database_name(database)?;
        if !seen.insert(database.to_lowercase()) {
            return Err(ValidationError::DuplicateDatabase(database.clone()));
        }
    }
    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
