//! # Property Translator
//!
//! Maps the local property containers onto the Azure SQL management shapes.
//!
//! Every function here is pure and total. Unknown editions become
//! [`DEFAULT_DB_EDITION`] and unknown failover policies become
//! [`DEFAULT_FAILOVER_POLICY`]; nothing is rejected. Callers that want strict
//! input checking run [`crate::validation`] first.

mod properties;

pub use properties::{SqlDatabaseProperties, SqlFailoverGroupProperties, SqlServerProperties};

use crate::constants::{DEFAULT_DB_EDITION, DEFAULT_FAILOVER_POLICY};
use crate::crd::{DbEdition, FailoverPolicy};
use crate::observability::metrics;
use crate::provider::azure::sql::{
    DatabaseEdition, DatabaseProperties, FailoverGroupProperties, FailoverGroupReadOnlyEndpoint,
    FailoverGroupReadWriteEndpoint, PartnerInfo, ReadOnlyEndpointFailoverPolicy,
    ReadWriteEndpointFailoverPolicy, ServerProperties,
};
use crate::provider::azure::SqlServerLocator;
use tracing::{debug, warn};

/// Translate server properties. Both fields are copied unchanged.
pub fn sql_server_properties_to_server(properties: &SqlServerProperties) -> ServerProperties {
    ServerProperties {
        administrator_login: properties.administrator_login.clone(),
        administrator_login_password: properties.administrator_login_password.clone(),
        ..Default::default()
    }
}

/// Translate database properties
///
/// Only the edition is carried over. The database name is the last segment
/// of the ARM resource path, not part of the request body.
pub fn sql_database_properties_to_database(
    properties: &SqlDatabaseProperties,
) -> DatabaseProperties {
    debug!(
        database = %properties.database_name,
        edition = %properties.edition,
        "Translating database properties"
    );
    DatabaseProperties {
        edition: Some(translate_db_edition(&properties.edition)),
        ..Default::default()
    }
}

/// Translate a database edition, falling back to Free for unknown values
pub fn translate_db_edition(edition: &DbEdition) -> DatabaseEdition {
    match edition {
        DbEdition::Basic => DatabaseEdition::Basic,
        DbEdition::Business => DatabaseEdition::Business,
        DbEdition::BusinessCritical => DatabaseEdition::BusinessCritical,
        DbEdition::DataWarehouse => DatabaseEdition::DataWarehouse,
        DbEdition::Free => DatabaseEdition::Free,
        DbEdition::GeneralPurpose => DatabaseEdition::GeneralPurpose,
        DbEdition::Hyperscale => DatabaseEdition::Hyperscale,
        DbEdition::Premium => DatabaseEdition::Premium,
        DbEdition::PremiumRs => DatabaseEdition::PremiumRs,
        DbEdition::Standard => DatabaseEdition::Standard,
        DbEdition::Stretch => DatabaseEdition::Stretch,
        DbEdition::System => DatabaseEdition::System,
        DbEdition::System2 => DatabaseEdition::System2,
        DbEdition::Web => DatabaseEdition::Web,
        DbEdition::Unrecognized(raw) => fallback_db_edition(raw),
    }
}

/// Translate a legacy edition ordinal (0..=13), falling back to Free
pub fn translate_db_edition_ordinal(ordinal: i64) -> DatabaseEdition {
    translate_db_edition(&DbEdition::from_ordinal_lossless(ordinal))
}

/// Translate a failover policy, falling back to Automatic for unknown values
pub fn translate_failover_policy(policy: &FailoverPolicy) -> ReadWriteEndpointFailoverPolicy {
    match policy {
        FailoverPolicy::Automatic => ReadWriteEndpointFailoverPolicy::Automatic,
        FailoverPolicy::Manual => ReadWriteEndpointFailoverPolicy::Manual,
        FailoverPolicy::Unrecognized(raw) => fallback_failover_policy(raw),
    }
}

/// Translate failover group properties
///
/// `primary` locates the server that owns the group. The partner server is
/// assumed to live in the same subscription. Database IDs point at the
/// primary server and keep the input order, duplicates included.
pub fn sql_failover_group_properties_to_failover_group(
    properties: &SqlFailoverGroupProperties,
    primary: &SqlServerLocator,
) -> FailoverGroupProperties {
    let failover_policy = translate_failover_policy(&properties.failover_policy);

    // Azure rejects a grace period on a manual policy
    let grace_period = match failover_policy {
        ReadWriteEndpointFailoverPolicy::Automatic => Some(properties.failover_grace_period),
        ReadWriteEndpointFailoverPolicy::Manual => None,
    };

    let secondary = primary.sibling(
        &properties.secondary_server_resource_group,
        &properties.secondary_server,
    );

    FailoverGroupProperties {
        read_write_endpoint: FailoverGroupReadWriteEndpoint {
            failover_policy,
            failover_with_data_loss_grace_period_minutes: grace_period,
        },
        read_only_endpoint: Some(FailoverGroupReadOnlyEndpoint {
            failover_policy: Some(ReadOnlyEndpointFailoverPolicy::Disabled),
        }),
        partner_servers: vec![PartnerInfo {
            id: secondary.server_id(),
            location: None,
            replication_role: None,
        }],
        databases: properties
            .database_list
            .iter()
            .map(|database| primary.database_id(database))
            .collect(),
    }
}

fn fallback_db_edition(raw: &str) -> DatabaseEdition {
    warn!(
        edition = raw,
        default = %DEFAULT_DB_EDITION,
        "Unrecognized database edition, using default"
    );
    metrics::increment_translation_defaults("edition");
    DEFAULT_DB_EDITION
}

fn fallback_failover_policy(raw: &str) -> ReadWriteEndpointFailoverPolicy {
    warn!(
        failover_policy = raw,
        default = %DEFAULT_FAILOVER_POLICY,
        "Unrecognized failover policy, using default"
    );
    metrics::increment_translation_defaults("failover_policy");
    DEFAULT_FAILOVER_POLICY
}
