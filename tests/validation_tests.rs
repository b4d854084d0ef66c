//! # Validation Tests
//!
//! Strict validation layered above the translator.

use azuresql_properties::crd::{
    AzureSqlDatabaseSpec, AzureSqlFailoverGroupSpec, AzureSqlServerSpec, DbEdition, FailoverPolicy,
};
use azuresql_properties::provider::azure::SqlServerLocator;
use azuresql_properties::translate::{SqlDatabaseProperties, SqlFailoverGroupProperties};
use azuresql_properties::validation::{
    validate_database_properties, validate_database_spec, validate_failover_group_properties,
    validate_failover_group_spec, validate_server_spec, ValidationError,
};

fn primary() -> SqlServerLocator {
    SqlServerLocator::new("sub", "sql-rg", "sqlsrv-east")
}

fn valid_failover_group() -> SqlFailoverGroupProperties {
    SqlFailoverGroupProperties {
        failover_policy: FailoverPolicy::Automatic,
        failover_grace_period: 60,
        secondary_server: "sqlsrv-west".to_string(),
        secondary_server_resource_group: "sql-rg-west".to_string(),
        database_list: vec!["orders".to_string(), "inventory".to_string()],
    }
}

fn database_spec(edition: DbEdition) -> AzureSqlDatabaseSpec {
    AzureSqlDatabaseSpec {
        location: "eastus".to_string(),
        resource_group: "sql-rg".to_string(),
        server: "sqlsrv-east".to_string(),
        edition,
        db_name: None,
    }
}

#[test]
fn test_valid_failover_group_passes() {
    assert_eq!(
        validate_failover_group_properties(&valid_failover_group(), &primary()),
        Ok(())
    );
}

#[test]
fn test_zero_grace_period_passes() {
    let mut props = valid_failover_group();
    props.failover_grace_period = 0;
    assert!(validate_failover_group_properties(&props, &primary()).is_ok());
}

#[test]
fn test_unrecognized_policy_is_rejected() {
    let mut props = valid_failover_group();
    props.failover_policy = FailoverPolicy::Unrecognized("Sometimes".to_string());
    assert_eq!(
        validate_failover_group_properties(&props, &primary()),
        Err(ValidationError::UnrecognizedFailoverPolicy(
            "Sometimes".to_string()
        ))
    );
}

#[test]
fn test_short_grace_period_is_rejected_for_automatic() {
    let mut props = valid_failover_group();
    props.failover_grace_period = 30;
    assert_eq!(
        validate_failover_group_properties(&props, &primary()),
        Err(ValidationError::GracePeriodTooShort {
            minutes: 30,
            minimum: 60
        })
    );

    props.failover_policy = FailoverPolicy::Manual;
    assert!(validate_failover_group_properties(&props, &primary()).is_ok());
}

#[test]
fn test_negative_grace_period_is_rejected() {
    let mut props = valid_failover_group();
    props.failover_policy = FailoverPolicy::Manual;
    props.failover_grace_period = -5;
    assert_eq!(
        validate_failover_group_properties(&props, &primary()),
        Err(ValidationError::NegativeGracePeriod(-5))
    );
}

#[test]
fn test_empty_database_list_is_rejected() {
    let mut props = valid_failover_group();
    props.database_list.clear();
    assert_eq!(
        validate_failover_group_properties(&props, &primary()),
        Err(ValidationError::EmptyDatabaseList)
    );
}

#[test]
fn test_duplicate_database_is_rejected() {
    let mut props = valid_failover_group();
    props.database_list.push("Orders".to_string());
    assert_eq!(
        validate_failover_group_properties(&props, &primary()),
        Err(ValidationError::DuplicateDatabase("Orders".to_string()))
    );
}

#[test]
fn test_secondary_equal_to_primary_is_rejected() {
    let mut props = valid_failover_group();
    props.secondary_server = "sqlsrv-east".to_string();
    props.secondary_server_resource_group = "SQL-RG".to_string();
    assert_eq!(
        validate_failover_group_properties(&props, &primary()),
        Err(ValidationError::SecondaryIsPrimary("sqlsrv-east".to_string()))
    );
}

#[test]
fn test_invalid_secondary_server_name_is_rejected() {
    let mut props = valid_failover_group();
    props.secondary_server = "SqlSrv_West".to_string();
    let err = validate_failover_group_properties(&props, &primary()).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidServerName { .. }));
    assert!(err.to_string().contains("spec.secondaryServer"));
}

#[test]
fn test_database_properties_validation() {
    let props = SqlDatabaseProperties {
        database_name: "orders".to_string(),
        edition: DbEdition::Standard,
    };
    assert!(validate_database_properties(&props).is_ok());

    let props = SqlDatabaseProperties {
        database_name: "orders".to_string(),
        edition: DbEdition::Unrecognized("14".to_string()),
    };
    assert_eq!(
        validate_database_properties(&props),
        Err(ValidationError::UnrecognizedEdition("14".to_string()))
    );
}

#[test]
fn test_database_spec_validation() {
    assert!(validate_database_spec(&database_spec(DbEdition::Basic)).is_ok());

    let mut spec = database_spec(DbEdition::Basic);
    spec.location = "  ".to_string();
    assert_eq!(
        validate_database_spec(&spec),
        Err(ValidationError::EmptyField("spec.location"))
    );

    let mut spec = database_spec(DbEdition::Basic);
    spec.db_name = Some("bad?name".to_string());
    assert!(matches!(
        validate_database_spec(&spec),
        Err(ValidationError::InvalidDatabaseName { .. })
    ));

    assert!(matches!(
        validate_database_spec(&database_spec(DbEdition::Unrecognized("Gold".to_string()))),
        Err(ValidationError::UnrecognizedEdition(_))
    ));
}

#[test]
fn test_server_spec_validation() {
    let spec = AzureSqlServerSpec {
        location: "eastus".to_string(),
        resource_group: "sql-rg".to_string(),
        key_vault_to_use: None,
    };
    assert!(validate_server_spec("sqlsrv-east", &spec).is_ok());
    assert!(matches!(
        validate_server_spec("SQLSRV", &spec),
        Err(ValidationError::InvalidServerName {
            field: "metadata.name",
            ..
        })
    ));
}

#[test]
fn test_failover_group_spec_validation() {
    let mut spec = AzureSqlFailoverGroupSpec {
        location: "eastus".to_string(),
        resource_group: "sql-rg".to_string(),
        server: "sqlsrv-east".to_string(),
        failover_policy: FailoverPolicy::Automatic,
        failover_grace_period: 60,
        secondary_server: "sqlsrv-west".to_string(),
        secondary_server_resource_group: "sql-rg-west".to_string(),
        database_list: vec!["orders".to_string()],
    };
    assert!(validate_failover_group_spec(&spec).is_ok());

    spec.resource_group = "rg.".to_string();
    assert!(matches!(
        validate_failover_group_spec(&spec),
        Err(ValidationError::InvalidResourceGroup {
            field: "spec.resourceGroup",
            ..
        })
    ));
}
