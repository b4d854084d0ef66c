//! # Name Validation
//!
//! Azure naming rules for SQL servers, databases and resource groups.
//! Reference: <https://learn.microsoft.com/en-us/azure/azure-resource-manager/management/resource-name-rules#microsoftsql>

use super::ValidationError;
use crate::constants::{MAX_DATABASE_NAME_LENGTH, MAX_SERVER_NAME_LENGTH};
use regex::Regex;
use std::sync::LazyLock;

// Lowercase letters, numbers and hyphens; no leading or trailing hyphen
static SERVER_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$")
        .expect("Failed to compile SERVER_NAME_REGEX - this should never happen")
});

static RESOURCE_GROUP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-\w.()]{1,90}$")
        .expect("Failed to compile RESOURCE_GROUP_REGEX - this should never happen")
});

const DATABASE_NAME_FORBIDDEN: &[char] = &['<', '>', '*', '%', '&', ':', '\\', '/', '?'];

pub fn validate_server_name(field: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    if name.len() > MAX_SERVER_NAME_LENGTH || !SERVER_NAME_REGEX.is_match(name) {
        return Err(ValidationError::InvalidServerName {
            field,
            name: name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_database_name(name: &str) -> Result<(), ValidationError> {
    let invalid = |reason| {
        Err(ValidationError::InvalidDatabaseName {
            name: name.to_string(),
            reason,
        })
    };

    if name.is_empty() {
        return invalid("must not be empty");
    }
    if name.chars().count() > MAX_DATABASE_NAME_LENGTH {
        return invalid("must be at most 128 characters");
    }
    if name.contains(DATABASE_NAME_FORBIDDEN) || name.chars().any(char::is_control) {
        return invalid("must not contain <>*%&:\\/? or control characters");
    }
    if name.ends_with('.') || name.ends_with(' ') {
        return invalid("must not end with a period or space");
    }
    Ok(())
}

pub fn validate_resource_group(field: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    if !RESOURCE_GROUP_REGEX.is_match(name) || name.ends_with('.') {
        return Err(ValidationError::InvalidResourceGroup {
            field,
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_names() {
        assert!(validate_server_name("server", "sqlsrv-east-01").is_ok());
        assert!(validate_server_name("server", "a").is_ok());
        assert!(validate_server_name("server", "-leading").is_err());
        assert!(validate_server_name("server", "trailing-").is_err());
        assert!(validate_server_name("server", "Upper").is_err());
        assert!(validate_server_name("server", &"a".repeat(64)).is_err());
        assert_eq!(
            validate_server_name("server", ""),
            Err(ValidationError::EmptyField("server"))
        );
    }

    #[test]
    fn test_database_names() {
        assert!(validate_database_name("Orders_2024").is_ok());
        assert!(validate_database_name("with space").is_ok());
        assert!(validate_database_name("bad/name").is_err());
        assert!(validate_database_name("dot.").is_err());
        assert!(validate_database_name("").is_err());
        assert!(validate_database_name(&"d".repeat(129)).is_err());
    }

    #[test]
    fn test_resource_groups() {
        assert!(validate_resource_group("resourceGroup", "sql-rg_(prod).eu").is_ok());
        assert!(validate_resource_group("resourceGroup", "ends.").is_err());
        assert!(validate_resource_group("resourceGroup", "has space").is_err());
        assert!(validate_resource_group("resourceGroup", &"r".repeat(91)).is_err());
    }
}
