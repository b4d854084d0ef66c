//! # ARM Resource IDs
//!
//! Builds and parses Azure Resource Manager IDs for SQL servers and databases:
//!
//! ```text
//! /subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Sql/servers/{server}
//! /subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Sql/servers/{server}/databases/{db}
//! ```
//!
//! ARM treats segment keys case-insensitively, so parsing does too.

use crate::constants::SQL_PROVIDER_NAMESPACE;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while parsing an ARM resource ID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceIdError {
    #[error("resource ID must start with '/subscriptions/': {0}")]
    MissingSubscriptionPrefix(String),

    #[error("resource ID is missing the '{segment}' segment: {id}")]
    MissingSegment { segment: &'static str, id: String },

    #[error("resource ID has an empty value for '{segment}': {id}")]
    EmptySegment { segment: &'static str, id: String },

    #[error("resource ID is not a {expected} resource: {id}")]
    UnexpectedProvider { expected: &'static str, id: String },

    #[error("resource ID has unexpected trailing segments: {0}")]
    TrailingSegments(String),
}

/// Locates an Azure SQL logical server
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SqlServerLocator {
    pub subscription_id: String,
    pub resource_group: String,
    pub server: String,
}

impl SqlServerLocator {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        server: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            server: server.into(),
        }
    }

    /// Same subscription, different server
    #[must_use]
    pub fn sibling(&self, resource_group: &str, server: &str) -> Self {
        Self::new(self.subscription_id.clone(), resource_group, server)
    }

    /// ARM ID of the server
    pub fn server_id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/{}/servers/{}",
            self.subscription_id, self.resource_group, SQL_PROVIDER_NAMESPACE, self.server
        )
    }

    /// ARM ID of a database on the server
    pub fn database_id(&self, database: &str) -> String {
        format!("{}/databases/{database}", self.server_id())
    }
}

impl fmt::Display for SqlServerLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.server_id())
    }
}

/// A parsed Azure SQL server or database ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SqlResourceId {
    pub server: SqlServerLocator,
    pub database: Option<String>,
}

impl fmt::Display for SqlResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.database {
            Some(database) => f.write_str(&self.server.database_id(database)),
            None => f.write_str(&self.server.server_id()),
        }
    }
}

impl FromStr for SqlResourceId {
    type Err = ResourceIdError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let trimmed = id.trim_end_matches('/');
        if !trimmed.to_ascii_lowercase().starts_with("/subscriptions/") {
            return Err(ResourceIdError::MissingSubscriptionPrefix(id.to_string()));
        }

        let mut segments = trimmed.trim_start_matches('/').split('/');
        let subscription_id = expect_segment(&mut segments, "subscriptions", id)?;
        let resource_group = expect_segment(&mut segments, "resourceGroups", id)?;
        let namespace = expect_segment(&mut segments, "providers", id)?;
        if !namespace.eq_ignore_ascii_case(SQL_PROVIDER_NAMESPACE) {
            return Err(ResourceIdError::UnexpectedProvider {
                expected: SQL_PROVIDER_NAMESPACE,
                id: id.to_string(),
            });
        }
        let server = expect_segment(&mut segments, "servers", id)?;

        let database = match segments.next() {
            None => None,
            Some(key) if key.eq_ignore_ascii_case("databases") => {
                let name = segments.next().unwrap_or_default();
                if name.is_empty() {
                    return Err(ResourceIdError::EmptySegment {
                        segment: "databases",
                        id: id.to_string(),
                    });
                }
                Some(name.to_string())
            }
            Some(_) => return Err(ResourceIdError::TrailingSegments(id.to_string())),
        };

        if segments.next().is_some() {
            return Err(ResourceIdError::TrailingSegments(id.to_string()));
        }

        Ok(SqlResourceId {
            server: SqlServerLocator::new(subscription_id, resource_group, server),
            database,
        })
    }
}

/// Consume `key/value` from the segment iterator
fn expect_segment<'a>(
    segments: &mut impl Iterator<Item = &'a str>,
    segment: &'static str,
    id: &str,
) -> Result<&'a str, ResourceIdError> {
    match segments.next() {
        Some(key) if key.eq_ignore_ascii_case(segment) => {}
        _ => {
            return Err(ResourceIdError::MissingSegment {
                segment,
                id: id.to_string(),
            })
        }
    }
    match segments.next() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ResourceIdError::EmptySegment {
            segment,
            id: id.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary() -> SqlServerLocator {
        SqlServerLocator::new("00000000-0000-0000-0000-000000000000", "sql-rg", "sqlsrv-east")
    }

    #[test]
    fn test_server_id_format() {
        assert_eq!(
            primary().server_id(),
            "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/sql-rg/providers/Microsoft.Sql/servers/sqlsrv-east"
        );
    }

    #[test]
    fn test_database_id_format() {
        assert!(primary()
            .database_id("orders")
            .ends_with("/servers/sqlsrv-east/databases/orders"));
    }

    #[test]
    fn test_sibling_keeps_subscription() {
        let secondary = primary().sibling("sql-rg-west", "sqlsrv-west");
        assert_eq!(secondary.subscription_id, primary().subscription_id);
        assert_eq!(secondary.resource_group, "sql-rg-west");
        assert_eq!(secondary.server, "sqlsrv-west");
    }

    #[test]
    fn test_parse_server_id() {
        let parsed: SqlResourceId = primary().server_id().parse().unwrap();
        assert_eq!(parsed.server, primary());
        assert_eq!(parsed.database, None);
    }

    #[test]
    fn test_parse_database_id_case_insensitive_keys() {
        let id = "/SUBSCRIPTIONS/sub/resourcegroups/rg/Providers/microsoft.sql/Servers/srv/DATABASES/db1/";
        let parsed: SqlResourceId = id.parse().unwrap();
        assert_eq!(parsed.server.subscription_id, "sub");
        assert_eq!(parsed.server.resource_group, "rg");
        assert_eq!(parsed.server.server, "srv");
        assert_eq!(parsed.database.as_deref(), Some("db1"));
    }

    #[test]
    fn test_display_matches_locator() {
        let id = SqlResourceId {
            server: primary(),
            database: Some("orders".to_string()),
        };
        assert_eq!(id.to_string(), primary().database_id("orders"));
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        let err = "resourceGroups/rg".parse::<SqlResourceId>().unwrap_err();
        assert!(matches!(err, ResourceIdError::MissingSubscriptionPrefix(_)));
    }

    #[test]
    fn test_parse_rejects_other_provider() {
        let id = "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Storage/storageAccounts/x";
        let err = id.parse::<SqlResourceId>().unwrap_err();
        assert!(matches!(err, ResourceIdError::UnexpectedProvider { .. }));
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        let id = "/subscriptions//resourceGroups/rg/providers/Microsoft.Sql/servers/srv";
        let err = id.parse::<SqlResourceId>().unwrap_err();
        assert_eq!(
            err,
            ResourceIdError::EmptySegment {
                segment: "subscriptions",
                id: id.to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_trailing_segments() {
        let id = format!("{}/firewallRules/allow-all", primary().server_id());
        let err = id.parse::<SqlResourceId>().unwrap_err();
        assert!(matches!(err, ResourceIdError::TrailingSegments(_)));

        let id = format!("{}/extra", primary().database_id("db"));
        let err = id.parse::<SqlResourceId>().unwrap_err();
        assert!(matches!(err, ResourceIdError::TrailingSegments(_)));
    }
}
