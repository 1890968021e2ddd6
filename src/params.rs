use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::SqliteNodeError;
use crate::types::{Operation, Resource};

/// The named parameter values supplied by the host for one input item.
///
/// All fields are untyped strings on the wire; absent fields read as empty.
/// Which fields are meaningful depends on the selected resource/operation
/// pair, so nothing here is validated beyond shape. The statement builder
/// decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemParams {
    pub resource: String,
    pub operation: String,
    /// Optional per-item override of the credential's database file path.
    pub database: String,
    /// Raw CREATE TABLE text for the table/create operation.
    pub sql: String,
    pub table_name: String,
    /// Comma-separated column names.
    pub field_names: String,
    /// Comma-separated SQL literals, inserted verbatim.
    pub values: String,
    /// Raw SQL boolean expression, inserted verbatim after WHERE.
    pub where_clause: String,
}

impl ItemParams {
    /// Read the parameter set out of one host item (a JSON object of
    /// name → string value).
    ///
    /// # Errors
    ///
    /// Returns `SqliteNodeError::ValidationError` if the item is not an
    /// object or a field has a non-string shape.
    pub fn from_value(item: &JsonValue) -> Result<Self, SqliteNodeError> {
        serde_json::from_value(item.clone()).map_err(|e| {
            SqliteNodeError::ValidationError(format!("Malformed item parameters: {e}"))
        })
    }

    /// # Errors
    ///
    /// Returns `SqliteNodeError::ValidationError` for an unknown resource.
    pub fn resource(&self) -> Result<Resource, SqliteNodeError> {
        Resource::parse(&self.resource)
    }

    /// # Errors
    ///
    /// Returns `SqliteNodeError::ValidationError` for an unknown operation.
    pub fn operation(&self) -> Result<Operation, SqliteNodeError> {
        Operation::parse(&self.operation)
    }

    /// The per-item database override, if one was supplied.
    #[must_use]
    pub fn database_override(&self) -> Option<&str> {
        let trimmed = self.database.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_read_as_empty() {
        let params = ItemParams::from_value(&json!({
            "resource": "table",
            "operation": "list",
        }))
        .unwrap();
        assert_eq!(params.resource().unwrap(), Resource::Table);
        assert_eq!(params.operation().unwrap(), Operation::List);
        assert_eq!(params.table_name, "");
        assert_eq!(params.where_clause, "");
        assert!(params.database_override().is_none());
    }

    #[test]
    fn database_override_trims_whitespace() {
        let params = ItemParams::from_value(&json!({
            "resource": "record",
            "operation": "list",
            "database": "  /tmp/db.sqlite  ",
        }))
        .unwrap();
        assert_eq!(params.database_override(), Some("/tmp/db.sqlite"));
    }

    #[test]
    fn non_object_item_is_rejected() {
        assert!(ItemParams::from_value(&json!("record")).is_err());
    }
}
