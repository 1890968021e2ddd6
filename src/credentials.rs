use serde::{Deserialize, Serialize};

use crate::error::SqliteNodeError;

/// The stored credential record the host passes to the node: a single
/// field holding the SQLite database file path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteCredential {
    #[serde(rename = "databasePath")]
    pub database_path: String,
}

impl SqliteCredential {
    #[must_use]
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }
}

/// Resolve the database file for one item: a non-empty per-item parameter
/// wins over the credential; neither present is a configuration error.
///
/// # Errors
///
/// Returns `SqliteNodeError::ConfigError` when no path is configured.
pub fn resolve_database_path(
    parameter: Option<&str>,
    credential: Option<&SqliteCredential>,
) -> Result<String, SqliteNodeError> {
    if let Some(path) = parameter {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    if let Some(credential) = credential {
        let trimmed = credential.database_path.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    Err(SqliteNodeError::ConfigError(
        "No database file configured: supply the Database File parameter or a credential"
            .to_string(),
    ))
}
