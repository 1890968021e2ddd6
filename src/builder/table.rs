use crate::error::SqliteNodeError;
use crate::params::ItemParams;

use super::required;

pub(super) fn create(params: &ItemParams) -> Result<String, SqliteNodeError> {
    required(&params.sql, "SQL table definition cannot be empty")?;
    Ok(params.sql.clone())
}

pub(super) fn list() -> String {
    "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name;".to_string()
}

pub(super) fn info(params: &ItemParams) -> Result<String, SqliteNodeError> {
    required(&params.table_name, "Table name cannot be empty")?;
    Ok(format!(
        "SELECT sql FROM sqlite_master WHERE type='table' AND name='{}';",
        params.table_name
    ))
}
