use std::sync::Arc;

use rusqlite::types::Value;

use crate::error::SqliteNodeError;
use crate::results::ResultSet;
use crate::types::RowValues;

/// Extract one cell from a `SQLite` row.
///
/// # Errors
///
/// Returns `SqliteNodeError::Sqlite` if the value cannot be read.
pub fn extract_value(row: &rusqlite::Row, idx: usize) -> Result<RowValues, SqliteNodeError> {
    let value: Value = row.get(idx).map_err(SqliteNodeError::Sqlite)?;
    match value {
        Value::Null => Ok(RowValues::Null),
        Value::Integer(i) => Ok(RowValues::Int(i)),
        Value::Real(f) => Ok(RowValues::Float(f)),
        Value::Text(s) => Ok(RowValues::Text(s)),
        Value::Blob(b) => Ok(RowValues::Blob(b)),
    }
}

/// Run a prepared statement and collect every returned row.
///
/// The node inlines all values into the SQL text, so no parameters are ever
/// bound here.
///
/// # Errors
///
/// Returns `SqliteNodeError` if query execution or row extraction fails.
pub fn build_result_set(stmt: &mut rusqlite::Statement) -> Result<ResultSet, SqliteNodeError> {
    let column_names: Vec<String> = stmt
        .column_names()
        .iter()
        .map(std::string::ToString::to_string)
        .collect();
    let column_count = column_names.len();

    let mut result_set = ResultSet::with_capacity(10);
    result_set.set_column_names(Arc::new(column_names));

    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            values.push(extract_value(row, idx)?);
        }
        result_set.add_row_values(values);
    }

    Ok(result_set)
}
