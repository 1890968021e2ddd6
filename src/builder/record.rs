use crate::error::SqliteNodeError;
use crate::params::ItemParams;

use super::required;

pub(super) fn insert(params: &ItemParams) -> Result<String, SqliteNodeError> {
    required(&params.table_name, "Table name cannot be empty")?;
    if params.field_names.trim().is_empty() || params.values.trim().is_empty() {
        return Err(SqliteNodeError::ValidationError(
            "Field names and values cannot be empty".to_string(),
        ));
    }
    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({});",
        params.table_name, params.field_names, params.values
    ))
}

pub(super) fn list(params: &ItemParams) -> Result<String, SqliteNodeError> {
    required(&params.table_name, "Table name cannot be empty")?;
    let mut sql = format!("SELECT * FROM {}", params.table_name);
    if !params.where_clause.trim().is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&params.where_clause);
    }
    sql.push(';');
    Ok(sql)
}

pub(super) fn update(params: &ItemParams) -> Result<String, SqliteNodeError> {
    required(&params.table_name, "Table name cannot be empty")?;
    if params.field_names.trim().is_empty()
        || params.values.trim().is_empty()
        || params.where_clause.trim().is_empty()
    {
        return Err(SqliteNodeError::ValidationError(
            "Field names, values, and where clause cannot be empty for update operation"
                .to_string(),
        ));
    }

    let fields: Vec<&str> = params.field_names.split(',').map(str::trim).collect();
    let values: Vec<&str> = params.values.split(',').map(str::trim).collect();
    if fields.len() != values.len() {
        return Err(SqliteNodeError::ValidationError(
            "Number of field names must match number of values".to_string(),
        ));
    }

    let assignments: Vec<String> = fields
        .iter()
        .zip(values.iter())
        .map(|(field, value)| format!("{field} = {value}"))
        .collect();

    Ok(format!(
        "UPDATE {} SET {} WHERE {};",
        params.table_name,
        assignments.join(", "),
        params.where_clause
    ))
}

pub(super) fn delete(params: &ItemParams) -> Result<String, SqliteNodeError> {
    required(&params.table_name, "Table name cannot be empty")?;
    required(
        &params.where_clause,
        "Where clause cannot be empty for delete operation",
    )?;
    Ok(format!(
        "DELETE FROM {} WHERE {};",
        params.table_name, params.where_clause
    ))
}
