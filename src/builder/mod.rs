//! Statement synthesis: maps a (resource, operation) pair plus the item's
//! form fields to exactly one SQL statement string.
//!
//! Field lists, value lists, WHERE fragments and table names are inserted
//! into the templates verbatim, without escaping or parameter binding.
//! Callers of this node class rely on injecting raw SQL through the WHERE
//! field, so the interpolation is part of the contract.

use crate::error::SqliteNodeError;
use crate::params::ItemParams;
use crate::types::{Operation, Resource};

mod record;
mod table;

/// How a built statement is routed by the execution adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Expect a row sequence (possibly empty).
    Query,
    /// Expect a `{changes, lastInsertId}` summary.
    Mutation,
}

/// One fully resolved SQL statement, ready to execute.
#[derive(Debug, Clone)]
pub struct Statement {
    pub sql: String,
    pub kind: StatementKind,
}

impl Statement {
    fn new(sql: impl Into<String>, operation: Operation) -> Self {
        let kind = if operation.is_query() {
            StatementKind::Query
        } else {
            StatementKind::Mutation
        };
        Self {
            sql: sql.into(),
            kind,
        }
    }
}

/// Build the statement for one item.
///
/// # Errors
///
/// Returns `SqliteNodeError::ValidationError` when a field required by the
/// selected operation is empty or the update field/value counts differ, and
/// `SqliteNodeError::UnsupportedOperation` when the resource/operation pair
/// has no statement shape.
pub fn build_statement(params: &ItemParams) -> Result<Statement, SqliteNodeError> {
    let resource = params.resource()?;
    let operation = params.operation()?;

    let sql = match (resource, operation) {
        (Resource::Table, Operation::Create) => table::create(params)?,
        (Resource::Table, Operation::List) => table::list(),
        (Resource::Table, Operation::Info) => table::info(params)?,
        (Resource::Record, Operation::Insert) => record::insert(params)?,
        (Resource::Record, Operation::List) => record::list(params)?,
        (Resource::Record, Operation::Update) => record::update(params)?,
        (Resource::Record, Operation::Delete) => record::delete(params)?,
        _ => {
            return Err(SqliteNodeError::UnsupportedOperation(format!(
                "Unable to generate SQL query for {}/{}",
                params.resource, params.operation
            )));
        }
    };

    Ok(Statement::new(sql, operation))
}

fn required(value: &str, message: &str) -> Result<(), SqliteNodeError> {
    if value.trim().is_empty() {
        Err(SqliteNodeError::ValidationError(message.to_string()))
    } else {
        Ok(())
    }
}
