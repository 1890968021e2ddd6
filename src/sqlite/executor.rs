use tracing::debug;

use crate::builder::{Statement, StatementKind};
use crate::error::SqliteNodeError;
use crate::results::ResultSet;

use super::connection;
use super::query::build_result_set;

/// What one statement produced: a row sequence for the query path, or a
/// mutation summary for everything else.
#[derive(Debug, Clone)]
pub enum ExecutionResult {
    Rows(ResultSet),
    Mutation(MutationSummary),
}

/// The `{changes, lastInsertId}` pair reported for mutating statements.
/// `last_insert_id` is only meaningful after an INSERT; SQLite reports the
/// most recent rowid of the connection otherwise (0 on a fresh one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationSummary {
    pub changes: usize,
    pub last_insert_id: i64,
}

/// Execute a built statement against the database file.
///
/// One connection is opened and closed per call; rusqlite is synchronous,
/// so the work runs on the blocking pool.
///
/// # Errors
///
/// Returns `SqliteNodeError::Sqlite` if the engine rejects or fails the
/// statement, and `SqliteNodeError::ExecutionError` if the blocking task
/// itself dies.
pub async fn execute_statement(
    db_path: &str,
    statement: &Statement,
) -> Result<ExecutionResult, SqliteNodeError> {
    let db_path = db_path.to_owned();
    let statement = statement.clone();

    tokio::task::spawn_blocking(move || run_statement(&db_path, &statement))
        .await
        .map_err(|e| SqliteNodeError::ExecutionError(format!("blocking task failed: {e}")))?
}

fn run_statement(
    db_path: &str,
    statement: &Statement,
) -> Result<ExecutionResult, SqliteNodeError> {
    let conn = connection::open(db_path)?;
    debug!(db = db_path, sql = %statement.sql, "executing statement");

    let result = match statement.kind {
        StatementKind::Query => {
            let mut prepared = conn.prepare(&statement.sql)?;
            let rows = build_result_set(&mut prepared)?;
            drop(prepared);
            ExecutionResult::Rows(rows)
        }
        StatementKind::Mutation => {
            let changes = conn.execute(&statement.sql, [])?;
            ExecutionResult::Mutation(MutationSummary {
                changes,
                last_insert_id: conn.last_insert_rowid(),
            })
        }
    };

    connection::close(conn)?;
    Ok(result)
}
