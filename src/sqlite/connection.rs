use rusqlite::Connection;

use crate::error::SqliteNodeError;

/// Open the database file for one item. The connection never outlives the
/// item: callers close it (or let it drop) before the next item runs.
///
/// # Errors
///
/// Returns `SqliteNodeError::Sqlite` if the file cannot be opened.
pub(super) fn open(db_path: &str) -> Result<Connection, SqliteNodeError> {
    let conn = Connection::open(db_path)?;
    Ok(conn)
}

/// Close a connection, surfacing the error rusqlite reports on the failed
/// handle rather than discarding it.
///
/// # Errors
///
/// Returns `SqliteNodeError::Sqlite` if the close fails.
pub(super) fn close(conn: Connection) -> Result<(), SqliteNodeError> {
    conn.close().map_err(|(_conn, err)| SqliteNodeError::Sqlite(err))
}
