use thiserror::Error;

/// Errors surfaced by the node.
///
/// Every failure kind is reported the same way to the host: either wrapped
/// into an error output item (when the run tolerates per-item failure) or
/// propagated as [`SqliteNodeError::ItemFailed`] naming the offending item.
#[derive(Debug, Error)]
pub enum SqliteNodeError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),

    #[error("item {index} failed: {source}")]
    ItemFailed {
        index: usize,
        #[source]
        source: Box<SqliteNodeError>,
    },
}

impl SqliteNodeError {
    /// Wrap an error with the index of the input item that produced it.
    #[must_use]
    pub fn for_item(index: usize, source: SqliteNodeError) -> Self {
        SqliteNodeError::ItemFailed {
            index,
            source: Box::new(source),
        }
    }
}
