use std::collections::HashMap;
use std::sync::Arc;

use crate::types::RowValues;

use super::row::{DbRow, index_of};

/// The rows returned by one query, plus shared column metadata.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    pub rows: Vec<DbRow>,
    column_names: Option<Arc<Vec<String>>>,
    column_index: Option<Arc<HashMap<String, usize>>>,
}

impl ResultSet {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> ResultSet {
        ResultSet {
            rows: Vec::with_capacity(capacity),
            column_names: None,
            column_index: None,
        }
    }

    /// Set the column names shared by every row of this result set. The
    /// name-to-index cache is built once here instead of per row.
    pub fn set_column_names(&mut self, column_names: Arc<Vec<String>>) {
        self.column_index = Some(Arc::new(index_of(&column_names)));
        self.column_names = Some(column_names);
    }

    #[must_use]
    pub fn column_names(&self) -> Option<&Arc<Vec<String>>> {
        self.column_names.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row of values; `set_column_names` must have been called.
    pub fn add_row_values(&mut self, values: Vec<RowValues>) {
        if let (Some(column_names), Some(column_index)) =
            (&self.column_names, &self.column_index)
        {
            self.rows.push(DbRow::with_index(
                Arc::clone(column_names),
                values,
                Arc::clone(column_index),
            ));
        }
    }
}
