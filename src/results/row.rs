use std::collections::HashMap;
use std::sync::Arc;

use crate::types::RowValues;

/// A single row from a query result, with access to both the column names
/// and the values. Column names are shared across all rows of a result set.
#[derive(Debug, Clone)]
pub struct DbRow {
    pub column_names: Arc<Vec<String>>,
    pub values: Vec<RowValues>,
    // Cache of column name to index, shared with the owning result set.
    column_index: Arc<HashMap<String, usize>>,
}

impl DbRow {
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>, values: Vec<RowValues>) -> Self {
        let column_index = Arc::new(index_of(&column_names));
        Self {
            column_names,
            values,
            column_index,
        }
    }

    pub(crate) fn with_index(
        column_names: Arc<Vec<String>>,
        values: Vec<RowValues>,
        column_index: Arc<HashMap<String, usize>>,
    ) -> Self {
        Self {
            column_names,
            values,
            column_index,
        }
    }

    /// Get the index of a column by name.
    #[must_use]
    pub fn get_column_index(&self, column_name: &str) -> Option<usize> {
        if let Some(&idx) = self.column_index.get(column_name) {
            return Some(idx);
        }
        self.column_names.iter().position(|col| col == column_name)
    }

    /// Get a value from the row by column name.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValues> {
        self.get_column_index(column_name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get a value from the row by column index.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValues> {
        self.values.get(index)
    }
}

pub(crate) fn index_of(column_names: &[String]) -> HashMap<String, usize> {
    column_names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), i))
        .collect()
}
