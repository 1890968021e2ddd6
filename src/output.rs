use serde_json::{Map, Value as JsonValue, json};

use crate::error::SqliteNodeError;
use crate::results::ResultSet;
use crate::sqlite::{ExecutionResult, MutationSummary};
use crate::types::RowValues;

/// Flatten an execution result into host output items.
///
/// An empty query result contributes one empty object rather than zero
/// items: the host pairs outputs to inputs positionally, and a vanished
/// item would shift every later pairing.
#[must_use]
pub fn normalize(result: ExecutionResult) -> Vec<JsonValue> {
    match result {
        ExecutionResult::Rows(rows) if rows.is_empty() => vec![JsonValue::Object(Map::new())],
        ExecutionResult::Rows(rows) => rows_to_items(&rows),
        ExecutionResult::Mutation(summary) => vec![mutation_item(summary)],
    }
}

fn rows_to_items(rows: &ResultSet) -> Vec<JsonValue> {
    rows.rows
        .iter()
        .map(|row| {
            let mut object = Map::with_capacity(row.column_names.len());
            for (idx, column) in row.column_names.iter().enumerate() {
                let value = row
                    .get_by_index(idx)
                    .map_or(JsonValue::Null, RowValues::to_json);
                object.insert(column.clone(), value);
            }
            JsonValue::Object(object)
        })
        .collect()
}

fn mutation_item(summary: MutationSummary) -> JsonValue {
    json!({
        "changes": summary.changes,
        "lastInsertId": summary.last_insert_id,
    })
}

/// The error-descriptor item appended when a run tolerates a failed item.
/// Carries the host's paired-item index so downstream steps can line the
/// failure up with its input.
#[must_use]
pub fn error_item(index: usize, error: &SqliteNodeError) -> JsonValue {
    json!({
        "error": error.to_string(),
        "pairedItem": { "item": index },
    })
}
