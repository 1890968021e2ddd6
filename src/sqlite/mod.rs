// SQLite execution adapter.
//
// - connection: per-item scoped open/close of the database file
// - query: row extraction and result-set building
// - executor: routes a built statement down the query or mutation path

mod connection;
mod executor;
mod query;

pub use executor::{ExecutionResult, MutationSummary, execute_statement};
pub use query::build_result_set;
