//! SQLite node for workflow-automation hosts.
//!
//! A workflow step configures a resource (`record` or `table`), an
//! operation, and a handful of free-text form fields; the node assembles
//! one SQL statement per input item from those fields and executes it
//! against an SQLite database file through rusqlite, opening and closing
//! one connection per item.
//!
//! Field lists, value lists, WHERE fragments and table names are inlined
//! into the SQL text verbatim, with no escaping or parameter binding.
//! That is deliberate: callers of this node class feed raw SQL fragments
//! through the WHERE field, and binding would change their behavior. Do
//! not point it at a database whose inputs you do not trust.
//!
//! ```no_run
//! use serde_json::json;
//! use sqlite_node::prelude::*;
//!
//! # async fn demo() -> Result<(), SqliteNodeError> {
//! let node = SqliteNode::new();
//! let invocation = Invocation::new(vec![json!({
//!     "resource": "record",
//!     "operation": "list",
//!     "table_name": "users",
//!     "where_clause": "name = 'Alice'",
//! })])
//! .with_credential(SqliteCredential::new("/data/app.sqlite"));
//!
//! let items = node.execute(&invocation).await?;
//! # let _ = items;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod credentials;
pub mod descriptor;
pub mod error;
pub mod node;
pub mod output;
pub mod params;
pub mod prelude;
pub mod results;
pub mod sqlite;
pub mod types;

pub use error::SqliteNodeError;
pub use node::{Invocation, RunOptions, SqliteNode, WorkflowNode};
