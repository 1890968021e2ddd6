//! Convenient imports for common functionality.

pub use crate::builder::{Statement, StatementKind, build_statement};
pub use crate::credentials::{SqliteCredential, resolve_database_path};
pub use crate::descriptor::{NodeDescriptor, Property, descriptor};
pub use crate::error::SqliteNodeError;
pub use crate::node::{Invocation, RunOptions, SqliteNode, WorkflowNode};
pub use crate::output::{error_item, normalize};
pub use crate::params::ItemParams;
pub use crate::results::{DbRow, ResultSet};
pub use crate::sqlite::{ExecutionResult, MutationSummary, execute_statement};
pub use crate::types::{Operation, Resource, RowValues};
