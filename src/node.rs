use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::builder::build_statement;
use crate::credentials::{SqliteCredential, resolve_database_path};
use crate::descriptor::{NodeDescriptor, descriptor};
use crate::error::SqliteNodeError;
use crate::output::{error_item, normalize};
use crate::params::ItemParams;
use crate::sqlite::execute_statement;

/// Run-level behavior flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Capture per-item failures as error items and keep going instead of
    /// aborting the whole run on the first one.
    pub continue_on_fail: bool,
}

/// One run of the node: the host's input items (each carrying its resolved
/// named parameter values), the stored credential if any, and the run flags.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub items: Vec<JsonValue>,
    pub credential: Option<SqliteCredential>,
    pub options: RunOptions,
}

impl Invocation {
    #[must_use]
    pub fn new(items: Vec<JsonValue>) -> Self {
        Self {
            items,
            credential: None,
            options: RunOptions::default(),
        }
    }

    #[must_use]
    pub fn with_credential(mut self, credential: SqliteCredential) -> Self {
        self.credential = Some(credential);
        self
    }

    #[must_use]
    pub fn continue_on_fail(mut self, continue_on_fail: bool) -> Self {
        self.options.continue_on_fail = continue_on_fail;
        self
    }
}

/// The seam the workflow host drives: describe the node once, execute it
/// per run.
#[async_trait]
pub trait WorkflowNode {
    fn describe(&self) -> NodeDescriptor;

    /// Process every input item in order and return the run's output items.
    ///
    /// # Errors
    ///
    /// Returns `SqliteNodeError::ItemFailed` naming the first failing item
    /// when the run does not tolerate per-item failure.
    async fn execute(&self, invocation: &Invocation) -> Result<Vec<JsonValue>, SqliteNodeError>;
}

/// The SQLite node: builds one SQL statement per input item from its form
/// fields and runs it against the configured database file.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteNode;

impl SqliteNode {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    async fn run_item(
        &self,
        item: &JsonValue,
        credential: Option<&SqliteCredential>,
    ) -> Result<Vec<JsonValue>, SqliteNodeError> {
        let params = ItemParams::from_value(item)?;
        let db_path = resolve_database_path(params.database_override(), credential)?;
        let statement = build_statement(&params)?;
        let result = execute_statement(&db_path, &statement).await?;
        Ok(normalize(result))
    }
}

#[async_trait]
impl WorkflowNode for SqliteNode {
    fn describe(&self) -> NodeDescriptor {
        descriptor()
    }

    async fn execute(&self, invocation: &Invocation) -> Result<Vec<JsonValue>, SqliteNodeError> {
        let mut return_data = Vec::new();

        // Items run sequentially, in order. The output list is the only
        // state carried across items; connections never outlive an item.
        for (index, item) in invocation.items.iter().enumerate() {
            match self.run_item(item, invocation.credential.as_ref()).await {
                Ok(mut items) => {
                    debug!(item = index, outputs = items.len(), "item done");
                    return_data.append(&mut items);
                }
                Err(error) if invocation.options.continue_on_fail => {
                    warn!(item = index, %error, "item failed, continuing");
                    return_data.push(error_item(index, &error));
                }
                Err(error) => return Err(SqliteNodeError::for_item(index, error)),
            }
        }

        Ok(return_data)
    }
}
