use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::SqliteNodeError;

/// The entity kind an operation targets: a table's rows, or the schema
/// object itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Rows of a table
    Record,
    /// The table schema object
    Table,
}

/// The action to perform against a resource.
///
/// `List`, `Insert`, `Update` and `Delete` apply to records; `Create`,
/// `List` and `Info` apply to tables. Validity of a pairing is checked when
/// the statement is built, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    List,
    Insert,
    Update,
    Delete,
    Create,
    Info,
}

impl Resource {
    /// Parse the wire string used by the host (`record` / `table`).
    ///
    /// # Errors
    ///
    /// Returns `SqliteNodeError::ValidationError` for an unknown value.
    pub fn parse(value: &str) -> Result<Self, SqliteNodeError> {
        <Self as ValueEnum>::from_str(value, true)
            .map_err(|_| SqliteNodeError::ValidationError(format!("Unknown resource '{value}'")))
    }
}

impl Operation {
    /// Parse the wire string used by the host (`list`, `insert`, ...).
    ///
    /// # Errors
    ///
    /// Returns `SqliteNodeError::ValidationError` for an unknown value.
    pub fn parse(value: &str) -> Result<Self, SqliteNodeError> {
        <Self as ValueEnum>::from_str(value, true)
            .map_err(|_| SqliteNodeError::ValidationError(format!("Unknown operation '{value}'")))
    }

    /// Whether statements built for this operation run on the query path
    /// (row sequence expected) rather than the mutation path.
    ///
    /// Routing is decided by the operation name, never by inspecting the
    /// generated SQL text.
    #[must_use]
    pub fn is_query(self) -> bool {
        matches!(self, Operation::List | Operation::Info)
    }
}

/// Values held by one cell of a result row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValues {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Timestamp value
    Timestamp(NaiveDateTime),
    /// NULL value
    Null,
    /// JSON value
    JSON(JsonValue),
    /// Binary data
    Blob(Vec<u8>),
}

impl RowValues {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let RowValues::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let RowValues::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<&bool> {
        if let RowValues::Bool(value) = self {
            return Some(value);
        } else if let Some(i) = self.as_int() {
            if *i == 1 {
                return Some(&true);
            } else if *i == 0 {
                return Some(&false);
            }
        }
        None
    }

    /// SQLite stores datetimes as text; accept the two common formats.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        if let RowValues::Timestamp(value) = self {
            return Some(*value);
        } else if let Some(s) = self.as_text() {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(dt);
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S.%3f") {
                return Some(dt);
            }
        }
        None
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let RowValues::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let RowValues::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }

    /// Convert into the JSON value shipped to the host in an output item.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        match self {
            RowValues::Int(i) => JsonValue::from(*i),
            RowValues::Float(f) => JsonValue::from(*f),
            RowValues::Text(s) => JsonValue::from(s.clone()),
            RowValues::Bool(b) => JsonValue::from(*b),
            RowValues::Timestamp(ts) => {
                JsonValue::from(ts.format("%Y-%m-%d %H:%M:%S").to_string())
            }
            RowValues::Null => JsonValue::Null,
            RowValues::JSON(v) => v.clone(),
            RowValues::Blob(bytes) => JsonValue::from(bytes.clone()),
        }
    }
}
