//! Host-facing declarative metadata: the node's identity, credential
//! requirements, and configurable properties with their UI visibility
//! conditions. Nothing in the execution path consults this module; the
//! host renders it and sends back plain parameter values.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Value as JsonValue, json};

const CREATE_TABLE_SAMPLE: &str = "CREATE TABLE IF NOT EXISTS users (\n    id INTEGER PRIMARY KEY AUTOINCREMENT,\n    name TEXT NOT NULL,\n    email TEXT UNIQUE NOT NULL,\n    created_at DATETIME DEFAULT CURRENT_TIMESTAMP\n);";

/// Everything the host needs to render and invoke the node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub group: Vec<String>,
    pub version: u32,
    pub credentials: Vec<CredentialRef>,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRef {
    pub name: String,
    pub required: bool,
}

/// One configurable field shown to the user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<PropertyOption>>,
    pub default: JsonValue,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    String,
    Options,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyOption {
    pub name: String,
    pub value: String,
}

/// Visibility conditions: the field is shown when every listed parameter
/// currently holds one of the listed values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplayOptions {
    pub show: BTreeMap<String, Vec<String>>,
}

impl Property {
    fn string(name: &str, display_name: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            kind: PropertyKind::String,
            options: None,
            default: json!(""),
            required: false,
            description: String::new(),
            display_options: None,
        }
    }

    fn options(name: &str, display_name: &str, choices: &[(&str, &str)], default: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            kind: PropertyKind::Options,
            options: Some(
                choices
                    .iter()
                    .map(|(name, value)| PropertyOption {
                        name: (*name).to_string(),
                        value: (*value).to_string(),
                    })
                    .collect(),
            ),
            default: json!(default),
            required: false,
            description: String::new(),
            display_options: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn describe(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    fn default_value(mut self, default: JsonValue) -> Self {
        self.default = default;
        self
    }

    fn show_when(mut self, parameter: &str, values: &[&str]) -> Self {
        let display = self.display_options.get_or_insert_with(DisplayOptions::default);
        display.show.insert(
            parameter.to_string(),
            values.iter().map(|v| (*v).to_string()).collect(),
        );
        self
    }
}

/// The node's full descriptor, as the host consumes it.
#[must_use]
pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor {
        name: "simpleSqlite".to_string(),
        display_name: "Simple SQLite".to_string(),
        description: "Work with SQLite databases".to_string(),
        group: vec!["transform".to_string()],
        version: 1,
        credentials: vec![CredentialRef {
            name: "simpleSqliteApi".to_string(),
            required: true,
        }],
        properties: properties(),
    }
}

fn properties() -> Vec<Property> {
    vec![
        Property::string("database", "Database File").describe(
            "Path to the SQLite database file. If empty, uses the path from credentials.",
        ),
        Property::options(
            "resource",
            "Resource",
            &[("Record", "record"), ("Table", "table")],
            "record",
        ),
        Property::options(
            "operation",
            "Operation",
            &[
                ("List", "list"),
                ("Insert", "insert"),
                ("Update", "update"),
                ("Delete", "delete"),
            ],
            "list",
        )
        .show_when("resource", &["record"]),
        Property::options(
            "operation",
            "Operation",
            &[("Create", "create"), ("List", "list"), ("Info", "info")],
            "list",
        )
        .show_when("resource", &["table"]),
        // table/create
        Property::string("sql", "SQL Table Definition")
            .default_value(json!(CREATE_TABLE_SAMPLE))
            .required()
            .describe("SQL CREATE TABLE statement")
            .show_when("resource", &["table"])
            .show_when("operation", &["create"]),
        // table/info
        Property::string("table_name", "Table Name")
            .required()
            .describe("Name of the table to get info for")
            .show_when("resource", &["table"])
            .show_when("operation", &["info"]),
        // record/insert
        Property::string("table_name", "Table Name")
            .required()
            .describe("Name of the table to insert into")
            .show_when("resource", &["record"])
            .show_when("operation", &["insert"]),
        Property::string("field_names", "Field Names")
            .required()
            .describe("Comma-separated field names (e.g., \"name, email\")")
            .show_when("resource", &["record"])
            .show_when("operation", &["insert"]),
        Property::string("values", "Values")
            .required()
            .describe("Comma-separated values (e.g., \"'Alice', 'alice@example.com'\")")
            .show_when("resource", &["record"])
            .show_when("operation", &["insert"]),
        // record/list
        Property::string("table_name", "Table Name")
            .required()
            .describe("Name of the table to select from")
            .show_when("resource", &["record"])
            .show_when("operation", &["list"]),
        Property::string("where_clause", "Where Clause")
            .describe("WHERE clause (e.g., \"name = 'Alice'\")")
            .show_when("resource", &["record"])
            .show_when("operation", &["list"]),
        // record/update
        Property::string("table_name", "Table Name")
            .required()
            .describe("Name of the table to update")
            .show_when("resource", &["record"])
            .show_when("operation", &["update"]),
        Property::string("field_names", "Field Names")
            .required()
            .describe("Comma-separated field names to update (e.g., \"email\")")
            .show_when("resource", &["record"])
            .show_when("operation", &["update"]),
        Property::string("values", "Values")
            .required()
            .describe("Comma-separated values (e.g., \"'alice@newmail.com'\")")
            .show_when("resource", &["record"])
            .show_when("operation", &["update"]),
        Property::string("where_clause", "Where Clause")
            .required()
            .describe("WHERE clause (e.g., \"name = 'Alice'\")")
            .show_when("resource", &["record"])
            .show_when("operation", &["update"]),
        // record/delete
        Property::string("table_name", "Table Name")
            .required()
            .describe("Name of the table to delete from")
            .show_when("resource", &["record"])
            .show_when("operation", &["delete"]),
        Property::string("where_clause", "Where Clause")
            .required()
            .describe("WHERE clause (e.g., \"name = 'Alice'\")")
            .show_when("resource", &["record"])
            .show_when("operation", &["delete"]),
    ]
}
