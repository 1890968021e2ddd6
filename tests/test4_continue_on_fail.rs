use serde_json::json;
use sqlite_node::prelude::*;
use tokio::runtime::Runtime;

#[test]
fn tolerated_failures_become_error_items() -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("test4.db").to_string_lossy().to_string();

    let node = SqliteNode::new();

    rt.block_on(async {
        let items = vec![
            // Fails validation: delete with an empty WHERE clause.
            json!({
                "resource": "record",
                "operation": "delete",
                "table_name": "users",
                "where_clause": "",
            }),
            // Succeeds.
            json!({
                "resource": "table",
                "operation": "create",
                "sql": "CREATE TABLE users (id INTEGER PRIMARY KEY)",
            }),
            // Fails in the engine: the table does not exist.
            json!({
                "resource": "record",
                "operation": "insert",
                "table_name": "missing_table",
                "field_names": "id",
                "values": "1",
            }),
        ];

        let output = node
            .execute(
                &Invocation::new(items)
                    .with_credential(SqliteCredential::new(db_path.clone()))
                    .continue_on_fail(true),
            )
            .await?;

        assert_eq!(output.len(), 3);
        assert!(
            output[0]["error"]
                .as_str()
                .unwrap()
                .contains("Where clause cannot be empty for delete operation")
        );
        assert_eq!(output[0]["pairedItem"]["item"], 0);
        assert_eq!(output[1], json!({"changes": 0, "lastInsertId": 0}));
        assert!(output[2]["error"].as_str().unwrap().contains("missing_table"));
        assert_eq!(output[2]["pairedItem"]["item"], 2);

        Ok::<(), SqliteNodeError>(())
    })?;

    Ok(())
}

#[test]
fn first_failure_aborts_and_names_the_item() -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("test4_abort.db").to_string_lossy().to_string();

    let node = SqliteNode::new();

    rt.block_on(async {
        let items = vec![
            json!({
                "resource": "table",
                "operation": "create",
                "sql": "CREATE TABLE ok (id INTEGER)",
            }),
            json!({
                "resource": "record",
                "operation": "update",
                "table_name": "ok",
                "field_names": "a, b",
                "values": "1",
                "where_clause": "id = 1",
            }),
        ];

        let err = node
            .execute(
                &Invocation::new(items).with_credential(SqliteCredential::new(db_path.clone())),
            )
            .await
            .unwrap_err();

        match err {
            SqliteNodeError::ItemFailed { index, source } => {
                assert_eq!(index, 1);
                assert!(
                    source
                        .to_string()
                        .contains("Number of field names must match number of values")
                );
            }
            other => panic!("expected ItemFailed, got {other}"),
        }

        Ok::<(), Box<dyn std::error::Error>>(())
    })?;

    Ok(())
}

#[test]
fn validation_errors_never_touch_the_database() -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("untouched.db");

    let node = SqliteNode::new();

    rt.block_on(async {
        let err = node
            .execute(
                &Invocation::new(vec![json!({
                    "resource": "record",
                    "operation": "delete",
                    "table_name": "users",
                    "where_clause": "  ",
                })])
                .with_credential(SqliteCredential::new(db_path.to_string_lossy().to_string())),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Where clause cannot be empty"));

        Ok::<(), Box<dyn std::error::Error>>(())
    })?;

    // Opening a connection would have created the file; validation failed
    // before the adapter ever ran.
    assert!(!db_path.exists());

    Ok(())
}

#[test]
fn missing_database_path_is_a_config_error() -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;
    let node = SqliteNode::new();

    rt.block_on(async {
        let item = json!({
            "resource": "table",
            "operation": "list",
        });

        // Abort mode: the run fails naming the item.
        let err = node
            .execute(&Invocation::new(vec![item.clone()]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No database file configured"));

        // Tolerant mode: the failure is an error item instead.
        let output = node
            .execute(&Invocation::new(vec![item]).continue_on_fail(true))
            .await?;
        assert!(
            output[0]["error"]
                .as_str()
                .unwrap()
                .contains("No database file configured")
        );

        Ok::<(), SqliteNodeError>(())
    })?;

    Ok(())
}

#[test]
fn unknown_combinations_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("test4_combo.db").to_string_lossy().to_string();

    let node = SqliteNode::new();

    rt.block_on(async {
        let output = node
            .execute(
                &Invocation::new(vec![json!({
                    "resource": "record",
                    "operation": "create",
                    "table_name": "users",
                })])
                .with_credential(SqliteCredential::new(db_path))
                .continue_on_fail(true),
            )
            .await?;
        assert!(
            output[0]["error"]
                .as_str()
                .unwrap()
                .contains("Unable to generate SQL query")
        );

        Ok::<(), SqliteNodeError>(())
    })?;

    Ok(())
}
