use serde_json::json;
use sqlite_node::prelude::*;
use tokio::runtime::Runtime;

fn create_item(sql: &str) -> serde_json::Value {
    json!({
        "resource": "table",
        "operation": "create",
        "sql": sql,
    })
}

#[test]
fn create_then_info_returns_the_stored_definition() -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("test2.db").to_string_lossy().to_string();

    let node = SqliteNode::new();
    let credential = SqliteCredential::new(db_path);

    rt.block_on(async {
        // sqlite_master stores the CREATE text as given, minus the
        // statement terminator, so build one without a trailing semicolon.
        let ddl = "CREATE TABLE widgets (id INTEGER PRIMARY KEY, label TEXT)";
        node.execute(&Invocation::new(vec![create_item(ddl)]).with_credential(credential.clone()))
            .await?;

        let info = node
            .execute(
                &Invocation::new(vec![json!({
                    "resource": "table",
                    "operation": "info",
                    "table_name": "widgets",
                })])
                .with_credential(credential.clone()),
            )
            .await?;
        assert_eq!(info, vec![json!({"sql": ddl})]);

        // Info for a table that does not exist is an empty query result,
        // which still pairs one (empty) output item to the input item.
        let missing = node
            .execute(
                &Invocation::new(vec![json!({
                    "resource": "table",
                    "operation": "info",
                    "table_name": "gadgets",
                })])
                .with_credential(credential.clone()),
            )
            .await?;
        assert_eq!(missing, vec![json!({})]);

        Ok::<(), SqliteNodeError>(())
    })?;

    Ok(())
}

#[test]
fn table_list_is_ordered_and_stable() -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("test2_list.db").to_string_lossy().to_string();

    let node = SqliteNode::new();
    let credential = SqliteCredential::new(db_path);

    rt.block_on(async {
        // Created out of name order on purpose.
        for ddl in [
            "CREATE TABLE zeta (id INTEGER)",
            "CREATE TABLE alpha (id INTEGER)",
            "CREATE TABLE mid (id INTEGER)",
        ] {
            node.execute(
                &Invocation::new(vec![create_item(ddl)]).with_credential(credential.clone()),
            )
            .await?;
        }

        let list_item = json!({"resource": "table", "operation": "list"});
        let first = node
            .execute(
                &Invocation::new(vec![list_item.clone()]).with_credential(credential.clone()),
            )
            .await?;
        assert_eq!(
            first,
            vec![
                json!({"name": "alpha"}),
                json!({"name": "mid"}),
                json!({"name": "zeta"}),
            ]
        );

        // Idempotent without intervening schema changes.
        let second = node
            .execute(&Invocation::new(vec![list_item]).with_credential(credential.clone()))
            .await?;
        assert_eq!(first, second);

        Ok::<(), SqliteNodeError>(())
    })?;

    Ok(())
}
