//! CREATE TABLE parsing tests
//!
//! Covers bodyless tables, column definitions with nullability and default
//! quirks, PRIMARY KEY and FOREIGN KEY constructs, and table options.

use pretty_assertions::assert_eq;

use mysql_ddl_parser::{
    parse, ColumnDef, IndexType, KeyType, ReferenceAction,
};

fn column(field: &str, data_type: &str, nullable: bool, default: &str) -> ColumnDef {
    ColumnDef {
        field: field.to_string(),
        data_type: data_type.to_string(),
        nullable,
        default: default.to_string(),
    }
}

// ============================================================================
// Bodyless tables
// ============================================================================

#[test]
fn test_simple_creation() {
    let schema = parse("CREATE TABLE new_tbl;");
    let table = schema.table("new_tbl").unwrap();
    assert!(table.columns.is_none());
    assert!(table.indexes.is_none());
    assert!(table.options.is_none());
}

#[test]
fn test_simple_creation_if_not_exists() {
    let schema = parse("CREATE TABLE IF NOT EXISTS new_tbl;");
    assert!(schema.table("new_tbl").is_some());
}

#[test]
fn test_simple_creation_temporary_if_not_exists() {
    let schema = parse("CREATE TEMPORARY TABLE IF NOT EXISTS new_tbl;");
    assert!(schema.table("new_tbl").is_some());
}

// ============================================================================
// Column definitions
// ============================================================================

#[test]
fn test_one_field() {
    let schema = parse("CREATE TABLE new_tbl (id int NOT NULL);");
    let columns = schema.table("new_tbl").unwrap().columns.as_ref().unwrap();
    assert_eq!(columns, &vec![column("id", "int", false, "")]);
}

#[test]
fn test_one_nullable_field() {
    let schema = parse("CREATE TABLE new_tbl (id int NULL);");
    let columns = schema.table("new_tbl").unwrap().columns.as_ref().unwrap();
    assert_eq!(columns, &vec![column("id", "int", true, "")]);
}

#[test]
fn test_default_null_field() {
    let schema = parse("CREATE TABLE new_tbl (id bigint(20) DEFAULT NULL);");
    let columns = schema.table("new_tbl").unwrap().columns.as_ref().unwrap();
    assert_eq!(columns, &vec![column("id", "bigint(20)", true, "NULL")]);
}

#[test]
fn test_many_fields() {
    let schema = parse(
        "CREATE TABLE complicated_table (
           id bigint(50) NOT NULL,
           user_id varchar(255) binary NOT NULL,
           some_counter int(10) DEFAULT 0,
           status enum('disabled','enabled','updated','deleted') DEFAULT 'disabled',
           double_counter DOUBLE(10,3),
           creation_date bigint(20) DEFAULT NULL);",
    );
    let columns = schema
        .table("complicated_table")
        .unwrap()
        .columns
        .as_ref()
        .unwrap();
    assert_eq!(
        columns,
        &vec![
            column("id", "bigint(50)", false, ""),
            column("user_id", "varchar(255)", false, ""),
            column("some_counter", "int(10)", false, "0"),
            column(
                "status",
                "enum('disabled','enabled','updated','deleted')",
                false,
                "disabled"
            ),
            column("double_counter", "DOUBLE(10,3)", false, ""),
            column("creation_date", "bigint(20)", true, "NULL"),
        ]
    );
}

// ============================================================================
// PRIMARY KEY constructs
// ============================================================================

#[test]
fn test_primary_key() {
    let schema = parse(
        "CREATE TABLE complicated_table (
           id bigint(50) NOT NULL,
           user_id varchar(255) binary NOT NULL,
           PRIMARY KEY (user_id));",
    );
    let table = schema.table("complicated_table").unwrap();
    assert_eq!(table.columns.as_ref().unwrap().len(), 2);

    let indexes = table.indexes.as_ref().unwrap();
    assert_eq!(indexes.len(), 1);
    assert!(!indexes[0].non_unique);
    assert_eq!(indexes[0].key_name.as_deref(), Some("PRIMARY"));
    assert_eq!(indexes[0].key_type, Some(KeyType::Primary));
    assert_eq!(indexes[0].index_type, Some(IndexType::Btree));
    assert_eq!(indexes[0].column_name, "user_id");
}

#[test]
fn test_constraint_primary_key() {
    let schema = parse(
        "CREATE TABLE t (
           id bigint(50) NOT NULL,
           CONSTRAINT pk_some_strange_name PRIMARY KEY (id));",
    );
    let indexes = schema.table("t").unwrap().indexes.as_ref().unwrap();
    assert_eq!(indexes[0].key_name.as_deref(), Some("pk_some_strange_name"));
    assert_eq!(indexes[0].column_name, "id");
}

#[test]
fn test_constraint_primary_key_multiple_columns() {
    let schema = parse(
        "CREATE TABLE t (
           id bigint(50) NOT NULL,
           user_id varchar(255) NOT NULL,
           CONSTRAINT pk_some_strange_name PRIMARY KEY (id, user_id));",
    );
    let indexes = schema.table("t").unwrap().indexes.as_ref().unwrap();
    // raw inner spacing is preserved for table-level key constructs
    assert_eq!(indexes[0].column_name, "id, user_id");
    assert_eq!(indexes[0].column_names(), vec!["id", "user_id"]);
}

#[test]
fn test_primary_key_using_btree() {
    let schema = parse("CREATE TABLE t (id int, PRIMARY KEY USING BTREE (id));");
    let indexes = schema.table("t").unwrap().indexes.as_ref().unwrap();
    assert_eq!(indexes[0].index_type, Some(IndexType::Btree));
}

#[test]
fn test_primary_key_using_hash() {
    let schema = parse("CREATE TABLE t (id int, PRIMARY KEY USING HASH (id));");
    let indexes = schema.table("t").unwrap().indexes.as_ref().unwrap();
    assert_eq!(indexes[0].index_type, Some(IndexType::Hash));
}

// ============================================================================
// FOREIGN KEY constructs
// ============================================================================

#[test]
fn test_simple_foreign_key() {
    let schema = parse(
        "CREATE TABLE t (
           id bigint(50) NOT NULL,
           user_id varchar(255) NOT NULL,
           PRIMARY KEY (id),
           FOREIGN KEY (user_id) REFERENCES another_table_name (id));",
    );
    let indexes = schema.table("t").unwrap().indexes.as_ref().unwrap();
    assert_eq!(indexes.len(), 2);

    let foreign = &indexes[1];
    assert!(foreign.non_unique);
    assert_eq!(foreign.key_name.as_deref(), Some("user_id"));
    assert_eq!(foreign.key_type, Some(KeyType::Foreign));
    assert_eq!(foreign.column_name, "user_id");
    assert!(foreign.index_type.is_none());

    let references = foreign.references.as_ref().unwrap();
    assert_eq!(references.table_name, "another_table_name");
    assert_eq!(references.columns, "id");
    assert!(references.on_delete.is_none());
    assert!(references.on_update.is_none());
}

#[test]
fn test_foreign_key_on_delete_cascade() {
    let schema = parse(
        "CREATE TABLE t (
           user_id int,
           FOREIGN KEY (user_id) REFERENCES o (id) ON DELETE CASCADE);",
    );
    let indexes = schema.table("t").unwrap().indexes.as_ref().unwrap();
    let references = indexes[0].references.as_ref().unwrap();
    assert_eq!(references.on_delete, Some(ReferenceAction::Cascade));
    assert!(references.on_update.is_none());
}

#[test]
fn test_foreign_key_on_update_cascade() {
    let schema = parse(
        "CREATE TABLE t (
           user_id int,
           FOREIGN KEY (user_id) REFERENCES o (id) ON UPDATE CASCADE);",
    );
    let indexes = schema.table("t").unwrap().indexes.as_ref().unwrap();
    let references = indexes[0].references.as_ref().unwrap();
    assert!(references.on_delete.is_none());
    assert_eq!(references.on_update, Some(ReferenceAction::Cascade));
}

#[test]
fn test_foreign_key_on_delete_and_update() {
    let schema = parse(
        "CREATE TABLE t (
           user_id int,
           FOREIGN KEY (user_id) REFERENCES o (id) ON DELETE CASCADE ON UPDATE CASCADE);",
    );
    let indexes = schema.table("t").unwrap().indexes.as_ref().unwrap();
    let references = indexes[0].references.as_ref().unwrap();
    assert_eq!(references.on_delete, Some(ReferenceAction::Cascade));
    assert_eq!(references.on_update, Some(ReferenceAction::Cascade));
}

#[test]
fn test_foreign_key_clause_order_is_insensitive() {
    let forward = parse(
        "CREATE TABLE t (a int, FOREIGN KEY (a) REFERENCES o (id) ON DELETE CASCADE ON UPDATE CASCADE);",
    );
    let reversed = parse(
        "CREATE TABLE t (a int, FOREIGN KEY (a) REFERENCES o (id) ON UPDATE CASCADE ON DELETE CASCADE);",
    );
    assert_eq!(forward, reversed);
}

#[test]
fn test_foreign_key_restrict_and_no_action() {
    let schema = parse(
        "CREATE TABLE t (
           a int,
           FOREIGN KEY (a) REFERENCES o (id) ON DELETE RESTRICT ON UPDATE NO ACTION);",
    );
    let indexes = schema.table("t").unwrap().indexes.as_ref().unwrap();
    let references = indexes[0].references.as_ref().unwrap();
    assert_eq!(references.on_delete, Some(ReferenceAction::Restrict));
    assert_eq!(references.on_update, Some(ReferenceAction::NoAction));
}

// ============================================================================
// Table options
// ============================================================================

#[test]
fn test_engine_and_character_set() {
    let schema = parse("CREATE TABLE t (id int) ENGINE=InnoDB DEFAULT CHARACTER SET=utf8mb4;");
    let options = schema.table("t").unwrap().options.as_ref().unwrap();
    assert_eq!(options.engine.as_deref(), Some("InnoDB"));
    assert_eq!(options.character_set.as_deref(), Some("utf8mb4"));
}

#[test]
fn test_charset_shorthand() {
    let schema = parse("CREATE TABLE t (id int) DEFAULT CHARSET=latin1;");
    let options = schema.table("t").unwrap().options.as_ref().unwrap();
    assert_eq!(options.character_set.as_deref(), Some("latin1"));
}

#[test]
fn test_partition_clause_not_scanned_for_options() {
    let schema = parse("CREATE TABLE t (id int) PARTITION BY HASH(id) PARTITIONS 8;");
    assert!(schema.table("t").unwrap().options.is_none());
}

// ============================================================================
// Serialized shape
// ============================================================================

#[test]
fn test_serialized_table_shape() {
    let schema = parse(
        "CREATE TABLE users (
           id bigint(20) NOT NULL,
           name varchar(255) DEFAULT NULL,
           PRIMARY KEY (id));",
    );
    let value = serde_json::to_value(&schema).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "users": {
                "columns": [
                    { "field": "id", "type": "bigint(20)", "null": false, "default": "" },
                    { "field": "name", "type": "varchar(255)", "null": true, "default": "NULL" },
                ],
                "indexes": [
                    {
                        "non_unique": false,
                        "key_name": "PRIMARY",
                        "key_type": "PRIMARY",
                        "index_type": "BTREE",
                        "column_name": "id",
                    }
                ],
            }
        })
    );
}
