//! CREATE INDEX parsing tests

use pretty_assertions::assert_eq;

use mysql_ddl_parser::{parse, CreateType, IndexType};

// ============================================================================
// Basic statements
// ============================================================================

#[test]
fn test_simple_create_index() {
    let schema = parse("CREATE INDEX index_name ON table_name (one_column, two_column);");
    let indexes = schema.table("table_name").unwrap().indexes.as_ref().unwrap();
    assert_eq!(indexes.len(), 1);
    assert!(indexes[0].non_unique);
    assert_eq!(indexes[0].index_name.as_deref(), Some("index_name"));
    assert_eq!(indexes[0].index_type, Some(IndexType::Btree));
    assert_eq!(indexes[0].column_name, "one_column,two_column");
    assert!(indexes[0].create_type.is_none());
    assert!(indexes[0].key_name.is_none());
    assert!(indexes[0].key_type.is_none());
}

#[test]
fn test_unique_create_index() {
    let schema = parse("CREATE UNIQUE INDEX my_index ON my_table ( one_column ,  two_column );");
    let indexes = schema.table("my_table").unwrap().indexes.as_ref().unwrap();
    assert!(!indexes[0].non_unique);
    assert_eq!(indexes[0].create_type, Some(CreateType::Unique));
    assert_eq!(indexes[0].column_name, "one_column,two_column");
}

#[test]
fn test_fulltext_create_index() {
    let schema = parse("CREATE FULLTEXT INDEX my_index_llo ON my_table_2 ( One_column,Two_column );");
    let indexes = schema.table("my_table_2").unwrap().indexes.as_ref().unwrap();
    assert!(indexes[0].non_unique);
    assert_eq!(indexes[0].create_type, Some(CreateType::Fulltext));
    assert_eq!(indexes[0].column_name, "One_column,Two_column");
}

#[test]
fn test_fulltext_with_using_hash() {
    let schema = parse(
        "CREATE FULLTEXT INDEX my_index_llo USING HASH ON my_table_2 ( One_column,Two_column );",
    );
    let indexes = schema.table("my_table_2").unwrap().indexes.as_ref().unwrap();
    assert_eq!(indexes[0].index_type, Some(IndexType::Hash));
    assert_eq!(indexes[0].create_type, Some(CreateType::Fulltext));
}

#[test]
fn test_spatial_with_using_btree() {
    let schema = parse(
        "CREATE SPATIAL INDEX my_index_llo USING BTREE ON my_table_2 ( One_column,Two_column );",
    );
    let indexes = schema.table("my_table_2").unwrap().indexes.as_ref().unwrap();
    assert!(indexes[0].non_unique);
    assert_eq!(indexes[0].create_type, Some(CreateType::Spatial));
    assert_eq!(indexes[0].index_type, Some(IndexType::Btree));
}

#[test]
fn test_unique_with_trailing_options() {
    let schema = parse(
        "CREATE UNIQUE INDEX my_index_llo USING BTREE ON my_table_2 ( One_column,Two_column ) KEY_BLOCK_SIZE = 1000;",
    );
    let indexes = schema.table("my_table_2").unwrap().indexes.as_ref().unwrap();
    assert!(!indexes[0].non_unique);
    assert_eq!(indexes[0].options.as_deref(), Some("KEY_BLOCK_SIZE = 1000"));
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_two_indexes_against_same_table_append() {
    let schema = parse(
        "CREATE INDEX first_idx ON t (a);
         CREATE UNIQUE INDEX second_idx ON t (b);",
    );
    let indexes = schema.table("t").unwrap().indexes.as_ref().unwrap();
    assert_eq!(indexes.len(), 2);
    assert_eq!(indexes[0].index_name.as_deref(), Some("first_idx"));
    assert_eq!(indexes[1].index_name.as_deref(), Some("second_idx"));
}

#[test]
fn test_index_extends_table_created_earlier() {
    let schema = parse(
        "CREATE TABLE t (id int NOT NULL);
         CREATE INDEX idx ON t (id);",
    );
    let table = schema.table("t").unwrap();
    assert!(table.columns.is_some());
    assert_eq!(table.indexes.as_ref().unwrap().len(), 1);
}

// ============================================================================
// Serialized shape
// ============================================================================

#[test]
fn test_serialized_index_shape() {
    let schema = parse("CREATE UNIQUE INDEX idx ON t (a, b);");
    let value = serde_json::to_value(&schema).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "t": {
                "indexes": [
                    {
                        "non_unique": false,
                        "create_type": "UNIQUE",
                        "index_name": "idx",
                        "index_type": "BTREE",
                        "column_name": "a,b",
                    }
                ]
            }
        })
    );
}
