//! Schema element types

use serde::Serialize;

/// One parsed table: columns, indexes and table options, each present only
/// when the defining statement contributed them. A bodyless `CREATE TABLE`
/// legitimately has none of the three.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnDef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<IndexDef>>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "tableOptions")]
    pub options: Option<TableOptions>,
}

/// Column definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    /// Column name
    pub field: String,
    /// Raw type string, including any length/precision parenthetical
    /// (e.g. `bigint(20)`)
    #[serde(rename = "type")]
    pub data_type: String,
    /// True for an explicit NULL marker or a literal `NULL` default
    #[serde(rename = "null")]
    pub nullable: bool,
    /// Default value with surrounding single quotes stripped; empty string
    /// when no default was given
    pub default: String,
}

/// Index definition, covering table-level PRIMARY KEY / FOREIGN KEY
/// constructs as well as standalone CREATE INDEX statements.
///
/// Table-level constructs carry their name in `key_name`; standalone
/// indexes use `index_name`. `column_name` keeps the raw comma-joined
/// column list of the source text — use [`IndexDef::column_names`] for the
/// parsed form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexDef {
    /// False for PRIMARY and UNIQUE indexes, true otherwise
    pub non_unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_type: Option<KeyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_type: Option<CreateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_type: Option<IndexType>,
    /// Raw comma-joined column list
    pub column_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<ForeignKeyRef>,
    /// Raw trailing options text of a CREATE INDEX statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

impl IndexDef {
    /// The columns of `column_name` as a parsed, ordered list.
    pub fn column_names(&self) -> Vec<&str> {
        split_column_list(&self.column_name)
    }
}

/// Foreign key reference target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyRef {
    /// Referenced table
    pub table_name: String,
    /// Raw comma-joined referenced column list
    pub columns: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<ReferenceAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_update: Option<ReferenceAction>,
}

impl ForeignKeyRef {
    /// The referenced columns as a parsed, ordered list.
    pub fn column_names(&self) -> Vec<&str> {
        split_column_list(&self.columns)
    }
}

fn split_column_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Table options recognized after the definition list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set: Option<String>,
}

impl TableOptions {
    pub fn is_empty(&self) -> bool {
        self.engine.is_none() && self.character_set.is_none()
    }
}

/// Stored function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDef {
    pub name: String,
    /// `CURRENT_USER` or an explicit definer identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definer: Option<String>,
    /// Raw "TYPE name" parameter strings, in declaration order
    pub parameters: Vec<String>,
    /// Raw return type string
    pub return_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characteristic: Option<Characteristic>,
    /// Raw trailing SQL of the routine body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine_body: Option<String>,
}

/// Kind of a table-level key construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyType {
    #[serde(rename = "PRIMARY")]
    Primary,
    #[serde(rename = "FOREIGN")]
    Foreign,
}

/// Modifier of a standalone CREATE INDEX statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CreateType {
    #[serde(rename = "UNIQUE")]
    Unique,
    #[serde(rename = "FULLTEXT")]
    Fulltext,
    #[serde(rename = "SPATIAL")]
    Spatial,
}

/// Index storage structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndexType {
    #[serde(rename = "BTREE")]
    Btree,
    #[serde(rename = "HASH")]
    Hash,
}

impl IndexType {
    /// Parse a `USING` argument; unknown words fall back to `None` and the
    /// caller keeps the BTREE default.
    pub fn parse(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("BTREE") {
            Some(IndexType::Btree)
        } else if word.eq_ignore_ascii_case("HASH") {
            Some(IndexType::Hash)
        } else {
            None
        }
    }
}

/// Referential action of an ON DELETE / ON UPDATE clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferenceAction {
    #[serde(rename = "RESTRICT")]
    Restrict,
    #[serde(rename = "CASCADE")]
    Cascade,
    #[serde(rename = "SET NULL")]
    SetNull,
    #[serde(rename = "NO ACTION")]
    NoAction,
}

/// MySQL routine characteristic attached to a CREATE FUNCTION statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Characteristic {
    #[serde(rename = "LANGUAGE SQL")]
    LanguageSql,
    #[serde(rename = "DETERMINISTIC")]
    Deterministic,
    #[serde(rename = "NOT DETERMINISTIC")]
    NotDeterministic,
    #[serde(rename = "CONTAINS SQL")]
    ContainsSql,
    #[serde(rename = "NO SQL")]
    NoSql,
    #[serde(rename = "READS SQL DATA")]
    ReadsSqlData,
    #[serde(rename = "MODIFIES SQL DATA")]
    ModifiesSqlData,
    #[serde(rename = "SQL SECURITY DEFINER")]
    SqlSecurityDefiner,
    #[serde(rename = "SQL SECURITY INVOKER")]
    SqlSecurityInvoker,
}

impl Characteristic {
    /// Every recognized characteristic, in vocabulary order.
    pub const ALL: [Characteristic; 9] = [
        Characteristic::LanguageSql,
        Characteristic::Deterministic,
        Characteristic::NotDeterministic,
        Characteristic::ContainsSql,
        Characteristic::NoSql,
        Characteristic::ReadsSqlData,
        Characteristic::ModifiesSqlData,
        Characteristic::SqlSecurityDefiner,
        Characteristic::SqlSecurityInvoker,
    ];

    /// The SQL keyword text of this characteristic.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Characteristic::LanguageSql => "LANGUAGE SQL",
            Characteristic::Deterministic => "DETERMINISTIC",
            Characteristic::NotDeterministic => "NOT DETERMINISTIC",
            Characteristic::ContainsSql => "CONTAINS SQL",
            Characteristic::NoSql => "NO SQL",
            Characteristic::ReadsSqlData => "READS SQL DATA",
            Characteristic::ModifiesSqlData => "MODIFIES SQL DATA",
            Characteristic::SqlSecurityDefiner => "SQL SECURITY DEFINER",
            Characteristic::SqlSecurityInvoker => "SQL SECURITY INVOKER",
        }
    }
}
