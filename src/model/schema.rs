//! Top-level schema representation

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{FunctionDef, TableSchema};

/// The complete schema extracted from one DDL script.
///
/// Tables are keyed by name; stored functions are collected in statement
/// order. When serialized, tables become top-level keys and the function
/// list is emitted under the reserved `"functions"` key. A table literally
/// named `functions` is shadowed by the function list in serialized output
/// — a documented limitation inherited from the historical object shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    /// Parsed tables, keyed by table name
    pub tables: BTreeMap<String, TableSchema>,
    /// Parsed stored functions, in statement order
    pub functions: Vec<FunctionDef>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    /// True when no statement contributed anything to the schema.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.functions.is_empty()
    }
}

impl Serialize for Schema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let extra = usize::from(!self.functions.is_empty());
        let mut map = serializer.serialize_map(Some(self.tables.len() + extra))?;
        for (name, table) in &self.tables {
            map.serialize_entry(name, table)?;
        }
        if !self.functions.is_empty() {
            map.serialize_entry("functions", &self.functions)?;
        }
        map.end()
    }
}
