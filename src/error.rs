//! Parse diagnostics

use thiserror::Error;

use crate::parser::DdlCommand;

/// Non-fatal diagnostics produced while extracting a schema.
///
/// Parsing never aborts: a construct that does not match the expected shape
/// for its class is dropped from the output and reported here instead.
/// Unrecognized statements and intentionally unmodeled table constructs
/// (UNIQUE/FULLTEXT/SPATIAL/INDEX/KEY) are skipped without a warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    #[error("column definition in table `{table}` did not match the expected shape: {definition}")]
    MalformedColumn { table: String, definition: String },

    #[error("primary key definition in table `{table}` did not match the expected shape: {definition}")]
    MalformedPrimaryKey { table: String, definition: String },

    #[error("foreign key definition in table `{table}` did not match the expected shape: {definition}")]
    MalformedForeignKey { table: String, definition: String },

    #[error("{} statement did not match the expected shape: {statement}", .command.as_sql())]
    UnmatchedStatement {
        command: DdlCommand,
        statement: String,
    },
}
