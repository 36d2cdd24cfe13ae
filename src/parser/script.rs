//! Script parsing and schema aggregation
//!
//! Splits a DDL script into `;`-delimited statements, classifies each one
//! and merges the extracted results into an accumulating [`Schema`]:
//! repeated CREATE TABLE statements shallow-merge per field, CREATE INDEX
//! statements append to the target table's index list, CREATE FUNCTION
//! statements append to the schema-level function list.

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::error::ParseWarning;
use crate::model::Schema;

use super::classifier::{CommandRegistry, DdlCommand};
use super::function_parser::parse_create_function;
use super::index_parser::{parse_create_index, ParsedIndex};
use super::scan;
use super::table_parser::{parse_create_table, ParsedTable};

/// Statement delimiter of the input script.
const STATEMENT_DELIMITER: char = ';';

static COMMANDS: Lazy<CommandRegistry> = Lazy::new(CommandRegistry::standard);

/// Result of one parse call: the extracted schema plus any best-effort
/// diagnostics collected along the way.
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    pub schema: Schema,
    pub warnings: Vec<ParseWarning>,
}

/// Parse a whole DDL script into a schema.
///
/// Empty fragments are skipped; unrecognized statements are dropped.
/// Semicolons inside string literals or routine bodies terminate a
/// statement early — an inherited limitation of the flat splitter.
pub fn parse_script(script: &str) -> ParseOutput {
    let mut schema = Schema::new();
    let mut warnings = Vec::new();

    for fragment in script.split(STATEMENT_DELIMITER) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let statement = scan::normalize_statement(fragment);
        match COMMANDS.classify(&statement) {
            Some(DdlCommand::CreateTable) => {
                match parse_create_table(&statement, &mut warnings) {
                    Some(table) => merge_table(&mut schema, table),
                    None => warnings.push(ParseWarning::UnmatchedStatement {
                        command: DdlCommand::CreateTable,
                        statement,
                    }),
                }
            }
            Some(DdlCommand::CreateIndex) => match parse_create_index(&statement) {
                Some(parsed) => append_index(&mut schema, parsed),
                None => warnings.push(ParseWarning::UnmatchedStatement {
                    command: DdlCommand::CreateIndex,
                    statement,
                }),
            },
            Some(DdlCommand::CreateFunction) => match parse_create_function(&statement) {
                Some(function) => schema.functions.push(function),
                None => warnings.push(ParseWarning::UnmatchedStatement {
                    command: DdlCommand::CreateFunction,
                    statement,
                }),
            },
            None => trace!(statement = %statement, "skipping unrecognized statement"),
        }
    }

    debug!(
        tables = schema.tables.len(),
        functions = schema.functions.len(),
        warnings = warnings.len(),
        "parsed DDL script"
    );

    ParseOutput { schema, warnings }
}

/// Merge a CREATE TABLE result into the schema. A later statement's fields
/// overwrite same-named fields of an existing entry but leave the others
/// untouched.
fn merge_table(schema: &mut Schema, table: ParsedTable) {
    let entry = schema.tables.entry(table.name).or_default();
    if table.columns.is_some() {
        entry.columns = table.columns;
    }
    if table.indexes.is_some() {
        entry.indexes = table.indexes;
    }
    if table.options.is_some() {
        entry.options = table.options;
    }
}

/// Append a CREATE INDEX result to the target table's index list, creating
/// the table entry and the list as needed. Never overwrites.
fn append_index(schema: &mut Schema, parsed: ParsedIndex) {
    let entry = schema.tables.entry(parsed.table).or_default();
    entry.indexes.get_or_insert_with(Vec::new).push(parsed.index);
}
