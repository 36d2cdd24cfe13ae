//! CREATE TABLE extraction
//!
//! Splits a `CREATE TABLE` statement into its definition list, classifies
//! each definition by content (PRIMARY KEY, FOREIGN KEY, column, or an
//! unmodeled secondary-index construct) and extracts structured results.
//! Extraction is best-effort per definition: a definition that does not
//! match the expected shape for its class yields a [`ParseWarning`] instead
//! of aborting the statement.

use regex::Regex;
use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::Token;
use tracing::trace;

use crate::error::ParseWarning;
use crate::model::{
    ColumnDef, ForeignKeyRef, IndexDef, IndexType, KeyType, ReferenceAction, TableOptions,
};

use super::scan;
use super::token_parser::TokenParser;

/// Structured result of one CREATE TABLE statement.
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub name: String,
    pub columns: Option<Vec<ColumnDef>>,
    pub indexes: Option<Vec<IndexDef>>,
    pub options: Option<TableOptions>,
}

/// Extract table name, definitions and options from a normalized
/// `CREATE [TEMPORARY] TABLE [IF NOT EXISTS]` statement.
pub fn parse_create_table(statement: &str, warnings: &mut Vec<ParseWarning>) -> Option<ParsedTable> {
    let re = Regex::new(r"(?i)CREATE\s+(?:TEMPORARY\s+)?TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?`?(\w+)`?(.*)").ok()?;
    let caps = re.captures(statement)?;

    let name = caps[1].to_string();
    let rest = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    // Isolate the parenthesized definition list; everything after its
    // closing bracket is table-option territory.
    let (definition_list, mut tail) = match scan::bracketed_span(rest, '(', ')') {
        Some(span) => {
            let after = span.end + 1;
            (Some(&rest[span]), &rest[after..])
        }
        None => (None, rest),
    };

    // Partitioning is not modeled; exclude it from option scanning.
    if let Some(idx) = scan::find_ci(tail, "PARTITION BY") {
        tail = &tail[..idx];
    }

    let mut columns = Vec::new();
    let mut indexes = Vec::new();

    if let Some(inner) = definition_list {
        for definition in scan::split_outside_brackets(inner, ',', '(', ')') {
            if definition.is_empty() {
                continue;
            }
            if scan::contains_ci(definition, "PRIMARY KEY") {
                match parse_primary_key(definition) {
                    Some(index) => indexes.push(index),
                    None => warnings.push(ParseWarning::MalformedPrimaryKey {
                        table: name.clone(),
                        definition: definition.to_string(),
                    }),
                }
            } else if scan::contains_ci(definition, "FOREIGN KEY") {
                match parse_foreign_key(definition) {
                    Some(index) => indexes.push(index),
                    None => warnings.push(ParseWarning::MalformedForeignKey {
                        table: name.clone(),
                        definition: definition.to_string(),
                    }),
                }
            } else if scan::contains_ci(definition, "UNIQUE")
                || scan::contains_ci(definition, "FULLTEXT")
                || scan::contains_ci(definition, "SPATIAL")
                || scan::contains_ci(definition, "INDEX")
                || scan::contains_ci(definition, "KEY")
            {
                // Secondary-index constructs are not modeled at table level.
                trace!(table = %name, definition, "dropping unmodeled table construct");
            } else {
                match parse_column_definition(definition) {
                    Some(column) => columns.push(column),
                    None => warnings.push(ParseWarning::MalformedColumn {
                        table: name.clone(),
                        definition: definition.to_string(),
                    }),
                }
            }
        }
    }

    Some(ParsedTable {
        name,
        columns: (!columns.is_empty()).then_some(columns),
        indexes: (!indexes.is_empty()).then_some(indexes),
        options: parse_table_options(tail),
    })
}

/// Scan trailing statement text for recognized table options.
fn parse_table_options(text: &str) -> Option<TableOptions> {
    let mut options = TableOptions::default();

    if let Ok(re) = Regex::new(r"(?i)ENGINE\s*=\s*(\w+)") {
        if let Some(caps) = re.captures(text) {
            options.engine = Some(caps[1].to_string());
        }
    }
    if let Ok(re) = Regex::new(r"(?i)(?:DEFAULT\s+)?(?:CHARACTER\s+SET|CHARSET)\s*=\s*(\w+)") {
        if let Some(caps) = re.captures(text) {
            options.character_set = Some(caps[1].to_string());
        }
    }

    if options.is_empty() {
        None
    } else {
        Some(options)
    }
}

/// Parse a `[CONSTRAINT <name>] PRIMARY KEY [USING BTREE|HASH] (<columns>)`
/// definition.
fn parse_primary_key(definition: &str) -> Option<IndexDef> {
    let mut p = TokenParser::new(definition)?;
    p.skip_whitespace();

    // A name counts only when introduced by CONSTRAINT; otherwise the key
    // keeps the reserved PRIMARY name.
    let mut key_name = None;
    if p.check_keyword(Keyword::CONSTRAINT) {
        p.advance();
        p.skip_whitespace();
        key_name = p.parse_identifier();
        p.skip_whitespace();
    }

    while !p.is_at_end() && !p.check_keyword(Keyword::PRIMARY) {
        p.advance();
    }
    if !p.check_keyword(Keyword::PRIMARY) {
        return None;
    }
    p.advance();
    p.skip_whitespace();
    if !p.check_keyword(Keyword::KEY) {
        return None;
    }
    p.advance();
    p.skip_whitespace();

    let index_type = parse_using_clause(&mut p);

    let column_name = p.consume_parenthesized()?.trim().to_string();

    Some(IndexDef {
        non_unique: false,
        key_name: Some(key_name.unwrap_or_else(|| "PRIMARY".to_string())),
        key_type: Some(KeyType::Primary),
        index_type: Some(index_type),
        column_name,
        ..Default::default()
    })
}

/// Parse a `[CONSTRAINT <name>] FOREIGN KEY (<column>) REFERENCES <table>
/// (<columns>) [ON DELETE <action>] [ON UPDATE <action>]` definition. The
/// two ON clauses are independently optional and order-insensitive.
fn parse_foreign_key(definition: &str) -> Option<IndexDef> {
    let mut p = TokenParser::new(definition)?;
    p.skip_whitespace();

    let mut constraint_name = None;
    if p.check_keyword(Keyword::CONSTRAINT) {
        p.advance();
        p.skip_whitespace();
        constraint_name = p.parse_identifier();
        p.skip_whitespace();
    }

    while !p.is_at_end() && !p.check_keyword(Keyword::FOREIGN) {
        p.advance();
    }
    if !p.check_keyword(Keyword::FOREIGN) {
        return None;
    }
    p.advance();
    p.skip_whitespace();
    if !p.check_keyword(Keyword::KEY) {
        return None;
    }
    p.advance();
    p.skip_whitespace();

    let column_name = p.consume_parenthesized()?.trim().to_string();
    p.skip_whitespace();

    if !p.check_keyword(Keyword::REFERENCES) {
        return None;
    }
    p.advance();
    p.skip_whitespace();

    let table_name = p.parse_identifier()?;
    p.skip_whitespace();
    let columns = p.consume_parenthesized()?.trim().to_string();

    let mut on_delete = None;
    let mut on_update = None;
    while !p.is_at_end() {
        if p.check_keyword(Keyword::ON) {
            p.advance();
            p.skip_whitespace();
            if p.check_keyword(Keyword::DELETE) {
                p.advance();
                p.skip_whitespace();
                on_delete = parse_reference_action(&mut p);
            } else if p.check_keyword(Keyword::UPDATE) {
                p.advance();
                p.skip_whitespace();
                on_update = parse_reference_action(&mut p);
            }
        } else {
            p.advance();
        }
    }

    Some(IndexDef {
        non_unique: true,
        key_name: Some(constraint_name.unwrap_or_else(|| column_name.clone())),
        key_type: Some(KeyType::Foreign),
        column_name,
        references: Some(ForeignKeyRef {
            table_name,
            columns,
            on_delete,
            on_update,
        }),
        ..Default::default()
    })
}

/// Parse a `<field> <type> [NOT NULL|NULL] [DEFAULT <value>]` definition.
///
/// The NULL and DEFAULT clauses are recognized only directly after the
/// type; an interposed attribute (`binary`, `COMMENT`, ...) ends the match
/// and the remaining clauses are dropped.
fn parse_column_definition(definition: &str) -> Option<ColumnDef> {
    let mut p = TokenParser::new(definition)?;
    p.skip_whitespace();

    let field = p.parse_identifier()?;
    p.skip_whitespace();
    let data_type = p.parse_type_token()?;
    p.skip_whitespace();

    let mut nullable = false;
    if p.check_keyword(Keyword::NOT) {
        p.advance();
        p.skip_whitespace();
        if p.check_keyword(Keyword::NULL) {
            p.advance();
            p.skip_whitespace();
        }
    } else if p.check_keyword(Keyword::NULL) {
        nullable = true;
        p.advance();
        p.skip_whitespace();
    }

    let mut default = String::new();
    if p.check_keyword(Keyword::DEFAULT) {
        p.advance();
        p.skip_whitespace();
        if let Some(run) = p.parse_run() {
            match run.as_slice() {
                [Token::SingleQuotedString(value)] => default = value.clone(),
                [Token::Word(word)] => {
                    default = word.value.clone();
                    // A literal NULL default also marks the column nullable.
                    if word.value.eq_ignore_ascii_case("NULL") {
                        nullable = true;
                    }
                }
                tokens => default = tokens.iter().map(|t| t.to_string()).collect(),
            }
        }
    }

    Some(ColumnDef {
        field,
        data_type,
        nullable,
        default,
    })
}

/// Parse an optional `USING BTREE|HASH` clause; defaults to BTREE.
fn parse_using_clause(p: &mut TokenParser) -> IndexType {
    let mut index_type = IndexType::Btree;
    if p.check_keyword(Keyword::USING) {
        p.advance();
        p.skip_whitespace();
        if let Some(word) = p.parse_identifier() {
            if let Some(parsed) = IndexType::parse(&word) {
                index_type = parsed;
            }
        }
        p.skip_whitespace();
    }
    index_type
}

/// Parse a referential action: RESTRICT, CASCADE, SET NULL or NO ACTION.
fn parse_reference_action(p: &mut TokenParser) -> Option<ReferenceAction> {
    if p.check_keyword(Keyword::CASCADE) {
        p.advance();
        Some(ReferenceAction::Cascade)
    } else if p.check_keyword(Keyword::RESTRICT) {
        p.advance();
        Some(ReferenceAction::Restrict)
    } else if p.check_word_ci("SET") {
        p.advance();
        p.skip_whitespace();
        if p.check_keyword(Keyword::NULL) {
            p.advance();
            Some(ReferenceAction::SetNull)
        } else {
            None
        }
    } else if p.check_word_ci("NO") {
        p.advance();
        p.skip_whitespace();
        if p.check_word_ci("ACTION") {
            p.advance();
            Some(ReferenceAction::NoAction)
        } else {
            None
        }
    } else {
        None
    }
}
