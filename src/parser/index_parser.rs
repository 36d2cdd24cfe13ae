//! CREATE INDEX extraction
//!
//! Supported syntax:
//!
//! ```sql
//! CREATE [UNIQUE|FULLTEXT|SPATIAL] INDEX <name> [USING BTREE|HASH] ON <table> (<columns>) [<options>]
//! ```
//!
//! The column list is captured with whitespace stripped; any trailing text
//! after the list is kept raw as the index options.

use sqlparser::keywords::Keyword;

use crate::model::{CreateType, IndexDef, IndexType};

use super::token_parser::TokenParser;

/// Structured result of one standalone CREATE INDEX statement.
#[derive(Debug, Clone)]
pub struct ParsedIndex {
    /// Table the index is created on
    pub table: String,
    pub index: IndexDef,
}

/// Extract index name, target table, column list and options from a
/// normalized CREATE INDEX statement.
pub fn parse_create_index(statement: &str) -> Option<ParsedIndex> {
    let mut p = TokenParser::new(statement)?;
    p.skip_whitespace();

    if !p.check_keyword(Keyword::CREATE) {
        return None;
    }
    p.advance();
    p.skip_whitespace();

    let mut create_type = None;
    if p.check_keyword(Keyword::UNIQUE) {
        create_type = Some(CreateType::Unique);
        p.advance();
        p.skip_whitespace();
    } else if p.check_word_ci("FULLTEXT") {
        create_type = Some(CreateType::Fulltext);
        p.advance();
        p.skip_whitespace();
    } else if p.check_word_ci("SPATIAL") {
        create_type = Some(CreateType::Spatial);
        p.advance();
        p.skip_whitespace();
    }

    if !p.check_keyword(Keyword::INDEX) {
        return None;
    }
    p.advance();
    p.skip_whitespace();

    let name = p.parse_identifier()?;
    p.skip_whitespace();

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

    if !p.check_keyword(Keyword::ON) {
        return None;
    }
    p.advance();
    p.skip_whitespace();

    let table = p.parse_identifier()?;
    p.skip_whitespace();

    let column_name = p.consume_parenthesized_compact()?;

    let options = p.remainder();
    let options = options.trim();

    Some(ParsedIndex {
        table,
        index: IndexDef {
            // Only an explicitly UNIQUE index is unique; FULLTEXT and
            // SPATIAL stay non-unique.
            non_unique: create_type != Some(CreateType::Unique),
            index_name: Some(name),
            create_type,
            index_type: Some(index_type),
            column_name,
            options: (!options.is_empty()).then(|| options.to_string()),
            ..Default::default()
        },
    })
}
