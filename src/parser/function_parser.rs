//! CREATE FUNCTION extraction
//!
//! Supported syntax:
//!
//! ```sql
//! CREATE [DEFINER = CURRENT_USER|<identifier>] FUNCTION <name> (<parameters>)
//!     RETURNS <type> [<characteristic>] <routine body>
//! ```
//!
//! Parameters are kept as raw "TYPE name" strings. At most one routine
//! characteristic is recognized; whatever follows it (trimmed) becomes the
//! raw routine body.

use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::Token;

use crate::model::{Characteristic, FunctionDef};

use super::scan;
use super::token_parser::TokenParser;

/// Extract a stored function definition from a normalized CREATE FUNCTION
/// statement.
pub fn parse_create_function(statement: &str) -> Option<FunctionDef> {
    let mut p = TokenParser::new(statement)?;
    p.skip_whitespace();

    if !p.check_keyword(Keyword::CREATE) {
        return None;
    }
    p.advance();
    p.skip_whitespace();

    let mut definer = None;
    if p.check_word_ci("DEFINER") {
        p.advance();
        p.skip_whitespace();
        if !p.check_token(&Token::Eq) {
            return None;
        }
        p.advance();
        p.skip_whitespace();
        definer = Some(parse_definer(&mut p)?);
        p.skip_whitespace();
    }

    if !p.check_keyword(Keyword::FUNCTION) {
        return None;
    }
    p.advance();
    p.skip_whitespace();

    let name = p.parse_identifier()?;
    p.skip_whitespace();

    let raw_parameters = p.consume_parenthesized()?;
    let parameters: Vec<String> = scan::split_outside_brackets(&raw_parameters, ',', '(', ')')
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();
    p.skip_whitespace();

    if !p.check_keyword(Keyword::RETURNS) {
        return None;
    }
    p.advance();
    p.skip_whitespace();

    let return_type = p.parse_type_token()?;

    let rest = p.remainder();
    let rest = rest.trim();

    let (characteristic, routine_body) = match match_characteristic(rest) {
        Some((characteristic, start, len)) => {
            (Some(characteristic), rest[start + len..].trim())
        }
        None => (None, rest),
    };

    Some(FunctionDef {
        name,
        definer,
        parameters,
        return_type,
        characteristic,
        routine_body: (!routine_body.is_empty()).then(|| routine_body.to_string()),
    })
}

/// Parse the definer value: `CURRENT_USER` or an identifier, possibly a
/// composite `user@host` form captured as one whitespace-delimited run.
fn parse_definer(p: &mut TokenParser) -> Option<String> {
    let run = p.parse_run()?;
    match run.as_slice() {
        [Token::Word(word)] => Some(word.value.clone()),
        tokens => Some(tokens.iter().map(|t| t.to_string()).collect()),
    }
}

/// Find the earliest routine characteristic in the text; on a shared start
/// position the longest keyword wins, so NOT DETERMINISTIC beats
/// DETERMINISTIC. Returns the characteristic with its byte offset and
/// matched length.
fn match_characteristic(text: &str) -> Option<(Characteristic, usize, usize)> {
    let mut best: Option<(Characteristic, usize, usize)> = None;
    for candidate in Characteristic::ALL {
        let keyword = candidate.as_sql();
        if let Some(pos) = scan::find_ci(text, keyword) {
            let better = match best {
                None => true,
                Some((_, best_pos, best_len)) => {
                    pos < best_pos || (pos == best_pos && keyword.len() > best_len)
                }
            };
            if better {
                best = Some((candidate, pos, keyword.len()));
            }
        }
    }
    best
}
