//! Base token parser for MySQL DDL fragments
//!
//! The construct extractors (`table_parser`, `index_parser`,
//! `function_parser`) compose a `TokenParser` and drive it with
//! check/advance steps, returning optional structured results instead of
//! relying on positional capture groups.

use sqlparser::dialect::MySqlDialect;
use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::{Token, TokenWithSpan, Tokenizer};

/// Token stream with a cursor over a single SQL fragment.
pub struct TokenParser {
    tokens: Vec<TokenWithSpan>,
    pos: usize,
}

impl TokenParser {
    /// Tokenize a fragment with the MySQL dialect. Returns `None` if
    /// tokenization fails.
    pub fn new(sql: &str) -> Option<Self> {
        let dialect = MySqlDialect {};
        let tokens = Tokenizer::new(&dialect, sql)
            .tokenize_with_location()
            .ok()?;

        Some(Self { tokens, pos: 0 })
    }

    /// Check if at end of tokens.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Get current token without consuming.
    #[inline]
    pub fn current_token(&self) -> Option<&TokenWithSpan> {
        self.tokens.get(self.pos)
    }

    /// Advance to next token.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Skip whitespace tokens.
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            if let Some(token) = self.current_token() {
                match &token.token {
                    Token::Whitespace(_) => {
                        self.advance();
                    }
                    _ => break,
                }
            } else {
                break;
            }
        }
    }

    /// Check if current token is a specific keyword.
    #[inline]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        if let Some(token) = self.current_token() {
            matches!(&token.token, Token::Word(w) if w.keyword == keyword)
        } else {
            false
        }
    }

    /// Check if current token is a word matching (case-insensitive).
    ///
    /// Used for MySQL words the tokenizer does not classify as keywords.
    #[inline]
    pub fn check_word_ci(&self, word: &str) -> bool {
        if let Some(token) = self.current_token() {
            matches!(&token.token, Token::Word(w) if w.value.eq_ignore_ascii_case(word))
        } else {
            false
        }
    }

    /// Check if current token matches a token type (by discriminant).
    #[inline]
    pub fn check_token(&self, expected: &Token) -> bool {
        if let Some(token) = self.current_token() {
            std::mem::discriminant(&token.token) == std::mem::discriminant(expected)
        } else {
            false
        }
    }

    /// Parse an identifier (plain or backtick-quoted).
    ///
    /// Returns the identifier value without quotes, advancing on success.
    pub fn parse_identifier(&mut self) -> Option<String> {
        let token = self.current_token()?;
        match &token.token {
            Token::Word(w) => {
                let name = w.value.clone();
                self.advance();
                Some(name)
            }
            _ => None,
        }
    }

    /// Parse a type token: a word plus a directly attached parenthetical
    /// (`bigint(20)`, `enum('a','b')`, `DOUBLE(10,3)`), reconstructed
    /// without internal whitespace. A parenthetical separated from the word
    /// by whitespace is left unconsumed.
    pub fn parse_type_token(&mut self) -> Option<String> {
        let token = self.current_token()?;
        let mut type_text = match &token.token {
            Token::Word(w) => w.value.clone(),
            _ => return None,
        };
        self.advance();

        if self.check_token(&Token::LParen) {
            if let Some(args) = self.consume_parenthesized_compact() {
                type_text.push('(');
                type_text.push_str(&args);
                type_text.push(')');
            }
        }

        Some(type_text)
    }

    /// Consume a whitespace-delimited run of tokens.
    ///
    /// Returns the tokens up to (not including) the next whitespace token,
    /// or `None` when already at whitespace or the end.
    pub fn parse_run(&mut self) -> Option<Vec<Token>> {
        let mut run = Vec::new();
        while !self.is_at_end() {
            let token = match self.current_token() {
                Some(t) => t.token.clone(),
                None => break,
            };
            if matches!(token, Token::Whitespace(_)) {
                break;
            }
            run.push(token);
            self.advance();
        }
        if run.is_empty() {
            None
        } else {
            Some(run)
        }
    }

    /// Consume a parenthesized span and return its inner text with original
    /// spacing. Position must be at the opening parenthesis; afterwards it
    /// is past the closing one.
    pub fn consume_parenthesized(&mut self) -> Option<String> {
        self.consume_parenthesized_inner(true)
    }

    /// Like [`consume_parenthesized`](Self::consume_parenthesized), but with
    /// whitespace tokens dropped from the captured text.
    pub fn consume_parenthesized_compact(&mut self) -> Option<String> {
        self.consume_parenthesized_inner(false)
    }

    fn consume_parenthesized_inner(&mut self, keep_whitespace: bool) -> Option<String> {
        if !self.check_token(&Token::LParen) {
            return None;
        }
        self.advance();

        let mut depth = 1usize;
        let mut text = String::new();
        while !self.is_at_end() {
            let token = match self.current_token() {
                Some(t) => t.token.clone(),
                None => break,
            };
            match &token {
                Token::LParen => depth += 1,
                Token::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        return Some(text);
                    }
                }
                _ => {}
            }
            if keep_whitespace || !matches!(token, Token::Whitespace(_)) {
                text.push_str(&token.to_string());
            }
            self.advance();
        }

        None
    }

    /// Consume and return everything from the current position to the end,
    /// as raw text.
    pub fn remainder(&mut self) -> String {
        let mut text = String::new();
        while !self.is_at_end() {
            if let Some(token) = self.current_token() {
                text.push_str(&token.token.to_string());
            }
            self.advance();
        }
        text
    }
}
