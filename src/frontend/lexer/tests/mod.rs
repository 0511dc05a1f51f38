//! Lexer tests
//!
//! - basic: whitespace, identifiers, locations
//! - literals: integers, floats, strings
//! - operators: single and two-character operators
//! - keywords: reserved words
//! - comments: `#` comments
//! - errors: unrecognized characters, unended strings
//! - lookahead: the token queue

mod comments;

use crate::frontend::lexer::{tokenize, LexerOptions, TokenKind, TokenPtr};
use crate::util::diagnostic::ErrorCollector;
use crate::util::location::{LineTable, Position};

pub(crate) fn lex(source: &str) -> (Vec<TokenPtr>, ErrorCollector) {
    tokenize("test.swift", source, LexerOptions::default())
}

/// Kinds of all tokens, `EndOfFile` included
pub(crate) fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).0.iter().map(|t| t.kind()).collect()
}

/// Lex and resolve every token location to `(line, column)`
pub(crate) fn positions(source: &str) -> Vec<(TokenKind, u32, u32)> {
    let mut lexer = crate::frontend::lexer::Lexer::from_text("test.swift", source);
    let tokens = lexer.tokenize_all();
    let table: &LineTable = lexer.line_table();
    tokens
        .iter()
        .map(|t| {
            let Position { line, column } = table.expand(t.location()).unwrap().position;
            (t.kind(), line, column)
        })
        .collect()
}
