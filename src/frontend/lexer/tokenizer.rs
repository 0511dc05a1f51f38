//! Scanner and lexer
//!
//! [`Scanner`] turns characters into tokens one at a time and is itself the
//! [`Source`] feeding the token queue. [`Lexer`] is the public face: a
//! lookahead queue of tokens plus access to the diagnostics and line table
//! the scanner filled in.

use std::rc::Rc;

use tracing::trace;

use super::queue::{BufferedQueue, Source};
use super::source::{CharInput, CharSource, StrSource};
use super::tokens::{keyword_from_str, Token, TokenKind, TokenPtr};
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition, ErrorCollector};
use crate::util::location::{LineTable, Location};

/// Default number of columns a tab advances
pub const DEFAULT_TAB_WIDTH: u32 = 8;

/// Lexer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    pub tab_width: u32,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// Produces one token per [`Scanner::build_token`] call
#[derive(Debug)]
pub struct Scanner<C: CharSource> {
    input: BufferedQueue<CharInput<C>>,
    line_table: LineTable,
    diagnostics: ErrorCollector,
    line: u32,
    column: u32,
    tab_width: u32,
}

impl<C: CharSource> Scanner<C> {
    pub fn new(
        file_name: &str,
        chars: C,
        options: LexerOptions,
    ) -> Self {
        let mut line_table = LineTable::new();
        line_table.enter_file(file_name);
        Self {
            input: BufferedQueue::new(CharInput::new(chars)),
            line_table,
            diagnostics: ErrorCollector::new(),
            line: 1,
            column: 1,
            tab_width: options.tab_width,
        }
    }

    fn current_location(&mut self) -> Location {
        self.line_table.location_for_column(self.column)
    }

    /// Columns pin at `u32::MAX` instead of wrapping
    fn advance_column(
        &mut self,
        columns: usize,
    ) {
        let columns = u32::try_from(columns).unwrap_or(u32::MAX);
        self.column = self.column.saturating_add(columns);
    }

    /// Scan the next token.
    ///
    /// Whitespace and comments are skipped, unrecognized characters are
    /// reported and skipped. At end of input this keeps returning
    /// `EndOfFile` located just past the last character.
    pub fn build_token(&mut self) -> Token {
        loop {
            let location = self.current_location();
            let Some(ch) = self.input.peek() else {
                return Token::new(TokenKind::EndOfFile, location);
            };
            self.input.skip();

            let kind = match ch {
                '\n' => {
                    self.line = self.line.saturating_add(1);
                    self.column = 1;
                    self.line_table.start_line(self.line);
                    continue;
                }
                ' ' => {
                    self.advance_column(1);
                    continue;
                }
                '\t' => {
                    self.advance_column(self.tab_width as usize);
                    continue;
                }
                '#' => {
                    self.skip_comment();
                    continue;
                }
                '*' => TokenKind::Asterisk,
                '=' => TokenKind::Eq,
                '(' => TokenKind::LeftParen,
                ')' => TokenKind::RightParen,
                '{' => TokenKind::LeftCurly,
                '}' => TokenKind::RightCurly,
                '-' => TokenKind::Minus,
                '+' => TokenKind::Plus,
                ':' => TokenKind::Colon,
                ';' => TokenKind::Semicolon,
                '/' => TokenKind::Slash,
                '%' => TokenKind::Percent,
                '<' => self.with_optional_eq(TokenKind::Lt, TokenKind::Leq),
                '>' => self.with_optional_eq(TokenKind::Gt, TokenKind::Geq),
                '!' if self.input.peek() == Some('=') => {
                    self.input.skip();
                    self.advance_column(1);
                    TokenKind::Neq
                }
                '"' => return self.scan_string(location),
                c if c.is_ascii_alphabetic() || c == '_' => {
                    return self.scan_identifier(c, location);
                }
                c if c.is_ascii_digit() || c == '.' => return self.scan_number(c, location),
                other => {
                    self.diagnostics
                        .report(ErrorCodeDefinition::unexpected_character(other).at(location).build());
                    self.advance_column(1);
                    continue;
                }
            };
            self.advance_column(1);
            return Token::new(kind, location);
        }
    }

    /// `<` / `<=` style pairs; consumes the `=` if present
    fn with_optional_eq(
        &mut self,
        single: TokenKind,
        with_eq: TokenKind,
    ) -> TokenKind {
        if self.input.peek() == Some('=') {
            self.input.skip();
            self.advance_column(1);
            with_eq
        } else {
            single
        }
    }

    /// `#` up to, not including, the newline or end of input
    fn skip_comment(&mut self) {
        self.advance_column(1);
        while let Some(c) = self.input.peek() {
            if c == '\n' {
                break;
            }
            self.input.skip();
            self.advance_column(1);
        }
    }

    fn scan_identifier(
        &mut self,
        first: char,
        location: Location,
    ) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.input.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            text.push(c);
            self.input.skip();
        }
        self.advance_column(text.len());

        match keyword_from_str(&text) {
            Some(kind) => Token::new(kind, location),
            None => Token::with_text(TokenKind::Identifier, location, text),
        }
    }

    /// Digits with at most one `.`; a leading `.` is allowed
    fn scan_number(
        &mut self,
        first: char,
        location: Location,
    ) -> Token {
        let mut text = String::from(first);
        let mut seen_dot = first == '.';
        while let Some(c) = self.input.peek() {
            if c == '.' && !seen_dot {
                seen_dot = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.input.skip();
        }
        self.advance_column(text.len());

        let kind = if seen_dot {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        Token::with_text(kind, location, text)
    }

    /// Called after the opening quote. There are no escapes. A newline or end
    /// of input ends the literal early; the partial token is still returned.
    fn scan_string(
        &mut self,
        location: Location,
    ) -> Token {
        let mut text = String::new();
        let mut width: usize = 1;
        let mut terminated = false;
        while let Some(c) = self.input.peek() {
            if c == '\n' {
                break;
            }
            self.input.skip();
            width += 1;
            if c == '"' {
                terminated = true;
                break;
            }
            text.push(c);
        }
        self.advance_column(width);

        if !terminated {
            let here = self.current_location();
            self.diagnostics
                .report(ErrorCodeDefinition::unended_string_literal().at(here).build());
        }
        Token::with_text(TokenKind::StringLiteral, location, text)
    }
}

impl<C: CharSource> Source for Scanner<C> {
    type Item = TokenPtr;

    fn next_item(&mut self) -> TokenPtr {
        let token = self.build_token();
        trace!(kind = token.kind().name(), text = token.text(), "token");
        Rc::new(token)
    }
}

/// Token stream with arbitrary lookahead
#[derive(Debug)]
pub struct Lexer<C: CharSource> {
    tokens: BufferedQueue<Scanner<C>>,
}

impl Lexer<StrSource> {
    /// Lex an in-memory source with default options
    pub fn from_text(
        file_name: &str,
        text: &str,
    ) -> Self {
        Self::new(file_name, StrSource::new(text), LexerOptions::default())
    }
}

impl<C: CharSource> Lexer<C> {
    pub fn new(
        file_name: &str,
        chars: C,
        options: LexerOptions,
    ) -> Self {
        Self {
            tokens: BufferedQueue::new(Scanner::new(file_name, chars, options)),
        }
    }

    #[inline]
    pub fn peek_token(&mut self) -> TokenPtr {
        self.tokens.peek()
    }

    /// Token `n` positions ahead of the next one
    #[inline]
    pub fn peek_token_nth(
        &mut self,
        n: usize,
    ) -> TokenPtr {
        self.tokens.peek_nth(n)
    }

    #[inline]
    pub fn skip_token(&mut self) {
        self.tokens.skip()
    }

    /// Consume the next `n + 1` tokens
    #[inline]
    pub fn skip_token_nth(
        &mut self,
        n: usize,
    ) {
        self.tokens.skip_nth(n)
    }

    /// Consume tokens up to and including the first `EndOfFile`
    pub fn tokenize_all(&mut self) -> Vec<TokenPtr> {
        let mut out = Vec::new();
        loop {
            let token = self.peek_token();
            self.skip_token();
            let done = token.is(TokenKind::EndOfFile);
            out.push(token);
            if done {
                return out;
            }
        }
    }

    /// Report a diagnostic into the same sink the scanner uses
    pub fn report(
        &mut self,
        diagnostic: Diagnostic,
    ) {
        self.tokens.source_mut().diagnostics.report(diagnostic);
    }

    pub fn diagnostics(&self) -> &ErrorCollector {
        &self.tokens.source().diagnostics
    }

    pub fn line_table(&self) -> &LineTable {
        &self.tokens.source().line_table
    }

    /// The underlying character source, e.g. to check a reader for I/O errors
    pub fn char_source_mut(&mut self) -> &mut C {
        self.tokens.source_mut().input.source_mut().get_mut()
    }

    pub fn into_parts(self) -> (LineTable, ErrorCollector) {
        let scanner = self.tokens.into_source();
        (scanner.line_table, scanner.diagnostics)
    }
}
