//! Front end pipeline
//!
//! Characters are lexed on demand while the parser pulls tokens, so a unit is
//! read, lexed and parsed in a single pass. [`Frontend`] wires the pieces
//! together from a [`FrontendConfig`].

pub mod lexer;
pub mod parser;
pub mod scope;

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::util::config::FrontendConfig;
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition, ErrorCollector};
use crate::util::location::LineTable;
use lexer::{CharSource, Lexer, LexerOptions, ReaderSource, StrSource, TokenPtr};
use parser::ast::TopLevelCodeDecl;
use parser::Parser;

/// Front end errors
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("{diagnostic}")]
    Io {
        path: PathBuf,
        diagnostic: Diagnostic,
        #[source]
        source: std::io::Error,
    },
    #[error("{}", summarize(.0))]
    Diagnostics(Vec<Diagnostic>),
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    let mut errors = diagnostics.iter().filter(|d| d.is_error());
    match errors.next() {
        Some(first) => format!("{} ({} error(s) in total)", first, errors.count() + 1),
        None => String::from("parsing failed"),
    }
}

/// Result of parsing one unit
#[derive(Debug)]
pub struct ParseOutput {
    /// `None` when parsing failed
    pub program: Option<TopLevelCodeDecl>,
    /// Lexical and syntactic diagnostics in the order they were found
    pub diagnostics: Vec<Diagnostic>,
    pub line_table: LineTable,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.program.is_none() || self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// The program, unless anything went wrong. Warnings are dropped.
    pub fn into_result(self) -> Result<TopLevelCodeDecl, FrontendError> {
        match self.program {
            Some(program) if !self.diagnostics.iter().any(Diagnostic::is_error) => Ok(program),
            _ => Err(FrontendError::Diagnostics(self.diagnostics)),
        }
    }
}

/// Result of lexing one unit to completion
#[derive(Debug)]
pub struct TokenizeOutput {
    /// Ends with exactly one `EndOfFile`
    pub tokens: Vec<TokenPtr>,
    pub diagnostics: Vec<Diagnostic>,
    pub line_table: LineTable,
}

#[derive(Debug, Default)]
pub struct Frontend {
    config: FrontendConfig,
}

impl Frontend {
    pub fn new(config: FrontendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    fn lexer_options(&self) -> LexerOptions {
        LexerOptions {
            tab_width: self.config.tab_width,
        }
    }

    /// Parse an in-memory unit named `name`
    pub fn parse_str(
        &self,
        name: &str,
        source: &str,
    ) -> ParseOutput {
        debug!("parsing {} ({} bytes)", name, source.len());
        let lexer = Lexer::new(name, StrSource::new(source), self.lexer_options());
        run_parser(name, lexer)
    }

    /// Parse a unit streamed from `reader`
    pub fn parse_reader<R: Read>(
        &self,
        name: &str,
        reader: R,
    ) -> ParseOutput {
        debug!("parsing {} from reader", name);
        let lexer = Lexer::new(name, ReaderSource::new(reader), self.lexer_options());
        run_parser(name, lexer)
    }

    /// Parse the file at `path`. Failing to open it is fatal for the unit.
    pub fn parse_file(
        &self,
        path: &Path,
    ) -> Result<ParseOutput, FrontendError> {
        let file = open_unit(path)?;
        Ok(self.parse_reader(&path.display().to_string(), file))
    }

    /// Lex an in-memory unit without parsing it
    pub fn tokenize_str(
        &self,
        name: &str,
        source: &str,
    ) -> TokenizeOutput {
        let lexer = Lexer::new(name, StrSource::new(source), self.lexer_options());
        run_tokenizer(name, lexer)
    }

    /// Lex a unit streamed from `reader` without parsing it
    pub fn tokenize_reader<R: Read>(
        &self,
        name: &str,
        reader: R,
    ) -> TokenizeOutput {
        let lexer = Lexer::new(name, ReaderSource::new(reader), self.lexer_options());
        run_tokenizer(name, lexer)
    }

    /// Lex the file at `path`. Failing to open it is fatal for the unit.
    pub fn tokenize_file(
        &self,
        path: &Path,
    ) -> Result<TokenizeOutput, FrontendError> {
        let file = open_unit(path)?;
        Ok(self.tokenize_reader(&path.display().to_string(), file))
    }
}

fn open_unit(path: &Path) -> Result<File, FrontendError> {
    File::open(path).map_err(|source| FrontendError::Io {
        path: path.to_path_buf(),
        diagnostic: ErrorCodeDefinition::cannot_open(&path.display().to_string(), &source.to_string())
            .build(),
        source,
    })
}

/// Lex to the end of input. A read error part way through is reported as
/// E7002; the tokens scanned before it are kept.
fn run_tokenizer<C: CharSource>(
    name: &str,
    mut lexer: Lexer<C>,
) -> TokenizeOutput {
    let tokens = lexer.tokenize_all();
    let read_error = lexer.char_source_mut().take_error();
    let (line_table, mut diagnostics) = lexer.into_parts();
    if let Some(err) = read_error {
        diagnostics.report(ErrorCodeDefinition::read_failed(name, &err.to_string()).build());
    }
    debug!("{}: {} tokens", name, tokens.len());
    TokenizeOutput {
        tokens,
        diagnostics: diagnostics.into_diagnostics(),
        line_table,
    }
}

/// Drive `lexer` through a full parse and collect everything it reported
fn run_parser<C: CharSource>(
    name: &str,
    lexer: Lexer<C>,
) -> ParseOutput {
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    let read_error = parser.lexer().char_source_mut().take_error();
    let (line_table, mut diagnostics) = parser.into_parts();
    let program = match read_error {
        Some(err) => {
            diagnostics.report(ErrorCodeDefinition::read_failed(name, &err.to_string()).build());
            None
        }
        None => program,
    };
    finish(program, diagnostics, line_table)
}

fn finish(
    program: Option<TopLevelCodeDecl>,
    diagnostics: ErrorCollector,
    line_table: LineTable,
) -> ParseOutput {
    debug!(
        "parse finished: {} errors, {} warnings",
        diagnostics.error_count(),
        diagnostics.warning_count()
    );
    ParseOutput {
        program,
        diagnostics: diagnostics.into_diagnostics(),
        line_table,
    }
}
