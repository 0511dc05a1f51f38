//! Lexical analysis
//!
//! Two stacked lookahead queues: characters from a [`CharSource`] feed the
//! [`Scanner`], and the scanner feeds the token queue inside [`Lexer`].

pub mod queue;
pub mod source;
pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

pub use queue::{from_fn, BufferedQueue, Source};
pub use source::{CharSource, ReaderSource, StrSource};
pub use tokenizer::{Lexer, LexerOptions, Scanner, DEFAULT_TAB_WIDTH};
pub use tokens::{keyword_from_str, Token, TokenKind, TokenPtr, KEYWORDS};

use tracing::debug;

/// Lex `source` to completion.
///
/// The returned tokens end with exactly one `EndOfFile`; problems found along
/// the way are in the returned collector.
pub fn tokenize(
    file_name: &str,
    source: &str,
    options: LexerOptions,
) -> (Vec<TokenPtr>, crate::util::diagnostic::ErrorCollector) {
    debug!("tokenizing {} ({} bytes)", file_name, source.len());
    let mut lexer = Lexer::new(file_name, StrSource::new(source), options);
    let tokens = lexer.tokenize_all();
    let (_, diagnostics) = lexer.into_parts();
    debug!(
        "tokenized {}: {} tokens, {} errors",
        file_name,
        tokens.len(),
        diagnostics.error_count()
    );
    (tokens, diagnostics)
}
