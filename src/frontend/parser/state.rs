//! Token expectations and parser error reporting

use thiserror::Error;

use super::Parser;
use crate::frontend::lexer::{CharSource, Token, TokenKind, TokenPtr};
use crate::util::diagnostic::ErrorCodeDefinition;

/// Literal text that does not convert to its value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LiteralError {
    #[error("invalid integer literal '{0}'")]
    Integer(String),
    #[error("invalid floating point literal '{0}'")]
    Float(String),
}

impl LiteralError {
    pub(super) fn kind(&self) -> &'static str {
        match self {
            LiteralError::Integer(_) => "integer",
            LiteralError::Float(_) => "floating point",
        }
    }

    pub(super) fn text(&self) -> &str {
        match self {
            LiteralError::Integer(text) | LiteralError::Float(text) => text,
        }
    }
}

impl<C: CharSource> Parser<C> {
    /// Next token if it is `kind`, otherwise report and return `None`.
    /// Never consumes.
    pub fn expect_token(
        &mut self,
        kind: TokenKind,
    ) -> Option<TokenPtr> {
        let token = self.lexer.peek_token();
        if token.is(kind) {
            return Some(token);
        }
        self.report(
            ErrorCodeDefinition::expected_token(&kind.to_string(), &token.kind().to_string())
                .at(token.location()),
        );
        None
    }

    /// [`Parser::expect_token`] and consume on success
    pub fn skip_expected_token(
        &mut self,
        kind: TokenKind,
    ) -> bool {
        if self.expect_token(kind).is_none() {
            return false;
        }
        self.lexer.skip_token();
        true
    }

    /// Report `token` as not allowed here
    pub fn unexpected_token(
        &mut self,
        token: &Token,
    ) {
        self.report(
            ErrorCodeDefinition::unexpected_token(&token.kind().to_string()).at(token.location()),
        );
    }
}
