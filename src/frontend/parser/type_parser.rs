//! Type annotations

use super::ast::{Type, TypeKind};
use super::Parser;
use crate::frontend::lexer::{CharSource, TokenKind};

fn type_kind_for(kind: TokenKind) -> Option<TypeKind> {
    match kind {
        TokenKind::KwInt32 => Some(TypeKind::Int32),
        TokenKind::KwInt64 => Some(TypeKind::Int64),
        TokenKind::KwUint32 => Some(TypeKind::Uint32),
        TokenKind::KwUint64 => Some(TypeKind::Uint64),
        TokenKind::KwFloat => Some(TypeKind::Float),
        TokenKind::KwDouble => Some(TypeKind::Double),
        _ => None,
    }
}

impl<C: CharSource> Parser<C> {
    pub fn parse_type(&mut self) -> Option<Type> {
        let token = self.lexer.peek_token();
        let Some(kind) = type_kind_for(token.kind()) else {
            self.unexpected_token(&token);
            return None;
        };
        self.lexer.skip_token();
        Some(Type::new(kind, token.location()))
    }
}
