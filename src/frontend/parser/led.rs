//! Infix operators and their binding powers

use super::ast::BinOpKind;
use crate::frontend::lexer::TokenKind;

pub const BP_LOWEST: u8 = 0;
pub const BP_CMP: u8 = 10;
pub const BP_ADD: u8 = 20;
pub const BP_MUL: u8 = 30;

/// Operator and left binding power for an infix token. All binary operators
/// are left-associative.
pub fn infix_info(kind: TokenKind) -> Option<(BinOpKind, u8)> {
    let info = match kind {
        TokenKind::Lt => (BinOpKind::Lt, BP_CMP),
        TokenKind::Gt => (BinOpKind::Gt, BP_CMP),
        TokenKind::Leq => (BinOpKind::Leq, BP_CMP),
        TokenKind::Geq => (BinOpKind::Geq, BP_CMP),
        TokenKind::Neq => (BinOpKind::Neq, BP_CMP),
        TokenKind::Plus => (BinOpKind::Add, BP_ADD),
        TokenKind::Minus => (BinOpKind::Sub, BP_ADD),
        TokenKind::Asterisk => (BinOpKind::Mul, BP_MUL),
        TokenKind::Slash => (BinOpKind::Div, BP_MUL),
        TokenKind::Percent => (BinOpKind::Mod, BP_MUL),
        _ => return None,
    };
    Some(info)
}
