//! Prefix and primary expressions

use super::ast::{Expr, UnOpKind};
use super::state::LiteralError;
use super::{Parser, MAX_NESTING_DEPTH};
use crate::frontend::lexer::{CharSource, Token, TokenKind};
use crate::util::diagnostic::ErrorCodeDefinition;

fn integer_value(text: &str) -> Result<i64, LiteralError> {
    text.parse().map_err(|_| LiteralError::Integer(text.to_string()))
}

fn float_value(text: &str) -> Result<f64, LiteralError> {
    text.parse().map_err(|_| LiteralError::Float(text.to_string()))
}

impl<C: CharSource> Parser<C> {
    /// `("-" | "+") unary | primary`
    ///
    /// Every level of parenthesized or prefixed nesting passes through here,
    /// so the depth limit is enforced in this one place.
    pub fn parse_unary_expr(&mut self) -> Option<Expr> {
        if self.depth >= MAX_NESTING_DEPTH {
            let location = self.lexer.peek_token().location();
            self.report(ErrorCodeDefinition::nesting_too_deep(MAX_NESTING_DEPTH).at(location));
            return None;
        }
        self.depth += 1;
        let expr = self.parse_prefixed_expr();
        self.depth -= 1;
        expr
    }

    fn parse_prefixed_expr(&mut self) -> Option<Expr> {
        let token = self.lexer.peek_token();
        let op = match token.kind() {
            TokenKind::Minus => UnOpKind::Neg,
            TokenKind::Plus => UnOpKind::Plus,
            _ => return self.parse_primary_expr(),
        };
        self.lexer.skip_token();
        let operand = self.parse_unary_expr()?;
        Some(Expr::UnaryOp {
            op,
            operand: Box::new(operand),
            location: token.location(),
        })
    }

    pub fn parse_primary_expr(&mut self) -> Option<Expr> {
        let token = self.lexer.peek_token();
        match token.kind() {
            TokenKind::IntegerLiteral | TokenKind::FloatLiteral | TokenKind::StringLiteral => {
                self.parse_literal_expr()
            }
            TokenKind::Identifier => self.parse_name_expr(),
            TokenKind::LeftParen => {
                self.lexer.skip_token();
                let inner = self.parse_expr()?;
                if !self.skip_expected_token(TokenKind::RightParen) {
                    return None;
                }
                Some(inner)
            }
            TokenKind::KwIf => self.parse_if_expr(),
            _ => {
                self.unexpected_token(&token);
                None
            }
        }
    }

    pub fn parse_literal_expr(&mut self) -> Option<Expr> {
        let token = self.lexer.peek_token();
        let location = token.location();
        let literal = match token.kind() {
            TokenKind::IntegerLiteral => {
                integer_value(token.text()).map(|value| Expr::IntegerLit { value, location })
            }
            TokenKind::FloatLiteral => {
                float_value(token.text()).map(|value| Expr::FloatLit { value, location })
            }
            TokenKind::StringLiteral => Ok(Expr::StringLit {
                value: token.text().to_string(),
                location,
            }),
            _ => {
                self.unexpected_token(&token);
                return None;
            }
        };
        match literal {
            Ok(expr) => {
                self.lexer.skip_token();
                Some(expr)
            }
            Err(err) => {
                self.report(ErrorCodeDefinition::invalid_literal(err.kind(), err.text()).at(location));
                None
            }
        }
    }

    /// Identifier in expression position, resolved innermost scope first
    pub fn parse_name_expr(&mut self) -> Option<Expr> {
        let token = self.expect_token(TokenKind::Identifier)?;
        self.lexer.skip_token();
        self.resolve_name(&token)
    }

    /// `if` is in the AST but has no grammar yet
    pub fn parse_if_expr(&mut self) -> Option<Expr> {
        let token = self.lexer.peek_token();
        self.report(ErrorCodeDefinition::unsupported_feature("if expressions").at(token.location()));
        None
    }

    fn resolve_name(
        &mut self,
        token: &Token,
    ) -> Option<Expr> {
        let name = token.text();
        let Some(symbol) = self.scope.lookup(name) else {
            self.report(ErrorCodeDefinition::unresolved_identifier(name).at(token.location()));
            return None;
        };
        Some(Expr::Name {
            ident: name.to_string(),
            decl: symbol.decl(),
            location: token.location(),
        })
    }
}
