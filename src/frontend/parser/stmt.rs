//! Statement parsing

use tracing::debug;

use super::ast::{BindingKind, BraceStmt, DeclRef, Stmt, Type};
use super::Parser;
use crate::frontend::lexer::{CharSource, Token, TokenKind};
use crate::frontend::scope::{Symbol, SymbolKind};
use crate::util::diagnostic::ErrorCodeDefinition;

impl<C: CharSource> Parser<C> {
    /// Statements up to end of file
    pub fn parse_stmt_list(&mut self) -> Option<BraceStmt> {
        let mut stmts = Vec::new();
        while !self.lexer.peek_token().is(TokenKind::EndOfFile) {
            stmts.push(self.parse_stmt()?);
        }
        Some(BraceStmt::new(stmts))
    }

    /// Dispatch on the first token of the statement
    pub fn parse_stmt(&mut self) -> Option<Stmt> {
        debug!("parsing statement");
        let token = self.lexer.peek_token();
        match token.kind() {
            TokenKind::KwLet | TokenKind::KwVar => self.parse_var_decl_stmt(),
            TokenKind::KwWhile => self.parse_while_stmt(),
            TokenKind::Identifier
            | TokenKind::KwIf
            | TokenKind::IntegerLiteral
            | TokenKind::FloatLiteral
            | TokenKind::StringLiteral
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::Plus
            | TokenKind::Minus => self.parse_expr_stmt(),
            _ => {
                self.unexpected_token(&token);
                None
            }
        }
    }

    /// `("let" | "var") IDENT ":" type ";"`
    pub fn parse_var_decl_stmt(&mut self) -> Option<Stmt> {
        let intro = self.lexer.peek_token();
        let binding = match intro.kind() {
            TokenKind::KwLet => BindingKind::Let,
            TokenKind::KwVar => BindingKind::Var,
            _ => {
                self.unexpected_token(&intro);
                return None;
            }
        };
        self.lexer.skip_token();

        let ident = self.expect_token(TokenKind::Identifier)?;
        self.lexer.skip_token();

        if !self.skip_expected_token(TokenKind::Colon) {
            return None;
        }
        let ty = self.parse_type()?;
        if !self.skip_expected_token(TokenKind::Semicolon) {
            return None;
        }

        self.declare_variable(&ident, ty, binding, &intro);
        Some(Stmt::VarDecl {
            ident: ident.text().to_string(),
            ty,
            binding,
            location: intro.location(),
        })
    }

    /// `expr ";"`
    pub fn parse_expr_stmt(&mut self) -> Option<Stmt> {
        let expr = self.parse_expr()?;
        if !self.skip_expected_token(TokenKind::Semicolon) {
            return None;
        }
        Some(Stmt::Expr(expr))
    }

    /// `while` is in the AST but has no grammar yet
    pub fn parse_while_stmt(&mut self) -> Option<Stmt> {
        let token = self.lexer.peek_token();
        self.report(ErrorCodeDefinition::unsupported_feature("while statements").at(token.location()));
        None
    }

    fn declare_variable(
        &mut self,
        ident: &Token,
        ty: Type,
        binding: BindingKind,
        intro: &Token,
    ) {
        let name = ident.text();
        if self.scope.get_current_mapping().contains(name) {
            self.report(ErrorCodeDefinition::redeclaration(name).at(ident.location()));
        }
        let mut symbol = Symbol::new(name, SymbolKind::Variable);
        symbol.bind_decl(DeclRef {
            location: intro.location(),
            ty: ty.kind,
            binding,
        });
        self.scope.get_current_mapping().insert(symbol);
    }
}
