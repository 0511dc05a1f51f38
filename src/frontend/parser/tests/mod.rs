//! Parser tests
//!
//! - statements: variable declarations and expression statements
//! - expressions: literals, precedence, unary operators, grouping
//! - errors: fail-fast behaviour and diagnostic wording
//! - scopes: name resolution and redeclaration


use crate::frontend::lexer::{Lexer, StrSource};
use crate::frontend::parser::ast::{BinOpKind, Expr, Stmt, TopLevelCodeDecl, UnOpKind};
use crate::frontend::parser::Parser;
use crate::util::diagnostic::Diagnostic;

pub(crate) struct Parsed {
    pub program: Option<TopLevelCodeDecl>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn codes(&self) -> Vec<&'static str> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    pub fn stmts(&self) -> &[Stmt] {
        self.program.as_ref().expect("program should parse").body().stmts()
    }
}

pub(crate) fn parse(source: &str) -> Parsed {
    let mut parser = Parser::new(Lexer::from_text("test.swift", source));
    let program = parser.parse_program();
    let (_, diagnostics) = parser.into_parts();
    Parsed {
        program,
        diagnostics: diagnostics.into_diagnostics(),
    }
}

/// Parse `source` as the expression statement following `prelude`
pub(crate) fn parse_expr_after(
    prelude: &str,
    expr: &str,
) -> Expr {
    let parsed = parse(&format!("{prelude}\n{expr};"));
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
    match parsed.stmts().last() {
        Some(Stmt::Expr(e)) => e.clone(),
        other => panic!("expected expression statement, got {other:?}"),
    }
}

pub(crate) fn parse_expr(expr: &str) -> Expr {
    parse_expr_after("", expr)
}

pub(crate) fn parser_for(source: &str) -> Parser<StrSource> {
    Parser::new(Lexer::from_text("test.swift", source))
}

/// Compact prefix rendering, e.g. `(+ 1 (* 2 x))`
pub(crate) fn shape(expr: &Expr) -> String {
    match expr {
        Expr::IntegerLit { value, .. } => value.to_string(),
        Expr::FloatLit { value, .. } => format!("{value:?}"),
        Expr::StringLit { value, .. } => format!("{value:?}"),
        Expr::Name { ident, .. } => ident.clone(),
        Expr::UnaryOp { op, operand, .. } => {
            let op = match op {
                UnOpKind::Neg => "neg",
                UnOpKind::Plus => "pos",
            };
            format!("({op} {})", shape(operand))
        }
        Expr::BinaryOp { op, lhs, rhs } => {
            let op = match op {
                BinOpKind::Add => "+",
                BinOpKind::Sub => "-",
                BinOpKind::Mul => "*",
                BinOpKind::Div => "/",
                BinOpKind::Mod => "%",
                BinOpKind::Eq => "==",
                BinOpKind::Neq => "!=",
                BinOpKind::Lt => "<",
                BinOpKind::Gt => ">",
                BinOpKind::Leq => "<=",
                BinOpKind::Geq => ">=",
            };
            format!("({op} {} {})", shape(lhs), shape(rhs))
        }
        Expr::If { .. } => "if".to_string(),
    }
}
