//! Parser
//!
//! Recursive descent over the token stream, with a small binding-power loop
//! for binary operators. Fail-fast: the first error inside a statement aborts
//! the whole program parse. Errors are reported into the lexer's diagnostic
//! sink, so lexical and syntactic diagnostics come out in source order.
//!
//! ```text
//! program   = stmt* EOF
//! stmt      = var_decl | expr ";"
//! var_decl  = ("let" | "var") IDENT ":" type ";"
//! type      = "Int32" | "Int64" | "Uint32" | "Uint64" | "Float" | "Double"
//! expr      = unary (binop unary)*
//! unary     = ("-" | "+") unary | primary
//! primary   = INT | FLOAT | STRING | IDENT | "(" expr ")"
//! ```

pub mod ast;
mod expr;
mod led;
mod nud;
mod state;
mod stmt;
mod type_parser;

#[cfg(test)]
mod tests;

pub use led::{infix_info, BP_ADD, BP_CMP, BP_LOWEST, BP_MUL};
pub use state::LiteralError;

use tracing::debug;

use crate::frontend::lexer::{CharSource, Lexer};
use crate::frontend::scope::Scope;
use crate::util::diagnostic::{DiagnosticBuilder, ErrorCollector};
use crate::util::location::LineTable;
use ast::TopLevelCodeDecl;

/// Deepest run of parentheses and prefix operators a single expression may nest
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parser over a [`Lexer`], resolving names through a [`Scope`] stack
#[derive(Debug)]
pub struct Parser<C: CharSource> {
    lexer: Lexer<C>,
    scope: Scope,
    /// Current `parse_unary_expr` recursion depth
    depth: usize,
}

impl<C: CharSource> Parser<C> {
    pub fn new(lexer: Lexer<C>) -> Self {
        Self {
            lexer,
            scope: Scope::new(),
            depth: 0,
        }
    }

    /// Parse a whole unit.
    ///
    /// `None` if any statement failed; the reason is in
    /// [`Parser::diagnostics`].
    pub fn parse_program(&mut self) -> Option<TopLevelCodeDecl> {
        debug!("parsing program");
        self.scope.push_scope();
        let body = self.parse_stmt_list();
        self.scope.pop_scope();
        let body = body?;
        debug!("parsed {} top-level statements", body.len());
        Some(TopLevelCodeDecl::new(body))
    }

    pub fn lexer(&mut self) -> &mut Lexer<C> {
        &mut self.lexer
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn diagnostics(&self) -> &ErrorCollector {
        self.lexer.diagnostics()
    }

    pub fn into_parts(self) -> (LineTable, ErrorCollector) {
        self.lexer.into_parts()
    }

    fn report(
        &mut self,
        builder: DiagnosticBuilder,
    ) {
        self.lexer.report(builder.build());
    }
}
