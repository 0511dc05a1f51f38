//! Expression entry point and the binary operator loop

use tracing::debug;

use super::ast::Expr;
use super::led::{infix_info, BP_LOWEST};
use super::Parser;
use crate::frontend::lexer::CharSource;

impl<C: CharSource> Parser<C> {
    pub fn parse_expr(&mut self) -> Option<Expr> {
        debug!("parsing expression");
        self.parse_binary_op_expr(BP_LOWEST)
    }

    /// Binary operators binding at least as tightly as `min_bp`
    pub fn parse_binary_op_expr(
        &mut self,
        min_bp: u8,
    ) -> Option<Expr> {
        let mut lhs = self.parse_unary_expr()?;
        loop {
            let token = self.lexer.peek_token();
            let Some((op, bp)) = infix_info(token.kind()) else {
                break;
            };
            if bp < min_bp {
                break;
            }
            self.lexer.skip_token();
            let rhs = self.parse_binary_op_expr(bp + 1)?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Some(lhs)
    }
}
