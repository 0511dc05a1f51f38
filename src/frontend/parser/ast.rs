//! Abstract syntax tree
//!
//! Nodes own their children and are never modified after the parser builds
//! them. Every node carries the [`Location`] of its first token, except
//! binary operations, which take the location of their left operand.

use serde::Serialize;

use crate::util::location::Location;

/// Built-in scalar types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeKind {
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float,
    Double,
    /// Has no spelling in source yet
    Bool,
}

impl TypeKind {
    /// Source spelling, `None` for types that cannot be written
    pub fn spelling(self) -> Option<&'static str> {
        match self {
            TypeKind::Int32 => Some("Int32"),
            TypeKind::Int64 => Some("Int64"),
            TypeKind::Uint32 => Some("Uint32"),
            TypeKind::Uint64 => Some("Uint64"),
            TypeKind::Float => Some("Float"),
            TypeKind::Double => Some("Double"),
            TypeKind::Bool => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Type {
    pub kind: TypeKind,
    pub location: Location,
}

impl Type {
    pub fn new(
        kind: TypeKind,
        location: Location,
    ) -> Self {
        Self { kind, location }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    /// Equality; `=` lexes but does not parse as an operator
    Eq,
    Neq,
    Lt,
    Gt,
    Leq,
    Geq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnOpKind {
    Neg,
    Plus,
}

/// How a variable was introduced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BindingKind {
    Let,
    Var,
}

/// Declaration a resolved name refers to
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeclRef {
    pub location: Location,
    pub ty: TypeKind,
    pub binding: BindingKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    IntegerLit {
        value: i64,
        location: Location,
    },
    FloatLit {
        value: f64,
        location: Location,
    },
    StringLit {
        value: String,
        location: Location,
    },
    /// Reference to a declared variable
    Name {
        ident: String,
        decl: Option<DeclRef>,
        location: Location,
    },
    BinaryOp {
        op: BinOpKind,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    UnaryOp {
        op: UnOpKind,
        operand: Box<Expr>,
        location: Location,
    },
    /// Not produced by the parser yet
    If {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
        location: Location,
    },
}

impl Expr {
    pub fn binary(
        op: BinOpKind,
        lhs: Expr,
        rhs: Expr,
    ) -> Self {
        Expr::BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Expr::IntegerLit { location, .. }
            | Expr::FloatLit { location, .. }
            | Expr::StringLit { location, .. }
            | Expr::Name { location, .. }
            | Expr::UnaryOp { location, .. }
            | Expr::If { location, .. } => *location,
            Expr::BinaryOp { lhs, .. } => lhs.location(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /// `let x: Int32;` / `var x: Int32;`
    VarDecl {
        ident: String,
        ty: Type,
        binding: BindingKind,
        location: Location,
    },
    /// Expression followed by `;`
    Expr(Expr),
    /// Not produced by the parser yet
    While {
        condition: Expr,
        body: BraceStmt,
        location: Location,
    },
}

impl Stmt {
    pub fn location(&self) -> Location {
        match self {
            Stmt::VarDecl { location, .. } | Stmt::While { location, .. } => *location,
            Stmt::Expr(expr) => expr.location(),
        }
    }
}

/// Ordered statement list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BraceStmt {
    stmts: Vec<Stmt>,
}

impl BraceStmt {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }

    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn into_stmts(self) -> Vec<Stmt> {
        self.stmts
    }
}

/// Root of a parsed program
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopLevelCodeDecl {
    body: BraceStmt,
}

impl TopLevelCodeDecl {
    pub fn new(body: BraceStmt) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &BraceStmt {
        &self.body
    }

    pub fn into_body(self) -> BraceStmt {
        self.body
    }
}
