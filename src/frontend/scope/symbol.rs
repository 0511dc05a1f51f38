//! Symbols and per-scope symbol mappings

use std::rc::Rc;

use indexmap::IndexMap;

use crate::frontend::parser::ast::DeclRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Invalid,
    Variable,
    Typename,
}

/// A named entity. Only variables carry a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    name: String,
    kind: SymbolKind,
    decl: Option<DeclRef>,
}

pub type SymbolPtr = Rc<Symbol>;

impl Symbol {
    /// # Panics
    ///
    /// If `name` is empty.
    pub fn new(
        name: impl Into<String>,
        kind: SymbolKind,
    ) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "symbol name must not be empty");
        Self {
            name,
            kind,
            decl: None,
        }
    }

    /// # Panics
    ///
    /// If the symbol is not a variable.
    pub fn bind_decl(
        &mut self,
        decl: DeclRef,
    ) {
        assert_eq!(
            self.kind,
            SymbolKind::Variable,
            "only variables bind a declaration (symbol '{}')",
            self.name
        );
        self.decl = Some(decl);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn decl(&self) -> Option<DeclRef> {
        self.decl
    }
}

/// Name to symbol mapping for one scope, in insertion order
#[derive(Debug, Clone, Default)]
pub struct SymbolMapping {
    symbols: IndexMap<String, SymbolPtr>,
}

impl SymbolMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `symbol` under its name, replacing and returning any previous
    /// symbol of that name
    pub fn insert(
        &mut self,
        symbol: Symbol,
    ) -> Option<SymbolPtr> {
        self.symbols.insert(symbol.name.clone(), Rc::new(symbol))
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<SymbolPtr> {
        self.symbols.get(name).cloned()
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolPtr> {
        self.symbols.values()
    }
}
