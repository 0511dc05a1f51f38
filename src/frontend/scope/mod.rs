//! Lexical scopes
//!
//! A stack of [`SymbolMapping`]s, innermost last. Lookups walk from the
//! innermost scope outwards, so inner declarations shadow outer ones.

pub mod symbol;

pub use symbol::{Symbol, SymbolKind, SymbolMapping, SymbolPtr};

use tracing::trace;

#[derive(Debug, Default)]
pub struct Scope {
    map_stack: Vec<SymbolMapping>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_scope(&mut self) {
        self.map_stack.push(SymbolMapping::new());
        trace!(depth = self.map_stack.len(), "push scope");
    }

    /// Discard the innermost scope and everything declared in it.
    ///
    /// # Panics
    ///
    /// If no scope is open.
    pub fn pop_scope(&mut self) -> SymbolMapping {
        let Some(popped) = self.map_stack.pop() else {
            panic!("pop_scope with no open scope");
        };
        trace!(depth = self.map_stack.len(), "pop scope");
        popped
    }

    /// Innermost mapping, the one new declarations go into.
    ///
    /// # Panics
    ///
    /// If no scope is open.
    pub fn get_current_mapping(&mut self) -> &mut SymbolMapping {
        self.map_stack
            .last_mut()
            .unwrap_or_else(|| panic!("no open scope"))
    }

    /// Innermost symbol named `name`.
    ///
    /// # Panics
    ///
    /// If no scope is open.
    pub fn lookup(
        &self,
        name: &str,
    ) -> Option<SymbolPtr> {
        assert!(!self.map_stack.is_empty(), "lookup with no open scope");
        self.map_stack.iter().rev().find_map(|mapping| mapping.get(name))
    }

    /// Number of open scopes
    pub fn depth(&self) -> usize {
        self.map_stack.len()
    }
}
