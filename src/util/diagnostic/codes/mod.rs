//! Error code registry
//!
//! Central definition of every diagnostic code the front end can emit.

pub mod e0xxx;
pub mod e7xxx;

pub use e0xxx::*;
pub use e7xxx::*;

pub mod builder;
pub use builder::DiagnosticBuilder;

use crate::util::diagnostic::Severity;

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexer,    // E000x: character-level scanning
    Parser,   // E001x: grammar
    Semantic, // E002x: name resolution
    Io,       // E7xxx: input units
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ErrorCategory::Lexer => write!(f, "Lexer"),
            ErrorCategory::Parser => write!(f, "Parser"),
            ErrorCategory::Semantic => write!(f, "Semantic"),
            ErrorCategory::Io => write!(f, "I/O"),
        }
    }
}

/// Error code definition (metadata plus message template)
#[derive(Debug, Clone, Copy)]
pub struct ErrorCodeDefinition {
    /// Code, e.g. "E0011"
    pub code: &'static str,
    pub category: ErrorCategory,
    /// Severity unless the builder overrides it
    pub severity: Severity,
    /// Message template with `{param}` placeholders
    pub message_template: &'static str,
}

use once_cell::sync::Lazy;

/// The full registry
static ERROR_CODES: Lazy<Vec<ErrorCodeDefinition>> = Lazy::new(|| {
    let mut codes: Vec<ErrorCodeDefinition> = Vec::new();
    codes.extend_from_slice(e0xxx::E0XXX);
    codes.extend_from_slice(e7xxx::E7XXX);
    codes
});

impl ErrorCodeDefinition {
    /// Look a definition up by code
    pub fn find(code: &str) -> Option<&'static Self> {
        ERROR_CODES.iter().find(|c| c.code == code)
    }

    pub fn all() -> &'static [Self] {
        &ERROR_CODES
    }

    pub fn by_category(category: ErrorCategory) -> impl Iterator<Item = &'static Self> {
        ERROR_CODES.iter().filter(move |c| c.category == category)
    }

    /// Start a builder for this code
    pub fn builder(&self) -> DiagnosticBuilder {
        DiagnosticBuilder::new(self.code, self.severity, self.message_template)
    }

    /// Builder for a registered code.
    ///
    /// Shortcut constructors only name codes from the static tables, so a
    /// failed lookup is a bug in the tables themselves.
    pub(crate) fn registered(code: &'static str) -> DiagnosticBuilder {
        match Self::find(code) {
            Some(def) => def.builder(),
            None => panic!("diagnostic code {} is not registered", code),
        }
    }
}
