//! Diagnostic sink shared by the lexer and the parser

use super::{Diagnostic, Severity};

/// Collects diagnostics in report order
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic; reporting never stops the caller
    pub fn report(
        &mut self,
        diagnostic: Diagnostic,
    ) {
        match diagnostic.severity {
            Severity::Warning => tracing::debug!("{}", diagnostic),
            Severity::Error | Severity::Fatal => {
                self.error_count += 1;
                tracing::debug!("{}", diagnostic);
            }
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn has_fatal(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Fatal)
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn first_error(&self) -> Option<&Diagnostic> {
        self.diagnostics.iter().find(|d| d.is_error())
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
