//! Diagnostic output

pub mod json;
pub mod text;

pub use json::JsonEmitter;
pub use text::{EmitterConfig, TextEmitter};

use crate::util::diagnostic::Diagnostic;
use crate::util::location::LineTable;

/// Renders diagnostics for a single input unit
pub trait DiagnosticEmitter {
    fn emit(
        &self,
        diagnostic: &Diagnostic,
        lines: &LineTable,
        source: Option<&str>,
    ) -> String;

    fn emit_all(
        &self,
        diagnostics: &[Diagnostic],
        lines: &LineTable,
        source: Option<&str>,
    ) -> String {
        diagnostics
            .iter()
            .map(|d| self.emit(d, lines, source))
            .collect()
    }
}
