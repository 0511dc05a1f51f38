//! JSON renderer, one object per diagnostic

use serde::Serialize;

use super::DiagnosticEmitter;
use crate::util::diagnostic::{Diagnostic, Severity};
use crate::util::location::LineTable;

/// Serialized form of a diagnostic with its location resolved
#[derive(Debug, Clone, Serialize)]
pub struct JsonDiagnostic<'a> {
    pub severity: Severity,
    pub code: &'a str,
    pub message: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub help: &'a str,
    pub file: Option<&'a str>,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl<'a> JsonDiagnostic<'a> {
    pub fn new(
        diagnostic: &'a Diagnostic,
        lines: &'a LineTable,
    ) -> Self {
        let expanded = diagnostic.location.and_then(|loc| lines.expand(loc));
        Self {
            severity: diagnostic.severity,
            code: diagnostic.code,
            message: &diagnostic.message,
            help: &diagnostic.help,
            file: expanded.map(|e| e.file),
            line: expanded.map(|e| e.position.line),
            column: expanded.map(|e| e.position.column),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter;

impl DiagnosticEmitter for JsonEmitter {
    fn emit(
        &self,
        diagnostic: &Diagnostic,
        lines: &LineTable,
        _source: Option<&str>,
    ) -> String {
        let mut out = serde_json::to_string(&JsonDiagnostic::new(diagnostic, lines))
            .unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }

    fn emit_all(
        &self,
        diagnostics: &[Diagnostic],
        lines: &LineTable,
        _source: Option<&str>,
    ) -> String {
        let all: Vec<_> = diagnostics
            .iter()
            .map(|d| JsonDiagnostic::new(d, lines))
            .collect();
        serde_json::to_string_pretty(&all).unwrap_or_else(|_| "[]".to_string())
    }
}
