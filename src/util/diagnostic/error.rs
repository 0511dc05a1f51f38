//! Diagnostic data structures
//!
//! A `Diagnostic` carries an already rendered message. Diagnostics are only
//! created through the error-code registry (`ErrorCodeDefinition` +
//! `DiagnosticBuilder`), so every code that reaches a user is registered.

use serde::Serialize;

use crate::util::location::Location;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    /// Reported; lexing and parsing continue
    Error,
    /// Halts processing of the whole input unit
    Fatal,
}

impl Severity {
    /// Errors and fatal errors both fail the unit
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error | Severity::Fatal)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal error"),
        }
    }
}

/// A rendered diagnostic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Registered code, e.g. `E0011`
    pub code: &'static str,
    pub message: String,
    /// Optional hint; empty when absent
    pub help: String,
    pub location: Option<Location>,
}

impl Diagnostic {
    /// `pub(crate)`: only `DiagnosticBuilder::build` constructs diagnostics.
    pub(crate) fn new(
        severity: Severity,
        code: &'static str,
        message: String,
        help: String,
        location: Option<Location>,
    ) -> Self {
        Self {
            severity,
            code,
            message,
            help,
            location,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
        assert!(!Severity::Warning.is_error());
        assert!(Severity::Error.is_error());
        assert!(Severity::Fatal.is_error());
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::new(
            Severity::Error,
            "E0011",
            "unexpected `;`".to_string(),
            String::new(),
            None,
        );
        assert_eq!(diag.to_string(), "error[E0011]: unexpected `;`");
    }
}
