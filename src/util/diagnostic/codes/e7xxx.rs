//! E7xxx: input unit errors

use super::{DiagnosticBuilder, ErrorCategory, ErrorCodeDefinition};
use crate::util::diagnostic::Severity;

pub static E7XXX: &[ErrorCodeDefinition] = &[
    ErrorCodeDefinition {
        code: "E7001",
        category: ErrorCategory::Io,
        severity: Severity::Fatal,
        message_template: "cannot open '{path}': {reason}",
    },
    ErrorCodeDefinition {
        code: "E7002",
        category: ErrorCategory::Io,
        severity: Severity::Fatal,
        message_template: "error reading '{path}': {reason}",
    },
];

impl ErrorCodeDefinition {
    /// E7001 the input unit cannot be opened
    pub fn cannot_open(
        path: &str,
        reason: &str,
    ) -> DiagnosticBuilder {
        Self::registered("E7001")
            .param("path", path)
            .param("reason", reason)
    }

    /// E7002 the input unit failed part way through
    pub fn read_failed(
        path: &str,
        reason: &str,
    ) -> DiagnosticBuilder {
        Self::registered("E7002")
            .param("path", path)
            .param("reason", reason)
    }
}
