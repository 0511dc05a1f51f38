//! E0xxx: lexer, parser and name-resolution codes

use super::{DiagnosticBuilder, ErrorCategory, ErrorCodeDefinition};
use crate::util::diagnostic::Severity;

pub static E0XXX: &[ErrorCodeDefinition] = &[
    ErrorCodeDefinition {
        code: "E0001",
        category: ErrorCategory::Lexer,
        severity: Severity::Error,
        message_template: "unexpected character '{char}'",
    },
    ErrorCodeDefinition {
        code: "E0002",
        category: ErrorCategory::Lexer,
        severity: Severity::Error,
        message_template: "unended string literal",
    },
    ErrorCodeDefinition {
        code: "E0010",
        category: ErrorCategory::Parser,
        severity: Severity::Error,
        message_template: "expected {expected}, but got {found}",
    },
    ErrorCodeDefinition {
        code: "E0011",
        category: ErrorCategory::Parser,
        severity: Severity::Error,
        message_template: "unexpected {token}",
    },
    ErrorCodeDefinition {
        code: "E0012",
        category: ErrorCategory::Parser,
        severity: Severity::Error,
        message_template: "{feature} are not supported yet",
    },
    ErrorCodeDefinition {
        code: "E0013",
        category: ErrorCategory::Parser,
        severity: Severity::Error,
        message_template: "invalid {kind} literal '{literal}'",
    },
    ErrorCodeDefinition {
        code: "E0014",
        category: ErrorCategory::Parser,
        severity: Severity::Error,
        message_template: "expression nested too deeply (limit is {limit})",
    },
    ErrorCodeDefinition {
        code: "E0020",
        category: ErrorCategory::Semantic,
        severity: Severity::Error,
        message_template: "use of unresolved identifier '{name}'",
    },
    ErrorCodeDefinition {
        code: "W0021",
        category: ErrorCategory::Semantic,
        severity: Severity::Warning,
        message_template: "invalid redeclaration of '{name}'",
    },
];

impl ErrorCodeDefinition {
    /// E0001 unrecognized input character
    pub fn unexpected_character(ch: char) -> DiagnosticBuilder {
        let shown = if ch.is_control() || ch == char::REPLACEMENT_CHARACTER {
            format!("\\u{{{:x}}}", ch as u32)
        } else {
            ch.to_string()
        };
        Self::registered("E0001").param("char", shown)
    }

    /// E0002 string literal cut off by a newline or end of input
    pub fn unended_string_literal() -> DiagnosticBuilder {
        Self::registered("E0002")
    }

    /// E0010 a required token is missing
    pub fn expected_token(
        expected: &str,
        found: &str,
    ) -> DiagnosticBuilder {
        Self::registered("E0010")
            .param("expected", expected)
            .param("found", found)
    }

    /// E0011 token not allowed at this point
    pub fn unexpected_token(token: &str) -> DiagnosticBuilder {
        Self::registered("E0011").param("token", token)
    }

    /// E0012 grammar branch that exists in the AST but not in the parser
    pub fn unsupported_feature(feature: &str) -> DiagnosticBuilder {
        Self::registered("E0012")
            .param("feature", feature)
            .help("only variable declarations and expression statements are parsed")
    }

    /// E0013 literal text that does not convert to its value type
    pub fn invalid_literal(
        kind: &str,
        literal: &str,
    ) -> DiagnosticBuilder {
        Self::registered("E0013")
            .param("kind", kind)
            .param("literal", literal)
    }

    /// E0014 parentheses or prefix operators past the nesting limit
    pub fn nesting_too_deep(limit: usize) -> DiagnosticBuilder {
        Self::registered("E0014")
            .param("limit", limit.to_string())
            .help("split the expression with intermediate variables")
    }

    /// E0020 name not found in any enclosing scope
    pub fn unresolved_identifier(name: &str) -> DiagnosticBuilder {
        Self::registered("E0020")
            .param("name", name)
            .help(format!("declare '{name}' with `let` or `var` before this use"))
    }

    /// W0021 name declared twice in one scope
    pub fn redeclaration(name: &str) -> DiagnosticBuilder {
        Self::registered("W0021").param("name", name)
    }
}
