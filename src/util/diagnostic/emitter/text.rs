//! Plain-text renderer: `file:line:col: error[E0001]: message`

use super::DiagnosticEmitter;
use crate::util::diagnostic::{Diagnostic, Severity};
use crate::util::location::LineTable;

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// ANSI colors
    pub use_colors: bool,
    /// Echo the offending source line with a caret
    pub show_source: bool,
    pub show_help: bool,
    pub indicator: char,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            use_colors: false,
            show_source: true,
            show_help: true,
            indicator: '^',
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextEmitter {
    config: EmitterConfig,
}

impl TextEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    fn render_header(
        &self,
        diagnostic: &Diagnostic,
        lines: &LineTable,
    ) -> String {
        let prefix = match diagnostic.location.and_then(|loc| lines.expand(loc)) {
            Some(expanded) => format!("{}: ", expanded),
            None => String::new(),
        };
        let severity = diagnostic.severity.to_string();
        format!(
            "{}{}[{}]: {}\n",
            prefix,
            self.color(diagnostic.severity, &severity),
            diagnostic.code,
            diagnostic.message
        )
    }

    fn render_source_snippet(
        &self,
        diagnostic: &Diagnostic,
        lines: &LineTable,
        source: &str,
    ) -> Option<String> {
        let position = lines.expand(diagnostic.location?)?.position;
        let line = source.lines().nth(position.line.checked_sub(1)? as usize)?;
        let padding = " ".repeat(position.column.saturating_sub(1) as usize);
        Some(format!(
            "{:>4} | {}\n     | {}{}\n",
            position.line, line, padding, self.config.indicator
        ))
    }

    fn color(
        &self,
        severity: Severity,
        text: &str,
    ) -> String {
        if !self.config.use_colors {
            return text.to_string();
        }
        match severity {
            Severity::Warning => format!("\x1b[33m{}\x1b[0m", text),
            Severity::Error => format!("\x1b[31m{}\x1b[0m", text),
            Severity::Fatal => format!("\x1b[1;31m{}\x1b[0m", text),
        }
    }
}

impl DiagnosticEmitter for TextEmitter {
    fn emit(
        &self,
        diagnostic: &Diagnostic,
        lines: &LineTable,
        source: Option<&str>,
    ) -> String {
        let mut output = self.render_header(diagnostic, lines);
        if self.config.show_source {
            if let Some(snippet) =
                source.and_then(|src| self.render_source_snippet(diagnostic, lines, src))
            {
                output.push_str(&snippet);
            }
        }
        if self.config.show_help && !diagnostic.help.is_empty() {
            output.push_str("     = help: ");
            output.push_str(&diagnostic.help);
            output.push('\n');
        }
        output
    }
}
