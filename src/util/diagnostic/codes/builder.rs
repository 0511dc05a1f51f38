//! Template-driven diagnostic builder

use crate::util::diagnostic::{Diagnostic, Severity};
use crate::util::location::Location;

/// Builds a [`Diagnostic`] from a registered `{param}` message template
#[derive(Debug, Clone)]
pub struct DiagnosticBuilder {
    code: &'static str,
    severity: Severity,
    message_template: &'static str,
    params: Vec<(&'static str, String)>,
    help: Option<String>,
    location: Option<Location>,
}

impl DiagnosticBuilder {
    pub fn new(
        code: &'static str,
        severity: Severity,
        template: &'static str,
    ) -> Self {
        Self {
            code,
            severity,
            message_template: template,
            params: Vec::new(),
            help: None,
            location: None,
        }
    }

    /// Add a template parameter
    pub fn param(
        mut self,
        key: &'static str,
        value: impl Into<String>,
    ) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Set the location
    #[inline]
    pub fn at(
        mut self,
        location: Location,
    ) -> Self {
        self.location = Some(location);
        self
    }

    #[inline]
    pub fn help(
        mut self,
        help: impl Into<String>,
    ) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render the template and build the diagnostic.
    ///
    /// Placeholders without a matching parameter are left verbatim; debug
    /// builds assert that none are missing.
    pub fn build(self) -> Diagnostic {
        let message = self.render();
        Diagnostic::new(
            self.severity,
            self.code,
            message,
            self.help.unwrap_or_default(),
            self.location,
        )
    }

    fn render(&self) -> String {
        let mut out = String::with_capacity(self.message_template.len());
        let mut rest = self.message_template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match self.params.iter().find(|(k, _)| *k == key) {
                        Some((_, value)) => out.push_str(value),
                        None => {
                            debug_assert!(
                                false,
                                "missing template parameter '{}' for {}",
                                key, self.code
                            );
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}
