//! Unified diagnostics
//!
//! - [`error`]: `Diagnostic` and `Severity`
//! - [`codes`]: the error-code registry and `DiagnosticBuilder`
//! - [`collect`]: `ErrorCollector`, the sink the lexer and parser report into
//! - [`emitter`]: text and JSON rendering
//!
//! ```
//! use swiftlet::util::diagnostic::{ErrorCodeDefinition, ErrorCollector};
//!
//! let mut collector = ErrorCollector::new();
//! collector.report(ErrorCodeDefinition::unexpected_character('@').build());
//! assert!(collector.has_errors());
//! ```

pub mod codes;
pub mod collect;
pub mod emitter;
pub mod error;

pub use codes::{DiagnosticBuilder, ErrorCategory, ErrorCodeDefinition};
pub use collect::ErrorCollector;
pub use emitter::{DiagnosticEmitter, EmitterConfig, JsonEmitter, TextEmitter};
pub use error::{Diagnostic, Severity};
