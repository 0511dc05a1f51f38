//! Swiftlet
//!
//! Front end for a small Swift-like language: a lexer with unbounded
//! lookahead, a recursive-descent parser producing an AST, and the scope
//! stack used to resolve names while parsing.
//!
//! # Example
//!
//! ```
//! let program = swiftlet::parse("let x: Int32;\nx + 1;").unwrap();
//! assert_eq!(program.body().len(), 2);
//! ```

#![warn(rust_2018_idioms)]

pub mod frontend;
pub mod util;

pub use frontend::parser::ast;
pub use frontend::{Frontend, FrontendError, ParseOutput, TokenizeOutput};

use std::path::Path;

use tracing::debug;

use ast::TopLevelCodeDecl;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = "Swiftlet";

/// Parse `source` with the default configuration.
///
/// Fails if anything at error severity was reported, even if a tree could be
/// built; warnings are dropped.
pub fn parse(source: &str) -> Result<TopLevelCodeDecl, FrontendError> {
    debug!("parse called ({} bytes)", source.len());
    Frontend::default().parse_str("<input>", source).into_result()
}

/// [`parse`] for a file on disk
pub fn parse_file(path: &Path) -> Result<TopLevelCodeDecl, FrontendError> {
    Frontend::default().parse_file(path)?.into_result()
}
