//! Library-level tests for the front end pipeline

use std::fs;
use std::io::Read;

use swiftlet::ast::{Expr, Stmt, TypeKind};
use swiftlet::frontend::lexer::TokenKind;
use swiftlet::util::config::FrontendConfig;
use swiftlet::util::diagnostic::Severity;
use swiftlet::{parse, parse_file, Frontend, FrontendError};
use tempfile::TempDir;

const PROGRAM: &str = "\
# running total
var total: Int64;
let step: Int32;
total + step * 2;
(total - 1) / step >= 10;
";

#[test]
fn test_parse_round_trip() {
    let program = parse("let x : Int32 ;").unwrap();
    match program.body().stmts() {
        [Stmt::VarDecl { ident, ty, .. }] => {
            assert_eq!(ident, "x");
            assert_eq!(ty.kind, TypeKind::Int32);
        }
        other => panic!("unexpected statements: {other:?}"),
    }
}

#[test]
fn test_parse_program() {
    let program = parse(PROGRAM).unwrap();
    assert_eq!(program.body().len(), 4);
    assert!(matches!(
        &program.body().stmts()[3],
        Stmt::Expr(Expr::BinaryOp { .. })
    ));
}

#[test]
fn test_parse_fails_on_lexical_error() {
    let err = parse("let x: Int32; $").unwrap_err();
    match err {
        FrontendError::Diagnostics(diags) => {
            assert_eq!(diags.len(), 1);
            assert_eq!(diags[0].code, "E0001");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_warnings_do_not_fail_parse() {
    let program = parse("let a: Int32; let a: Int32;").unwrap();
    assert_eq!(program.body().len(), 2);

    let output = Frontend::default().parse_str("w.swift", "let a: Int32; let a: Int32;");
    assert!(!output.has_errors());
    assert_eq!(output.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn test_error_display_names_first_error() {
    let err = parse("let x Int32;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "error[E0010]: expected `:`, but got `Int32` (1 error(s) in total)"
    );
}

#[test]
fn test_parse_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.swift");
    fs::write(&path, PROGRAM).unwrap();

    let program = parse_file(&path).unwrap();
    assert_eq!(program.body().len(), 4);
}

#[test]
fn test_parse_file_diagnostics_name_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.swift");
    fs::write(&path, "let x: Int32;\nlet y: Float\n").unwrap();

    let output = Frontend::default().parse_file(&path).unwrap();
    assert!(output.has_errors());
    let diag = &output.diagnostics[0];
    let expanded = output.line_table.expand(diag.location.unwrap()).unwrap();
    assert_eq!(expanded.file, path.display().to_string());
    assert_eq!((expanded.position.line, expanded.position.column), (3, 1));
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.swift");
    let err = Frontend::default().parse_file(&path).unwrap_err();
    match &err {
        FrontendError::Io { diagnostic, .. } => {
            assert_eq!(diagnostic.code, "E7001");
            assert_eq!(diagnostic.severity, Severity::Fatal);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().starts_with("fatal error[E7001]: cannot open"));
    assert!(std::error::Error::source(&err).is_some());
}

struct BrokenReader {
    data: &'static [u8],
}

impl Read for BrokenReader {
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> std::io::Result<usize> {
        if self.data.is_empty() {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "connection reset"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn test_read_failure_is_fatal() {
    let output = Frontend::default().parse_reader(
        "net.swift",
        BrokenReader {
            data: b"let x: Int32;",
        },
    );
    assert!(output.program.is_none());
    let last = output.diagnostics.last().unwrap();
    assert_eq!(last.code, "E7002");
    assert_eq!(last.message, "error reading 'net.swift': connection reset");
}

#[test]
fn test_reader_and_string_agree() {
    let frontend = Frontend::default();
    let from_str = frontend.parse_str("a.swift", PROGRAM);
    let from_reader = frontend.parse_reader("a.swift", PROGRAM.as_bytes());
    assert_eq!(from_str.program, from_reader.program);
    assert_eq!(from_str.diagnostics, from_reader.diagnostics);
}

#[test]
fn test_configured_tab_width() {
    let config = FrontendConfig::from_toml_str("tab_width = 2").unwrap();
    let frontend = Frontend::new(config);
    let output = frontend.tokenize_str("t.swift", "\tx");
    let position = output
        .line_table
        .expand(output.tokens[0].location())
        .unwrap()
        .position;
    assert_eq!(position.column, 3);
}

#[test]
fn test_tokenize_str() {
    let output = Frontend::default().tokenize_str("t.swift", "var a: Int32; @");
    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::KwVar,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::KwInt32,
            TokenKind::Semicolon,
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(output.diagnostics.len(), 1);
}

#[test]
fn test_diagnostics_in_source_order() {
    let output = Frontend::default().parse_str("o.swift", "@ let x: Int32; $ x; ` y;");
    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec!["E0001", "E0001", "E0001", "E0020"]);
    let locations: Vec<_> = output.diagnostics.iter().map(|d| d.location).collect();
    assert!(locations.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_tokenize_file_replaces_malformed_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.swift");
    fs::write(&path, b"var caf\xe9: Int32;\n").unwrap();

    let output = Frontend::default().tokenize_file(&path).unwrap();
    let texts: Vec<_> = output.tokens.iter().map(|t| t.text().to_string()).collect();
    assert_eq!(texts[1], "caf");
    assert_eq!(output.tokens[2].kind(), TokenKind::Colon);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, "E0001");
    assert_eq!(output.diagnostics[0].message, "unexpected character '\\u{fffd}'");
}

#[test]
fn test_tokenize_read_failure_keeps_tokens() {
    let output = Frontend::default().tokenize_reader(
        "net.swift",
        BrokenReader {
            data: b"let x",
        },
    );
    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::KwLet, TokenKind::Identifier, TokenKind::EndOfFile]
    );
    assert_eq!(output.diagnostics.last().unwrap().code, "E7002");
}

#[test]
fn test_unvalidated_tab_width_does_not_overflow() {
    let config = FrontendConfig {
        tab_width: u32::MAX,
        ..FrontendConfig::default()
    };
    let output = Frontend::new(config).parse_str("t.swift", "\t\t1;");
    assert!(output.program.is_some());
    assert!(output.diagnostics.is_empty());
}
