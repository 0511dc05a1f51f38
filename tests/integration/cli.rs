//! Integration tests for the `swiftlet` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn create_test_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn swiftlet(
    cwd: &Path,
    args: &[&str],
) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swiftlet"))
        .current_dir(cwd)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_check_valid_file() {
    let dir = TempDir::new().unwrap();
    create_test_file(&dir, "ok.swift", "var a: Int32;\na * 2;\n");

    let output = swiftlet(dir.path(), &["check", "ok.swift"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ok.swift: ok"), "{stderr}");
}

#[test]
fn test_check_invalid_file() {
    let dir = TempDir::new().unwrap();
    create_test_file(&dir, "bad.swift", "let a: Int32\n");

    let output = swiftlet(dir.path(), &["check", "bad.swift"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("bad.swift:2:1: error[E0010]: expected `;`, but got end of file"),
        "{stderr}"
    );
}

#[test]
fn test_check_missing_file() {
    let dir = TempDir::new().unwrap();
    let output = swiftlet(dir.path(), &["check", "nope.swift"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fatal error[E7001]"), "{stderr}");
}

#[test]
fn test_parse_json() {
    let dir = TempDir::new().unwrap();
    create_test_file(&dir, "p.swift", "let x: Double;\n-x;\n");

    let output = swiftlet(dir.path(), &["parse", "--json", "p.swift"]);
    assert!(output.status.success());
    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let body = tree["body"].as_array().unwrap();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["VarDecl"]["ident"], "x");
    assert_eq!(body[0]["VarDecl"]["ty"]["kind"], "Double");
    assert_eq!(body[1]["Expr"]["UnaryOp"]["op"], "Neg");
}

#[test]
fn test_tokens() {
    let dir = TempDir::new().unwrap();
    create_test_file(&dir, "t.swift", "var n: Int32;");

    let output = swiftlet(dir.path(), &["tokens", "t.swift"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].ends_with("KwVar"));
    assert!(lines[1].ends_with("Identifier \"n\""));
    assert!(lines[5].ends_with("EndOfFile"));
}

#[test]
fn test_json_diagnostics_from_project_config() {
    let dir = TempDir::new().unwrap();
    create_test_file(&dir, "swiftlet.toml", "[diagnostics]\nformat = \"json\"\n");
    create_test_file(&dir, "u.swift", "y;\n");

    let output = swiftlet(dir.path(), &["check", "u.swift"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let json_end = stderr.rfind(']').unwrap();
    let diags: serde_json::Value = serde_json::from_str(&stderr[..=json_end]).unwrap();
    assert_eq!(diags[0]["code"], "E0020");
    assert_eq!(diags[0]["line"], 1);
}

#[test]
fn test_explicit_config_rejects_zero_tab_width() {
    let dir = TempDir::new().unwrap();
    let config = create_test_file(&dir, "custom.toml", "tab_width = 0\n");
    create_test_file(&dir, "a.swift", "");

    let output = swiftlet(
        dir.path(),
        &["--config", config.to_str().unwrap(), "check", "a.swift"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tab_width"), "{stderr}");
}

#[test]
fn test_check_tolerates_latin1_comment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.swift");
    fs::write(&path, b"let x: Int32;\n# caf\xe9\nx;\n").unwrap();

    let output = swiftlet(dir.path(), &["check", "latin1.swift"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "{stderr}");
    assert!(stderr.contains("latin1.swift: ok"), "{stderr}");
}

#[test]
fn test_tokens_report_malformed_byte() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.swift");
    fs::write(&path, b"x\xff;").unwrap();

    let output = swiftlet(dir.path(), &["tokens", "bad.swift"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "{stdout}");
    assert!(lines[1].ends_with("Semicolon"), "{stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("bad.swift:1:2: error[E0001]: unexpected character '\\u{fffd}'"),
        "{stderr}"
    );
}

#[test]
fn test_help_line_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    create_test_file(&dir, "u.swift", "y;\n");

    let output = swiftlet(dir.path(), &["check", "u.swift"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("= help: declare 'y'"), "{stderr}");

    create_test_file(&dir, "swiftlet.toml", "[diagnostics]\nshow_help = false\n");
    let output = swiftlet(dir.path(), &["check", "u.swift"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("= help:"), "{stderr}");
}
