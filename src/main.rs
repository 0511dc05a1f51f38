//! Swiftlet - CLI

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use swiftlet::util::config::{load_config, load_project_config, DiagnosticFormat, FrontendConfig};
use swiftlet::util::diagnostic::{
    Diagnostic, DiagnosticEmitter, EmitterConfig, JsonEmitter, TextEmitter,
};
use swiftlet::util::location::LineTable;
use swiftlet::util::logger::{self, LogLevel};
use swiftlet::{Frontend, FrontendError, NAME, VERSION};

/// Lexer and parser for a small Swift-like language
#[derive(Parser, Debug)]
#[command(name = "swiftlet")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to ./swiftlet.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse and print the syntax tree
    Parse {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse and report diagnostics only
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => load_project_config(Path::new(".")).context("Failed to load swiftlet.toml")?,
    };
    logger::init_with_level(if args.verbose {
        LogLevel::Debug
    } else {
        config.log.level
    });

    let frontend = Frontend::new(config);
    match args.command {
        Commands::Tokens { file } => {
            let output = frontend
                .tokenize_file(&file)
                .map_err(|err| open_failed(&frontend, &file, err))?;
            for token in &output.tokens {
                let position = output
                    .line_table
                    .expand(token.location())
                    .map(|e| e.position.to_string())
                    .unwrap_or_default();
                if token.text().is_empty() {
                    println!("{:<8} {}", position, token.name());
                } else {
                    println!("{:<8} {} {:?}", position, token.name(), token.text());
                }
            }
            finish(&frontend, &file, &output.diagnostics, &output.line_table)?;
        }
        Commands::Parse { file, json } => {
            let output = frontend
                .parse_file(&file)
                .map_err(|err| open_failed(&frontend, &file, err))?;
            if let Some(program) = &output.program {
                if json {
                    println!("{}", serde_json::to_string_pretty(program)?);
                } else {
                    println!("{:#?}", program);
                }
            }
            finish(&frontend, &file, &output.diagnostics, &output.line_table)?;
        }
        Commands::Check { file } => {
            let output = frontend
                .parse_file(&file)
                .map_err(|err| open_failed(&frontend, &file, err))?;
            finish(&frontend, &file, &output.diagnostics, &output.line_table)?;
            if output.program.is_none() {
                bail!("{}: parse failed", file.display());
            }
            eprintln!("{}: ok", file.display());
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}

/// Failing to open the unit is reported like any other fatal diagnostic
fn open_failed(
    frontend: &Frontend,
    file: &Path,
    err: FrontendError,
) -> anyhow::Error {
    match err {
        FrontendError::Io { diagnostic, .. } => {
            print_diagnostics(frontend.config(), &[diagnostic], &LineTable::new(), None);
            anyhow!("cannot read {}", file.display())
        }
        other => other.into(),
    }
}

/// Source text for caret snippets only. Lexing has already streamed the file,
/// so bytes that are not UTF-8 are shown as U+FFFD here.
fn snippet_source(file: &Path) -> Option<String> {
    std::fs::read(file)
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

fn print_diagnostics(
    config: &FrontendConfig,
    diagnostics: &[Diagnostic],
    lines: &LineTable,
    source: Option<&str>,
) {
    if diagnostics.is_empty() {
        return;
    }
    let rendered = match config.diagnostics.format {
        DiagnosticFormat::Json => JsonEmitter.emit_all(diagnostics, lines, source),
        DiagnosticFormat::Text => TextEmitter::with_config(EmitterConfig {
            use_colors: config.diagnostics.colors,
            show_source: config.diagnostics.show_source,
            show_help: config.diagnostics.show_help,
            ..EmitterConfig::default()
        })
        .emit_all(diagnostics, lines, source),
    };
    eprint!("{}", rendered);
    if !rendered.ends_with('\n') {
        eprintln!();
    }
}

/// Print diagnostics and fail if any of them is an error
fn finish(
    frontend: &Frontend,
    file: &Path,
    diagnostics: &[Diagnostic],
    lines: &LineTable,
) -> Result<()> {
    if !diagnostics.is_empty() {
        let source = snippet_source(file);
        print_diagnostics(frontend.config(), diagnostics, lines, source.as_deref());
    }
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        bail!("{} error(s) in {}", errors, file.display());
    }
    Ok(())
}
