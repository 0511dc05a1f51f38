//! Front-end configuration
//!
//! Loaded from `swiftlet.toml`:
//!
//! ```toml
//! tab_width = 8
//!
//! [diagnostics]
//! format = "text"   # or "json"
//! colors = false
//! show_source = true
//! show_help = true
//!
//! [log]
//! level = "warn"
//! ```
//!
//! Priority (high to low): CLI arguments, explicit `--config` file, project
//! `swiftlet.toml`, defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::util::logger::LogLevel;

/// Name of the project-level config file
pub const CONFIG_FILE_NAME: &str = "swiftlet.toml";

/// Widest tab a config file may ask for
pub const MAX_TAB_WIDTH: u32 = 64;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Columns a horizontal tab advances (flat increment, no tab stops)
    #[serde(default = "default_tab_width")]
    pub tab_width: u32,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_tab_width() -> u32 {
    8
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            diagnostics: DiagnosticsConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Diagnostic output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub format: DiagnosticFormat,
    #[serde(default)]
    pub colors: bool,
    #[serde(default = "default_true")]
    pub show_source: bool,
    /// Print the `= help:` line of diagnostics that carry one
    #[serde(default = "default_true")]
    pub show_help: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            format: DiagnosticFormat::Text,
            colors: false,
            show_source: true,
            show_help: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: tab_width must be between 1 and {max}, got {0}", max = MAX_TAB_WIDTH)]
    TabWidthOutOfRange(u32),
}

impl FrontendConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=MAX_TAB_WIDTH).contains(&self.tab_width) {
            return Err(ConfigError::TabWidthOutOfRange(self.tab_width));
        }
        Ok(self)
    }
}

/// Load configuration from an explicit file
pub fn load_config(path: &Path) -> Result<FrontendConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    FrontendConfig::from_toml_str(&content)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .validate()
}

/// Load `swiftlet.toml` from `dir`; defaults when the file does not exist
pub fn load_project_config(dir: &Path) -> Result<FrontendConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(FrontendConfig::default());
    }
    load_config(&path)
}
