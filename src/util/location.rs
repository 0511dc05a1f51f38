//! Source location tracking
//!
//! The lexer hands out [`Location`] handles instead of raw line/column pairs.
//! A [`LineTable`] owns the mapping back to `(file, line, column)`; handles are
//! allocated monotonically, so comparing two locations compares their order in
//! the source.

use serde::Serialize;
use std::fmt;

/// Opaque, totally ordered source location handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Location(u32);

impl Location {
    /// Location of synthesized nodes; orders before every real location
    pub const UNKNOWN: Location = Location(0);

    #[inline]
    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }

    /// Raw handle value
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Source position (line and column, both 1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub fn new(
        line: u32,
        column: u32,
    ) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A location resolved through the [`LineTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandedLocation<'a> {
    pub file: &'a str,
    pub position: Position,
}

impl fmt::Display for ExpandedLocation<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.position)
    }
}

#[derive(Debug, Clone, Copy)]
struct LineStart {
    file: usize,
    line: u32,
    base: u32,
}

/// Maps `(line, column)` pairs of the file being scanned to [`Location`]s.
///
/// Every registered line reserves a contiguous block of handles starting at
/// its `base`. A new line's base is placed right after the highest handle
/// given out so far, which keeps handles strictly increasing across lines and
/// files.
#[derive(Debug, Clone, Default)]
pub struct LineTable {
    files: Vec<String>,
    lines: Vec<LineStart>,
    highest: u32,
}

impl LineTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new file; scanning resumes at its line 1
    pub fn enter_file(
        &mut self,
        name: impl Into<String>,
    ) {
        self.files.push(name.into());
        self.start_line(1);
    }

    /// Register the start of `line` in the current file
    pub fn start_line(
        &mut self,
        line: u32,
    ) {
        if self.files.is_empty() {
            self.files.push(String::from("<input>"));
        }
        let base = self.highest.saturating_add(1);
        self.lines.push(LineStart {
            file: self.files.len() - 1,
            line,
            base,
        });
        self.highest = base;
    }

    /// Location of `column` (1-indexed) on the most recently started line
    pub fn location_for_column(
        &mut self,
        column: u32,
    ) -> Location {
        if self.lines.is_empty() {
            self.start_line(1);
        }
        let current = self.lines[self.lines.len() - 1];
        let raw = current.base.saturating_add(column.saturating_sub(1));
        self.highest = self.highest.max(raw);
        Location(raw)
    }

    /// Resolve a location back to its file, line and column
    pub fn expand(
        &self,
        location: Location,
    ) -> Option<ExpandedLocation<'_>> {
        if location.is_unknown() {
            return None;
        }
        let idx = self.lines.partition_point(|l| l.base <= location.0);
        let start = self.lines.get(idx.checked_sub(1)?)?;
        Some(ExpandedLocation {
            file: &self.files[start.file],
            position: Position::new(start.line, location.0 - start.base + 1),
        })
    }

    /// Name of the file currently being scanned
    pub fn current_file(&self) -> Option<&str> {
        self.files.last().map(String::as_str)
    }

    /// Number of registered line starts
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
