// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading readout dumps and locating their data region.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marker line that precedes the per-plane data in a readout dump
pub const HEADER_MARKER: &str = "Number of readout planes";

/// Which side of the comparison a file is on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputRole {
    /// Freshly produced output
    Actual,
    /// Stored validation file
    Reference,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputRole::Actual => write!(f, "actual"),
            InputRole::Reference => write!(f, "reference"),
        }
    }
}

/// Failure to load one of the compared files
#[derive(Debug, Error)]
#[error("failed to read {role} file '{}': {source}", .path.display())]
pub struct InputError {
    pub role: InputRole,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A text file held in memory as raw lines.
///
/// Line endings are kept on each raw line. Marker search and comparison use
/// the line with trailing whitespace removed.
#[derive(Clone, Debug)]
pub struct InputFile {
    name: String,
    lines: Vec<String>,
}

impl InputFile {
    /// Read the whole file at `path`.
    pub fn load(role: InputRole, path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path).map_err(|source| InputError {
            role,
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(path.display().to_string(), &content))
    }

    /// Build an input from in-memory text
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            lines: split_lines(text),
        }
    }

    /// Path or label the input was created from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Drop everything up to and including the first line containing `marker`.
    ///
    /// When the marker never appears the region is empty.
    pub fn trimmed(&self, marker: &str) -> TrimmedRegion<'_> {
        let header_line = self
            .lines
            .iter()
            .position(|line| strip(line).contains(marker));
        let start = header_line.map_or(self.lines.len(), |idx| idx + 1);
        TrimmedRegion {
            lines: &self.lines[start..],
            header_line,
        }
    }
}

/// The data-bearing lines that follow the header marker
#[derive(Clone, Copy, Debug)]
pub struct TrimmedRegion<'a> {
    lines: &'a [String],
    header_line: Option<usize>,
}

impl<'a> TrimmedRegion<'a> {
    /// Index of the header line in the untrimmed file, if it was found
    pub fn header_line(&self) -> Option<usize> {
        self.header_line
    }

    /// Stripped line at `index` within the region
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).map(|line| strip(line))
    }

    /// Stripped lines in order
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.lines.iter().map(|line| strip(line))
    }
}

/// Split after every `\n`, `\r\n` or lone `\r`, keeping the terminators.
fn split_lines(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let end = match bytes[i] {
            b'\n' => Some(i + 1),
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => Some(i + 2),
            b'\r' => Some(i + 1),
            _ => None,
        };
        match end {
            Some(end) => {
                lines.push(text[start..end].to_string());
                start = end;
                i = end;
            }
            None => i += 1,
        }
    }
    if start < text.len() {
        lines.push(text[start..].to_string());
    }

    lines
}

fn strip(line: &str) -> &str {
    line.trim_end()
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
