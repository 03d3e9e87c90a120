// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pairwise comparison of the trimmed regions of two readout dumps.

use crate::input::{InputError, InputFile, InputRole, HEADER_MARKER};
use crate::mode::ComparisonMode;
use crate::report::{LineMismatch, ValidationReport, ValidationResult};
use std::path::Path;

/// Line cap hardwired into the historical digits-only checker.
///
/// That checker tested the cap after counting, so it compared one more pair
/// than this; pass `HISTORICAL_MAX_LINES + 1` to reproduce it exactly.
pub const HISTORICAL_MAX_LINES: usize = 2700;

/// Knobs for a single comparison
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareOptions {
    pub mode: ComparisonMode,
    /// Compare at most this many line pairs
    pub max_lines: Option<usize>,
    pub header_marker: String,
    /// Report a mismatch when no lines could be compared
    pub fail_on_vacuous: bool,
}

impl CompareOptions {
    pub fn new(mode: ComparisonMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    pub fn with_header_marker(mut self, marker: impl Into<String>) -> Self {
        self.header_marker = marker.into();
        self
    }

    pub fn with_fail_on_vacuous(mut self, fail: bool) -> Self {
        self.fail_on_vacuous = fail;
        self
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            mode: ComparisonMode::default(),
            max_lines: None,
            header_marker: HEADER_MARKER.to_string(),
            fail_on_vacuous: false,
        }
    }
}

/// Load both files and compare them.
pub fn validate(
    actual_path: &Path,
    reference_path: &Path,
    options: &CompareOptions,
) -> Result<ValidationReport, InputError> {
    let actual = InputFile::load(InputRole::Actual, actual_path)?;
    let reference = InputFile::load(InputRole::Reference, reference_path)?;
    Ok(compare(&actual, &reference, options))
}

/// Compare already loaded files.
///
/// Every line of the actual region is paired with the reference line at the
/// same position. A reference that runs out early yields one mismatch per
/// unpaired actual line. The scan never stops at the first mismatch, only at
/// the end of the actual region or at `max_lines`.
pub fn compare(
    actual: &InputFile,
    reference: &InputFile,
    options: &CompareOptions,
) -> ValidationReport {
    let actual_region = actual.trimmed(&options.header_marker);
    let reference_region = reference.trimmed(&options.header_marker);

    let mut mismatches = Vec::new();
    let mut compared = 0;
    let mut truncated = false;

    for (index, actual_line) in actual_region.iter().enumerate() {
        if options.max_lines.is_some_and(|cap| compared >= cap) {
            truncated = true;
            break;
        }
        compared += 1;

        let reference_line = reference_region.get(index);
        let matched = reference_line
            .is_some_and(|reference_line| options.mode.lines_match(actual_line, reference_line));
        if !matched {
            mismatches.push(LineMismatch {
                index,
                actual: actual_line.to_string(),
                reference: reference_line.map(str::to_string),
            });
        }
    }

    let vacuous_failure = compared == 0 && options.fail_on_vacuous;
    let result = if mismatches.is_empty() && !vacuous_failure {
        ValidationResult::Match
    } else {
        ValidationResult::Mismatch
    };

    ValidationReport {
        result,
        mode: options.mode,
        compared,
        truncated,
        actual_name: actual.name().to_string(),
        reference_name: reference.name().to_string(),
        actual_header_line: actual_region.header_line(),
        reference_header_line: reference_region.header_line(),
        mismatches,
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
