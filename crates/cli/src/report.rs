// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation outcome types and their console renderings.

use crate::mode::ComparisonMode;
use serde::Serialize;
use std::io::{self, Write};

/// Outcome of a validation run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum ValidationResult {
    #[default]
    Match,
    Mismatch,
}

impl ValidationResult {
    /// Numeric code printed in the summary and used as exit status
    pub fn code(&self) -> u8 {
        match self {
            ValidationResult::Match => 0,
            ValidationResult::Mismatch => 1,
        }
    }

    pub fn is_match(&self) -> bool {
        *self == ValidationResult::Match
    }
}

impl From<ValidationResult> for u8 {
    fn from(result: ValidationResult) -> Self {
        result.code()
    }
}

/// Kind of a failed line pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MismatchKind {
    /// Both lines exist but differ under the active mode
    Content,
    /// The reference region ended before this line
    MissingReference,
}

/// A line pair that failed comparison
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineMismatch {
    /// Position within the trimmed regions
    pub index: usize,
    pub actual: String,
    /// `None` when the reference had no line at `index`
    pub reference: Option<String>,
}

impl LineMismatch {
    pub fn kind(&self) -> MismatchKind {
        match self.reference {
            Some(_) => MismatchKind::Content,
            None => MismatchKind::MissingReference,
        }
    }
}

/// Everything learned from comparing two readout dumps
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub result: ValidationResult,
    pub mode: ComparisonMode,
    /// Number of line pairs examined
    pub compared: usize,
    /// Whether the line cap stopped the scan before the actual region ended
    pub truncated: bool,
    /// Name of the actual input, usually its path
    pub actual_name: String,
    pub reference_name: String,
    pub actual_header_line: Option<usize>,
    pub reference_header_line: Option<usize>,
    pub mismatches: Vec<LineMismatch>,
}

impl ValidationReport {
    /// No line pair was compared, so a match result carries no information
    pub fn is_vacuous(&self) -> bool {
        self.compared == 0
    }

    /// First position at which the reference had no line
    pub fn reference_exhausted_at(&self) -> Option<usize> {
        self.mismatches
            .iter()
            .find(|m| m.kind() == MismatchKind::MissingReference)
            .map(|m| m.index)
    }

    /// Conditions worth surfacing besides the mismatches themselves
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.is_vacuous() {
            let missing: Vec<String> = [
                ("actual", &self.actual_name, self.actual_header_line),
                ("reference", &self.reference_name, self.reference_header_line),
            ]
            .iter()
            .filter(|(_, _, line)| line.is_none())
            .map(|(role, name, _)| format!("{} file '{}'", role, name))
            .collect();

            let cause = if missing.is_empty() {
                format!(
                    "actual file '{}' has no lines after the header marker",
                    self.actual_name
                )
            } else {
                format!("header marker not found in {}", missing.join(" and "))
            };
            warnings.push(format!(
                "no lines were compared ({}); result {} does not reflect any validated content",
                cause,
                self.result.code()
            ));
        }

        if let Some(index) = self.reference_exhausted_at() {
            let missing = self
                .mismatches
                .iter()
                .filter(|m| m.kind() == MismatchKind::MissingReference)
                .count();
            warnings.push(format!(
                "reference file '{}' ended at compared line {}; {} actual line(s) had no counterpart",
                self.reference_name, index, missing
            ));
        }

        if self.truncated {
            warnings.push(format!(
                "comparison stopped after {} line(s) because of the line limit",
                self.compared
            ));
        }

        warnings
    }

    /// Write the `XX:`/`YY:` pairs followed by the summary line
    pub fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for mismatch in &self.mismatches {
            writeln!(writer, "XX:{}", mismatch.actual)?;
            writeln!(writer, "YY:{}", mismatch.reference.as_deref().unwrap_or(""))?;
        }
        writeln!(writer, "{}", summary_line(self.result))
    }

    /// Write the report as one pretty-printed JSON object
    pub fn write_json<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let output = JsonReport {
            report: self,
            warnings: self.warnings(),
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ValidationReport,
    warnings: Vec<String>,
}

/// The final line of a text report
pub fn summary_line(result: ValidationResult) -> String {
    format!("Readout validation result {}", result.code())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
