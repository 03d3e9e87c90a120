// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Readout Validator
//!
//! Compares a freshly printed detector readout dump against a stored
//! validation dump. Only the lines after the `Number of readout planes`
//! header are compared, pair by pair, either verbatim or by their digits
//! alone.
//!
//! ```
//! use readout_validator::{compare, CompareOptions, ComparisonMode, InputFile};
//!
//! let actual = InputFile::from_text("print.txt", "Number of readout planes: 1\nPlane0 12.5\n");
//! let reference = InputFile::from_text("validation.txt", "Number of readout planes: 1\nPlane0 125\n");
//!
//! let report = compare(&actual, &reference, &CompareOptions::new(ComparisonMode::DigitsOnly));
//! assert!(report.result.is_match());
//! ```

pub mod cli;
pub mod compare;
pub mod config;
pub mod input;
pub mod mode;
pub mod output_diagnostic;
pub mod report;
pub mod run;

pub use compare::{compare, validate, CompareOptions, HISTORICAL_MAX_LINES};
pub use input::{InputError, InputFile, InputRole, TrimmedRegion, HEADER_MARKER};
pub use mode::ComparisonMode;
pub use report::{LineMismatch, MismatchKind, ValidationReport, ValidationResult};
