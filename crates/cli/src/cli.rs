// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{OutputFormat, SettingsFile};
use crate::mode::ComparisonMode;

/// Compare a readout dump against a stored validation file
#[derive(Parser, Debug, Clone)]
#[command(name = "readout-validator", version, about)]
pub struct Cli {
    /// Freshly produced readout dump [default: print.txt]
    #[arg(long, value_name = "PATH", env = "READOUT_VALIDATOR_ACTUAL")]
    pub actual: Option<PathBuf>,

    /// Stored validation dump [default: validation.txt]
    #[arg(long, value_name = "PATH", env = "READOUT_VALIDATOR_REFERENCE")]
    pub reference: Option<PathBuf>,

    /// Line comparison rule [default: digits-only]
    #[arg(long, value_enum, env = "READOUT_VALIDATOR_MODE")]
    pub mode: Option<CliComparisonMode>,

    /// Stop after comparing this many line pairs
    #[arg(
        long,
        value_name = "N",
        env = "READOUT_VALIDATOR_MAX_LINES",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_lines: Option<u64>,

    /// Text that marks the line preceding the compared region
    #[arg(long, value_name = "TEXT")]
    pub header_marker: Option<String>,

    /// Report format [default: text]
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Exit with a mismatch when no lines could be compared
    #[arg(long)]
    pub fail_on_vacuous: bool,

    /// Settings file [default: ./readout-validator.toml if present]
    #[arg(long, value_name = "PATH", env = "READOUT_VALIDATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ignore any settings file, including one named by --config
    #[arg(long)]
    pub no_config: bool,
}

/// CLI-friendly comparison mode enum
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliComparisonMode {
    /// Lines must match verbatim
    Exact,
    /// Only the digit sequences must match
    DigitsOnly,
}

impl From<CliComparisonMode> for ComparisonMode {
    fn from(mode: CliComparisonMode) -> Self {
        match mode {
            CliComparisonMode::Exact => ComparisonMode::ExactLine,
            CliComparisonMode::DigitsOnly => ComparisonMode::DigitsOnly,
        }
    }
}

impl Cli {
    /// The settings layer given on the command line and in the environment
    pub fn overrides(&self) -> SettingsFile {
        SettingsFile {
            actual: self.actual.clone(),
            reference: self.reference.clone(),
            mode: self.mode.map(ComparisonMode::from),
            max_lines: self
                .max_lines
                .map(|n| usize::try_from(n).unwrap_or(usize::MAX)),
            header_marker: self.header_marker.clone(),
            output_format: self.output_format,
            fail_on_vacuous: self.fail_on_vacuous.then_some(true),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
