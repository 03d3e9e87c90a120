// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One validation run from resolved settings to rendered report.

use crate::cli::Cli;
use crate::compare::validate;
use crate::config::{ConfigError, OutputFormat, Settings, SettingsFile};
use crate::input::InputError;
use crate::output_diagnostic::print_warning;
use crate::report::ValidationReport;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Exit status for runs that never reached a comparison result
pub const EXIT_ERROR: i32 = 2;

/// Anything that prevents a run from producing a result
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

impl RunError {
    /// Process exit status for this error, distinct from a mismatch
    pub fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }
}

/// Merge the command line with the settings file, if any.
///
/// An explicit `--config` must exist; otherwise [`SettingsFile::discover`]
/// looks in `dir`.
pub fn resolve_settings(cli: &Cli, dir: &Path) -> Result<Settings, ConfigError> {
    let file = if cli.no_config {
        None
    } else if let Some(path) = &cli.config {
        Some(SettingsFile::load(path)?)
    } else {
        SettingsFile::discover(dir)?
    };

    Settings::from_layer(cli.overrides().or(file.unwrap_or_default()))
}

/// Compare the configured files and write the report to `out`.
///
/// Warnings go to stderr in every output format.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<ValidationReport, RunError> {
    let report = validate(&settings.actual, &settings.reference, &settings.compare)?;

    for warning in report.warnings() {
        print_warning(warning);
    }

    match settings.output_format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => report.write_json(out)?,
    }
    out.flush()?;

    Ok(report)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
