// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Readout Validator binary entry point.

use std::io;
use std::path::Path;

use clap::Parser;

use readout_validator::cli::Cli;
use readout_validator::output_diagnostic::print_error;
use readout_validator::run::{resolve_settings, run, RunError};

fn main() {
    let cli = Cli::parse();

    let outcome = resolve_settings(&cli, Path::new("."))
        .map_err(RunError::from)
        .and_then(|settings| run(&settings, &mut io::stdout().lock()));

    match outcome {
        Ok(report) => std::process::exit(i32::from(report.result.code())),
        Err(e) => {
            print_error(&e);
            std::process::exit(e.exit_code());
        }
    }
}
