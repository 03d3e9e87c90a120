// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output on stderr, kept apart from the report on stdout.
//!
//! Messages are colored only when stderr is a terminal so that captured
//! output stays byte-for-byte stable.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// How serious a diagnostic is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }

    /// ANSI foreground color code
    fn color(self) -> u8 {
        match self {
            Severity::Error => 31,
            Severity::Warning => 33,
        }
    }
}

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    print_diagnostic(Severity::Error, msg);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl Display) {
    print_diagnostic(Severity::Warning, msg);
}

fn print_diagnostic(severity: Severity, msg: impl Display) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_diagnostic(&mut stderr.lock(), severity, msg, is_tty);
}

/// Write one diagnostic line with an explicit terminal flag.
fn write_diagnostic<W: Write>(
    writer: &mut W,
    severity: Severity,
    msg: impl Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(
            writer,
            "\x1b[{}m{}: {}\x1b[0m",
            severity.color(),
            severity.label(),
            msg
        );
    } else {
        let _ = writeln!(writer, "{}: {}", severity.label(), msg);
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
