// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for binary-level tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Preamble of a readout dump up to and including the header line
pub const HEADER: &str = "Readout: Prototype_2020_06\nNumber of readout planes: 2\n";

/// A working directory holding `print.txt` and `validation.txt`
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(actual: &str, reference: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("print.txt"), actual).unwrap();
        std::fs::write(dir.path().join("validation.txt"), reference).unwrap();
        Self { dir }
    }

    /// Both files share [`HEADER`] followed by the given bodies
    pub fn with_bodies(actual: &str, reference: &str) -> Self {
        Self::new(&format!("{HEADER}{actual}"), &format!("{HEADER}{reference}"))
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.file(name), content).unwrap();
    }

    /// The validator binary running inside this workspace with a clean environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("readout-validator").unwrap();
        cmd.current_dir(self.path());
        for var in [
            "READOUT_VALIDATOR_ACTUAL",
            "READOUT_VALIDATOR_REFERENCE",
            "READOUT_VALIDATOR_MODE",
            "READOUT_VALIDATOR_MAX_LINES",
            "READOUT_VALIDATOR_CONFIG",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }
}
