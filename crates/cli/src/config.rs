// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings layering: command line, environment, settings file, defaults.

use crate::compare::CompareOptions;
use crate::input::HEADER_MARKER;
use crate::mode::ComparisonMode;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output file of the readout printing macro
pub const DEFAULT_ACTUAL: &str = "print.txt";
/// Stored validation dump
pub const DEFAULT_REFERENCE: &str = "validation.txt";
/// Settings file picked up from the working directory
pub const SETTINGS_FILE_NAME: &str = "readout-validator.toml";

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file '{}': {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting: {0}")]
    Validation(String),
}

/// Report format written to stdout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `XX:`/`YY:` pairs and a summary line
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// One layer of settings; unset fields fall through to the next layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub actual: Option<PathBuf>,

    #[serde(default)]
    pub reference: Option<PathBuf>,

    #[serde(default)]
    pub mode: Option<ComparisonMode>,

    /// Compare at most this many line pairs (must be positive)
    #[serde(default)]
    pub max_lines: Option<usize>,

    #[serde(default)]
    pub header_marker: Option<String>,

    #[serde(default)]
    pub output_format: Option<OutputFormat>,

    #[serde(default)]
    pub fail_on_vacuous: Option<bool>,
}

impl SettingsFile {
    /// Load a settings file.
    ///
    /// Relative `actual`/`reference` paths are resolved against the
    /// directory containing the file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings: SettingsFile =
            toml::from_str(&content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?;

        let base_dir = path.parent().unwrap_or(Path::new("."));
        settings.actual = settings.actual.map(|p| base_dir.join(p));
        settings.reference = settings.reference.map(|p| base_dir.join(p));
        Ok(settings)
    }

    /// Look for [`SETTINGS_FILE_NAME`] in `dir`.
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(SETTINGS_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    /// Fill every unset field of `self` from `lower`.
    pub fn or(self, lower: SettingsFile) -> SettingsFile {
        SettingsFile {
            actual: self.actual.or(lower.actual),
            reference: self.reference.or(lower.reference),
            mode: self.mode.or(lower.mode),
            max_lines: self.max_lines.or(lower.max_lines),
            header_marker: self.header_marker.or(lower.header_marker),
            output_format: self.output_format.or(lower.output_format),
            fail_on_vacuous: self.fail_on_vacuous.or(lower.fail_on_vacuous),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub actual: PathBuf,
    pub reference: PathBuf,
    pub compare: CompareOptions,
    pub output_format: OutputFormat,
}

impl Settings {
    /// Apply built-in defaults to a merged layer and validate it.
    pub fn from_layer(layer: SettingsFile) -> Result<Self, ConfigError> {
        if layer.max_lines == Some(0) {
            return Err(ConfigError::Validation(
                "max_lines must be a positive integer".to_string(),
            ));
        }
        if layer.header_marker.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::Validation(
                "header_marker must not be empty".to_string(),
            ));
        }

        Ok(Self {
            actual: layer
                .actual
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ACTUAL)),
            reference: layer
                .reference
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REFERENCE)),
            compare: CompareOptions {
                mode: layer.mode.unwrap_or_default(),
                max_lines: layer.max_lines,
                header_marker: layer
                    .header_marker
                    .unwrap_or_else(|| HEADER_MARKER.to_string()),
                fail_on_vacuous: layer.fail_on_vacuous.unwrap_or(false),
            },
            output_format: layer.output_format.unwrap_or_default(),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            actual: PathBuf::from(DEFAULT_ACTUAL),
            reference: PathBuf::from(DEFAULT_REFERENCE),
            compare: CompareOptions::default(),
            output_format: OutputFormat::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
