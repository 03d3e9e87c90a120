// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

fn write_settings(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join(SETTINGS_FILE_NAME);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_parse_full_settings() {
    let toml_str = r#"
actual = "out/print.txt"
reference = "ref/validation.txt"
mode = "exact"
max_lines = 2701
header_marker = "Number of readout modules"
output_format = "json"
fail_on_vacuous = true
"#;
    let settings: SettingsFile = toml::from_str(toml_str).unwrap();
    assert_eq!(settings.actual, Some(PathBuf::from("out/print.txt")));
    assert_eq!(settings.mode, Some(ComparisonMode::ExactLine));
    assert_eq!(settings.max_lines, Some(2701));
    assert_eq!(settings.output_format, Some(OutputFormat::Json));
    assert_eq!(settings.fail_on_vacuous, Some(true));
}

#[test]
fn test_parse_empty_settings() {
    let settings: SettingsFile = toml::from_str("").unwrap();
    assert_eq!(settings, SettingsFile::default());
}

#[test]
fn test_parse_digits_only_mode() {
    let settings: SettingsFile = toml::from_str(r#"mode = "digits-only""#).unwrap();
    assert_eq!(settings.mode, Some(ComparisonMode::DigitsOnly));
}

#[test]
fn test_unknown_key_rejected() {
    let result: Result<SettingsFile, _> = toml::from_str("tolerance = 0.1");
    assert!(result.is_err());
}

#[test]
fn test_unknown_mode_rejected() {
    let result: Result<SettingsFile, _> = toml::from_str(r#"mode = "fuzzy""#);
    assert!(result.is_err());
}

#[test]
fn test_load_resolves_paths_against_file_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_settings(
        dir.path(),
        "actual = \"print.txt\"\nreference = \"/abs/validation.txt\"\n",
    );

    let settings = SettingsFile::load(&path).unwrap();
    assert_eq!(settings.actual, Some(dir.path().join("print.txt")));
    assert_eq!(settings.reference, Some(PathBuf::from("/abs/validation.txt")));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SettingsFile::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_load_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_settings(dir.path(), "max_lines = \"many\"\n");

    let err = SettingsFile::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
    assert!(err.to_string().contains(SETTINGS_FILE_NAME));
}

#[test]
fn test_discover_without_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(SettingsFile::discover(dir.path()).unwrap(), None);
}

#[test]
fn test_discover_with_file() {
    let dir = tempfile::tempdir().unwrap();
    write_settings(dir.path(), "mode = \"exact\"\n");

    let settings = SettingsFile::discover(dir.path()).unwrap().unwrap();
    assert_eq!(settings.mode, Some(ComparisonMode::ExactLine));
}

#[test]
fn test_higher_layer_wins() {
    let cli = SettingsFile {
        mode: Some(ComparisonMode::ExactLine),
        ..Default::default()
    };
    let file = SettingsFile {
        mode: Some(ComparisonMode::DigitsOnly),
        max_lines: Some(10),
        ..Default::default()
    };

    let merged = cli.or(file);
    assert_eq!(merged.mode, Some(ComparisonMode::ExactLine));
    assert_eq!(merged.max_lines, Some(10));
    assert_eq!(merged.actual, None);
}

#[test]
fn test_defaults() {
    let settings = Settings::from_layer(SettingsFile::default()).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.actual, PathBuf::from("print.txt"));
    assert_eq!(settings.reference, PathBuf::from("validation.txt"));
    assert_eq!(settings.compare.mode, ComparisonMode::DigitsOnly);
    assert_eq!(settings.compare.max_lines, None);
    assert_eq!(settings.compare.header_marker, HEADER_MARKER);
    assert_eq!(settings.output_format, OutputFormat::Text);
}

#[test]
fn test_zero_max_lines_rejected() {
    let layer = SettingsFile {
        max_lines: Some(0),
        ..Default::default()
    };
    let err = Settings::from_layer(layer).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_empty_header_marker_rejected() {
    let layer = SettingsFile {
        header_marker: Some(String::new()),
        ..Default::default()
    };
    assert!(Settings::from_layer(layer).is_err());
}
