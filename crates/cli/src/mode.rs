// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line normalization rules used when pairing readout lines.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use unicode_normalization::char::decompose_compatible;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// How two stripped lines are tested for equality
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum ComparisonMode {
    /// Lines must be identical after trailing whitespace is removed
    #[serde(rename = "exact")]
    ExactLine,
    /// Only the sequence of decimal digits must agree
    #[default]
    #[serde(rename = "digits-only")]
    DigitsOnly,
}

impl ComparisonMode {
    /// Name used on the command line and in settings files
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::ExactLine => "exact",
            ComparisonMode::DigitsOnly => "digits-only",
        }
    }

    /// Apply this mode's normalization to an already stripped line.
    pub fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self {
            ComparisonMode::ExactLine => Cow::Borrowed(line),
            ComparisonMode::DigitsOnly => {
                Cow::Owned(line.chars().filter(|&c| is_digit(c)).collect())
            }
        }
    }

    /// Whether two stripped lines are equivalent under this mode.
    pub fn lines_match(&self, actual: &str, reference: &str) -> bool {
        self.normalize(actual) == self.normalize(reference)
    }
}

/// Decimal digits in any script, plus single-digit compatibility forms
/// such as superscripts, subscripts and circled digits.
///
/// Fractions like `½` decompose to two digits and do not count.
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    match c.general_category() {
        GeneralCategory::DecimalNumber => true,
        GeneralCategory::OtherNumber => {
            let mut digits = 0;
            decompose_compatible(c, |d| {
                if d.general_category() == GeneralCategory::DecimalNumber {
                    digits += 1;
                }
            });
            digits == 1
        }
        _ => false,
    }
}

impl std::fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
