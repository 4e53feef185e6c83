//! FILENAME: core/report-model/src/normalize.rs
//! Numeric interpretation of report cells.
//!
//! Two entry points:
//! - `normalize`: cell value -> f64 (grouping commas, "-" placeholders).
//! - `parse_localized_number`: text with Arabic-Indic digit glyphs -> f64.
//!
//! Unparseable content yields NaN. Callers decide whether a NaN total is
//! acceptable to display; nothing here substitutes 0 for bad input.

use crate::cell::CellValue;

/// Placeholder the report backend writes for "no value".
pub const PLACEHOLDER_DASH: &str = "-";

/// Arabic-Indic digits U+0660..=U+0669.
const ARABIC_INDIC_ZERO: u32 = 1632;
/// Extended Arabic-Indic (Persian) digits U+06F0..=U+06F9.
const EXTENDED_ARABIC_INDIC_ZERO: u32 = 1776;

/// Coerces a cell into a number.
pub fn normalize(value: &CellValue) -> f64 {
    match value {
        CellValue::Number(n) => *n,
        CellValue::Text(s) if s == PLACEHOLDER_DASH => 0.0,
        CellValue::Text(s) => parse_grouped(s),
        CellValue::Empty | CellValue::Boolean(_) => f64::NAN,
    }
}

/// Parses a string after removing grouping commas ("1,234.50" -> 1234.5).
fn parse_grouped(s: &str) -> f64 {
    let stripped: String = s.chars().filter(|c| *c != ',').collect();
    stripped.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Replaces Arabic-Indic and Extended Arabic-Indic digits with ASCII digits.
/// All other characters pass through unchanged.
pub fn transliterate_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            let code = c as u32;
            let digit = if (ARABIC_INDIC_ZERO..ARABIC_INDIC_ZERO + 10).contains(&code) {
                Some(code - ARABIC_INDIC_ZERO)
            } else if (EXTENDED_ARABIC_INDIC_ZERO..EXTENDED_ARABIC_INDIC_ZERO + 10).contains(&code) {
                Some(code - EXTENDED_ARABIC_INDIC_ZERO)
            } else {
                None
            };
            digit
                .and_then(|d| char::from_digit(d, 10))
                .unwrap_or(c)
        })
        .collect()
}

/// Parses user input that may contain localized digits.
/// Blank input counts as 0, matching how empty form fields are read.
pub fn parse_localized_number(input: &str) -> f64 {
    let ascii = transliterate_digits(input);
    let trimmed = ascii.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
