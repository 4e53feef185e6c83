//! FILENAME: core/report-model/src/number_format.rs
//! PURPOSE: Display formatting for column totals.
//! CONTEXT: Totals shown in a table footer are either integer-formatted
//! (counts) or shown with two decimals; both use thousands separators.

use serde::{Deserialize, Serialize};

/// How a total is rendered in the table footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalFormat {
    /// Thousands separators, no decimal places.
    Integer,
    /// Thousands separators and a fixed number of decimal places.
    Decimal { decimal_places: u8 },
}

impl Default for TotalFormat {
    fn default() -> Self {
        TotalFormat::Decimal { decimal_places: 2 }
    }
}

/// Format a total. An absent or non-finite total renders as an empty string.
pub fn format_total(value: Option<f64>, format: TotalFormat) -> String {
    match value {
        Some(v) if v.is_finite() => match format {
            TotalFormat::Integer => format_decimal(v, 0, true),
            TotalFormat::Decimal { decimal_places } => format_decimal(v, decimal_places, true),
        },
        _ => String::new(),
    }
}

/// Format a number with specified decimal places and optional thousands separator.
/// Ties round away from zero (`1500.5` -> `1501`).
pub fn format_decimal(value: f64, decimal_places: u8, use_thousands_separator: bool) -> String {
    let factor = 10f64.powi(decimal_places as i32);
    let scaled = value * factor;
    let mut value = if scaled.is_finite() { scaled.round() / factor } else { value };
    if value == 0.0 {
        value = 0.0; // no "-0"
    }
    let rounded = format!("{:.prec$}", value, prec = decimal_places as usize);

    if use_thousands_separator {
        add_thousands_separator(&rounded)
    } else {
        rounded
    }
}

/// Add thousands separators to a numeric string.
fn add_thousands_separator(s: &str) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (s, None),
    };

    let negative = integer_part.starts_with('-');
    let digits: Vec<char> = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    let mut result = String::with_capacity(len + len / 3 + 4);
    if negative {
        result.push('-');
    }
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}
