//! FILENAME: core/report-engine/src/totals.rs
//! Column totals over report rows.

use report_model::{normalize, Row};
use rustc_hash::FxHashMap;

/// Column name -> sum of its normalized cells.
pub type TotalsMap = FxHashMap<String, f64>;

/// Sums `column_names` across `rows`.
///
/// Every requested column is present in the result, starting at 0 even if no
/// row carries it. A cell that normalizes to NaN poisons its column's total;
/// that is reported as-is rather than hidden.
pub fn sum_columns<S: AsRef<str>>(rows: &[Row], column_names: &[S]) -> TotalsMap {
    let mut totals: TotalsMap = column_names
        .iter()
        .map(|name| (name.as_ref().to_string(), 0.0))
        .collect();

    for row in rows {
        for name in column_names {
            let name = name.as_ref();
            let value = row.get(name).map(normalize).unwrap_or(f64::NAN);
            if let Some(total) = totals.get_mut(name) {
                *total += value;
            }
        }
    }

    totals
}
