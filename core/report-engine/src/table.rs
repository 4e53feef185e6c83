//! FILENAME: core/report-engine/src/table.rs
//! Table Projection - Renderable table structure for the grid component.
//!
//! The grid back-end fills the body from the report rows itself; this module
//! derives everything around the body:
//! - Header cells (one per column, with visibility)
//! - Totals footer (which columns are summed, their formatted totals)
//! - Whether the footer is shown at all

use serde::{Deserialize, Serialize};

use report_model::{format_total, ReportResponse, TotalFormat};

use crate::totals::sum_columns;

/// Label written in front of the totals.
pub const DEFAULT_TOTAL_LABEL: &str = "Total";

/// Count columns are totalled without decimals.
pub const DEFAULT_INTEGER_COLUMNS: &[&str] = &["__doc_count__"];

// ============================================================================
// OPTIONS
// ============================================================================

/// Host-side knobs for the projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Columns whose totals are formatted as integers.
    pub integer_columns: Vec<String>,

    /// Footer label.
    pub total_label: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            integer_columns: DEFAULT_INTEGER_COLUMNS.iter().map(|s| s.to_string()).collect(),
            total_label: DEFAULT_TOTAL_LABEL.to_string(),
        }
    }
}

impl TableOptions {
    pub fn total_format(&self, column_name: &str) -> TotalFormat {
        if self.integer_columns.iter().any(|c| c == column_name) {
            TotalFormat::Integer
        } else {
            TotalFormat::default()
        }
    }
}

// ============================================================================
// PROJECTION
// ============================================================================

/// One header cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub column_name: String,
    pub label: String,
    pub visible: bool,
}

/// One footer total, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalCell {
    pub column_name: String,
    pub value: String,
}

/// Everything the grid needs besides the rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableProjection {
    pub header_cells: Vec<HeaderCell>,

    /// Totals of the summable columns, in column order.
    pub totals: Vec<TotalCell>,

    pub show_footer: bool,

    pub footer_label: String,

    /// Leading columns before the first summable one; the footer label spans them.
    pub footer_label_span: usize,
}

impl TableProjection {
    /// Formatted total of a column; `None` if the column is not summed.
    pub fn total(&self, column_name: &str) -> Option<&str> {
        self.totals
            .iter()
            .find(|t| t.column_name == column_name)
            .map(|t| t.value.as_str())
    }

    pub fn summable_columns(&self) -> impl Iterator<Item = &str> {
        self.totals.iter().map(|t| t.column_name.as_str())
    }
}

/// Builds the table projection of a report.
///
/// The footer is shown only for two or more rows with at least one summable
/// column: a single row's total would repeat the row.
pub fn build_projection(response: &ReportResponse, options: &TableOptions) -> TableProjection {
    let summable = response.summable_columns();
    let totals_map = sum_columns(&response.rows, &summable);

    let header_cells = response
        .columns
        .iter()
        .map(|col| HeaderCell {
            column_name: col.name.clone(),
            label: col.verbose_name.clone(),
            visible: col.visible,
        })
        .collect();

    let totals = summable
        .iter()
        .map(|name| TotalCell {
            column_name: name.to_string(),
            value: format_total(totals_map.get(*name).copied(), options.total_format(name)),
        })
        .collect();

    let footer_label_span = response
        .columns
        .iter()
        .position(|c| c.is_summable)
        .unwrap_or(response.columns.len());

    TableProjection {
        header_cells,
        totals,
        show_footer: response.rows.len() > 1 && !summable.is_empty(),
        footer_label: options.total_label.clone(),
        footer_label_span,
    }
}
