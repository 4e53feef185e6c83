//! FILENAME: core/report-engine/src/chart.rs
//! Chart Data Extraction - report payload -> `{labels, series}`.
//!
//! Three data shapes are handled:
//! - Flat: one value per row, rows labeled by `title_source`.
//! - Time series: each logical field is expanded into one column per time
//!   bucket; columns point back at their field via `computation_field`.
//! - Crosstab: like time series, but the buckets are the members of a
//!   second dimension.
//!
//! Dispatch order is time series, then crosstab, then flat. A response
//! carrying both time-series and crosstab metadata is treated as a time series.
//!
//! For the bucketed shapes `plot_total` picks between one series per row and
//! one single-point series per bucket holding the column total.

use serde::{Deserialize, Serialize};

use report_model::{normalize, CellValue, ChartDescriptor, ReportResponse, Row};
use rustc_hash::FxHashSet;

use crate::text::LabelText;
use crate::totals::sum_columns;

// ============================================================================
// OUTPUT MODEL
// ============================================================================

/// One named data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Series {
            name: name.into(),
            data,
        }
    }
}

/// Library-neutral chart data, consumed by a rendering back-end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataModel {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

/// A single point of a pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiePoint {
    pub name: String,
    pub y: f64,
}

/// A pie built from one category of a `ChartDataModel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSeries {
    pub name: String,
    pub data: Vec<PiePoint>,
}

impl ChartDataModel {
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.data.is_empty())
    }

    /// Slices the model at category `index`: every series becomes one pie
    /// point. Series too short for the index contribute NaN.
    pub fn pie_slice(&self, index: usize) -> PieSeries {
        PieSeries {
            name: self.labels.get(index).cloned().unwrap_or_default(),
            data: self
                .series
                .iter()
                .map(|s| PiePoint {
                    name: s.name.clone(),
                    y: s.data.get(index).copied().unwrap_or(f64::NAN),
                })
                .collect(),
        }
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Which transform applies to a (response, chart) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataShape {
    Flat,
    TimeSeries,
    Crosstab,
}

impl DataShape {
    pub fn of(response: &ReportResponse, chart: &ChartDescriptor) -> Self {
        if chart.time_series_support && response.metadata.is_time_series() {
            DataShape::TimeSeries
        } else if response.metadata.is_crosstab() {
            DataShape::Crosstab
        } else {
            DataShape::Flat
        }
    }
}

/// Extracts chart data for `chart` out of `response`.
///
/// Never fails: unresolvable data sources produce empty series and empty
/// rows produce empty (or zero-total) series, so one bad descriptor cannot
/// break the whole report.
pub fn extract(
    response: &ReportResponse,
    chart: &ChartDescriptor,
    text: &dyn LabelText,
) -> ChartDataModel {
    match DataShape::of(response, chart) {
        DataShape::TimeSeries => extract_bucketed(
            response,
            chart,
            text,
            &response.metadata.time_series_column_verbose_names,
            BucketNaming::VerboseNameByPosition,
        ),
        DataShape::Crosstab => extract_bucketed(
            response,
            chart,
            text,
            &response.metadata.crosstab_column_verbose_names,
            BucketNaming::ColumnVerboseName,
        ),
        DataShape::Flat => extract_flat(response, chart, text),
    }
}

// ============================================================================
// FLAT
// ============================================================================

fn extract_flat(
    response: &ReportResponse,
    chart: &ChartDescriptor,
    text: &dyn LabelText,
) -> ChartDataModel {
    let labels = if chart.title_source.is_empty() {
        Vec::new()
    } else {
        response
            .rows
            .iter()
            .map(|row| row_label(row, &chart.title_source, text))
            .collect()
    };

    // Flat charts plot a single value column.
    let data = match chart.data_source.first() {
        Some(column) => response.rows.iter().map(|row| cell_number(row, column)).collect(),
        None => Vec::new(),
    };

    ChartDataModel {
        labels,
        series: vec![Series::new(chart.title.clone(), data)],
    }
}

// ============================================================================
// TIME SERIES / CROSSTAB
// ============================================================================

/// How a plot-total series is named.
#[derive(Debug, Clone, Copy)]
enum BucketNaming {
    /// `time_series_column_verbose_names[position within the field's columns]`.
    VerboseNameByPosition,
    /// The physical column's own verbose name.
    ColumnVerboseName,
}

/// A logical field and the physical columns realizing it.
struct ResolvedSource<'a> {
    key: &'a str,
    columns: Vec<&'a str>,
}

/// Maps every logical key of the chart to its columns, in declaration order.
/// A key listed twice is resolved once, at its first position.
fn resolve_sources<'a>(
    response: &'a ReportResponse,
    chart: &'a ChartDescriptor,
) -> Vec<ResolvedSource<'a>> {
    let mut seen = FxHashSet::default();
    chart
        .data_source
        .iter()
        .filter(|key| seen.insert(*key))
        .map(|key| ResolvedSource {
            key: key.as_str(),
            columns: response
                .columns
                .iter()
                .filter(|c| c.computation_field.as_deref() == Some(key.as_str()))
                .map(|c| c.name.as_str())
                .collect(),
        })
        .collect()
}

fn extract_bucketed(
    response: &ReportResponse,
    chart: &ChartDescriptor,
    text: &dyn LabelText,
    bucket_labels: &[String],
    naming: BucketNaming,
) -> ChartDataModel {
    let sources = resolve_sources(response, chart);

    let series = if chart.plot_total {
        total_series(response, &sources, bucket_labels, naming)
    } else {
        per_row_series(response, chart, &sources, text)
    };

    ChartDataModel {
        labels: bucket_labels.to_vec(),
        series,
    }
}

/// One series per (row, logical key), named by the row's label.
fn per_row_series(
    response: &ReportResponse,
    chart: &ChartDescriptor,
    sources: &[ResolvedSource<'_>],
    text: &dyn LabelText,
) -> Vec<Series> {
    let mut series = Vec::with_capacity(response.rows.len() * sources.len());
    for row in &response.rows {
        let name = row_label(row, &chart.title_source, text);
        for source in sources {
            let data = source.columns.iter().map(|col| cell_number(row, col)).collect();
            series.push(Series::new(name.clone(), data));
        }
    }
    series
}

/// One single-point series per resolved column, holding the column total.
fn total_series(
    response: &ReportResponse,
    sources: &[ResolvedSource<'_>],
    bucket_labels: &[String],
    naming: BucketNaming,
) -> Vec<Series> {
    let all_columns: Vec<&str> = sources
        .iter()
        .flat_map(|s| s.columns.iter().copied())
        .collect();
    let totals = sum_columns(&response.rows, &all_columns);

    let mut series = Vec::with_capacity(all_columns.len());
    for source in sources {
        if source.columns.is_empty() {
            series.push(Series::new(source.key, Vec::new()));
            continue;
        }
        for (position, column) in source.columns.iter().enumerate() {
            let name = match naming {
                BucketNaming::VerboseNameByPosition => {
                    bucket_labels.get(position).cloned().unwrap_or_default()
                }
                BucketNaming::ColumnVerboseName => response
                    .column(column)
                    .map(|c| c.verbose_name.clone())
                    .unwrap_or_default(),
            };
            let total = totals.get(*column).copied().unwrap_or(0.0);
            series.push(Series::new(name, vec![total]));
        }
    }
    series
}

// ============================================================================
// CELL HELPERS
// ============================================================================

fn row_label(row: &Row, column: &str, text: &dyn LabelText) -> String {
    match row.get(column) {
        Some(CellValue::Text(raw)) => text.text(raw),
        Some(cell) => cell.display_value(),
        None => String::new(),
    }
}

/// Missing cells plot as NaN (a gap) rather than a fabricated zero.
fn cell_number(row: &Row, column: &str) -> f64 {
    row.get(column).map(normalize).unwrap_or(f64::NAN)
}
