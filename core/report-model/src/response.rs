//! FILENAME: core/report-model/src/response.rs
//! Report Response - the payload delivered by a report endpoint.
//!
//! These structures are designed to be:
//! - Deserialized straight from the endpoint's JSON body
//! - Lenient: every key has a default, so a partial payload still renders
//! - Immutable snapshots, scoped to a single render cycle

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::cell::CellValue;
use crate::error::ModelError;

/// One report row: column name -> cell.
pub type Row = FxHashMap<String, CellValue>;

// ============================================================================
// COLUMNS
// ============================================================================

/// Describes one column of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,

    /// Header label shown to the user.
    #[serde(default)]
    pub verbose_name: String,

    /// Whether the column gets a total in the table footer.
    #[serde(default, deserialize_with = "bool_or_blank")]
    pub is_summable: bool,

    #[serde(default = "default_true")]
    pub visible: bool,

    /// Logical measurement this physical column realizes. Time-series and
    /// crosstab reports expand one logical field into many columns.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub computation_field: Option<String>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, verbose_name: impl Into<String>) -> Self {
        ColumnDescriptor {
            name: name.into(),
            verbose_name: verbose_name.into(),
            is_summable: false,
            visible: true,
            computation_field: None,
        }
    }

    pub fn summable(mut self) -> Self {
        self.is_summable = true;
        self
    }

    pub fn computed_from(mut self, field: impl Into<String>) -> Self {
        self.computation_field = Some(field.into());
        self
    }
}

// ============================================================================
// CHARTS
// ============================================================================

/// Visual chart kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Column,
    Pie,
    Line,
    Area,
    #[serde(other)]
    Other,
}

impl Default for ChartType {
    fn default() -> Self {
        ChartType::Bar
    }
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Column => "column",
            ChartType::Pie => "pie",
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::Other => "other",
        }
    }
}

/// Configuration of one chart offered by a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    #[serde(default)]
    pub id: String,

    #[serde(default, rename = "type")]
    pub chart_type: ChartType,

    #[serde(default)]
    pub title: String,

    /// Logical field keys (or, for flat reports, the value column).
    #[serde(default, deserialize_with = "one_or_many")]
    pub data_source: Vec<String>,

    /// Column whose cell labels each row; empty when rows are unlabeled.
    #[serde(default, deserialize_with = "first_of_one_or_many")]
    pub title_source: String,

    /// Sum all rows into one series per bucket instead of one series per row.
    #[serde(default)]
    pub plot_total: bool,

    #[serde(default)]
    pub stacked: bool,

    /// Lets a chart ignore the time-series shape of the response.
    #[serde(default = "default_true")]
    pub time_series_support: bool,

    /// Hidden from the chart selector.
    #[serde(default)]
    pub disabled: bool,

    /// Chart engine name overriding the widget default.
    #[serde(default, rename = "engine_name")]
    pub engine: Option<String>,
}

impl ChartDescriptor {
    pub fn new(id: impl Into<String>, chart_type: ChartType, title: impl Into<String>) -> Self {
        ChartDescriptor {
            id: id.into(),
            chart_type,
            title: title.into(),
            data_source: Vec::new(),
            title_source: String::new(),
            plot_total: false,
            stacked: false,
            time_series_support: true,
            disabled: false,
            engine: None,
        }
    }

    pub fn with_data_source<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_source = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_title_source(mut self, column: impl Into<String>) -> Self {
        self.title_source = column.into();
        self
    }

    pub fn plotting_total(mut self) -> Self {
        self.plot_total = true;
        self
    }
}

// ============================================================================
// METADATA
// ============================================================================

/// Shape flags describing how the report's columns were generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Empty when the report is not a time series.
    #[serde(default, deserialize_with = "string_or_null")]
    pub time_series_pattern: String,

    #[serde(default)]
    pub time_series_column_names: Vec<String>,

    #[serde(default)]
    pub time_series_column_verbose_names: Vec<String>,

    /// Empty when the report is not a crosstab.
    #[serde(default, deserialize_with = "string_or_null")]
    pub crosstab_model: String,

    #[serde(default)]
    pub crosstab_column_verbose_names: Vec<String>,
}

impl ReportMetadata {
    pub fn is_time_series(&self) -> bool {
        !self.time_series_pattern.is_empty()
    }

    pub fn is_crosstab(&self) -> bool {
        !self.crosstab_model.is_empty()
    }
}

// ============================================================================
// RESPONSE
// ============================================================================

/// A complete report payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Opaque identifier; collaborators key caches and chart instances by it.
    #[serde(default, deserialize_with = "string_or_null")]
    pub report_slug: String,

    #[serde(default, rename = "data")]
    pub rows: Vec<Row>,

    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,

    #[serde(default, rename = "chart_settings")]
    pub charts: Vec<ChartDescriptor>,

    #[serde(default)]
    pub metadata: ReportMetadata,

    /// Passed through untouched for the filter form collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_settings: Option<Value>,
}

impl ReportResponse {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of columns flagged summable, in declaration order.
    pub fn summable_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_summable)
            .map(|c| c.name.as_str())
            .collect()
    }
}

// ============================================================================
// SERDE HELPERS
// ============================================================================

fn default_true() -> bool {
    true
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The report backend writes `""` for "no computation field".
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

/// The report backend writes `""` for "not summable".
fn bool_or_blank<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    })
}

/// `"client"` and `["client"]` both name the column `client`.
fn first_of_one_or_many<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(one_or_many(deserializer)?.into_iter().next().unwrap_or_default())
}

/// Accepts `"amount"` as well as `["amount", "qty"]`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Nothing(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) if s.is_empty() => Vec::new(),
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
        OneOrMany::Nothing(()) => Vec::new(),
    })
}
