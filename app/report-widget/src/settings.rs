//! FILENAME: app/report-widget/src/settings.rs
// PURPOSE: Widget configuration.
// CONTEXT: The host page ships its settings as JSON. User settings are laid
// over the defaults: `CHARTS` entries merge by name, every other key replaces
// the default wholesale.

use std::fs;
use std::path::Path;

use report_engine::TableOptions;
use report_model::ChartType;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::engines::{ChartEngine, EngineTable};
use crate::error::WidgetError;

// ============================================================================
// SETTINGS TYPES
// ============================================================================

/// One configured chart engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineSettings {
    /// Drawing function, see `ChartEngine::entry_point`. A bare engine
    /// namespace is accepted too.
    #[serde(rename = "entryPoint")]
    pub entry_point: String,

    /// Scripts the page must load for this engine.
    #[serde(default)]
    pub js: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_total_label", alias = "TOTAL_LABEL")]
    pub total: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            total: default_total_label(),
        }
    }
}

fn default_total_label() -> String {
    report_engine::table::DEFAULT_TOTAL_LABEL.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FontAwesome {
    #[serde(default)]
    pub css_url: String,

    /// Chart type -> icon class.
    #[serde(default)]
    pub icons: FxHashMap<String, String>,
}

/// Complete widget settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct WidgetSettings {
    pub default_charts_engine: String,
    pub charts: FxHashMap<String, ChartEngineSettings>,
    pub messages: Messages,
    pub font_awesome: FontAwesome,
    /// Columns whose totals are shown without decimals.
    pub integer_columns: Vec<String>,
}

/// User-supplied settings; anything absent keeps its default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct SettingsOverrides {
    #[serde(default)]
    default_charts_engine: Option<String>,
    #[serde(default)]
    charts: FxHashMap<String, ChartEngineSettings>,
    #[serde(default)]
    messages: Option<Messages>,
    #[serde(default)]
    font_awesome: Option<FontAwesome>,
    #[serde(default)]
    integer_columns: Option<Vec<String>>,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        let mut charts = FxHashMap::default();
        charts.insert(
            ChartEngine::Highcharts.namespace().to_string(),
            ChartEngineSettings {
                entry_point: ChartEngine::Highcharts.entry_point().to_string(),
                js: vec![
                    "https://code.highcharts.com/highcharts.js".to_string(),
                    "slick_reporting/slick_reporting.highchart.js".to_string(),
                ],
            },
        );
        charts.insert(
            ChartEngine::ChartJs.namespace().to_string(),
            ChartEngineSettings {
                entry_point: ChartEngine::ChartJs.entry_point().to_string(),
                js: vec![
                    "https://cdn.jsdelivr.net/npm/chart.js".to_string(),
                    "slick_reporting/slick_reporting.chartsjs.js".to_string(),
                ],
            },
        );

        let icons = [
            (ChartType::Pie, "fas fa-chart-pie"),
            (ChartType::Bar, "fas fa-chart-bar"),
            (ChartType::Line, "fas fa-chart-line"),
            (ChartType::Area, "fas fa-chart-area"),
            (ChartType::Column, "fas fa-chart-bar"),
        ]
        .into_iter()
        .map(|(t, icon)| (t.as_str().to_string(), icon.to_string()))
        .collect();

        WidgetSettings {
            default_charts_engine: "highcharts".to_string(),
            charts,
            messages: Messages::default(),
            font_awesome: FontAwesome {
                css_url: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.3/css/all.min.css"
                    .to_string(),
                icons,
            },
            integer_columns: report_engine::table::DEFAULT_INTEGER_COLUMNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

// ============================================================================
// LOADING
// ============================================================================

impl WidgetSettings {
    /// Defaults overlaid with the given JSON settings.
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        let overrides: SettingsOverrides = serde_json::from_str(json)?;
        Ok(WidgetSettings::default().merged_with(overrides))
    }

    /// Reads JSON settings from a file.
    pub fn load(path: &Path) -> Result<Self, WidgetError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn merged_with(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(engine) = overrides.default_charts_engine {
            self.default_charts_engine = engine;
        }
        self.charts.extend(overrides.charts);
        if let Some(messages) = overrides.messages {
            self.messages = messages;
        }
        if let Some(font_awesome) = overrides.font_awesome {
            self.font_awesome = font_awesome;
        }
        if let Some(integer_columns) = overrides.integer_columns {
            self.integer_columns = integer_columns;
        }
        self
    }

    /// Resolves every configured entry point to its engine.
    /// Fails on an unknown entry point or a default engine nobody configured.
    pub fn resolve_engines(&self) -> Result<EngineTable, WidgetError> {
        let mut by_name = FxHashMap::default();
        for (name, engine) in &self.charts {
            by_name.insert(name.clone(), engine.entry_point.parse::<ChartEngine>()?);
        }
        let default = by_name
            .get(&self.default_charts_engine)
            .copied()
            .ok_or_else(|| WidgetError::UnknownChartEngine(self.default_charts_engine.clone()))?;
        Ok(EngineTable::new(default, by_name))
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            integer_columns: self.integer_columns.clone(),
            total_label: self.messages.total.clone(),
        }
    }

    /// Icon class for a chart type; empty when none is configured.
    pub fn chart_icon(&self, chart_type: ChartType) -> &str {
        self.font_awesome
            .icons
            .get(chart_type.as_str())
            .map(String::as_str)
            .unwrap_or("")
    }
}
