//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for report widget integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use report_model::ReportResponse;
use report_widget::{ChartBackend, ChartEngine, ChartRender, ReportWidget, WidgetSettings};
use serde_json::json;

/// One call a recording back-end received.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub report_slug: String,
    pub chart_id: String,
    pub labels: Vec<String>,
    pub series_names: Vec<String>,
}

/// Back-end that records what it was asked to draw.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    pub calls: Arc<Mutex<Vec<RenderCall>>>,
    pub fail_with: Option<String>,
}

impl RecordingBackend {
    pub fn failing(message: &str) -> Self {
        RecordingBackend {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChartBackend for RecordingBackend {
    fn render(&mut self, render: &ChartRender<'_>) -> Result<(), String> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone());
        }
        self.calls.lock().unwrap().push(RenderCall {
            report_slug: render.report_slug.to_string(),
            chart_id: render.chart.id.clone(),
            labels: render.data.labels.clone(),
            series_names: render.data.series.iter().map(|s| s.name.clone()).collect(),
        });
        Ok(())
    }
}

/// Test harness: a widget with recording back-ends for both engines.
pub struct TestHarness {
    pub widget: ReportWidget,
    pub highcharts: RecordingBackend,
    pub chartjs: RecordingBackend,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_settings(WidgetSettings::default())
    }

    pub fn with_settings(settings: WidgetSettings) -> Self {
        let mut widget = ReportWidget::new(settings).unwrap();
        let highcharts = RecordingBackend::default();
        let chartjs = RecordingBackend::default();
        widget.register_backend(ChartEngine::Highcharts, Box::new(highcharts.clone()));
        widget.register_backend(ChartEngine::ChartJs, Box::new(chartjs.clone()));
        TestHarness {
            widget,
            highcharts,
            chartjs,
        }
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Flat report: clients with a doc count and a comma-grouped value.
pub fn flat_report_json() -> serde_json::Value {
    json!({
        "report_slug": "client-sales",
        "data": [
            {"client": "<a href=\"/client/1/\">Acme</a>", "__doc_count__": 3, "value": "1,200.50"},
            {"client": "<a href=\"/client/2/\">Globex</a>", "__doc_count__": 2, "value": 300},
            {"client": "Initech", "__doc_count__": 1, "value": "-"}
        ],
        "columns": [
            {"name": "client", "verbose_name": "Client", "is_summable": ""},
            {"name": "__doc_count__", "verbose_name": "Documents", "is_summable": true},
            {"name": "value", "verbose_name": "Value", "is_summable": true}
        ],
        "chart_settings": [
            {"id": "pie", "type": "pie", "title": "Share", "data_source": ["value"], "title_source": ["client"]},
            {"id": "bar", "type": "bar", "title": "Sales", "data_source": "value", "title_source": "client",
             "engine_name": "chartsjs"},
            {"id": "hidden", "type": "line", "title": "Hidden", "data_source": ["value"], "disabled": true}
        ],
        "metadata": {}
    })
}

pub fn flat_report() -> ReportResponse {
    ReportResponse::from_value(flat_report_json()).unwrap()
}

/// Time-series report: two clients over three months.
pub fn monthly_report() -> ReportResponse {
    ReportResponse::from_value(json!({
        "report_slug": "monthly-sales",
        "data": [
            {"client": "Acme", "value_jan": 10, "value_feb": 20, "value_mar": "1,000"},
            {"client": "Globex", "value_jan": 5, "value_feb": 0, "value_mar": 2}
        ],
        "columns": [
            {"name": "client", "verbose_name": "Client"},
            {"name": "value_jan", "verbose_name": "Value Jan", "is_summable": true, "computation_field": "value"},
            {"name": "value_feb", "verbose_name": "Value Feb", "is_summable": true, "computation_field": "value"},
            {"name": "value_mar", "verbose_name": "Value Mar", "is_summable": true, "computation_field": "value"}
        ],
        "chart_settings": [
            {"id": "trend", "type": "line", "title": "Trend", "data_source": ["value"], "title_source": ["client"]},
            {"id": "total", "type": "column", "title": "Total", "data_source": ["value"], "plot_total": true}
        ],
        "metadata": {
            "time_series_pattern": "monthly",
            "time_series_column_names": ["value_jan", "value_feb", "value_mar"],
            "time_series_column_verbose_names": ["Jan", "Feb", "Mar"]
        }
    }))
    .unwrap()
}
