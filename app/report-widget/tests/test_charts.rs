//! FILENAME: app/report-widget/tests/test_charts.rs
//! PURPOSE: Tests for time-series and crosstab charts drawn through the widget.

mod common;

use common::{monthly_report, TestHarness};
use report_model::ReportResponse;
use report_widget::WidgetTarget;
use serde_json::json;

fn target(chart_id: &str) -> WidgetTarget {
    WidgetTarget {
        chart_id: chart_id.to_string(),
        ..Default::default()
    }
}

// ============================================================================
// TIME SERIES
// ============================================================================

#[test]
fn test_time_series_series_per_row() {
    let mut harness = TestHarness::new();
    let render = harness.widget.receive(monthly_report(), &target("trend")).unwrap();

    let data = render.chart.unwrap().data;
    assert_eq!(data.labels, vec!["Jan", "Feb", "Mar"]);
    assert_eq!(data.series.len(), 2);
    assert_eq!(data.series[0].name, "Acme");
    assert_eq!(data.series[0].data, vec![10.0, 20.0, 1000.0]);
    assert_eq!(data.series[1].name, "Globex");
    assert_eq!(data.series[1].data, vec![5.0, 0.0, 2.0]);

    let calls = harness.highcharts.calls();
    assert_eq!(calls[0].series_names, vec!["Acme", "Globex"]);
}

#[test]
fn test_time_series_plot_total() {
    let mut harness = TestHarness::new();
    let render = harness.widget.receive(monthly_report(), &target("total")).unwrap();

    let data = render.chart.unwrap().data;
    let names: Vec<&str> = data.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Jan", "Feb", "Mar"]);
    assert_eq!(data.series[0].data, vec![15.0]);
    assert_eq!(data.series[1].data, vec![20.0]);
    assert_eq!(data.series[2].data, vec![1002.0]);
}

#[test]
fn test_time_series_table_totals() {
    let mut harness = TestHarness::new();
    let table = harness
        .widget
        .receive(monthly_report(), &WidgetTarget::default())
        .unwrap()
        .table
        .unwrap();

    assert_eq!(table.total("value_jan"), Some("15.00"));
    assert_eq!(table.total("value_mar"), Some("1,002.00"));
    assert_eq!(table.header_cells.len(), 4);
}

#[test]
fn test_switching_charts_is_repeatable() {
    let mut harness = TestHarness::new();
    harness.widget.receive(monthly_report(), &target("trend")).unwrap();

    let first = harness.widget.switch_chart("monthly-sales", "total").unwrap();
    let again = harness.widget.switch_chart("monthly-sales", "total").unwrap();
    assert_eq!(first, again);
    assert_eq!(harness.highcharts.calls().len(), 3);
}

// ============================================================================
// CROSSTAB
// ============================================================================

fn crosstab_report() -> ReportResponse {
    ReportResponse::from_value(json!({
        "report_slug": "client-by-product",
        "data": [
            {"client": "Acme", "value_p1": 4, "value_p2": "1,000", "value_total": 1004},
            {"client": "<b>Globex</b>", "value_p1": 6, "value_p2": 0, "value_total": 6}
        ],
        "columns": [
            {"name": "client", "verbose_name": "Client"},
            {"name": "value_p1", "verbose_name": "Widgets", "is_summable": true, "computation_field": "value"},
            {"name": "value_p2", "verbose_name": "Gadgets", "is_summable": true, "computation_field": "value"},
            {"name": "value_total", "verbose_name": "Value", "is_summable": true}
        ],
        "chart_settings": [
            {"id": "mix", "type": "bar", "title": "Mix", "data_source": "value", "title_source": "client"},
            {"id": "mix-total", "type": "pie", "title": "Mix total", "data_source": "value", "plot_total": true}
        ],
        "metadata": {
            "crosstab_model": "product",
            "crosstab_column_verbose_names": ["Widgets", "Gadgets"]
        }
    }))
    .unwrap()
}

#[test]
fn test_crosstab_series_per_row() {
    let mut harness = TestHarness::new();
    let render = harness.widget.receive(crosstab_report(), &target("mix")).unwrap();

    let data = render.chart.unwrap().data;
    assert_eq!(data.labels, vec!["Widgets", "Gadgets"]);
    assert_eq!(data.series[0].name, "Acme");
    assert_eq!(data.series[0].data, vec![4.0, 1000.0]);
    assert_eq!(data.series[1].name, "Globex");
}

#[test]
fn test_crosstab_plot_total_named_by_column() {
    let mut harness = TestHarness::new();
    let render = harness.widget.receive(crosstab_report(), &target("mix-total")).unwrap();

    let data = render.chart.unwrap().data;
    let names: Vec<&str> = data.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Widgets", "Gadgets"]);
    assert_eq!(data.series[0].data, vec![10.0]);
    assert_eq!(data.series[1].data, vec![1000.0]);
}
