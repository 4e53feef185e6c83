//! FILENAME: app/report-widget/src/error.rs

use report_engine::NotFound;
use report_model::ModelError;
use thiserror::Error;

use crate::engines::ChartEngine;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Unknown chart engine: {0}")]
    UnknownChartEngine(String),

    #[error("No back-end registered for chart engine {0}")]
    BackendMissing(ChartEngine),

    #[error("Chart back-end {engine} failed: {message}")]
    Backend { engine: ChartEngine, message: String },

    #[error("Report not loaded: {0}")]
    NotCached(String),

    #[error(transparent)]
    NoChart(#[from] NotFound),

    #[error("Invalid report payload: {0}")]
    Model(#[from] ModelError),

    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
