//! FILENAME: app/report-widget/src/lib.rs
//! Report widget host.
//!
//! Sits between the page fetching report payloads and the chart/grid
//! libraries drawing them.
//!
//! Layers:
//! - `settings`: JSON widget settings merged over defaults
//! - `engines`: Closed set of chart engines and the back-end trait
//! - `markup`: Label text for HTML-bearing cells
//! - `widget`: The `ReportWidget` service and its response cache
//! - `logging`: Unified `seq|level|category|message` log lines

pub mod engines;
pub mod error;
pub mod logging;
pub mod markup;
pub mod settings;
pub mod widget;

pub use engines::{ChartBackend, ChartEngine, ChartRender, EngineTable};
pub use error::WidgetError;
pub use logging::{close_log_file, init_log_file, next_seq, write_log};
pub use markup::MarkupText;
pub use settings::{ChartEngineSettings, FontAwesome, Messages, WidgetSettings};
pub use widget::{
    ChartTab, FailureAction, RenderedChart, ReportWidget, WidgetRender, WidgetTarget, FORBIDDEN,
};
