//! FILENAME: core/report-engine/src/lib.rs
//! Report presentation engine.
//!
//! Turns a `ReportResponse` into the models rendering back-ends consume.
//! Every function here is pure: no I/O, no caching, no shared state.
//!
//! Layers:
//! - `totals`: Column sums over rows (HOW we aggregate)
//! - `table`: Header/footer projection for the grid (WHAT the grid shows)
//! - `chart`: `{labels, series}` extraction for flat, time-series and crosstab data
//! - `select`: Chart descriptor lookup
//! - `text`: Label text capability supplied by the host
//! - `presenter`: The service bundling the above

pub mod chart;
pub mod presenter;
pub mod select;
pub mod table;
pub mod text;
pub mod totals;

pub use chart::{extract, ChartDataModel, DataShape, PiePoint, PieSeries, Series};
pub use presenter::Presenter;
pub use select::{select, NotFound};
pub use table::{build_projection, HeaderCell, TableOptions, TableProjection, TotalCell};
pub use text::{LabelText, PlainText};
pub use totals::{sum_columns, TotalsMap};
