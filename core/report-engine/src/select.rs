//! FILENAME: core/report-engine/src/select.rs
//! Chart descriptor lookup with first-chart fallback.

use report_model::ChartDescriptor;
use thiserror::Error;

/// The report offers no chart at all.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No chart available for this report")]
pub struct NotFound;

/// Picks the chart to display.
///
/// A non-empty `id` selects the first descriptor carrying it. An empty id,
/// or an id nobody carries, falls back to the first descriptor. Only an
/// empty list is `NotFound`.
pub fn select<'a>(descriptors: &'a [ChartDescriptor], id: &str) -> Result<&'a ChartDescriptor, NotFound> {
    let matched = if id.is_empty() {
        None
    } else {
        descriptors.iter().find(|d| d.id == id)
    };
    matched.or_else(|| descriptors.first()).ok_or(NotFound)
}
