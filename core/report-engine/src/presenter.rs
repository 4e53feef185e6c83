//! FILENAME: core/report-engine/src/presenter.rs
//! The presentation service handed to rendering collaborators.

use report_model::{ChartDescriptor, ReportResponse};

use crate::chart::{extract, ChartDataModel};
use crate::select::{select, NotFound};
use crate::table::{build_projection, TableOptions, TableProjection};
use crate::text::{LabelText, PlainText};

/// Bundles table options and the label-text capability.
/// Instantiated once by the host and passed by reference.
pub struct Presenter {
    options: TableOptions,
    text: Box<dyn LabelText + Send + Sync>,
}

impl Presenter {
    pub fn new(options: TableOptions) -> Self {
        Presenter {
            options,
            text: Box::new(PlainText),
        }
    }

    pub fn with_label_text(mut self, text: impl LabelText + Send + Sync + 'static) -> Self {
        self.text = Box::new(text);
        self
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn table(&self, response: &ReportResponse) -> TableProjection {
        build_projection(response, &self.options)
    }

    pub fn chart(&self, response: &ReportResponse, chart: &ChartDescriptor) -> ChartDataModel {
        extract(response, chart, self.text.as_ref())
    }

    /// Selects a chart of the response (see `select`) and extracts its data.
    pub fn chart_by_id<'a>(
        &self,
        response: &'a ReportResponse,
        chart_id: &str,
    ) -> Result<(&'a ChartDescriptor, ChartDataModel), NotFound> {
        let chart = select(&response.charts, chart_id)?;
        Ok((chart, self.chart(response, chart)))
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Presenter::new(TableOptions::default())
    }
}
