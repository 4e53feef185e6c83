//! FILENAME: app/report-widget/src/widget.rs
// PURPOSE: The report widget service.
// CONTEXT: The host fetches report payloads and hands them to `receive`. The
// widget projects the table, draws the requested chart through the matching
// back-end and keeps the payload so later chart switches need no refetch.
// A chart that fails to draw never takes the table down with it.

use report_engine::{ChartDataModel, Presenter, TableProjection};
use report_model::{ChartType, ReportResponse};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::engines::{ChartBackend, ChartEngine, ChartRender, EngineTable};
use crate::error::WidgetError;
use crate::logging::{log_debug, log_enter, log_error, log_exit, log_info, log_warn};
use crate::markup::MarkupText;
use crate::settings::WidgetSettings;

/// HTTP status on which the widget is removed from the page.
pub const FORBIDDEN: u16 = 403;

// ============================================================================
// TYPES
// ============================================================================

/// Where a report is shown and which parts the page has room for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetTarget {
    /// Chart to show first; empty picks the first chart.
    #[serde(default)]
    pub chart_id: String,

    #[serde(default = "default_true")]
    pub has_chart: bool,

    #[serde(default = "default_true")]
    pub has_table: bool,

    #[serde(default = "default_true")]
    pub display_chart_selector: bool,
}

fn default_true() -> bool {
    true
}

impl Default for WidgetTarget {
    fn default() -> Self {
        WidgetTarget {
            chart_id: String::new(),
            has_chart: true,
            has_table: true,
            display_chart_selector: true,
        }
    }
}

impl WidgetTarget {
    pub fn chart_only(chart_id: impl Into<String>) -> Self {
        WidgetTarget {
            chart_id: chart_id.into(),
            has_table: false,
            ..Default::default()
        }
    }
}

/// A chart that was handed to its back-end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedChart {
    pub chart_id: String,
    pub title: String,
    pub chart_type: ChartType,
    pub engine: ChartEngine,
    pub data: ChartDataModel,
}

/// One entry of the chart selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartTab {
    pub id: String,
    pub title: String,
    pub chart_type: ChartType,
    pub icon: String,
}

/// What one received report turned into.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetRender {
    pub report_slug: String,
    pub table: Option<TableProjection>,
    pub chart: Option<RenderedChart>,
    /// Why the chart slot stayed empty, when drawing failed.
    pub chart_error: Option<String>,
    pub chart_tabs: Vec<ChartTab>,
}

/// What the page does with the widget after a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureAction {
    Hide,
    Keep,
}

// ============================================================================
// SERVICE
// ============================================================================

pub struct ReportWidget {
    settings: WidgetSettings,
    engines: EngineTable,
    backends: FxHashMap<ChartEngine, Box<dyn ChartBackend>>,
    cache: FxHashMap<String, ReportResponse>,
    presenter: Presenter,
}

impl ReportWidget {
    /// Fails when the settings name an unknown chart engine.
    pub fn new(settings: WidgetSettings) -> Result<Self, WidgetError> {
        let engines = settings.resolve_engines()?;
        let presenter = Presenter::new(settings.table_options()).with_label_text(MarkupText);
        log_info!(
            "WIDGET",
            "created default_engine={} engines={}",
            engines.default_engine(),
            settings.charts.len()
        );
        Ok(ReportWidget {
            settings,
            engines,
            backends: FxHashMap::default(),
            cache: FxHashMap::default(),
            presenter,
        })
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    pub fn engines(&self) -> &EngineTable {
        &self.engines
    }

    /// Registers the back-end drawing charts of `engine`, replacing any previous one.
    pub fn register_backend(&mut self, engine: ChartEngine, backend: Box<dyn ChartBackend>) {
        log_debug!("WIDGET", "register_backend engine={}", engine);
        self.backends.insert(engine, backend);
    }

    /// Parses a raw payload and receives it.
    pub fn receive_json(&mut self, json: &str, target: &WidgetTarget) -> Result<WidgetRender, WidgetError> {
        let response = ReportResponse::from_json(json)?;
        self.receive(response, target)
    }

    /// Presents a freshly fetched report and caches it by slug.
    pub fn receive(
        &mut self,
        response: ReportResponse,
        target: &WidgetTarget,
    ) -> Result<WidgetRender, WidgetError> {
        log_enter!(
            "WIDGET",
            "receive",
            "slug={} rows={} charts={}",
            response.report_slug,
            response.rows.len(),
            response.charts.len()
        );

        let table = if target.has_table {
            Some(self.presenter.table(&response))
        } else {
            None
        };

        let mut chart = None;
        let mut chart_error = None;
        if target.has_chart && !response.charts.is_empty() {
            match render_chart(
                &self.presenter,
                &self.engines,
                &mut self.backends,
                &response,
                &target.chart_id,
            ) {
                Ok(rendered) => chart = Some(rendered),
                Err(e) => {
                    log_error!("CHART", "slug={} chart={:?} err={}", response.report_slug, target.chart_id, e);
                    chart_error = Some(e.to_string());
                }
            }
        }

        let chart_tabs = if target.display_chart_selector && response.charts.len() > 1 {
            self.chart_tabs(&response)
        } else {
            Vec::new()
        };

        let render = WidgetRender {
            report_slug: response.report_slug.clone(),
            table,
            chart,
            chart_error,
            chart_tabs,
        };

        log_exit!(
            "WIDGET",
            "receive",
            "slug={} chart={} tabs={}",
            render.report_slug,
            render.chart.is_some(),
            render.chart_tabs.len()
        );
        self.cache.insert(response.report_slug.clone(), response);
        Ok(render)
    }

    /// Draws another chart of an already received report.
    pub fn switch_chart(&mut self, report_slug: &str, chart_id: &str) -> Result<RenderedChart, WidgetError> {
        let Some(response) = self.cache.get(report_slug) else {
            log_warn!("CACHE", "miss slug={}", report_slug);
            return Err(WidgetError::NotCached(report_slug.to_string()));
        };
        log_debug!("CACHE", "hit slug={} chart={:?}", report_slug, chart_id);
        render_chart(&self.presenter, &self.engines, &mut self.backends, response, chart_id)
    }

    pub fn cached(&self, report_slug: &str) -> Option<&ReportResponse> {
        self.cache.get(report_slug)
    }

    pub fn evict(&mut self, report_slug: &str) -> Option<ReportResponse> {
        let evicted = self.cache.remove(report_slug);
        if evicted.is_some() {
            log_debug!("CACHE", "evict slug={}", report_slug);
        }
        evicted
    }

    /// Decides the widget's fate after the report fetch failed.
    pub fn on_fetch_failure(&self, report_slug: &str, status: u16) -> FailureAction {
        if status == FORBIDDEN {
            log_warn!("FETCH", "slug={} status={} hiding widget", report_slug, status);
            FailureAction::Hide
        } else {
            log_error!("FETCH", "slug={} status={}", report_slug, status);
            FailureAction::Keep
        }
    }

    fn chart_tabs(&self, response: &ReportResponse) -> Vec<ChartTab> {
        response
            .charts
            .iter()
            .filter(|c| !c.disabled)
            .map(|c| ChartTab {
                id: c.id.clone(),
                title: c.title.clone(),
                chart_type: c.chart_type,
                icon: self.settings.chart_icon(c.chart_type).to_string(),
            })
            .collect()
    }
}

fn render_chart(
    presenter: &Presenter,
    engines: &EngineTable,
    backends: &mut FxHashMap<ChartEngine, Box<dyn ChartBackend>>,
    response: &ReportResponse,
    chart_id: &str,
) -> Result<RenderedChart, WidgetError> {
    let (chart, data) = presenter.chart_by_id(response, chart_id)?;
    if chart.id != chart_id && !chart_id.is_empty() {
        log_debug!("CHART", "id={:?} not found, using first chart {:?}", chart_id, chart.id);
    }

    let engine = engines.for_chart(chart)?;
    let backend = backends
        .get_mut(&engine)
        .ok_or(WidgetError::BackendMissing(engine))?;

    backend
        .render(&ChartRender {
            report_slug: &response.report_slug,
            chart,
            data: &data,
        })
        .map_err(|message| WidgetError::Backend { engine, message })?;

    log_info!(
        "CHART",
        "rendered slug={} chart={} engine={} series={}",
        response.report_slug,
        chart.id,
        engine,
        data.series.len()
    );

    Ok(RenderedChart {
        chart_id: chart.id.clone(),
        title: chart.title.clone(),
        chart_type: chart.chart_type,
        engine,
        data,
    })
}
