//! FILENAME: app/report-widget/src/engines.rs
// PURPOSE: Chart engines and the back-ends that draw them.
// CONTEXT: Engines form a closed set. Settings name them by entry point
// (`$.slick_reporting.highcharts.displayChart` or just `highcharts`) and are
// resolved to `ChartEngine` values once, when settings load, so a misspelled
// entry point fails loudly instead of at render time.

use std::fmt;
use std::str::FromStr;

use report_engine::ChartDataModel;
use report_model::ChartDescriptor;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

// ============================================================================
// ENGINES
// ============================================================================

/// Chart libraries the widget can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartEngine {
    Highcharts,
    ChartJs,
}

impl ChartEngine {
    pub const ALL: [ChartEngine; 2] = [ChartEngine::Highcharts, ChartEngine::ChartJs];

    /// Script namespace of the engine; also its key in the default `CHARTS` settings.
    pub fn namespace(&self) -> &'static str {
        match self {
            ChartEngine::Highcharts => "highcharts",
            ChartEngine::ChartJs => "chartsjs",
        }
    }

    /// Function the page calls to draw a chart with this engine.
    pub fn entry_point(&self) -> &'static str {
        match self {
            ChartEngine::Highcharts => "$.slick_reporting.highcharts.displayChart",
            ChartEngine::ChartJs => "$.slick_reporting.chartsjs.displayChart",
        }
    }

    fn from_namespace(segment: &str) -> Option<ChartEngine> {
        ChartEngine::ALL
            .into_iter()
            .find(|e| e.namespace().eq_ignore_ascii_case(segment))
    }
}

impl fmt::Display for ChartEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

/// Accepts a bare namespace (`highcharts`) or a dotted entry point naming
/// exactly one engine namespace (`$.slick_reporting.highcharts.displayChart`).
impl FromStr for ChartEngine {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut found = None;
        for engine in s.trim().split('.').filter_map(ChartEngine::from_namespace) {
            match found {
                Some(prev) if prev != engine => {
                    return Err(WidgetError::UnknownChartEngine(s.to_string()));
                }
                _ => found = Some(engine),
            }
        }
        found.ok_or_else(|| WidgetError::UnknownChartEngine(s.to_string()))
    }
}

/// Engine names from settings, resolved to engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineTable {
    default: ChartEngine,
    by_name: FxHashMap<String, ChartEngine>,
}

impl EngineTable {
    pub fn new(default: ChartEngine, by_name: FxHashMap<String, ChartEngine>) -> Self {
        EngineTable { default, by_name }
    }

    pub fn default_engine(&self) -> ChartEngine {
        self.default
    }

    /// Engine configured under `name`.
    pub fn get(&self, name: &str) -> Option<ChartEngine> {
        self.by_name.get(name).copied()
    }

    /// Engine a chart renders with: its own `engine_name` when set, else the default.
    pub fn for_chart(&self, chart: &ChartDescriptor) -> Result<ChartEngine, WidgetError> {
        match chart.engine.as_deref() {
            None | Some("") => Ok(self.default),
            Some(name) => self
                .get(name)
                .ok_or_else(|| WidgetError::UnknownChartEngine(name.to_string())),
        }
    }
}

// ============================================================================
// BACK-ENDS
// ============================================================================

/// Everything a back-end needs to draw one chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartRender<'a> {
    /// Back-ends replace any chart they previously drew for this slug.
    pub report_slug: &'a str,
    pub chart: &'a ChartDescriptor,
    pub data: &'a ChartDataModel,
}

/// A chart library binding supplied by the host.
///
/// Maps the library-neutral model onto the library's own configuration.
pub trait ChartBackend {
    fn render(&mut self, render: &ChartRender<'_>) -> Result<(), String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_model::ChartType;

    #[test]
    fn test_parse_namespaces() {
        assert_eq!("highcharts".parse::<ChartEngine>().unwrap(), ChartEngine::Highcharts);
        assert_eq!("ChartsJS".parse::<ChartEngine>().unwrap(), ChartEngine::ChartJs);
        assert!(matches!(
            "hicharts".parse::<ChartEngine>(),
            Err(WidgetError::UnknownChartEngine(name)) if name == "hicharts"
        ));
    }

    #[test]
    fn test_parse_dotted_entry_points() {
        for engine in ChartEngine::ALL {
            assert_eq!(engine.entry_point().parse::<ChartEngine>().unwrap(), engine);
        }
        assert_eq!(
            "$.my_app.highcharts.drawChart".parse::<ChartEngine>().unwrap(),
            ChartEngine::Highcharts
        );
        assert!("$.slick_reporting.highchart.displayChart".parse::<ChartEngine>().is_err());
        assert!("$.slick_reporting.displayChart".parse::<ChartEngine>().is_err());
        assert!("$.highcharts.chartsjs.displayChart".parse::<ChartEngine>().is_err());
    }

    #[test]
    fn test_display_matches_settings_key() {
        assert_eq!(ChartEngine::Highcharts.to_string(), "highcharts");
        assert_eq!(ChartEngine::ChartJs.to_string(), "chartsjs");
    }

    #[test]
    fn test_chart_engine_override() {
        let mut names = FxHashMap::default();
        names.insert("highcharts".to_string(), ChartEngine::Highcharts);
        names.insert("chartsjs".to_string(), ChartEngine::ChartJs);
        let table = EngineTable::new(ChartEngine::Highcharts, names);

        let mut chart = ChartDescriptor::new("a", ChartType::Pie, "Pie");
        assert_eq!(table.for_chart(&chart).unwrap(), ChartEngine::Highcharts);

        chart.engine = Some("chartsjs".to_string());
        assert_eq!(table.for_chart(&chart).unwrap(), ChartEngine::ChartJs);

        chart.engine = Some("d3".to_string());
        assert!(table.for_chart(&chart).is_err());
    }
}
