use bbank_chart::format::thousands;
use bbank_chart::{ChartKind, PlotSpec, Theme};
use bbank_data::series::Series;
use serde::Serialize;

use crate::config::PanelConfig;
use crate::state::LoadState;

/// Shown when a request succeeded but returned nothing to plot.
pub const EMPTY_MESSAGE: &str = "No data to display yet.";

/// What a panel should show right now.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Idle,
    Loading,
    Error { message: String },
    Empty { message: String },
    Chart(Box<PlotSpec>),
}

pub fn panel_view(
    state: &LoadState<Series>,
    config: &PanelConfig,
    kind: ChartKind,
    theme: Theme,
) -> PanelView {
    match state {
        LoadState::Idle => PanelView::Idle,
        LoadState::Loading => PanelView::Loading,
        LoadState::Error(message) => PanelView::Error {
            message: message.clone(),
        },
        LoadState::Success(series) => {
            match PlotSpec::build(series, config.resolve_kind(kind), &config.options, theme) {
                Ok(spec) => PanelView::Chart(Box::new(spec)),
                Err(e) if e.is_empty_data() => PanelView::Empty {
                    message: EMPTY_MESSAGE.to_string(),
                },
                Err(e) => PanelView::Error {
                    message: e.to_string(),
                },
            }
        }
    }
}

/// One "A+  1,180 units" box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryItem {
    pub label: String,
    pub units: String,
}

/// Summary boxes for categorical series; empty for time series.
pub fn summary(series: &Series) -> Vec<SummaryItem> {
    match series {
        Series::Categorical(points) => points
            .iter()
            .map(|p| SummaryItem {
                label: p.label.to_string(),
                units: format!("{} units", thousands(p.value as f64)),
            })
            .collect(),
        Series::Temporal(_) => Vec::new(),
    }
}
