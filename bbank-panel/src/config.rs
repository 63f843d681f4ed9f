use bbank_chart::{ChartKind, ChartOptions};
use bbank_core::Dataset;
use bbank_data::transform::SeriesTransform;
use serde::Serialize;

/// Everything that distinguishes one chart panel from another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelConfig {
    /// Stable identifier, also used as the DOM id of the plot container
    pub id: &'static str,
    pub dataset: Dataset,
    pub transform: SeriesTransform,
    pub default_kind: ChartKind,
    /// Kinds offered in the selector; a single entry hides the selector
    pub kinds: Vec<ChartKind>,
    pub options: ChartOptions,
    /// Show per-label "N units" boxes under categorical charts
    pub show_summary: bool,
}

impl PanelConfig {
    pub fn new(
        id: &'static str,
        dataset: Dataset,
        transform: SeriesTransform,
        options: ChartOptions,
    ) -> Self {
        Self {
            id,
            dataset,
            transform,
            default_kind: ChartKind::Bar,
            kinds: vec![ChartKind::Bar],
            options,
            show_summary: false,
        }
    }

    /// Offer `kinds`, starting on the first one.
    pub fn with_kinds(mut self, kinds: &[ChartKind]) -> Self {
        if let Some(first) = kinds.first() {
            self.default_kind = *first;
            self.kinds = kinds.to_vec();
        }
        self
    }

    pub fn with_summary(mut self) -> Self {
        self.show_summary = true;
        self
    }

    pub fn has_selector(&self) -> bool {
        self.kinds.len() > 1
    }

    /// `kind` if this panel offers it, otherwise the default.
    pub fn resolve_kind(&self, kind: ChartKind) -> ChartKind {
        if self.kinds.contains(&kind) {
            kind
        } else {
            self.default_kind
        }
    }
}
