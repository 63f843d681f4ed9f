//! The dashboard's chart panels.

use bbank_chart::{ChartKind, ChartOptions};
use bbank_core::Dataset;
use bbank_data::transform::{LabelOrder, SeriesTransform};

use crate::config::PanelConfig;

/// Every panel, in dashboard order.
pub fn presets() -> Vec<PanelConfig> {
    vec![
        PanelConfig::new(
            "blood-type-distribution",
            Dataset::BloodTypeList,
            SeriesTransform::CountsByLabel(LabelOrder::ByLabel),
            ChartOptions::new("Blood Type Distribution", "Blood Type", "Units Available"),
        )
        .with_kinds(&ChartKind::ALL)
        .with_summary(),
        PanelConfig::new(
            "blood-type-counts",
            Dataset::BloodTypes,
            SeriesTransform::CountsByLabel(LabelOrder::Insertion),
            ChartOptions::new("Units by Blood Type", "Blood Type", "Units")
                .with_color("#8884d8"),
        ),
        PanelConfig::new(
            "stock-over-time",
            Dataset::StockOverTime,
            SeriesTransform::DatedCounts,
            ChartOptions::new("Blood Stock Over Time", "Date", "Units in Stock"),
        )
        .with_kinds(&[ChartKind::Line, ChartKind::Bar]),
        PanelConfig::new(
            "donation-frequency",
            Dataset::DonationRecords,
            SeriesTransform::BucketByDay,
            ChartOptions::new("Donations Over Time", "Date", "Number of Donations")
                .with_color("steelblue"),
        )
        .with_kinds(&[ChartKind::Bar, ChartKind::Line]),
        PanelConfig::new(
            "historical-stock",
            Dataset::HistoricalStock,
            SeriesTransform::DatedCounts,
            ChartOptions::new("Historical Stock Levels", "Month", "Units in Stock"),
        )
        .with_kinds(&[ChartKind::Line, ChartKind::Bar]),
        PanelConfig::new(
            "donation-trends",
            Dataset::DonationTrends,
            SeriesTransform::DatedCounts,
            ChartOptions::new("Donation Trends", "Month", "Donations")
                .with_color("#2e7d32"),
        )
        .with_kinds(&[ChartKind::Bar, ChartKind::Line]),
        PanelConfig::new(
            "stock-forecast",
            Dataset::Forecast,
            SeriesTransform::DatedCounts,
            ChartOptions::new("Stock Forecast", "Week", "Projected Units"),
        )
        .with_kinds(&[ChartKind::Line]),
    ]
}

pub fn find_preset(id: &str) -> Option<PanelConfig> {
    presets().into_iter().find(|p| p.id == id)
}
