use serde::{Deserialize, Serialize};
use std::fmt;

/// A payload a chart panel can ask for.
///
/// The first four are served by the remote API. Historical stock, donation
/// trends and the forecast are pre-computed elsewhere and only available as
/// mock payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    /// `{ "A+": 10, "O-": 3, ... }`
    BloodTypes,
    /// `[{ "label": "A+", "value": 10 }, ...]`
    BloodTypeList,
    /// `[{ "date": "2025-08-01", "count": 42 }, ...]`
    StockOverTime,
    /// `[{ "donation_date": "2025-08-01T10:00:00Z", ... }, ...]`
    DonationRecords,
    HistoricalStock,
    DonationTrends,
    Forecast,
}

impl Dataset {
    pub const ALL: [Dataset; 7] = [
        Dataset::BloodTypes,
        Dataset::BloodTypeList,
        Dataset::StockOverTime,
        Dataset::DonationRecords,
        Dataset::HistoricalStock,
        Dataset::DonationTrends,
        Dataset::Forecast,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::BloodTypes => "blood-types",
            Dataset::BloodTypeList => "blood-type-list",
            Dataset::StockOverTime => "stock-over-time",
            Dataset::DonationRecords => "donation-records",
            Dataset::HistoricalStock => "historical-stock",
            Dataset::DonationTrends => "donation-trends",
            Dataset::Forecast => "forecast",
        }
    }

    /// Route relative to the API base URL, or `None` when the dataset
    /// only exists as mock data.
    pub fn remote_path(&self, donation_limit: u32) -> Option<String> {
        match self {
            Dataset::BloodTypes | Dataset::BloodTypeList => Some("chart/blood-types".to_string()),
            Dataset::StockOverTime => Some("chart/stock-over-time".to_string()),
            Dataset::DonationRecords => Some(format!("donations?limit={}", donation_limit)),
            Dataset::HistoricalStock | Dataset::DonationTrends | Dataset::Forecast => None,
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
