use bbank_core::DashboardError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The visual encodings a chart panel can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    #[default]
    Bar,
    HorizontalBar,
    Pie,
    Donut,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Bar,
        ChartKind::HorizontalBar,
        ChartKind::Pie,
        ChartKind::Donut,
        ChartKind::Line,
    ];

    /// Value used in selectors and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::HorizontalBar => "horizontal",
            ChartKind::Pie => "pie",
            ChartKind::Donut => "donut",
            ChartKind::Line => "line",
        }
    }

    /// Human readable name for selector options.
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::HorizontalBar => "Horizontal Bar",
            ChartKind::Pie => "Pie",
            ChartKind::Donut => "Donut",
            ChartKind::Line => "Line",
        }
    }

    /// Pie and donut: no axes, legend instead.
    pub fn is_radial(&self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Donut)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "horizontal" | "horizontal-bar" | "hbar" => Ok(ChartKind::HorizontalBar),
            "pie" => Ok(ChartKind::Pie),
            "donut" | "doughnut" => Ok(ChartKind::Donut),
            "line" => Ok(ChartKind::Line),
            other => Err(DashboardError::InvalidInput(format!(
                "unknown chart type '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChartKind;

    #[test]
    fn test_parse_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.as_str().parse::<ChartKind>().unwrap(), kind);
        }
        assert_eq!("Horizontal-Bar".parse::<ChartKind>().unwrap(), ChartKind::HorizontalBar);
        assert!("scatter3d".parse::<ChartKind>().is_err());
    }

    #[test]
    fn test_radial_kinds() {
        let radial: Vec<ChartKind> = ChartKind::ALL.into_iter().filter(|k| k.is_radial()).collect();
        assert_eq!(radial, vec![ChartKind::Pie, ChartKind::Donut]);
    }
}
