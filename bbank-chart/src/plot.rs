//! Plotly figure model and the presentation policy that fills it in.
//!
//! Policy:
//! - pie/donut: no axis titles, legend shown, slice labels inside
//! - bar/horizontal/line: axis titles, no legend, padded value-axis range
//!   `[max(0, min - 50), max + 50]`
//! - text labels always use thousands separators

use bbank_core::{BloodType, DashboardError, Result};
use bbank_data::series::Series;
use serde::Serialize;

use crate::format::{thousands, tick_format};
use crate::kind::ChartKind;
use crate::theme::Theme;

/// Padding added on both ends of the value axis.
pub const RANGE_PADDING: f64 = 50.0;

/// Hole size for donut charts, as a fraction of the radius.
pub const DONUT_HOLE: f64 = 0.4;

pub const BAR_COLOR: &str = "rgba(0,123,255,0.8)";
pub const LINE_COLOR: &str = "#c90b34";

/// Titles and colour for one chart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub title: String,
    /// Title of the category (or date) axis
    pub category_title: String,
    /// Title of the value axis
    pub value_title: String,
    /// Overrides the default bar/line colour
    pub color: Option<String>,
}

impl ChartOptions {
    pub fn new(title: &str, category_title: &str, value_title: &str) -> Self {
        Self {
            title: title.to_string(),
            category_title: category_title.to_string(),
            value_title: value_title.to_string(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

/// A complete figure, serializable straight into `Plotly.react`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

/// Either text categories or numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Column {
    Text(Vec<String>),
    Numbers(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    pub marker: Marker,
    pub text: Vec<String>,
    pub textposition: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Per-slice colours for pie/donut
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: AxisLayout,
    pub yaxis: AxisLayout,
    pub height: u32,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bargap: Option<f64>,
    pub showlegend: bool,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AxisLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<&'static str>,
    pub automargin: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub l: u32,
    pub r: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotConfig {
    pub responsive: bool,
    #[serde(rename = "displaylogo")]
    pub display_logo: bool,
}

impl PlotSpec {
    /// Build the figure for `series` drawn as `kind`.
    ///
    /// Returns [`DashboardError::EmptyData`] for an empty series.
    pub fn build(
        series: &Series,
        kind: ChartKind,
        options: &ChartOptions,
        theme: Theme,
    ) -> Result<PlotSpec> {
        let (min, max) = series.value_bounds().ok_or(DashboardError::EmptyData)?;
        let labels = series.labels();
        let values = series.values();
        let text: Vec<String> = values.iter().map(|v| thousands(*v)).collect();

        let trace = if kind.is_radial() {
            Trace {
                trace_type: "pie",
                x: None,
                y: None,
                labels: Some(labels),
                values: Some(values),
                orientation: None,
                mode: None,
                hole: (kind == ChartKind::Donut).then_some(DONUT_HOLE),
                marker: Marker {
                    color: None,
                    colors: slice_colors(series),
                },
                text,
                textposition: "inside",
            }
        } else {
            let color = options.color.clone().unwrap_or_else(|| {
                if kind == ChartKind::Line {
                    LINE_COLOR.to_string()
                } else {
                    BAR_COLOR.to_string()
                }
            });
            let (x, y) = if kind == ChartKind::HorizontalBar {
                (Column::Numbers(values), Column::Text(labels))
            } else {
                (Column::Text(labels), Column::Numbers(values))
            };
            Trace {
                trace_type: if kind == ChartKind::Line { "scatter" } else { "bar" },
                x: Some(x),
                y: Some(y),
                labels: None,
                values: None,
                orientation: match kind {
                    ChartKind::Bar => Some("v"),
                    ChartKind::HorizontalBar => Some("h"),
                    _ => None,
                },
                mode: (kind == ChartKind::Line).then_some("lines+markers"),
                hole: None,
                marker: Marker {
                    color: Some(color),
                    colors: None,
                },
                text,
                textposition: "auto",
            }
        };

        let (xaxis, yaxis) = if kind.is_radial() {
            (hidden_axis(), hidden_axis())
        } else {
            let category_axis = AxisLayout {
                title: Some(Title {
                    text: options.category_title.clone(),
                }),
                axis_type: series.is_temporal().then_some("date"),
                tickformat: series.is_temporal().then_some("%Y-%m-%d"),
                tickangle: Some(-30),
                range: None,
                gridcolor: Some(theme.grid_color()),
                automargin: true,
                visible: true,
            };
            let value_axis = AxisLayout {
                title: Some(Title {
                    text: options.value_title.clone(),
                }),
                axis_type: None,
                tickformat: Some(tick_format(&series.values())),
                tickangle: None,
                range: Some(padded_range(min, max)),
                gridcolor: Some(theme.grid_color()),
                automargin: true,
                visible: true,
            };
            if kind == ChartKind::HorizontalBar {
                (value_axis, category_axis)
            } else {
                (category_axis, value_axis)
            }
        };

        Ok(PlotSpec {
            data: vec![trace],
            layout: Layout {
                title: Title {
                    text: options.title.clone(),
                },
                xaxis,
                yaxis,
                height: if kind == ChartKind::Line { 500 } else { 450 },
                margin: Margin {
                    t: 40,
                    l: 50,
                    r: 30,
                    b: 60,
                },
                bargap: matches!(kind, ChartKind::Bar | ChartKind::HorizontalBar).then_some(0.3),
                showlegend: kind.is_radial(),
                paper_bgcolor: theme.paper_bgcolor(),
                plot_bgcolor: theme.plot_bgcolor(),
                font: Font {
                    color: theme.font_color(),
                },
            },
            config: PlotConfig {
                responsive: true,
                display_logo: false,
            },
        })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Value-axis range padded by [`RANGE_PADDING`], never below zero.
pub fn padded_range(min: f64, max: f64) -> [f64; 2] {
    [(min - RANGE_PADDING).max(0.0), max + RANGE_PADDING]
}

fn hidden_axis() -> AxisLayout {
    AxisLayout {
        visible: false,
        ..AxisLayout::default()
    }
}

/// Fixed colour per blood type so slices keep their colour across reloads.
pub fn blood_type_color(bt: BloodType) -> &'static str {
    match bt {
        BloodType::APos => "#c62828",
        BloodType::ANeg => "#ef9a9a",
        BloodType::BPos => "#1565c0",
        BloodType::BNeg => "#90caf9",
        BloodType::AbPos => "#6a1b9a",
        BloodType::AbNeg => "#ce93d8",
        BloodType::OPos => "#2e7d32",
        BloodType::ONeg => "#a5d6a7",
    }
}

fn slice_colors(series: &Series) -> Option<Vec<String>> {
    match series {
        Series::Categorical(points) => Some(
            points
                .iter()
                .map(|p| blood_type_color(p.label).to_string())
                .collect(),
        ),
        Series::Temporal(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbank_core::models::{BloodTypeCount, TimeSeriesPoint};
    use chrono::NaiveDate;

    fn counts() -> Series {
        Series::Categorical(vec![
            BloodTypeCount {
                label: BloodType::APos,
                value: 1200,
            },
            BloodTypeCount {
                label: BloodType::ONeg,
                value: 30,
            },
        ])
    }

    fn options() -> ChartOptions {
        ChartOptions::new("Blood Type Distribution", "Blood Type", "Units Available")
    }

    fn build(kind: ChartKind) -> PlotSpec {
        PlotSpec::build(&counts(), kind, &options(), Theme::Light).unwrap()
    }

    #[test]
    fn test_donut_has_hole_and_legend() {
        let spec = build(ChartKind::Donut);
        assert!(spec.data[0].hole.unwrap() > 0.0);
        assert!(spec.layout.showlegend);
        assert_eq!(spec.data[0].trace_type, "pie");
        assert_eq!(spec.data[0].textposition, "inside");
    }

    #[test]
    fn test_bar_has_no_hole_or_legend() {
        let spec = build(ChartKind::Bar);
        assert!(spec.data[0].hole.unwrap_or(0.0) == 0.0);
        assert!(!spec.layout.showlegend);
        let json = serde_json::to_value(&spec).unwrap();
        assert!(json["data"][0].get("hole").is_none());
        assert_eq!(json["layout"]["showlegend"], false);
    }

    #[test]
    fn test_radial_kinds_hide_axis_titles() {
        for kind in [ChartKind::Pie, ChartKind::Donut] {
            let spec = build(kind);
            assert!(spec.layout.xaxis.title.is_none());
            assert!(spec.layout.yaxis.title.is_none());
            assert!(!spec.layout.xaxis.visible);
        }
        for kind in [ChartKind::Bar, ChartKind::HorizontalBar, ChartKind::Line] {
            let spec = build(kind);
            assert!(spec.layout.xaxis.title.is_some(), "{}", kind);
            assert!(spec.layout.yaxis.title.is_some(), "{}", kind);
            assert!(!spec.layout.showlegend);
        }
    }

    #[test]
    fn test_value_axis_range_is_padded() {
        let spec = build(ChartKind::Bar);
        assert_eq!(spec.layout.yaxis.range, Some([0.0, 1250.0]));
        assert_eq!(padded_range(400.0, 900.0), [350.0, 950.0]);
    }

    #[test]
    fn test_horizontal_bar_swaps_axes() {
        let spec = build(ChartKind::HorizontalBar);
        let trace = &spec.data[0];
        assert_eq!(trace.orientation, Some("h"));
        assert_eq!(trace.x, Some(Column::Numbers(vec![1200.0, 30.0])));
        assert_eq!(
            trace.y,
            Some(Column::Text(vec!["A+".to_string(), "O-".to_string()]))
        );
        assert_eq!(spec.layout.xaxis.range, Some([0.0, 1250.0]));
        assert_eq!(
            spec.layout.xaxis.title.as_ref().map(|t| t.text.as_str()),
            Some("Units Available")
        );
        assert_eq!(spec.layout.yaxis.range, None);
    }

    #[test]
    fn test_text_labels_use_thousands_separators() {
        let spec = build(ChartKind::Bar);
        assert_eq!(spec.data[0].text, vec!["1,200", "30"]);
        assert_eq!(spec.layout.yaxis.tickformat, Some(",d"));
    }

    #[test]
    fn test_line_over_dates() {
        let series = Series::Temporal(vec![
            TimeSeriesPoint {
                date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
                value: 3890.0,
            },
            TimeSeriesPoint {
                date: NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
                value: 4015.0,
            },
        ]);
        let spec = PlotSpec::build(&series, ChartKind::Line, &options(), Theme::Dark).unwrap();
        assert_eq!(spec.data[0].trace_type, "scatter");
        assert_eq!(spec.data[0].mode, Some("lines+markers"));
        assert_eq!(spec.layout.xaxis.axis_type, Some("date"));
        assert_eq!(spec.layout.height, 500);
        assert_eq!(spec.layout.paper_bgcolor, Theme::Dark.paper_bgcolor());
        assert_eq!(spec.data[0].marker.color.as_deref(), Some(LINE_COLOR));
    }

    #[test]
    fn test_empty_series_is_empty_data() {
        let err = PlotSpec::build(
            &Series::Temporal(Vec::new()),
            ChartKind::Bar,
            &options(),
            Theme::Light,
        )
        .unwrap_err();
        assert!(err.is_empty_data());
    }

    #[test]
    fn test_color_override() {
        let spec = PlotSpec::build(
            &counts(),
            ChartKind::Bar,
            &options().with_color("steelblue"),
            Theme::Light,
        )
        .unwrap();
        assert_eq!(spec.data[0].marker.color.as_deref(), Some("steelblue"));
    }
}
