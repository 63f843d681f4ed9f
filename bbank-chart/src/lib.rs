//! Chart view: turns a series and a chart kind into a fully specified
//! Plotly figure (`data` + `layout` + `config`).
//!
//! Nothing here fails except on an empty series, which the caller renders
//! as an empty state rather than an error.

pub mod format;
pub mod kind;
pub mod plot;
pub mod theme;

pub use kind::ChartKind;
pub use plot::{ChartOptions, PlotSpec};
pub use theme::Theme;
