//! Generic chart panel: one configuration, one load state, one pipeline.
//!
//! A panel is described by a [`config::PanelConfig`] (dataset, transform,
//! chart kinds, titles). Its data lives in a [`state::LoadTracker`] whose
//! generation counter discards responses from superseded or torn-down
//! requests. [`view::panel_view`] decides what to show for the current state.

pub mod config;
pub mod pipeline;
pub mod presets;
pub mod state;
pub mod view;

pub use config::PanelConfig;
pub use pipeline::{fetch_series, load_panel};
pub use state::{LoadState, LoadTracker, Ticket};
pub use view::{panel_view, PanelView};
