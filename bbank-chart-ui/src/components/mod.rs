//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod chart_panel;
mod chart_type_selector;
mod empty_state;
mod error_display;
mod loading_spinner;
mod predict_expiry_form;
mod reload_prompt;
mod summary_boxes;
mod theme_toggle;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chart_panel::ChartPanel;
pub use chart_type_selector::ChartTypeSelector;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use predict_expiry_form::PredictExpiryForm;
pub use reload_prompt::ReloadPrompt;
pub use summary_boxes::SummaryBoxes;
pub use theme_toggle::ThemeToggle;
