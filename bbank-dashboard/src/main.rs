//! Blood Bank Dashboard
//!
//! Mounts one `ChartPanel` per preset: blood type distribution (sorted and
//! unsorted), stock over time, donation frequency, historical stock,
//! donation trends and the stock forecast.
//!
//! Data flow:
//! 1. The root creates `AppState` (API config + dark mode) and passes it down.
//! 2. Each panel fetches its dataset from the API, falling back to the
//!    built-in mock payloads when the API is unreachable.
//! 3. Each panel reshapes its payload and hands the figure to Plotly.js.
//!
//! Below the grid, the expiry prediction form posts to the separate
//! prediction service.

use bbank_chart_ui::components::{ChartPanel, PredictExpiryForm, ThemeToggle};
use bbank_chart_ui::js_bridge;
use bbank_chart_ui::state::AppState;
use bbank_core::ApiConfig;
use bbank_panel::presets::presets;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_hook(|| AppState::new(ApiConfig::default()));

    use_hook(|| {
        log::info!("Starting blood bank dashboard");
        js_bridge::init_plotly();
    });

    let theme = state.theme();
    let page_style = format!(
        "min-height: 100vh; background: {}; color: {}; font-family: system-ui, -apple-system, sans-serif;",
        theme.paper_bgcolor(),
        theme.font_color()
    );

    rsx! {
        div {
            style: "{page_style}",
            div {
                style: "max-width: 1200px; margin: 0 auto; padding: 16px;",

                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;",
                    h1 {
                        style: "margin: 0; font-size: 28px;",
                        "Blood Bank Dashboard"
                    }
                    ThemeToggle { state }
                }

                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(480px, 1fr)); gap: 24px;",
                    for preset in presets() {
                        ChartPanel {
                            key: "{preset.id}",
                            config: preset.clone(),
                            state,
                        }
                    }
                }

                PredictExpiryForm { state }
            }
        }
    }
}
