//! The one chart panel every dashboard chart is an instance of.
//!
//! Lifecycle:
//! 1. Mount (and whenever `AppState::api` changes): `begin` a load and spawn the fetch.
//! 2. The spawned task settles its result with the ticket it was given;
//!    results from superseded requests are dropped by the tracker.
//! 3. Retry re-issues from Error, from a dismissed (Idle) panel or while still
//!    loading; refresh from Success.
//! 4. Unmount tears the tracker down so nothing in flight lands afterwards,
//!    and purges the figure.

use bbank_chart::ChartKind;
use bbank_core::client::ApiClient;
use bbank_core::{ApiConfig, WithFallback};
use bbank_data::series::Series;
use bbank_panel::view::{summary, PanelView};
use bbank_panel::{fetch_series, panel_view, LoadTracker, PanelConfig, Ticket};
use dioxus::prelude::*;

use super::{
    ChartContainer, ChartHeader, ChartTypeSelector, EmptyState, ErrorDisplay, LoadingSpinner,
    ReloadPrompt, SummaryBoxes,
};
use crate::js_bridge;
use crate::state::AppState;

/// Fetch in the background and settle into `tracker` under `ticket`.
fn spawn_fetch(
    mut tracker: Signal<LoadTracker<Series>>,
    ticket: Ticket,
    config: PanelConfig,
    api: ApiConfig,
) {
    spawn(async move {
        let result = match ApiClient::new(api) {
            Ok(client) => fetch_series(&WithFallback::new(client), &config).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log::warn!("{}: {}", config.id, e);
        }
        tracker.write().settle(ticket, result);
    });
}

#[component]
pub fn ChartPanel(config: PanelConfig, state: AppState) -> Element {
    let mut tracker = use_signal(LoadTracker::<Series>::new);
    let mut kind = use_signal(|| config.default_kind);

    // Load on mount; reading `state.api` makes this re-run when it changes.
    let load_config = config.clone();
    use_effect(move || {
        let api = state.api.read().clone();
        let ticket = tracker.write().begin();
        spawn_fetch(tracker, ticket, load_config.clone(), api);
    });

    // Keep the Plotly figure in sync with data, chart kind and theme.
    let plot_config = config.clone();
    use_effect(move || {
        let view = panel_view(tracker.read().state(), &plot_config, kind(), state.theme());
        match view {
            PanelView::Chart(spec) => js_bridge::render_plot(plot_config.id, &spec.to_json()),
            _ => js_bridge::purge_plot(plot_config.id),
        }
    });

    let panel_id = config.id;
    use_drop(move || {
        if let Ok(mut tracker) = tracker.try_write() {
            tracker.teardown();
        }
        js_bridge::purge_plot(panel_id);
    });

    let retry_config = config.clone();
    let on_retry = move |_: ()| {
        let ticket = tracker.write().retry();
        if let Some(ticket) = ticket {
            spawn_fetch(tracker, ticket, retry_config.clone(), state.api.read().clone());
        }
    };

    let refresh_config = config.clone();
    let on_refresh = move |_: MouseEvent| {
        let ticket = tracker.write().refresh();
        if let Some(ticket) = ticket {
            spawn_fetch(tracker, ticket, refresh_config.clone(), state.api.read().clone());
        }
    };

    let view = panel_view(tracker.read().state(), &config, kind(), state.theme());
    let showing_chart = matches!(view, PanelView::Chart(_));
    let can_refresh = matches!(view, PanelView::Chart(_) | PanelView::Empty { .. });
    let started = tracker.read().has_started();
    let summary_items = match tracker.read().state().data() {
        Some(series) if config.show_summary => summary(series),
        _ => Vec::new(),
    };

    let status = match view {
        PanelView::Idle if started => rsx! { ReloadPrompt { on_reload: on_retry } },
        PanelView::Idle | PanelView::Loading => rsx! { LoadingSpinner {} },
        PanelView::Error { message } => rsx! {
            ErrorDisplay {
                message,
                on_retry: on_retry,
                on_dismiss: move |_: ()| {
                    tracker.write().dismiss();
                },
            }
        },
        PanelView::Empty { message } => rsx! { EmptyState { message } },
        PanelView::Chart(_) => rsx! {},
    };

    rsx! {
        div {
            class: "chart-panel",
            style: "border-radius: 12px; box-shadow: 0 1px 4px rgba(0,0,0,0.15); padding: 20px; margin-bottom: 24px;",

            ChartHeader {
                title: config.options.title.clone(),
                unit_description: config.options.value_title.clone(),
                if can_refresh {
                    button {
                        style: "background: none; border: 1px solid #888; border-radius: 4px; padding: 2px 10px; color: inherit; cursor: pointer;",
                        title: "Reload this chart",
                        onclick: on_refresh,
                        "Refresh"
                    }
                }
            }

            if config.has_selector() {
                ChartTypeSelector {
                    kinds: config.kinds.clone(),
                    selected: config.resolve_kind(kind()),
                    on_change: move |k: ChartKind| kind.set(k),
                }
            }

            {status}

            ChartContainer {
                id: config.id.to_string(),
                visible: showing_chart,
            }

            if !summary_items.is_empty() {
                SummaryBoxes { items: summary_items }
            }
        }
    }
}
