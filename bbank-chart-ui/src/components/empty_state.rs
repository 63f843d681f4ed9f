use dioxus::prelude::*;

/// Friendly placeholder for a request that succeeded with nothing to plot.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; opacity: 0.6; font-style: italic;",
            "{message}"
        }
    }
}
