use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;

/// Light/dark switch. Flips `AppState::dark_mode`; panels re-render their
/// figures with the new theme on their own.
#[component]
pub fn ThemeToggle(state: AppState) -> Element {
    let mut dark_mode = state.dark_mode;
    let dark = dark_mode();

    let on_toggle = move |_: MouseEvent| {
        let next = !dark_mode();
        dark_mode.set(next);
        js_bridge::set_document_theme(next);
    };

    rsx! {
        button {
            style: "border: 1px solid #888; border-radius: 16px; padding: 4px 14px; background: none; color: inherit; cursor: pointer;",
            onclick: on_toggle,
            if dark { "Light mode" } else { "Dark mode" }
        }
    }
}
