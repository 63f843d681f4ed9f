use dioxus::prelude::*;

/// Shown for a panel whose error was dismissed: nothing loaded, nothing pending.
#[component]
pub fn ReloadPrompt(on_reload: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; gap: 12px; padding: 40px; opacity: 0.8;",
            span { "Chart not loaded." }
            button {
                style: "border: 1px solid #888; border-radius: 4px; padding: 4px 12px; background: none; color: inherit; cursor: pointer;",
                onclick: move |_| on_reload.call(()),
                "Reload"
            }
        }
    }
}
