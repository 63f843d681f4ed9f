//! Dismissable error panel with a retry action.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    pub on_retry: EventHandler<()>,
    pub on_dismiss: EventHandler<()>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let on_retry = props.on_retry;
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; display: flex; align-items: center; gap: 12px;",
            div {
                style: "flex: 1;",
                strong { "Error: " }
                "{props.message}"
            }
            button {
                style: "background: #C62828; color: white; border: none; border-radius: 4px; padding: 4px 12px; cursor: pointer;",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
            button {
                style: "background: none; border: none; color: #C62828; font-size: 18px; cursor: pointer;",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
