//! Dropdown for switching a panel's visual encoding.

use bbank_chart::ChartKind;
use dioxus::prelude::*;

#[component]
pub fn ChartTypeSelector(
    kinds: Vec<ChartKind>,
    selected: ChartKind,
    on_change: EventHandler<ChartKind>,
) -> Element {
    let on_select = move |evt: Event<FormData>| {
        if let Ok(kind) = evt.value().parse::<ChartKind>() {
            on_change.call(kind);
        }
    };

    rsx! {
        div {
            style: "margin-bottom: 12px; display: flex; justify-content: center;",
            select {
                style: "border: 1px solid #ccc; border-radius: 4px; padding: 4px 12px; font-size: 14px;",
                onchange: on_select,
                for kind in kinds.iter() {
                    option {
                        value: "{kind.as_str()}",
                        selected: *kind == selected,
                        "{kind.display_name()}"
                    }
                }
            }
        }
    }
}
