use bbank_panel::view::SummaryItem;
use dioxus::prelude::*;

/// "A+  1,180 units" boxes laid out under a categorical chart.
#[component]
pub fn SummaryBoxes(items: Vec<SummaryItem>) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; margin-top: 16px;",
            for item in items.iter() {
                div {
                    key: "{item.label}",
                    style: "min-width: 100px; padding: 8px 16px; border-radius: 8px; border: 1px solid #93c5fd; background: linear-gradient(to bottom right, #dbeafe, #bfdbfe); color: #1e3a8a; display: flex; align-items: center; gap: 12px; font-size: 14px; font-weight: 600;",
                    span { "{item.label}" }
                    span { style: "font-weight: bold;", "{item.units}" }
                }
            }
        }
    }
}
