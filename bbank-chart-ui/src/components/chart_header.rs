use dioxus::prelude::*;

/// Panel title row. `children` are the panel's actions (e.g. Refresh) and sit
/// on the right.
#[component]
pub fn ChartHeader(
    title: String,
    #[props(default = String::new())] unit_description: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 12px; margin-bottom: 8px;",
            div {
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 18px; font-weight: bold;",
                    "{title}"
                }
                if !unit_description.is_empty() {
                    p {
                        style: "margin: 0; font-size: 12px; opacity: 0.7;",
                        "Values: {unit_description}"
                    }
                }
            }
            {children}
        }
    }
}
