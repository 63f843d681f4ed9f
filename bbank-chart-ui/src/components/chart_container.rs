//! Plot container div.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id Plotly renders into
    pub id: String,
    /// Hidden containers keep their id so a later render finds them
    #[props(default = true)]
    pub visible: bool,
    #[props(default = 450)]
    pub min_height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = if props.visible {
        format!("min-height: {}px; width: 100%;", props.min_height)
    } else {
        "display: none;".to_string()
    };

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
