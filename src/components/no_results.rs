//! Empty-state component

use dioxus::prelude::*;

/// Shown when a fetch completed and no resources matched.
#[component]
pub fn NoResults() -> Element {
    rsx! {
        div {
            class: "text-center py-12",
            div {
                class: "inline-flex items-center justify-center w-16 h-16 rounded-full bg-gray-100 mb-4",
                svg {
                    class: "w-8 h-8 text-gray-400",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"
                    }
                }
            }
            h3 { class: "text-lg font-medium text-gray-900 mb-2", "No resources found" }
            p {
                class: "text-gray-500",
                "Try adjusting your search or filter criteria to find what you're looking for."
            }
        }
    }
}
