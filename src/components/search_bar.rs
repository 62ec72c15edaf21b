//! Search input component

use dioxus::prelude::*;

/// Props for SearchBar
#[derive(Props, Clone, PartialEq)]
pub struct SearchBarProps {
    pub value: String,
    pub on_input: EventHandler<String>,
}

/// Free-text search input with a clear button when non-empty.
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let on_input = props.on_input;
    let is_empty = props.value.is_empty();

    rsx! {
        div {
            class: "relative",
            div {
                class: "absolute inset-y-0 left-0 pl-4 flex items-center pointer-events-none",
                svg {
                    class: "h-5 w-5 text-gray-400",
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
            input {
                r#type: "text",
                placeholder: "Search for resources by name, organization or category...",
                value: "{props.value}",
                oninput: move |e| on_input.call(e.value()),
                class: "w-full pl-12 pr-10 py-3 bg-gray-50 border border-gray-200 rounded-xl text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all"
            }
            if !is_empty {
                button {
                    class: "absolute inset-y-0 right-0 pr-4 flex items-center text-gray-400 hover:text-gray-600",
                    onclick: move |_| on_input.call(String::new()),
                    svg {
                        class: "h-5 w-5",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M6 18L18 6M6 6l12 12"
                        }
                    }
                }
            }
        }
    }
}
