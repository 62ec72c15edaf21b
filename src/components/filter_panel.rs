//! Filter sidebar component

use dioxus::prelude::*;

use crate::state::{DirectoryQuery, FilterDimension};

/// Props for FilterPanel
#[derive(Props, Clone, PartialEq)]
pub struct FilterPanelProps {
    pub query: DirectoryQuery,
    pub on_toggle: EventHandler<(FilterDimension, String, bool)>,
}

/// Checkbox sidebar with one section per filter dimension. Emits
/// `(dimension, value, included)` on every checkbox change.
#[component]
pub fn FilterPanel(props: FilterPanelProps) -> Element {
    rsx! {
        aside {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",
            h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Filter Resources" }

            for dimension in FilterDimension::variants() {
                FilterSection {
                    key: "{dimension:?}",
                    dimension: *dimension,
                    selected: props.query.selected(*dimension).to_vec(),
                    on_toggle: props.on_toggle,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FilterSectionProps {
    dimension: FilterDimension,
    selected: Vec<String>,
    on_toggle: EventHandler<(FilterDimension, String, bool)>,
}

#[component]
fn FilterSection(props: FilterSectionProps) -> Element {
    let dimension = props.dimension;
    let on_toggle = props.on_toggle;

    // The category list is long; cap its height and scroll.
    let list_class = if dimension == FilterDimension::Category {
        "space-y-2 max-h-60 overflow-y-auto pr-2"
    } else {
        "space-y-2"
    };

    rsx! {
        div {
            class: "mb-4",
            h3 {
                class: "text-md font-medium text-gray-700 py-2 border-b border-gray-100 mb-2",
                "{dimension.label()}"
            }
            div {
                class: "{list_class}",
                for option in dimension.options() {
                    {
                        let option = *option;
                        let checked = props.selected.iter().any(|v| v == option);
                        rsx! {
                            label {
                                key: "{option}",
                                class: "flex items-center gap-2 text-sm text-gray-600 cursor-pointer hover:text-gray-900",
                                input {
                                    r#type: "checkbox",
                                    class: "rounded border-gray-300",
                                    checked,
                                    oninput: move |e: FormEvent| {
                                        on_toggle.call((dimension, option.to_string(), e.checked()));
                                    },
                                }
                                "{option}"
                            }
                        }
                    }
                }
            }
        }
    }
}
