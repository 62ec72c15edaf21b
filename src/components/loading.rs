//! Loading components

use dioxus::prelude::*;

/// Skeleton placeholder matching the resource card layout.
#[component]
pub fn ResourceCardSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl shadow-md overflow-hidden flex animate-pulse",
            div { class: "w-[70px] bg-gray-200 shrink-0" }
            div {
                class: "flex-1 p-6",
                div { class: "h-7 w-2/3 bg-gray-200 rounded mb-2" }
                div { class: "h-4 w-1/3 bg-gray-200 rounded mb-4" }
                div {
                    class: "flex gap-2 mb-4",
                    div { class: "h-5 w-24 bg-gray-200 rounded-full" }
                    div { class: "h-5 w-28 bg-gray-200 rounded-full" }
                }
                div { class: "h-4 w-1/2 bg-gray-200 rounded mb-2" }
                div { class: "h-4 w-2/5 bg-gray-200 rounded" }
            }
        }
    }
}
