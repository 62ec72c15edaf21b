//! Directory page - filter, search, and paginate resource listings
//!
//! The page owns the query state and re-fetches explicitly: every
//! mutation (filter toggle, search edit, load more) updates the query
//! and spawns one fetch. Overlapping fetches run to completion
//! independently; the last response to arrive wins.

use dioxus::prelude::*;

use crate::components::{FilterPanel, NoResults, ResourceCard, ResourceCardSkeleton, SearchBar};
use crate::state::{DirectoryQuery, FilterDimension, ResultSet};
use crate::types::ResourcePage;

/// Directory page - browse resource listings with filters and search
#[component]
pub fn Directory() -> Element {
    let mut query = use_signal(DirectoryQuery::default);
    let results = use_signal(ResultSet::default);
    let loading = use_signal(|| true);

    // Initial fetch with the default (empty) query.
    use_effect(move || {
        spawn(load_page(DirectoryQuery::default(), results, loading));
    });

    let on_toggle = move |(dimension, value, included): (FilterDimension, String, bool)| {
        query.write().toggle(dimension, &value, included);
        spawn(load_page(query(), results, loading));
    };

    let on_search = move |term: String| {
        query.write().set_search(term);
        spawn(load_page(query(), results, loading));
    };

    let on_load_more = move |_| {
        query.write().next_page();
        spawn(load_page(query(), results, loading));
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                    h1 {
                        class: "text-3xl font-bold text-gray-900 mb-2",
                        "Recovery Resource Directory"
                    }
                    p {
                        class: "text-gray-600",
                        "Find recovery, family, housing, and transportation support across the region."
                    }
                }
            }

            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                div {
                    class: "flex flex-col lg:flex-row gap-6",

                    div {
                        class: "lg:w-1/4",
                        FilterPanel { query: query(), on_toggle }
                    }

                    main {
                        class: "lg:w-3/4",

                        div {
                            class: "mb-6",
                            SearchBar {
                                value: query().search().to_string(),
                                on_input: on_search,
                            }
                        }

                        div {
                            class: "mb-4 text-sm text-gray-500",
                            "Showing "
                            span { class: "font-medium text-gray-900", "{results().records.len()}" }
                            " of "
                            span { class: "font-medium text-gray-900", "{results().total_rows}" }
                            " resources"
                        }

                        if loading() {
                            div {
                                class: "grid grid-cols-1 gap-6",
                                for i in 0..3 {
                                    ResourceCardSkeleton { key: "{i}" }
                                }
                            }
                        } else if results().records.is_empty() {
                            NoResults {}
                        } else {
                            div {
                                class: "grid grid-cols-1 gap-6",
                                for (index, resource) in results().records.into_iter().enumerate() {
                                    {
                                        let card_key = resource
                                            .id
                                            .map(|id| id.to_string())
                                            .unwrap_or_else(|| format!("row-{index}"));
                                        rsx! {
                                            ResourceCard { key: "{card_key}", resource }
                                        }
                                    }
                                }
                            }

                            if results().has_more() {
                                div {
                                    class: "mt-6 text-center",
                                    button {
                                        class: "px-6 py-3 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors",
                                        onclick: on_load_more,
                                        "Load More"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Fetch one page for `query` and fold it into `results`. Failures are
/// logged and absorbed so previously displayed results stay visible;
/// the loading flag clears on every exit path.
async fn load_page(
    query: DirectoryQuery,
    mut results: Signal<ResultSet>,
    mut loading: Signal<bool>,
) {
    loading.set(true);
    let page = query.page();

    let outcome = fetch_resources(query).await;
    results.write().apply(page, outcome);

    loading.set(false);
}

/// Server function proxying one fetch to the resource data service.
#[server]
async fn fetch_resources(query: DirectoryQuery) -> Result<ResourcePage, ServerFnError> {
    let client = crate::api::server_client();
    client
        .fetch_page(&query)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
