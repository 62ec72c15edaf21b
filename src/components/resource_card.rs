//! Resource card component

use dioxus::prelude::*;

use crate::types::Resource;

/// Props for ResourceCard
#[derive(Props, Clone, PartialEq)]
pub struct ResourceCardProps {
    pub resource: Resource,
}

/// Card displaying a single resource listing. Pure projection of the
/// record: absent fields fall back to "N/A" or drop their section.
#[component]
pub fn ResourceCard(props: ResourceCardProps) -> Element {
    let resource = &props.resource;
    let populations = resource.populations();

    rsx! {
        div {
            class: "bg-white rounded-xl shadow-md overflow-hidden flex",

            // Left action rail: one link per available contact channel.
            if resource.has_actions() {
                div {
                    class: "flex flex-col bg-blue-700 w-[70px] shrink-0",
                    if let Some(website) = &resource.website {
                        a {
                            href: "{website}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "flex items-center justify-center h-[70px] text-white hover:bg-blue-600 transition-colors",
                            GlobeIcon {}
                        }
                    }
                    if let Some(tel) = resource.tel_link() {
                        a {
                            href: "{tel}",
                            class: "flex items-center justify-center h-[70px] text-white hover:bg-blue-600 transition-colors",
                            PhoneIcon {}
                        }
                    }
                    if let Some(maps) = resource.maps_link() {
                        a {
                            href: "{maps}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "flex items-center justify-center h-[70px] text-white hover:bg-blue-600 transition-colors",
                            MapPinIcon {}
                        }
                    }
                }
            }

            div {
                class: "flex-1 p-6",
                div {
                    class: "flex justify-between",
                    div {
                        class: "flex-1",
                        h3 {
                            class: "text-2xl font-normal text-gray-900 mb-1",
                            {resource.location_name.as_deref().unwrap_or("No Name")}
                        }
                        h5 {
                            class: "text-md font-light text-gray-500",
                            {resource.organization.as_deref().unwrap_or("No Organization")}
                        }

                        div {
                            class: "flex flex-wrap gap-2 mt-3",
                            if let Some(resource_type) = &resource.resource_type {
                                Badge { value: resource_type.clone() }
                            }
                            if let Some(category) = &resource.category {
                                Badge { value: category.clone() }
                            }
                        }
                    }

                    if let Some(image) = &resource.image {
                        div {
                            class: "ml-4",
                            img {
                                src: "{image}",
                                alt: "Organization logo",
                                class: "max-w-[200px] max-h-[120px] object-contain",
                            }
                        }
                    }
                }

                div {
                    class: "mt-4 text-sm text-gray-700",
                    p {
                        strong { "Phone: " }
                        {resource.phone.as_deref().unwrap_or("N/A")}
                    }
                    p {
                        strong { "Address:" }
                        br {}
                        {resource.city.as_deref().unwrap_or("N/A")}
                        ", "
                        {resource.state.as_deref().unwrap_or("N/A")}
                        " "
                        {resource.zip_code.as_deref().unwrap_or("N/A")}
                    }
                }

                if !populations.is_empty() {
                    div {
                        class: "mt-3 text-sm",
                        strong { "Populations Served:" }
                        div {
                            class: "flex flex-wrap gap-2 mt-1",
                            for population in populations {
                                Badge { key: "{population}", value: population.clone() }
                            }
                        }
                    }
                }

                if let Some(county) = &resource.county {
                    div {
                        class: "mt-3 text-sm",
                        strong { "Counties Served:" }
                        div {
                            class: "flex flex-wrap gap-2 mt-1",
                            Badge { value: county.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Badge(value: String) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-blue-50 text-blue-800 border border-blue-100",
            "{value}"
        }
    }
}

#[component]
fn GlobeIcon() -> Element {
    rsx! {
        svg {
            class: "w-6 h-6",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9a9 9 0 01-9-9m9 9c1.657 0 3-4.03 3-9s-1.343-9-3-9m0 18c-1.657 0-3-4.03-3-9s1.343-9 3-9m-9 9a9 9 0 019-9"
            }
        }
    }
}

#[component]
fn PhoneIcon() -> Element {
    rsx! {
        svg {
            class: "w-6 h-6",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"
            }
        }
    }
}

#[component]
fn MapPinIcon() -> Element {
    rsx! {
        svg {
            class: "w-6 h-6",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"
            }
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M15 11a3 3 0 11-6 0 3 3 0 016 0z"
            }
        }
    }
}
