//! Castle detail page

use dioxus::prelude::*;

use crate::components::LoadingSpinner;
use crate::format::to_title_case;
use crate::routes::Route;
use crate::types::{country_by_code, Castle, Facilities};

/// Castle detail page, looked up by slug
#[component]
pub fn CastleDetail(web_name: String) -> Element {
    let castle = use_server_future(move || fetch_castle(web_name.clone()))?;

    match &*castle.value().read() {
        None => rsx! {
            div { class: "py-24 flex justify-center", LoadingSpinner {} }
        },
        Some(Err(e)) => rsx! {
            div {
                class: "max-w-3xl mx-auto px-4 py-16",
                div {
                    class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                    "Unable to load this castle: {e}"
                }
            }
        },
        Some(Ok(None)) => rsx! { MissingCastle {} },
        Some(Ok(Some(castle))) => rsx! { CastleProfile { castle: castle.clone() } },
    }
}

/// Shown when the slug resolves to nothing
#[component]
fn MissingCastle() -> Element {
    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 py-24 text-center",
            h1 { class: "text-3xl font-bold text-stone-900 mb-3", "Castle not found" }
            p {
                class: "text-stone-500 mb-8",
                "We don't have a castle under that name. It may have been renamed or never ingested."
            }
            Link {
                to: Route::Castles { country: String::new() },
                class: "px-6 py-3 bg-amber-700 text-white rounded-xl hover:bg-amber-800 transition-colors font-medium",
                "Browse all castles"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CastleProfileProps {
    castle: Castle,
}

#[component]
fn CastleProfile(props: CastleProfileProps) -> Element {
    let castle = &props.castle;

    let picture = if castle.picture_url.contains("https://") {
        castle.picture_url.clone()
    } else {
        format!("https://{}", castle.picture_url)
    };

    let country_name = country_by_code(castle.country)
        .map(|country| country.name)
        .unwrap_or("Unknown");

    let mut location = format!(
        "{}, {}",
        to_title_case(&castle.city),
        to_title_case(&castle.state)
    );
    if let Some(district) = &castle.district {
        location.push_str(&format!(" ({})", to_title_case(district)));
    }

    rsx! {
        div {
            class: "max-w-4xl mx-auto px-4 sm:px-6 py-8",

            h1 {
                class: "text-3xl font-bold text-center text-amber-900 mb-6",
                "{to_title_case(&castle.name)} Castle"
            }

            div {
                class: "bg-white border border-stone-200 rounded-xl overflow-hidden shadow-sm",

                img {
                    class: "w-full h-96 object-cover",
                    src: "{picture}",
                    alt: "{castle.name}"
                }

                div {
                    class: "p-6 space-y-6",

                    // Location line
                    div {
                        class: "flex flex-wrap items-center gap-3 text-stone-600",
                        span { "\u{1F4CD} {location}, {country_name}" }
                        if let Some(coordinates) = &castle.coordinates {
                            span { class: "text-sm text-stone-400", "({coordinates})" }
                        }
                        if let Some(condition) = &castle.property_condition {
                            span {
                                class: "px-2.5 py-1 rounded-full text-xs font-medium bg-amber-100 text-amber-800",
                                "{to_title_case(condition)}"
                            }
                        }
                    }

                    // Contact
                    if let Some(contact) = &castle.contact {
                        div {
                            class: "flex flex-wrap gap-4 text-sm",
                            if let Some(phone) = &contact.phone {
                                a {
                                    href: "tel:{phone}",
                                    class: "inline-flex items-center gap-1 text-amber-700 hover:text-amber-800",
                                    "\u{1F4DE} {phone}"
                                }
                            }
                            if let Some(email) = &contact.email {
                                a {
                                    href: "mailto:{email}",
                                    class: "inline-flex items-center gap-1 text-amber-700 hover:text-amber-800",
                                    "\u{2709} {email}"
                                }
                            }
                        }
                    }

                    // Visiting information
                    if let Some(visiting_info) = &castle.visiting_info {
                        div {
                            h2 { class: "text-lg font-semibold text-stone-900 mb-2", "Visiting" }
                            p { class: "text-stone-600 text-sm mb-3", "{visiting_info.working_hours}" }

                            if let Some(facilities) = &visiting_info.facilities {
                                div {
                                    class: "flex flex-wrap gap-2",
                                    for (icon, label) in facility_entries(facilities) {
                                        span {
                                            key: "{label}",
                                            class: "inline-flex items-center gap-1.5 px-2.5 py-1 rounded-full text-xs font-medium bg-stone-100 text-stone-700",
                                            span { "{icon}" }
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    // Provenance
                    if !castle.sources.is_empty() {
                        div {
                            h2 { class: "text-lg font-semibold text-stone-900 mb-2", "Sources" }
                            ul {
                                class: "list-disc list-inside space-y-1",
                                for source in castle.sources.iter() {
                                    li {
                                        key: "{source}",
                                        a {
                                            href: "{source}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            class: "text-sm text-amber-700 hover:text-amber-800 break-all",
                                            "{source}"
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
}

/// Icon + label for each facility flag that is set
fn facility_entries(facilities: &Facilities) -> Vec<(&'static str, &'static str)> {
    let mut entries = Vec::new();
    if facilities.assistance_dogs_allowed {
        entries.push(("\u{1F415}", "Assistance Dogs Allowed"));
    }
    if facilities.cafe {
        entries.push(("\u{2615}", "Cafe"));
    }
    if facilities.restrooms {
        entries.push(("\u{1F6BB}", "Restrooms"));
    }
    if facilities.giftshops {
        entries.push(("\u{1F6CD}", "Gift Shops"));
    }
    if facilities.picnic_area {
        entries.push(("\u{1F9FA}", "Picnic Area"));
    }
    if facilities.parking {
        entries.push(("\u{1F17F}", "Parking"));
    }
    if facilities.exhibitions {
        entries.push(("\u{1F3DB}", "Exhibitions"));
    }
    if facilities.wheelchair_support {
        entries.push(("\u{267F}", "Wheelchair Support"));
    }
    entries
}

/// Server function bridging to the castles REST API.
#[server]
async fn fetch_castle(web_name: String) -> Result<Option<Castle>, ServerFnError> {
    crate::api::server_client()
        .castle_by_web_name(&web_name)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
