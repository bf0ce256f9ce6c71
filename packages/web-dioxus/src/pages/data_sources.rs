//! Data sources page component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::types::{Country, COUNTRIES, TrackingStatus};

/// Tracked and untracked countries, with the coverage percentage
#[component]
pub fn DataSources() -> Element {
    let tracked: Vec<Country> = COUNTRIES
        .iter()
        .copied()
        .filter(|country| country.tracking_status == TrackingStatus::Tracked)
        .collect();
    let untracked: Vec<Country> = COUNTRIES
        .iter()
        .copied()
        .filter(|country| country.tracking_status != TrackingStatus::Tracked)
        .collect();

    let percentage = (tracked.len() as f64 / COUNTRIES.len() as f64) * 100.0;

    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 sm:px-6 py-12",

            header {
                class: "mb-10",
                h1 {
                    class: "text-4xl font-bold text-amber-900 mb-4",
                    "Tracked and Untracked Countries"
                }
                p {
                    class: "text-lg text-stone-600 mb-2",
                    "So far we have tracked {percentage:.2}% of European countries. The full list is available below."
                }
                p {
                    class: "text-lg text-stone-600",
                    "You can help us to increase this number by creating a web scraper."
                }
            }

            section {
                class: "mb-10",
                h2 { class: "text-2xl font-semibold text-stone-900 mb-4", "Tracked Countries" }
                ul {
                    class: "divide-y divide-stone-200 bg-white border border-stone-200 rounded-xl",
                    for country in tracked {
                        li {
                            key: "{country.code}",
                            Link {
                                to: Route::Castles { country: country.code.to_string() },
                                class: "block px-4 py-3 text-amber-700 hover:bg-stone-50",
                                "{country.name}"
                            }
                        }
                    }
                }
            }

            section {
                h2 { class: "text-2xl font-semibold text-stone-900 mb-4", "Untracked Countries" }
                ul {
                    class: "divide-y divide-stone-200 bg-white border border-stone-200 rounded-xl",
                    for country in untracked {
                        li {
                            key: "{country.code}",
                            class: "px-4 py-3 text-stone-600",
                            "{country.name}"
                        }
                    }
                }
            }
        }
    }
}
