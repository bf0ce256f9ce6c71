//! Castles listing page

use dioxus::prelude::*;

use crate::components::{CastleCard, CastleCardSkeleton, CountrySelector};
use crate::format::to_title_case;
use crate::hooks::{use_castle_filters, use_fetch_castles};
use crate::routes::Route;
use crate::types::{tracked_countries, CountryCode};

/// Castles listing page with country selection and facet filters
///
/// The `country` query parameter preselects a country; anything else falls
/// back to the first tracked one.
#[component]
pub fn Castles(country: String) -> Element {
    let countries = tracked_countries();

    let initial = country
        .parse::<CountryCode>()
        .ok()
        .filter(|code| countries.iter().any(|c| c.code == *code))
        .unwrap_or(countries[0].code);

    let mut selected_country = use_signal(|| initial);

    let fetch = use_fetch_castles(selected_country.into());
    let mut filters = use_castle_filters(fetch.castles.into());

    let loading = (fetch.loading)();
    let error = (fetch.error)();
    let filtered = (filters.filtered_castles)();
    let states = (filters.available_states)();
    let conditions = (filters.available_property_conditions)();

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",

            h1 { class: "text-4xl font-bold text-amber-900 mb-6", "Castles" }

            // Country + facet controls
            div {
                class: "bg-white border border-stone-200 rounded-xl p-4 grid gap-4 sm:grid-cols-3",

                CountrySelector {
                    countries: countries.clone(),
                    selected: selected_country(),
                    on_select: move |code: CountryCode| {
                        selected_country.set(code);
                        // Facet selections belong to the previous listing
                        filters.clear();
                    }
                }

                label {
                    class: "block",
                    span { class: "block text-sm font-medium text-stone-700 mb-1", "Region" }
                    select {
                        class: "w-full px-4 py-3 bg-white border border-stone-300 rounded-lg text-stone-900 focus:outline-none focus:ring-2 focus:ring-amber-500",
                        onchange: move |e| {
                            let value = e.value();
                            filters.selected_state.set((!value.is_empty()).then_some(value));
                        },
                        option {
                            value: "",
                            selected: (filters.selected_state)().is_none(),
                            "All regions"
                        }
                        for state in states {
                            option {
                                key: "{state}",
                                value: "{state}",
                                selected: (filters.selected_state)().as_deref() == Some(state.as_str()),
                                "{to_title_case(&state)}"
                            }
                        }
                    }
                }

                label {
                    class: "block",
                    span { class: "block text-sm font-medium text-stone-700 mb-1", "Condition" }
                    select {
                        class: "w-full px-4 py-3 bg-white border border-stone-300 rounded-lg text-stone-900 focus:outline-none focus:ring-2 focus:ring-amber-500",
                        onchange: move |e| {
                            let value = e.value();
                            filters.selected_property_condition.set((!value.is_empty()).then_some(value));
                        },
                        option {
                            value: "",
                            selected: (filters.selected_property_condition)().is_none(),
                            "All conditions"
                        }
                        for condition in conditions {
                            option {
                                key: "{condition}",
                                value: "{condition}",
                                selected: (filters.selected_property_condition)().as_deref() == Some(condition.as_str()),
                                "{to_title_case(&condition)}"
                            }
                        }
                    }
                }
            }

            // Error state
            if let Some(err) = error {
                div {
                    class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mt-6",
                    "Unable to load castles: {err}"
                }
            }

            // Loading state
            if loading {
                div {
                    class: "grid gap-6 sm:grid-cols-2 md:grid-cols-3 mt-8",
                    for i in 0..6 {
                        CastleCardSkeleton { key: "{i}" }
                    }
                }
            }

            // Empty state
            else if filtered.is_empty() {
                div {
                    class: "text-center py-16",
                    h3 { class: "text-xl font-semibold text-stone-900 mb-2", "No castles found" }
                    p {
                        class: "text-stone-500 max-w-md mx-auto",
                        "No castles match the current selection. Try another region or condition."
                    }
                }
            }

            // Castle grid
            else {
                p {
                    class: "text-sm text-stone-500 mt-6",
                    "Showing "
                    span { class: "font-medium text-stone-900", "{filtered.len()}" }
                    " castle"
                    if filtered.len() != 1 { "s" }
                }

                div {
                    class: "grid gap-6 sm:grid-cols-2 md:grid-cols-3 mt-4",
                    for castle in filtered {
                        Link {
                            key: "{castle.id}",
                            to: Route::CastleDetail { web_name: castle.web_name.clone() },
                            CastleCard { castle: castle.clone() }
                        }
                    }
                }
            }
        }
    }
}
