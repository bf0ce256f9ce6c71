//! Home page component

use dioxus::prelude::*;

use crate::components::CountrySelector;
use crate::routes::Route;
use crate::types::{tracked_countries, CountryCode};

/// Landing page - pick a country and start exploring
#[component]
pub fn Home() -> Element {
    let countries = tracked_countries();
    let navigator = use_navigator();

    let mut selected = use_signal(|| countries[0].code);

    rsx! {
        div {
            class: "bg-gradient-to-b from-amber-50 to-stone-50",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 min-h-[calc(100vh-8rem)] flex items-center",
                div {
                    class: "max-w-xl flex flex-col gap-6 py-16",

                    h1 {
                        class: "text-5xl font-bold text-amber-900",
                        "Choose A Country"
                    }
                    p {
                        class: "text-lg text-stone-600",
                        "Embark on a journey with Castle Explorer and uncover the secrets of these timeless treasures. Select the country to see the castles and start your adventure today!"
                    }

                    CountrySelector {
                        countries: countries.clone(),
                        selected: selected(),
                        on_select: move |code: CountryCode| selected.set(code),
                    }

                    button {
                        class: "self-start px-6 py-3 bg-amber-700 text-white rounded-xl hover:bg-amber-800 transition-colors font-medium shadow-sm",
                        onclick: move |_| {
                            navigator.push(Route::Castles {
                                country: selected().to_string(),
                            });
                        },
                        "Explore Castles"
                    }
                }
            }
        }
    }
}
