//! Country selector component

use dioxus::prelude::*;

use crate::format::to_title_case;
use crate::types::{Country, CountryCode};

/// Props for CountrySelector
#[derive(Props, Clone, PartialEq)]
pub struct CountrySelectorProps {
    pub countries: Vec<Country>,
    pub selected: CountryCode,
    pub on_select: EventHandler<CountryCode>,
}

/// Dropdown over the tracked countries
#[component]
pub fn CountrySelector(props: CountrySelectorProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        label {
            class: "block",
            span { class: "block text-sm font-medium text-stone-700 mb-1", "Country" }
            select {
                class: "w-full px-4 py-3 bg-white border border-stone-300 rounded-lg text-stone-900 focus:outline-none focus:ring-2 focus:ring-amber-500",
                value: "{props.selected}",
                onchange: move |e| {
                    if let Ok(code) = e.value().parse::<CountryCode>() {
                        on_select.call(code);
                    }
                },
                for country in props.countries.iter() {
                    option {
                        key: "{country.code}",
                        value: "{country.code}",
                        selected: country.code == props.selected,
                        "{to_title_case(country.name)}"
                    }
                }
            }
        }
    }
}
