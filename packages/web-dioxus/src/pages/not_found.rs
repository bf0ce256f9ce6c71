//! Not-found page component

use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all for unmatched routes
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 py-24 text-center",
            h1 { class: "text-5xl font-bold text-amber-900 mb-3", "404" }
            p {
                class: "text-stone-500 mb-8",
                "This page does not exist. The castle you are looking for may be elsewhere."
            }
            Link {
                to: Route::Home {},
                class: "px-6 py-3 bg-amber-700 text-white rounded-xl hover:bg-amber-800 transition-colors font-medium",
                "Back to Home"
            }
        }
    }
}
