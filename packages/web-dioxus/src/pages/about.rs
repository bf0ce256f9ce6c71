//! About page component

use dioxus::prelude::*;

/// Static project description
#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 sm:px-6 py-12",

            h1 {
                class: "text-4xl font-bold text-amber-900 mb-8",
                "Why This Project Was Built? The Castles!"
            }

            section {
                class: "mb-8",
                h2 { class: "text-2xl font-semibold text-stone-900 mb-3", "The Significance of Castles in European History" }
                p {
                    class: "text-stone-600 leading-relaxed",
                    "With the fall of the Western Roman Empire, the Early Middle Ages began, and it culminated with the Fall of Constantinople. Undoubtedly, one of the most iconic features of this period is the proliferation of castles."
                }
            }

            section {
                class: "mb-8",
                h2 { class: "text-2xl font-semibold text-stone-900 mb-3", "Capturing the Essence of European Castles" }
                p {
                    class: "text-stone-600 leading-relaxed mb-3",
                    "This project aims to capture the essence of European castles, viewing them not merely as historical artifacts but as living repositories of culture, heritage, and human ingenuity."
                }
                p {
                    class: "text-stone-600 leading-relaxed",
                    "Through meticulous research and data aggregation, we've embarked on a journey to consolidate information about these castles into a single platform, accessible to enthusiasts, scholars, and curious minds alike."
                }
            }

            section {
                class: "mb-8",
                h2 { class: "text-2xl font-semibold text-stone-900 mb-3", "Unraveling History Through Castles" }
                p {
                    class: "text-stone-600 leading-relaxed mb-3",
                    "Our endeavor goes beyond cataloging stone walls and towers; it's about unraveling the rich tapestry of history woven within each fortress's walls."
                }
                p {
                    class: "text-stone-600 leading-relaxed",
                    "From the towering bastions of medieval Portugal to the rugged keeps of Scotland, every castle holds within it tales of battles won and lost, of kings and queens, of intrigue and romance."
                }
            }

            section {
                class: "mb-8",
                h2 { class: "text-2xl font-semibold text-stone-900 mb-3", "Democratizing Access to Castle Data" }
                p {
                    class: "text-stone-600 leading-relaxed mb-3",
                    "Our primary objective is to democratize access to castle data across Europe, making it easily accessible for both humans and machines."
                }
                p {
                    class: "text-stone-600 leading-relaxed",
                    "By consolidating information about European castles into a single platform and providing an intuitive interface, we aim to break down barriers to access and empower individuals, researchers, and enthusiasts to explore and learn about these historical landmarks."
                }
            }
        }
    }
}
