//! Site layout with header navigation and footer

use dioxus::prelude::*;

use crate::routes::Route;

/// Layout component wrapping every page with the site chrome
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-stone-50",

            SiteHeader {}

            main {
                class: "flex-1",
                Outlet::<Route> {}
            }

            SiteFooter {}
        }
    }
}

/// Top navigation bar
#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header {
            class: "bg-white border-b border-stone-200",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-3 flex items-center justify-between",

                Link {
                    to: Route::Home {},
                    class: "text-xl font-bold text-amber-800",
                    "Find Castles"
                }

                nav {
                    class: "flex items-center gap-1",
                    NavLink { to: Route::Home {}, label: "Home" }
                    NavLink { to: Route::Castles { country: String::new() }, label: "Castles" }
                    NavLink { to: Route::About {}, label: "About" }
                    NavLink { to: Route::DataSources {}, label: "Data Sources" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-amber-100 text-amber-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-stone-600 hover:bg-stone-100 hover:text-stone-900"
            },
            "{props.label}"
        }
    }
}

/// Site footer
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "bg-white border-t border-stone-200 mt-12",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 text-center",
                h2 { class: "text-lg font-semibold text-stone-900 mb-2", "Find Castles" }
                p {
                    class: "text-stone-500 text-sm max-w-md mx-auto",
                    "Consolidating European castle data into a single place, open for humans and machines alike."
                }
            }
        }
    }
}
