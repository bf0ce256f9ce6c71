//! Castle card component

use dioxus::prelude::*;

use crate::format::to_title_case;
use crate::types::Castle;

/// Props for CastleCard
#[derive(Props, Clone, PartialEq)]
pub struct CastleCardProps {
    pub castle: Castle,
}

/// Square picture card shown in the listing grid
#[component]
pub fn CastleCard(props: CastleCardProps) -> Element {
    let castle = &props.castle;

    // Some ingested picture references miss the scheme
    let picture = if castle.picture_url.contains("https://") {
        castle.picture_url.clone()
    } else {
        format!("https://{}", castle.picture_url)
    };

    rsx! {
        div {
            class: "relative aspect-square overflow-hidden rounded-xl shadow-sm hover:shadow-lg transition-transform duration-300 hover:scale-105",

            img {
                class: "absolute inset-0 h-full w-full object-cover",
                src: "{picture}",
                alt: "{castle.name}"
            }

            div {
                class: "absolute bottom-0 left-0 w-full bg-black/50 text-white px-4 py-3",
                h3 {
                    class: "text-lg font-semibold",
                    "{to_title_case(&castle.name)}"
                }
                p {
                    class: "text-sm",
                    "{to_title_case(&castle.city)}"
                }
            }
        }
    }
}

/// Skeleton loader for castle cards
#[component]
pub fn CastleCardSkeleton() -> Element {
    rsx! {
        div {
            class: "relative aspect-square rounded-xl bg-stone-200 animate-pulse",
            div {
                class: "absolute bottom-0 left-0 w-full px-4 py-3 space-y-2",
                div { class: "h-5 w-2/3 bg-stone-300 rounded" }
                div { class: "h-4 w-1/3 bg-stone-300 rounded" }
            }
        }
    }
}
