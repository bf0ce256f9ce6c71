//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::{About, CastleDetail, Castles, DataSources, Home, NotFound};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},

        #[route("/castles?:country")]
        Castles { country: String },

        #[route("/castles/:web_name")]
        CastleDetail { web_name: String },

        #[route("/about")]
        About {},

        #[route("/data-sources")]
        DataSources {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
