//! Find Castles - Dioxus Fullstack Web Application
//!
//! This is a fullstack SSR web application built with Dioxus. It connects to
//! the castles REST API for data.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod format;
mod hooks;
mod pages;
mod routes;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
