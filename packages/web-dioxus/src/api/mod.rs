//! REST client for the castles API

mod client;

pub use client::*;
