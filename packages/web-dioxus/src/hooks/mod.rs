//! Reusable state hooks

mod use_castle_filters;
mod use_fetch_castles;

pub use use_castle_filters::*;
pub use use_fetch_castles::*;
