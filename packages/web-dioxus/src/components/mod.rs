//! Reusable UI components

mod castle_card;
mod country_selector;
mod layout;
mod loading;

pub use castle_card::*;
pub use country_selector::*;
pub use layout::*;
pub use loading::*;
