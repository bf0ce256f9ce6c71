//! Page components

mod about;
mod castle_detail;
mod castles;
mod data_sources;
mod home;
mod not_found;

pub use about::*;
pub use castle_detail::*;
pub use castles::*;
pub use data_sources::*;
pub use home::*;
pub use not_found::*;
