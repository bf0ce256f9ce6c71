// HTTP routes
pub mod castles;
pub mod health;

pub use castles::*;
pub use health::*;
