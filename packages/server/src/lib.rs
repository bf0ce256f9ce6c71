// Find Castles - API Core
//
// Read-only backend for the castle listing website. Castle queries live in
// domains/castles; HTTP wiring in server/.

pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
