pub mod errors;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod session;
pub mod startup;
pub mod state;

pub use startup::{run, run_until, Settings};
