//! HTTP server exposing the mock handler chain with configurable mock behavior.

pub mod handlers;
pub mod routes;
pub mod state;
pub mod types;

pub use routes::build_router;
pub use state::AppState;
