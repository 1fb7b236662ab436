//! HTTP handlers for the mock server.

pub mod health;
pub mod mock;

// Re-export handlers for easier access
pub use health::healthz;
pub use mock::dispatch;
