//! # Console Mock Library
//!
//! A mock HTTP backend for developing the administration console without a
//! real server.
//!
//! This library provides components for:
//! - **Mock Handlers**: functions that answer one endpoint or decline
//! - **Handler Chain**: ordered dispatch where declined requests fall through
//! - **Fixture Stubs**: extra static routes loaded from YAML
//! - **HTTP Server**: axum router with latency and error simulation
//!
//! # Examples
//!
//! ```no_run
//! use std::time::Duration;
//! use console_mock::{HandlerChain, http::build_router};
//!
//! # async fn example() -> std::io::Result<()> {
//! let chain = HandlerChain::with_builtins(Duration::from_secs(1)).map_err(std::io::Error::other)?;
//!
//! let state = console_mock::http::AppState::builder()
//!     .with_chain(chain)
//!     .build()?;
//! let app = build_router(state);
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod fixtures;
pub mod handlers;
pub mod http;

// Re-export commonly used types for convenience
pub use chain::HandlerChain;
pub use fixtures::{FixtureBook, FixtureError};
pub use handlers::{MockHandler, MockRequest, RandomNumberHandler, StubHandler};
