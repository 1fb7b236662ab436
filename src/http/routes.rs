//! HTTP routing configuration for the mock server.

use axum::{routing::get, Router};

use crate::http::handlers::*;
use crate::http::state::AppState;

/// Build the Axum router.
///
/// `/healthz` is served directly; every other request goes through the mock
/// handler chain.
///
/// # Parameters
///
/// - `state` - Application state containing configuration and handlers
///
/// # Returns
///
/// Returns configured Axum `Router`.
pub fn build_router(state: AppState) -> Router {
    Router::new().route("/healthz", get(healthz)).fallback(dispatch).with_state(state)
}
